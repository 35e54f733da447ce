use std::io;

use thiserror::Error;

use super::Module;

/// Library-wide error type for prompt-info operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Neither `HOME` nor `USERPROFILE` is set.
    #[error("Unable to resolve home directory: neither HOME nor USERPROFILE is set")]
    HomeNotFound,

    /// Working directory could not be queried.
    #[error("Failed to get current working directory: {0}")]
    CurrentDirectory(#[source] io::Error),

    /// Kube config exists but could not be read.
    #[error("Failed to open kube config file '{path}': {source}")]
    KubeConfigRead {
        path: String,
        #[source]
        source: io::Error,
    },

    /// Kube config is not valid YAML of the expected shape.
    #[error("Failed to decode kube config: {0}")]
    KubeConfigParse(#[from] serde_yaml::Error),

    /// libgit2 failure other than "not a repository".
    #[error("Git error during '{operation}': {source}")]
    Git {
        operation: &'static str,
        #[source]
        source: git2::Error,
    },

    /// Template failed to compile or render.
    #[error("Invalid output template: {0}")]
    Template(#[from] minijinja::Error),

    /// Template references a name outside the fact vocabulary.
    #[error("Unknown template field '{name}': expected one of {expected}")]
    UnknownTemplateField { name: String, expected: String },

    /// A probe failed; wraps the underlying cause with the probe that raised it.
    #[error("{}: {}", .module.failure_context(), .source)]
    Probe {
        module: Module,
        #[source]
        source: Box<AppError>,
    },
}

impl AppError {
    pub fn git(operation: &'static str, source: git2::Error) -> Self {
        AppError::Git { operation, source }
    }

    /// Attach the failing probe to this error.
    pub fn in_module(self, module: Module) -> Self {
        match self {
            already @ AppError::Probe { .. } => already,
            other => AppError::Probe { module, source: Box::new(other) },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn probe_error_names_the_failing_module() {
        let err = AppError::HomeNotFound.in_module(Module::Kube);
        assert_eq!(
            err.to_string(),
            "Failed loading kube config: Unable to resolve home directory: neither HOME nor USERPROFILE is set"
        );
    }

    #[test]
    fn in_module_does_not_double_wrap() {
        let err = AppError::HomeNotFound.in_module(Module::Dir).in_module(Module::Git);
        match err {
            AppError::Probe { module, .. } => assert_eq!(module, Module::Dir),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
