//! Minimal view of a kubeconfig document.
//!
//! Only the parts needed to name the active context are modelled; clusters,
//! users and every other key are ignored during deserialization.

use serde::Deserialize;

use super::AppError;

/// Namespace reported when the active context does not declare one.
pub const DEFAULT_NAMESPACE: &str = "default";

#[derive(Debug, Default, Deserialize)]
pub struct KubeConfig {
    #[serde(default)]
    pub contexts: Option<Vec<NamedContext>>,
    #[serde(default, rename = "current-context")]
    pub current_context: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct NamedContext {
    #[serde(default)]
    pub name: String,
    #[serde(default, rename = "context")]
    pub details: Option<ContextDetails>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ContextDetails {
    #[serde(default)]
    pub namespace: Option<String>,
}

/// Context and namespace selected by `current-context`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveContext {
    pub name: String,
    pub namespace: String,
}

impl KubeConfig {
    /// Parse kubeconfig YAML. A blank document is treated as an empty config.
    pub fn parse(content: &str) -> Result<Self, AppError> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(content)?)
    }

    /// Resolve the active context.
    ///
    /// Returns `None` when no current context is set. The first entry whose
    /// name matches supplies the namespace; a missing entry or an empty
    /// namespace falls back to [`DEFAULT_NAMESPACE`].
    pub fn active_context(&self) -> Option<ActiveContext> {
        let name = self.current_context.as_deref().filter(|name| !name.is_empty())?;

        let namespace = self
            .contexts
            .iter()
            .flatten()
            .find(|context| context.name == name)
            .and_then(|context| context.details.as_ref())
            .and_then(|details| details.namespace.as_deref())
            .filter(|namespace| !namespace.is_empty())
            .unwrap_or(DEFAULT_NAMESPACE);

        Some(ActiveContext { name: name.to_string(), namespace: namespace.to_string() })
    }
}
