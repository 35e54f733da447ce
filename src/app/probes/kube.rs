use std::io;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::home_dir;
use crate::domain::{
    ActiveContext, AppError, FactRecord, KubeConfig, ProbeError, ProbeResult, merge_facts,
};
use crate::ports::Environment;

/// Location of the kubeconfig relative to the home directory.
pub fn kube_config_path(home: &str) -> PathBuf {
    Path::new(home).join(".kube").join("config")
}

/// Read `~/.kube/config` and resolve the active context.
///
/// A missing file, an unset `current-context`, or a blank document are all
/// reported as [`ProbeError::Absent`].
pub fn probe(env: &impl Environment) -> ProbeResult<ActiveContext> {
    let path = kube_config_path(&home_dir(env)?);

    let content = match env.read_to_string(&path) {
        Ok(content) => content,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            debug!(path = %path.display(), "no kube config");
            return Err(ProbeError::Absent);
        }
        Err(source) => {
            let path = path.display().to_string();
            return Err(AppError::KubeConfigRead { path, source }.into());
        }
    };

    let config = KubeConfig::parse(&content)?;
    match config.active_context() {
        Some(active) => {
            debug!(context = %active.name, namespace = %active.namespace, "resolved kube context");
            Ok(active)
        }
        None => {
            debug!(path = %path.display(), "kube config has no current context");
            Err(ProbeError::Absent)
        }
    }
}

pub fn apply(env: &impl Environment, facts: FactRecord) -> Result<FactRecord, AppError> {
    merge_facts(facts, probe(env), |facts, active| FactRecord {
        kube_context: active.name,
        kube_namespace: active.namespace,
        ..facts
    })
}
