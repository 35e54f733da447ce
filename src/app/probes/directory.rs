use tracing::debug;

use super::home_dir;
use crate::domain::{AppError, FactRecord, ProbeResult, compact_directory, merge_facts};
use crate::ports::Environment;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryFacts {
    pub current: String,
    pub compact: String,
}

pub fn probe(env: &impl Environment) -> ProbeResult<DirectoryFacts> {
    let cwd = env.current_dir().map_err(AppError::CurrentDirectory)?;
    let current = cwd.to_string_lossy().into_owned();
    let home = home_dir(env)?;
    let compact = compact_directory(&current, &home);

    debug!(%current, %compact, "resolved working directory");
    Ok(DirectoryFacts { current, compact })
}

pub fn apply(env: &impl Environment, facts: FactRecord) -> Result<FactRecord, AppError> {
    merge_facts(facts, probe(env), |facts, found| FactRecord {
        current_directory: found.current,
        current_directory_compact: found.compact,
        ..facts
    })
}
