use std::path::{Path, PathBuf};

use tracing::debug;

use crate::domain::{AppError, FactRecord, HeadState, ProbeError, ProbeResult, merge_facts};
use crate::ports::{Environment, RepositoryReader};

/// Walk from `start` towards the filesystem root and read HEAD of the first
/// repository found.
///
/// Reaching a directory without a parent ends the search with
/// [`ProbeError::Absent`]; any other reader failure stops the walk.
pub fn find_head(reader: &impl RepositoryReader, start: &Path) -> ProbeResult<HeadState> {
    let mut dir = start;
    loop {
        match reader.read_head(dir) {
            Err(ProbeError::Absent) => {}
            found => return found,
        }

        match dir.parent() {
            Some(parent) => dir = parent,
            None => {
                debug!(start = %start.display(), "no git repository above directory");
                return Err(ProbeError::Absent);
            }
        }
    }
}

/// Start from the directory probe's result, or from the process working
/// directory when that probe did not run.
pub fn probe(
    env: &impl Environment,
    reader: &impl RepositoryReader,
    current_directory: &str,
) -> ProbeResult<HeadState> {
    let start = if current_directory.is_empty() {
        env.current_dir().map_err(AppError::CurrentDirectory)?
    } else {
        PathBuf::from(current_directory)
    };

    let head = find_head(reader, &start)?;
    debug!(?head, "read git head");
    Ok(head)
}

pub fn apply(
    env: &impl Environment,
    reader: &impl RepositoryReader,
    facts: FactRecord,
) -> Result<FactRecord, AppError> {
    let result = probe(env, reader, &facts.current_directory);
    merge_facts(facts, result, |facts, head| FactRecord { git_branch: head.label(), ..facts })
}
