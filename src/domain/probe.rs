use super::{AppError, FactRecord};

/// Failure modes of a single fact probe.
#[derive(Debug)]
pub enum ProbeError {
    /// Nothing applicable was found. Not an error for the prompt as a whole.
    Absent,
    /// Unrecoverable failure; aborts the run.
    Fatal(AppError),
}

impl From<AppError> for ProbeError {
    fn from(err: AppError) -> Self {
        ProbeError::Fatal(err)
    }
}

pub type ProbeResult<T> = Result<T, ProbeError>;

/// Fold a probe result into the fact record.
///
/// `Absent` hands the record back unchanged; `Fatal` propagates.
pub fn merge_facts<T>(
    facts: FactRecord,
    result: ProbeResult<T>,
    apply: impl FnOnce(FactRecord, T) -> FactRecord,
) -> Result<FactRecord, AppError> {
    match result {
        Ok(found) => Ok(apply(facts, found)),
        Err(ProbeError::Absent) => Ok(facts),
        Err(ProbeError::Fatal(err)) => Err(err),
    }
}

/// What HEAD points at in a repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeadState {
    /// HEAD is a branch with at least one commit.
    Branch(String),
    /// HEAD names a branch that has no commits yet.
    Unborn(String),
    /// HEAD points directly at a commit (full hex id).
    Detached(String),
}

/// Length of the abbreviated commit id shown for a detached HEAD.
pub const SHORT_COMMIT_LEN: usize = 7;

impl HeadState {
    /// Text exposed as `GitBranch`.
    pub fn label(&self) -> String {
        match self {
            HeadState::Branch(name) | HeadState::Unborn(name) => name.clone(),
            HeadState::Detached(oid) => oid.chars().take(SHORT_COMMIT_LEN).collect(),
        }
    }
}
