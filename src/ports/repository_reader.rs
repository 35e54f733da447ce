use std::path::Path;

use crate::domain::{HeadState, ProbeResult};

pub trait RepositoryReader {
    /// Read HEAD of the repository rooted exactly at `dir`.
    ///
    /// Returns `ProbeError::Absent` when `dir` is not a repository root; the
    /// caller decides whether to keep searching upward.
    fn read_head(&self, dir: &Path) -> ProbeResult<HeadState>;
}
