use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::domain::{AppError, HeadState, ProbeError, ProbeResult};
use crate::ports::RepositoryReader;

/// Repository reader answering from a fixed map of repository roots.
#[derive(Default)]
pub struct FakeRepositoryReader {
    pub repositories: HashMap<PathBuf, HeadState>,
    pub broken: HashSet<PathBuf>,
    pub visited: Mutex<Vec<PathBuf>>,
}

#[allow(dead_code)]
impl FakeRepositoryReader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_repository(mut self, root: impl Into<PathBuf>, head: HeadState) -> Self {
        self.repositories.insert(root.into(), head);
        self
    }

    pub fn with_broken(mut self, root: impl Into<PathBuf>) -> Self {
        self.broken.insert(root.into());
        self
    }

    pub fn visited(&self) -> Vec<PathBuf> {
        self.visited.lock().unwrap().clone()
    }
}

impl RepositoryReader for FakeRepositoryReader {
    fn read_head(&self, dir: &Path) -> ProbeResult<HeadState> {
        self.visited.lock().unwrap().push(dir.to_path_buf());

        if self.broken.contains(dir) {
            return Err(ProbeError::Fatal(AppError::git(
                "git2::Repository::open",
                git2::Error::from_str("corrupt repository"),
            )));
        }
        self.repositories.get(dir).cloned().ok_or(ProbeError::Absent)
    }
}
