use std::path::Path;

use git2::{ErrorCode, Repository};

use crate::domain::{AppError, HeadState, ProbeError, ProbeResult};
use crate::ports::RepositoryReader;

/// Reads repository HEAD through libgit2. Never mutates the repository.
#[derive(Debug, Clone, Copy, Default)]
pub struct GitRepositoryReader;

impl GitRepositoryReader {
    pub fn new() -> Self {
        Self
    }
}

impl RepositoryReader for GitRepositoryReader {
    fn read_head(&self, dir: &Path) -> ProbeResult<HeadState> {
        let repo = match Repository::open(dir) {
            Ok(repo) => repo,
            Err(e) if e.code() == ErrorCode::NotFound => return Err(ProbeError::Absent),
            Err(e) => return Err(AppError::git("git2::Repository::open", e).into()),
        };

        match repo.head() {
            Ok(head) => {
                let detached = repo
                    .head_detached()
                    .map_err(|e| AppError::git("git2::Repository::head_detached", e))?;
                if detached {
                    let oid = head.target().map(|oid| oid.to_string()).unwrap_or_default();
                    return Ok(HeadState::Detached(oid));
                }
                Ok(HeadState::Branch(String::from_utf8_lossy(head.shorthand_bytes()).into_owned()))
            }
            Err(e) if e.code() == ErrorCode::UnbornBranch => {
                let head_ref = repo
                    .find_reference("HEAD")
                    .map_err(|e| AppError::git("git2::Repository::find_reference(HEAD)", e))?;
                let target = head_ref.symbolic_target().unwrap_or_default();
                let name = target.strip_prefix("refs/heads/").unwrap_or(target);
                Ok(HeadState::Unborn(name.to_string()))
            }
            Err(e) => Err(AppError::git("git2::Repository::head", e).into()),
        }
    }
}
