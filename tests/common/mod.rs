//! Shared testing utilities for prompt-info CLI tests.

use assert_cmd::Command;
use git2::{Repository, RepositoryInitOptions, Signature};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Isolated home directory with a work directory inside it.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
    home: PathBuf,
    work_dir: PathBuf,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated environment.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        // The binary sees the canonical working directory, so HOME must match it.
        let home = fs::canonicalize(root.path()).expect("Failed to canonicalize temp directory");
        let work_dir = home.join("work");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");

        Self { root, home, work_dir }
    }

    /// Absolute path to the emulated `$HOME` directory.
    pub fn home(&self) -> &Path {
        &self.home
    }

    /// Path to the directory used for CLI invocations.
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Build a command for invoking the compiled binary within the work directory.
    pub fn cli(&self) -> Command {
        self.cli_in(self.work_dir())
    }

    /// Build a command for invoking the compiled binary within a custom directory.
    pub fn cli_in<P: AsRef<Path>>(&self, dir: P) -> Command {
        let mut cmd =
            Command::cargo_bin("prompt-info").expect("Failed to locate prompt-info binary");
        cmd.current_dir(dir.as_ref())
            .env("HOME", self.home())
            .env_remove("USERPROFILE")
            .env_remove("PROMPT_INFO_LOG");
        cmd
    }

    /// Write `~/.kube/config`.
    pub fn write_kube_config(&self, content: &str) {
        let kube_dir = self.home.join(".kube");
        fs::create_dir_all(&kube_dir).expect("Failed to create .kube directory");
        fs::write(kube_dir.join("config"), content).expect("Failed to write kube config");
    }

    /// Initialize a git repository with one commit on `branch`.
    pub fn init_git_repo(&self, dir: &Path, branch: &str) -> Repository {
        fs::create_dir_all(dir).expect("Failed to create repository directory");
        let mut opts = RepositoryInitOptions::new();
        opts.initial_head(branch);
        let repo = Repository::init_opts(dir, &opts).expect("Failed to init repository");

        {
            let sig =
                Signature::now("Test", "test@example.com").expect("Failed to build signature");
            let tree_id = repo
                .index()
                .and_then(|mut index| index.write_tree())
                .expect("Failed to write tree");
            let tree = repo.find_tree(tree_id).expect("Failed to find tree");
            repo.commit(Some("HEAD"), &sig, &sig, "initial", &tree, &[]).expect("Failed to commit");
        }
        repo
    }

    /// Create a nested directory below the work directory.
    pub fn create_dir(&self, relative: &str) -> PathBuf {
        let path = self.work_dir.join(relative);
        fs::create_dir_all(&path).expect("Failed to create directory");
        path
    }
}
