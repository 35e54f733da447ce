use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};

use crate::ports::Environment;

/// In-memory environment for probe tests.
#[derive(Debug, Default)]
pub struct FakeEnvironment {
    pub vars: HashMap<String, String>,
    pub current_dir: Option<PathBuf>,
    pub files: HashMap<PathBuf, String>,
    pub unreadable: HashMap<PathBuf, io::ErrorKind>,
}

#[allow(dead_code)]
impl FakeEnvironment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_var(mut self, key: &str, value: &str) -> Self {
        self.vars.insert(key.to_string(), value.to_string());
        self
    }

    pub fn with_home(self, home: &str) -> Self {
        self.with_var("HOME", home)
    }

    pub fn with_current_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.current_dir = Some(dir.into());
        self
    }

    pub fn with_file(mut self, path: impl Into<PathBuf>, content: &str) -> Self {
        self.files.insert(path.into(), content.to_string());
        self
    }

    pub fn with_unreadable(mut self, path: impl Into<PathBuf>, kind: io::ErrorKind) -> Self {
        self.unreadable.insert(path.into(), kind);
        self
    }
}

impl Environment for FakeEnvironment {
    fn var(&self, key: &str) -> Option<String> {
        self.vars.get(key).cloned()
    }

    fn current_dir(&self) -> io::Result<PathBuf> {
        self.current_dir
            .clone()
            .ok_or_else(|| io::Error::new(io::ErrorKind::PermissionDenied, "cwd unavailable"))
    }

    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        if let Some(kind) = self.unreadable.get(path) {
            return Err(io::Error::new(*kind, "unreadable"));
        }
        self.files
            .get(path)
            .cloned()
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "no such file"))
    }
}
