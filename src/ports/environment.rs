use std::io;
use std::path::{Path, PathBuf};

/// Process-level facts the probes read: environment variables, the working
/// directory, and files on disk.
pub trait Environment {
    /// Value of an environment variable, or `None` when unset or not valid UTF-8.
    fn var(&self, key: &str) -> Option<String>;

    /// The process working directory.
    fn current_dir(&self) -> io::Result<PathBuf>;

    /// Read a whole file. The handle is released before this returns.
    fn read_to_string(&self, path: &Path) -> io::Result<String>;
}
