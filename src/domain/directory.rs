/// Replace the first occurrence of `home` in `directory` with `~`.
///
/// This is a substring replacement, not a path-prefix check: a directory that
/// contains the home path anywhere in its name is compacted as well.
pub fn compact_directory(directory: &str, home: &str) -> String {
    if home.is_empty() {
        return directory.to_string();
    }
    directory.replacen(home, "~", 1)
}
