/// Facts gathered by the probes and exposed to the output template.
///
/// Every field defaults to the empty string; a disabled probe or one that
/// finds nothing leaves its fields untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FactRecord {
    pub current_directory: String,
    pub current_directory_compact: String,
    pub kube_namespace: String,
    pub kube_context: String,
    pub git_branch: String,
}

impl FactRecord {
    /// Names a template may reference.
    pub const FIELD_NAMES: [&'static str; 6] = [
        "CurrentDirectory",
        "CurrentDirectoryCompact",
        "CompactCurrentDirectory",
        "KubeNamespace",
        "KubeContext",
        "GitBranch",
    ];

    /// Field values keyed by their template names, aligned with [`Self::FIELD_NAMES`].
    pub fn fields(&self) -> [(&'static str, &str); 6] {
        [
            ("CurrentDirectory", &self.current_directory),
            ("CurrentDirectoryCompact", &self.current_directory_compact),
            ("CompactCurrentDirectory", &self.current_directory_compact),
            ("KubeNamespace", &self.kube_namespace),
            ("KubeContext", &self.kube_context),
            ("GitBranch", &self.git_branch),
        ]
    }
}
