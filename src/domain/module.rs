use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// A fact probe that can be switched on or off from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Module {
    /// Working directory and its home-compacted form.
    Dir,
    /// Checked-out branch of the enclosing git repository.
    Git,
    /// Active kubeconfig context and namespace.
    Kube,
}

impl Module {
    /// All modules, in the order they are listed on the command line.
    pub const ALL: [Module; 3] = [Module::Dir, Module::Git, Module::Kube];

    pub fn name(&self) -> &'static str {
        match self {
            Module::Dir => "dir",
            Module::Git => "git",
            Module::Kube => "kube",
        }
    }

    pub fn from_name(name: &str) -> Option<Module> {
        match name {
            "dir" => Some(Module::Dir),
            "git" => Some(Module::Git),
            "kube" => Some(Module::Kube),
            _ => None,
        }
    }

    /// Prefix used when a probe for this module fails.
    pub fn failure_context(&self) -> &'static str {
        match self {
            Module::Dir => "Failed loading directory info",
            Module::Git => "Failed loading git info",
            Module::Kube => "Failed loading kube config",
        }
    }
}

impl fmt::Display for Module {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown module '{0}': expected a comma separated list of dir, git, kube")]
pub struct UnknownModule(pub String);

/// The set of enabled probes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModuleSet {
    dir: bool,
    git: bool,
    kube: bool,
}

impl ModuleSet {
    pub fn all() -> Self {
        Self { dir: true, git: true, kube: true }
    }

    pub fn none() -> Self {
        Self { dir: false, git: false, kube: false }
    }

    pub fn with(mut self, module: Module) -> Self {
        match module {
            Module::Dir => self.dir = true,
            Module::Git => self.git = true,
            Module::Kube => self.kube = true,
        }
        self
    }

    pub fn contains(&self, module: Module) -> bool {
        match module {
            Module::Dir => self.dir,
            Module::Git => self.git,
            Module::Kube => self.kube,
        }
    }

    pub fn is_empty(&self) -> bool {
        !(self.dir || self.git || self.kube)
    }
}

impl Default for ModuleSet {
    fn default() -> Self {
        Self::all()
    }
}

impl FromIterator<Module> for ModuleSet {
    fn from_iter<I: IntoIterator<Item = Module>>(iter: I) -> Self {
        iter.into_iter().fold(Self::none(), ModuleSet::with)
    }
}

impl FromStr for ModuleSet {
    type Err = UnknownModule;

    /// Parse a comma separated module list. Blank entries are skipped, so an
    /// empty string disables every probe.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.split(',')
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(|name| Module::from_name(name).ok_or_else(|| UnknownModule(name.to_string())))
            .collect()
    }
}

impl fmt::Display for ModuleSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> =
            Module::ALL.iter().filter(|m| self.contains(**m)).map(Module::name).collect();
        f.write_str(&names.join(","))
    }
}
