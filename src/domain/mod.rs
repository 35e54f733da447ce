pub mod directory;
pub mod error;
pub mod facts;
pub mod kube_config;
pub mod module;
pub mod probe;
pub mod template;

pub use directory::compact_directory;
pub use error::AppError;
pub use facts::FactRecord;
pub use kube_config::{ActiveContext, DEFAULT_NAMESPACE, KubeConfig};
pub use module::{Module, ModuleSet, UnknownModule};
pub use probe::{HeadState, ProbeError, ProbeResult, merge_facts};
pub use template::{DEFAULT_TEMPLATE, PromptTemplate};
