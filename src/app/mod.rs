pub mod commands;
mod context;
pub mod probes;

pub use context::AppContext;
