//! prompt-info: render working directory, kube context and git branch through
//! a template for use in shell prompts.

pub mod app;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
pub(crate) mod testing;

use app::{AppContext, commands::prompt};
use services::{GitRepositoryReader, ProcessEnvironment};

pub use app::commands::prompt::PromptOptions;
pub use domain::{AppError, DEFAULT_TEMPLATE, FactRecord, Module, ModuleSet};

/// Render the prompt against the real process environment.
///
/// Nothing is returned unless every enabled probe succeeds.
pub fn render_prompt(options: &PromptOptions) -> Result<String, AppError> {
    let ctx = AppContext::new(ProcessEnvironment::new(), GitRepositoryReader::new());
    prompt::execute(&ctx, options)
}
