use tracing::debug;

use crate::app::AppContext;
use crate::app::probes::{directory, kube, vcs};
use crate::domain::{AppError, DEFAULT_TEMPLATE, FactRecord, Module, ModuleSet, PromptTemplate};
use crate::ports::{Environment, RepositoryReader};

/// Probes run in this order; the git probe starts from the directory probe's result.
pub const PROBE_ORDER: [Module; 3] = [Module::Kube, Module::Dir, Module::Git];

/// Options for rendering a prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptOptions {
    /// Output template source.
    pub template: String,
    /// Probes to run.
    pub modules: ModuleSet,
}

impl Default for PromptOptions {
    fn default() -> Self {
        Self { template: DEFAULT_TEMPLATE.to_string(), modules: ModuleSet::all() }
    }
}

/// Compile the template, run the enabled probes, and render.
///
/// The template is compiled before any probe runs. The first failing probe
/// aborts the whole run.
pub fn execute<E, R>(ctx: &AppContext<E, R>, options: &PromptOptions) -> Result<String, AppError>
where
    E: Environment,
    R: RepositoryReader,
{
    let template = PromptTemplate::compile(&options.template)?;
    let facts = gather_facts(ctx, options.modules)?;
    template.render(&facts)
}

/// Run the enabled probes in [`PROBE_ORDER`].
pub fn gather_facts<E, R>(
    ctx: &AppContext<E, R>,
    modules: ModuleSet,
) -> Result<FactRecord, AppError>
where
    E: Environment,
    R: RepositoryReader,
{
    let mut facts = FactRecord::default();

    for module in PROBE_ORDER {
        if !modules.contains(module) {
            debug!(%module, "probe disabled");
            continue;
        }

        facts = match module {
            Module::Kube => kube::apply(ctx.environment(), facts),
            Module::Dir => directory::apply(ctx.environment(), facts),
            Module::Git => vcs::apply(ctx.environment(), ctx.repositories(), facts),
        }
        .map_err(|err| err.in_module(module))?;
    }

    Ok(facts)
}
