use std::io::{self, IsTerminal, Write};

use clap::Parser;
use prompt_info::{AppError, DEFAULT_TEMPLATE, ModuleSet, PromptOptions};
use tracing::error;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter.
const LOG_ENV: &str = "PROMPT_INFO_LOG";

#[derive(Parser)]
#[command(name = "prompt-info")]
#[command(version)]
#[command(
    about = "Render working directory, kube context and git branch for shell prompts",
    long_about = None
)]
struct Cli {
    /// Output template. Can reference CurrentDirectory, CurrentDirectoryCompact,
    /// KubeNamespace, KubeContext and GitBranch
    #[arg(short, long, default_value = DEFAULT_TEMPLATE)]
    template: String,

    /// Comma separated list of modules to enable: dir, git, kube
    #[arg(short, long, default_value = "dir,git,kube")]
    modules: ModuleSet,
}

fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("error")),
        )
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .with_target(false)
        .without_time()
        .init();
}

fn write_output(output: &str) -> Result<(), AppError> {
    let mut stdout = io::stdout().lock();
    stdout.write_all(output.as_bytes())?;
    stdout.flush()?;
    Ok(())
}

fn main() {
    let cli = Cli::parse();
    init_logging();

    let options = PromptOptions { template: cli.template, modules: cli.modules };
    let result = prompt_info::render_prompt(&options).and_then(|output| write_output(&output));

    if let Err(e) = result {
        error!("{}", e);
        std::process::exit(1);
    }
}
