use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use hmmeval::io::{load_definitions, Report};
use log::{error, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "hmm-select")]
#[command(version)]
#[command(about = "Pick the Hidden Markov Model that best explains an observation sequence", long_about = None)]
struct Cli {
    /// Model definition files (JSON)
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Check that every model's distributions sum to one before evaluating
    #[arg(long)]
    validate: bool,

    /// Allowed deviation from one when validating
    #[arg(long, default_value_t = 1e-6)]
    tolerance: f64,

    /// Evaluate the models of each file in parallel
    #[arg(long)]
    parallel: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut failed = 0;
    for path in &cli.files {
        if let Err(err) = run(path, &cli) {
            error!("{:#}", err);
            failed += 1;
        }
    }

    if failed > 0 {
        error!("{} of {} files failed", failed, cli.files.len());
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn run(path: &Path, cli: &Cli) -> Result<()> {
    let definitions = load_definitions(path)
        .with_context(|| format!("failed to load {}", path.display()))?;
    info!(
        "{}: {} models, {} observations",
        path.display(),
        definitions.models.len(),
        definitions.observations.len()
    );

    let selector = definitions.into_selector();
    if cli.validate {
        selector
            .validate(cli.tolerance)
            .with_context(|| format!("{} failed validation", path.display()))?;
    }

    let evaluation = if cli.parallel {
        selector.evaluate_parallel()
    } else {
        selector.evaluate()
    };
    print!("{}", Report::new(path.display().to_string(), &evaluation));
    Ok(())
}
