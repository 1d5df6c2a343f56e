//! CLI binary for searchdash.

use std::process::ExitCode;

use clap::Parser;
use dash_search::{EngineKind, SearchConfig};
use searchdash::{DEFAULT_STRATEGY, DashError, Driver, DriverConfig, StrategyRegistry};
use tokio_util::sync::CancellationToken;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Search DuckDuckGo and StartPage from the command line.
///
/// Dashes in the search string are replaced by each letter a-z in turn,
/// running one search per letter. Use `-m passthrough` to search for the
/// string exactly as typed.
#[derive(Parser)]
#[command(
    name = "searchdash",
    version,
    about,
    after_help = "Examples:\n  searchdash -s 'hello world'\n  searchdash -s 'rust-lang' -n 5\n  searchdash -s 'full-string' -m passthrough"
)]
struct Cli {
    /// Search string (use single quotes).
    #[arg(short, long = "search")]
    search: String,

    /// Maximum results shown per engine.
    #[arg(short = 'n', long, default_value_t = dash_search::DEFAULT_MAX_RESULTS_PER_ENGINE)]
    max_results: usize,

    /// Substitution strategy (letters, passthrough; dashsub and search also work).
    #[arg(short, long, default_value = DEFAULT_STRATEGY)]
    mode: String,

    /// Per-request timeout in seconds.
    #[arg(short, long, default_value_t = 10)]
    timeout: u64,

    /// Engine to query; repeat to choose several, in output order.
    #[arg(short, long = "engine")]
    engines: Vec<EngineKind>,

    /// Send this User-Agent instead of a rotating browser one.
    #[arg(long)]
    user_agent: Option<String>,
}

#[tokio::main]
async fn main() -> ExitCode {
    // Diagnostics go to stderr so stdout carries only result blocks.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("searchdash=warn,dash_search=warn")),
        )
        .init();

    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", failure_message(&e));
            ExitCode::FAILURE
        }
    }
}

/// Build the driver settings from parsed arguments.
///
/// The search string is returned separately; it must contain something
/// other than whitespace.
fn driver_config(cli: Cli) -> Result<(String, DriverConfig), DashError> {
    if cli.search.trim().is_empty() {
        return Err(DashError::Config("search string cannot be empty".into()));
    }

    let config = DriverConfig {
        search: SearchConfig {
            max_results_per_engine: cli.max_results,
            timeout_seconds: cli.timeout,
            user_agent: cli.user_agent,
            ..Default::default()
        },
        strategy: cli.mode,
        engines: if cli.engines.is_empty() {
            EngineKind::all().to_vec()
        } else {
            cli.engines
        },
    };
    Ok((cli.search, config))
}

/// Line printed to stderr when the run fails.
fn failure_message(err: &anyhow::Error) -> String {
    match err.downcast_ref::<DashError>() {
        Some(DashError::Interrupted) => "\nSearch interrupted by user".to_owned(),
        _ => format!("searchdash failed: {err:#}"),
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let (search, config) = driver_config(cli)?;
    let driver = Driver::from_config(&config, &StrategyRegistry::with_builtins())?;

    // Handle Ctrl+C
    let cancel = CancellationToken::new();
    let cancel_clone = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            info!("received Ctrl+C, shutting down...");
            cancel_clone.cancel();
        }
    });

    let mut out = std::io::stdout();
    let summary = driver.run(&search, &cancel, &mut out).await?;
    info!(iterations = summary.iterations(), "search complete");
    Ok(())
}
