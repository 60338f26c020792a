//! Batch Worker CLI
//!
//! Runs the polling worker loop or a one-shot cron pass over work items.
//! Work items can be seeded from a JSON-lines file; by default each item
//! is handled by the logging processor.

use anyhow::Result;
use batch_worker::{
    run_scheduled, setup_signal_handler, LogProcessor, MemorySource, WorkItem, WorkRunner,
    WorkerConfig,
};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser)]
#[command(name = "batch-worker")]
#[command(about = "Poll and process background work items with graceful shutdown")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Run as worker, polling for pending work items
    Worker {
        /// Poll interval in seconds (overrides WORKER_POLL_INTERVAL, default: 5)
        #[arg(short, long)]
        poll_interval: Option<u64>,

        /// Maximum items fetched per cycle (overrides WORKER_BATCH_SIZE, default: 10)
        #[arg(short, long)]
        batch_size: Option<usize>,

        /// Per-item timeout in seconds (overrides WORKER_TASK_TIMEOUT, default: 300)
        #[arg(short, long)]
        timeout: Option<u64>,

        /// Run one batch and exit (for testing)
        #[arg(long)]
        once: bool,

        /// JSON-lines file of work items to seed the queue with
        #[arg(short, long)]
        input: Option<PathBuf>,
    },

    /// Run the loop body once as a scheduled job and exit
    Cron {
        /// Per-item timeout in seconds (overrides WORKER_TASK_TIMEOUT, default: 300)
        #[arg(short, long)]
        timeout: Option<u64>,

        /// JSON-lines file of work items to seed the queue with
        #[arg(short, long)]
        input: Option<PathBuf>,
    },
}

/// Load work items from a JSON-lines file (one item per line)
fn load_items(path: &Path) -> Result<Vec<WorkItem>> {
    let raw = std::fs::read_to_string(path)?;
    let mut items = Vec::new();
    for line in raw.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        items.push(serde_json::from_str::<WorkItem>(line)?);
    }
    Ok(items)
}

fn seed_source(config: &WorkerConfig, input: Option<&Path>) -> Result<MemorySource> {
    let source = MemorySource::new(config.batch_size);
    if let Some(path) = input {
        let items = load_items(path)?;
        info!("Loaded {} work items from {}", items.len(), path.display());
        for item in items {
            source.push(item);
        }
    }
    Ok(source)
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    tracing::subscriber::set_global_default(subscriber)?;

    match cli.command {
        Commands::Worker {
            poll_interval,
            batch_size,
            timeout,
            once,
            input,
        } => {
            // Load .env file if present
            dotenvy::dotenv().ok();

            info!("Initializing worker...");

            // Env-provided config, overridden by explicit flags
            let mut config = WorkerConfig::from_env()?;
            if let Some(secs) = poll_interval {
                config.poll_interval = Duration::from_secs(secs);
            }
            if let Some(size) = batch_size {
                config.batch_size = size.max(1);
            }
            if let Some(secs) = timeout {
                config.task_timeout = Duration::from_secs(secs);
            }

            let source = seed_source(&config, input.as_deref())?;
            let runner = WorkRunner::new(source, LogProcessor::new(), config);

            if once {
                // Run once mode
                info!("Running in single-batch mode...");
                match runner.run_once().await {
                    Ok(0) => println!("No pending work items found"),
                    Ok(n) => println!("Processed {} work items", n),
                    Err(e) => {
                        eprintln!("Error processing work items: {}", e);
                        return Err(e.into());
                    }
                }
            } else {
                // Setup graceful shutdown
                setup_signal_handler(runner.shutdown_handle());

                // Run continuous worker loop
                runner.run().await?;
            }
        }

        Commands::Cron { timeout, input } => {
            dotenvy::dotenv().ok();

            let mut config = WorkerConfig::from_env()?;
            if let Some(secs) = timeout {
                config.task_timeout = Duration::from_secs(secs);
            }

            let source = seed_source(&config, input.as_deref())?;
            let runner = WorkRunner::new(source, LogProcessor::new(), config);

            // A failing task propagates out of main for the non-zero exit
            run_scheduled(|| async {
                let processed = runner.run_once().await?;
                info!("Processed {} work items", processed);
                Ok(())
            })
            .await?;
        }
    }

    Ok(())
}
