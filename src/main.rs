use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tracing::{error, info};

use quarry_dashboard::app::RefreshUseCase;
use quarry_dashboard::config::Config;
use quarry_dashboard::display::{format_brl, format_percent, format_tons, origin_label, summary_lines};
use quarry_dashboard::pipeline::{DataOrigin, FallbackReason, Snapshot, SnapshotStore};
use quarry_dashboard::report::write_report;
use quarry_dashboard::sample::sample_dashboard;
use quarry_dashboard::simulate::{jitter, DEFAULT_JITTER};
use quarry_dashboard::{logging, metrics};

#[derive(Parser)]
#[command(name = "quarry_dashboard")]
#[command(about = "Quarry management dashboard data service")]
#[command(version = "0.1.0")]
struct Cli {
    /// Path to the TOML configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch and normalize every sheet once, then print the dashboard summary
    Refresh {
        /// Print the snapshot as JSON instead of the text summary
        #[arg(long)]
        json: bool,
    },
    /// Refresh on the configured interval until Ctrl-C
    Watch {
        /// Override the refresh interval, in seconds
        #[arg(long)]
        interval: Option<u64>,
    },
    /// Refresh once and write the JSON report
    Export {
        /// Directory to write the report into (defaults to report.output_dir)
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Print the built-in sample dataset
    Sample {
        #[arg(long)]
        json: bool,
    },
    /// Refresh once, then print jittered headline figures like the live demo view
    Simulate {
        #[arg(long, default_value_t = 10)]
        ticks: u32,
        /// Seconds between ticks
        #[arg(long, default_value_t = 3)]
        every: u64,
    },
}

fn load_config(path: Option<PathBuf>) -> anyhow::Result<Config> {
    let config = match path {
        Some(path) => {
            dotenv::dotenv().ok();
            let mut config = Config::load_from(&path)
                .with_context(|| format!("loading config from {}", path.display()))?;
            config.apply_env_overrides()?;
            config
        }
        None => Config::load()?,
    };
    Ok(config)
}

fn print_summary(snapshot: &Snapshot) {
    for line in summary_lines(snapshot) {
        println!("{line}");
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    logging::init_logging();
    metrics::init_metrics();

    let cli = Cli::parse();
    let config = load_config(cli.config)?;
    let store = Arc::new(SnapshotStore::new());
    let refresher = RefreshUseCase::from_config(&config, store)?;

    match cli.command {
        Commands::Refresh { json } => {
            let snapshot = refresher.refresh().await;
            if json {
                println!("{}", serde_json::to_string_pretty(&*snapshot)?);
            } else {
                print_summary(&snapshot);
            }
        }
        Commands::Watch { interval } => {
            let interval = interval
                .map(Duration::from_secs)
                .unwrap_or_else(|| config.refresh_interval());
            anyhow::ensure!(!interval.is_zero(), "refresh interval must be greater than zero");
            info!(interval_secs = interval.as_secs(), "Starting refresh loop");

            let shutdown = async {
                if let Err(e) = tokio::signal::ctrl_c().await {
                    error!("Failed to listen for Ctrl-C: {}", e);
                }
            };
            let runs = refresher
                .watch(interval, shutdown, |snapshot| {
                    println!();
                    print_summary(snapshot);
                })
                .await;
            println!("Stopped after {runs} refreshes");
        }
        Commands::Export { out } => {
            let snapshot = refresher.refresh().await;
            let dir = out.unwrap_or_else(|| config.report.output_dir.clone());
            let path = write_report(&snapshot.data, &dir, chrono::Utc::now())?;
            println!("Report written to {} ({})", path.display(), origin_label(&snapshot.origin));
        }
        Commands::Sample { json } => {
            let snapshot = Snapshot::new(
                DataOrigin::Sample {
                    reason: FallbackReason::Unconfigured,
                },
                sample_dashboard(),
            );
            if json {
                println!("{}", serde_json::to_string_pretty(&snapshot.data)?);
            } else {
                print_summary(&snapshot);
            }
        }
        Commands::Simulate { ticks, every } => {
            let snapshot = refresher.refresh().await;
            let mut rng = rand::thread_rng();
            for tick in 1..=ticks {
                let view = jitter(&snapshot.data, &mut rng, DEFAULT_JITTER);
                println!(
                    "[{tick}/{ticks}] ROI {} | Brita 0 {} | Brita 1 {} | Pedrisco {} | Cost/ton {}",
                    format_percent((view.roi.current * 10.0).round() / 10.0),
                    format_tons(view.stock.brita0.round()),
                    format_tons(view.stock.brita1.round()),
                    format_tons(view.stock.pedrisco.round()),
                    format_brl(view.costs.cost_per_ton)
                );
                if tick < ticks {
                    tokio::time::sleep(Duration::from_secs(every)).await;
                }
            }
        }
    }
    Ok(())
}
