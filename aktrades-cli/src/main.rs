//! aktrades CLI — replay executed fills and report realized PnL.
//!
//! Commands:
//! - `replay` — run a fill CSV through a fresh ledger, from a TOML config or flags
//! - `check-config` — parse and validate a replay config without running it

use aktrades_runner::{
    export_report, load_fills, render_summary, replay, InputConfig, LedgerConfig, OutputConfig,
    ReplayConfig,
};
use anyhow::{bail, Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "aktrades", about = "aktrades — fill replay and PnL accounting")]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace). RUST_LOG overrides.
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Replay a fill stream through the ledger.
    Replay {
        /// Path to a TOML replay config.
        #[arg(long, conflicts_with_all = ["fills", "brokerage"])]
        config: Option<PathBuf>,

        /// Fill CSV (ticker,side,quantity,price). Required without --config.
        #[arg(long)]
        fills: Option<PathBuf>,

        /// Flat brokerage fee per fill.
        #[arg(long, default_value_t = 0.0)]
        brokerage: f64,

        /// Output directory for report JSON. Overrides the config.
        #[arg(long)]
        output_dir: Option<PathBuf>,

        /// Print the final snapshot as JSON instead of the text summary.
        #[arg(long, default_value_t = false)]
        json: bool,

        /// Skip writing report files.
        #[arg(long, default_value_t = false)]
        no_export: bool,
    },
    /// Validate a replay config and print it back normalized.
    CheckConfig {
        /// Path to a TOML replay config.
        config: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Replay {
            config,
            fills,
            brokerage,
            output_dir,
            json,
            no_export,
        } => run_replay(config, fills, brokerage, output_dir, json, no_export),
        Commands::CheckConfig { config } => run_check_config(config),
    }
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn resolve_config(
    config: Option<PathBuf>,
    fills: Option<PathBuf>,
    brokerage: f64,
) -> Result<ReplayConfig> {
    if let Some(path) = config {
        return ReplayConfig::load(&path)
            .with_context(|| format!("loading config {}", path.display()));
    }
    let Some(fills) = fills else {
        bail!("either --config or --fills is required");
    };
    let config = ReplayConfig {
        ledger: LedgerConfig {
            brokerage_rate: brokerage,
        },
        input: InputConfig { fills },
        output: OutputConfig::default(),
    };
    config.validate()?;
    Ok(config)
}

fn run_replay(
    config: Option<PathBuf>,
    fills: Option<PathBuf>,
    brokerage: f64,
    output_dir: Option<PathBuf>,
    json: bool,
    no_export: bool,
) -> Result<()> {
    let mut config = resolve_config(config, fills, brokerage)?;
    if let Some(dir) = output_dir {
        config.output.dir = dir;
    }

    let fills = load_fills(&config.input.fills)
        .with_context(|| format!("loading fills from {}", config.input.fills.display()))?;
    let result = replay(fills, config.ledger.brokerage_rate);

    if json {
        println!("{}", serde_json::to_string_pretty(&result.snapshot)?);
    } else {
        print!("{}", render_summary(&result));
    }

    if !no_export {
        let path = export_report(&config.output.dir, &result, config.output.pretty)?;
        info!(path = %path.display(), "report written");
    }
    Ok(())
}

fn run_check_config(path: PathBuf) -> Result<()> {
    let config = ReplayConfig::load(&path)
        .with_context(|| format!("loading config {}", path.display()))?;
    print!("{}", toml::to_string_pretty(&config)?);
    Ok(())
}
