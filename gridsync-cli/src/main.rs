//! gridsync command-line tool
//!
//! Usage:
//!   gridsync inspect layout.json
//!   gridsync place layout.json --id chart --width 4 --height 3
//!   gridsync replay layout.json events.jsonl

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use gridsync_cli::{ReplayOptions, inspect, item_json, place, replay};
use gridsync_codec::LayoutCodec;
use gridsync_dashboard::DashboardConfig;
use std::{fs, path::Path, path::PathBuf};
use tracing::{Level, info};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser, Debug)]
#[command(name = "gridsync")]
#[command(about = "Inspect and exercise gridsync layouts")]
struct Args {
    /// Dashboard configuration file (JSON)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Decode a layout document and print a summary
    Inspect {
        layout: PathBuf,

        /// Print the normalized document instead of a summary
        #[arg(long)]
        json: bool,
    },
    /// Print where a new item would be placed
    Place {
        layout: PathBuf,

        #[arg(long)]
        id: String,

        #[arg(short = 'W', long, default_value = "4")]
        width: u32,

        #[arg(short = 'H', long, default_value = "3")]
        height: u32,
    },
    /// Replay a JSON-lines log of client events against a layout
    Replay {
        layout: PathBuf,
        events: PathBuf,

        /// Do not push the layout before replaying
        #[arg(long)]
        no_initial_push: bool,

        /// Stop at the first undecodable event
        #[arg(long)]
        strict: bool,
    },
}

fn main() -> Result<()> {
    let args = Args::parse();
    let log_level = if args.verbose { Level::DEBUG } else { Level::INFO };
    FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();

    let config = match &args.config {
        Some(path) => {
            info!("Loading configuration from {:?}", path);
            DashboardConfig::from_json(&read(path)?)
                .with_context(|| format!("Invalid configuration in {}", path.display()))?
        }
        None => DashboardConfig::default(),
    };

    match args.command {
        Command::Inspect { layout, json } => {
            let report = inspect(&read(&layout)?)?;
            if json {
                println!("{}", LayoutCodec::encode_pretty(&report.layout)?);
            } else {
                print!("{report}");
            }
        }
        Command::Place {
            layout,
            id,
            width,
            height,
        } => {
            let item = place(&read(&layout)?, &id, width, height, &config.placement)?;
            info!("Placed {}", item);
            println!("{}", item_json(&item)?);
        }
        Command::Replay {
            layout,
            events,
            no_initial_push,
            strict,
        } => {
            let options = ReplayOptions {
                initial_push: !no_initial_push,
                strict,
            };
            let report = replay(&read(&layout)?, &read(&events)?, config.sync, options)?;
            info!("{}", report);
            println!("{}", LayoutCodec::encode_pretty(&report.layout)?);
        }
    }

    Ok(())
}

fn read(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}
