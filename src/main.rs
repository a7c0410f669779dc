//! sortrace - watch sorting algorithms race, one swap at a time
//!
//! # Usage
//!
//! ```bash
//! sortrace
//! sortrace --size 80 --seed 42
//! sortrace --headless --size 200 --json
//! sortrace --algorithms quick,heap,comb
//! ```

use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use sortrace::{run_headless, ui, util, App, Config, HeadlessOptions, RaceSize, SortAlgorithm};

#[derive(Parser)]
#[command(name = "sortrace")]
#[command(
    version,
    about = "Replay how sorting algorithms reorder the same random array, swap by swap"
)]
struct Args {
    /// Array size (defaults to the configured default_size)
    #[arg(long, short = 'n')]
    size: Option<usize>,

    /// Seed for the random arrays
    #[arg(long)]
    seed: Option<u64>,

    /// Milliseconds between played-back frames
    #[arg(long = "frame-ms")]
    frame_ms: Option<u64>,

    /// Comma separated algorithms to race (default: all six)
    #[arg(long, value_delimiter = ',')]
    algorithms: Vec<SortAlgorithm>,

    /// Run one race without the terminal UI and print the swap counts
    #[arg(long)]
    headless: bool,

    /// Print the headless summary as JSON
    #[arg(long, requires = "headless")]
    json: bool,

    /// Skip playback in headless mode
    #[arg(long, requires = "headless")]
    no_playback: bool,

    /// Data directory for config and logs (default: ~/.sortrace)
    #[arg(long)]
    data_dir: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    util::init_data_dir(args.data_dir.clone());

    if args.headless {
        init_stderr_logging();
    } else {
        init_file_logging()?;
    }

    let config = apply_args(Config::load(), &args);

    if args.headless {
        let size = RaceSize::bounded(config.default_size, config.max_size)?;
        let report = run_headless(
            &config,
            HeadlessOptions {
                size,
                playback: !args.no_playback,
            },
        )
        .await?;

        if args.json {
            println!("{}", serde_json::to_string_pretty(&report)?);
        } else {
            println!("{report}");
        }
        return Ok(());
    }

    ui::install_panic_hook();
    let mut app = App::new(config)?;
    app.run().await
}

fn apply_args(mut config: Config, args: &Args) -> Config {
    if let Some(size) = args.size {
        config = config.with_default_size(size);
    }
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }
    if let Some(ms) = args.frame_ms {
        config = config.with_frame_interval(Duration::from_millis(ms));
    }
    if !args.algorithms.is_empty() {
        config = config.with_algorithms(args.algorithms.clone());
    }
    config
}

fn env_filter() -> EnvFilter {
    EnvFilter::from_default_env().add_directive(tracing::Level::WARN.into())
}

fn init_stderr_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .init();
}

/// Log to ~/.sortrace/logs/sortrace.log so output doesn't corrupt the TUI
fn init_file_logging() -> Result<()> {
    fs::create_dir_all(util::logs_dir())?;

    let log_file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(util::log_file_path())?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(log_file)
        .with_ansi(false)
        .init();
    Ok(())
}
