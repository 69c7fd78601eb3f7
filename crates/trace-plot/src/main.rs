//! Overlay per-run sound amplitude dumps on one game-tick axis.
//!
//! Reads `<dir>/<category>_<run>.txt` for every configured category and run,
//! then opens an interactive plot (or logs a summary with `--nogui`).

use std::io;
use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;
use trace_core::{TraceConfig, TraceFigure};

#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Path to config TOML (defaults are used if it doesn't exist)
    #[arg(long, default_value = "trace-plot.toml")]
    config: PathBuf,

    /// Directory holding the sample files (overrides config)
    #[arg(long)]
    dir: Option<PathBuf>,

    /// Number of runs to scan (overrides config)
    #[arg(long)]
    runs: Option<u32>,

    /// Log a summary instead of opening the plot window
    #[arg(long, default_value_t = false)]
    nogui: bool,
}

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();

    let args = Args::parse();

    let mut config = TraceConfig::load_or_default(&args.config)
        .with_context(|| format!("loading {}", args.config.display()))?;
    if let Some(dir) = args.dir {
        config.directory = dir;
    }
    if let Some(runs) = args.runs {
        config.run_count = runs;
    }
    config.validate().context("invalid configuration")?;

    let figure = trace_core::compute(&config)
        .with_context(|| format!("reading sample files from {}", config.directory.display()))?;

    if args.nogui {
        log_summary(&figure);
        return Ok(());
    }

    trace_render::run(config, figure).map_err(|e| anyhow!("plot window failed: {e}"))
}

fn log_summary(figure: &TraceFigure) {
    for (category, stats) in &figure.stats {
        let colored = figure.legend.iter().any(|e| &e.category == category);
        info!(
            "{category:>14}: offset {:>7}, {:>3} files, {:>4} series{}",
            stats.offset,
            stats.files,
            stats.series,
            if colored { "" } else { " (no color)" }
        );
    }
    info!(
        "{} runs scanned, {} files read, {} traces, last tick {}",
        figure.runs_scanned,
        figure.files_read,
        figure.traces.len(),
        figure.max_x
    );

    let ticks: Vec<String> = figure
        .ticks
        .iter()
        .map(|t| format!("{}={}", t.position, t.label))
        .collect();
    info!("x ticks: {}", ticks.join(" "));
}
