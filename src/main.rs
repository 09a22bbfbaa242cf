//! Command-line front end: parse arguments, paint, write the PNG.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing::info;

use mural::{paint, Error, PaintOptions};

#[derive(Parser, Debug)]
#[command(name = "mural")]
#[command(about = "Paint a canvas with concurrently growing agent territories", long_about = None)]
struct Args {
    /// Number of painter agents to run
    #[arg(short = 'M', long, allow_negative_numbers = true)]
    agents: i64,

    /// Per-agent step budget for the simulation
    #[arg(short = 'S', long, allow_negative_numbers = true)]
    steps: i64,

    /// Canvas edge length in pixels
    #[arg(
        long,
        default_value_t = mural::DEFAULT_CANVAS_SIZE,
        value_parser = clap::value_parser!(u32).range(1..=65_535)
    )]
    canvas_size: u32,

    /// Where to write the finished PNG
    #[arg(short, long, default_value = "canvas.png")]
    output: PathBuf,
}

fn main() -> ExitCode {
    init_tracing();
    let args = Args::parse();
    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("ERROR: {err:#}");
            ExitCode::from(exit_status(&err))
        }
    }
}

fn run(args: Args) -> anyhow::Result<()> {
    let limit = u64::from(args.canvas_size) * u64::from(args.canvas_size);
    if args.agents <= 0 {
        return Err(Error::InvalidAgentCount {
            agents: args.agents,
            limit,
        }
        .into());
    }
    if args.steps < 0 {
        return Err(Error::InvalidStepBudget { steps: args.steps }.into());
    }
    if args.agents as u64 > limit {
        return Err(Error::InvalidAgentCount {
            agents: args.agents,
            limit,
        }
        .into());
    }

    let options =
        PaintOptions::new(args.agents as u32, args.steps as u64).with_canvas_size(args.canvas_size);
    let canvas = paint(&options)?;

    canvas
        .to_image()
        .save(&args.output)
        .with_context(|| format!("writing {}", args.output.display()))?;
    info!(
        output = %args.output.display(),
        claimed = canvas.claimed(),
        "canvas written"
    );
    Ok(())
}

/// Map failures onto the exit codes callers script against: 1 for a
/// nonpositive agent count (and any unexpected failure), 2 for a negative
/// step budget, 3 for more agents than canvas cells.
fn exit_status(err: &anyhow::Error) -> u8 {
    match err.downcast_ref::<Error>() {
        Some(Error::InvalidAgentCount { agents, .. }) if *agents <= 0 => 1,
        Some(Error::InvalidAgentCount { .. }) => 3,
        Some(Error::InvalidStepBudget { .. }) => 2,
        _ => 1,
    }
}

fn init_tracing() {
    let filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
