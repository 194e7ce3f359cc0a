use anyhow::Result;
use clap::Parser;
use std::io;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod cli;
mod commands;

use cli::{Cli, Commands};

fn main() -> Result<()> {
    // TRENCH_LOG wins over RUST_LOG; both fall back to info.
    let filter = EnvFilter::try_from_env("TRENCH_LOG")
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();

    let cli = Cli::parse();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Commands::Run {
            input,
            iterations,
            checkpoints,
            workers,
            frames,
        } => {
            let config = commands::run::config_from_args(iterations, checkpoints, workers);
            commands::run::run(&input, config, frames.as_deref(), &mut out).map(|_| ())
        }
        Commands::Render { input, generations } => {
            commands::render::run(&input, generations, &mut out)
        }
    }
}
