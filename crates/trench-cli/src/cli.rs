use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "trench")]
#[command(author, version, about = "Enhance an infinite binary image with a 512-entry lookup table")]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Enhance a puzzle and print lit counts at checkpoints
    Run {
        /// Puzzle file: table, blank line, image
        input: PathBuf,

        /// Number of passes (default: the last checkpoint, or 50)
        #[arg(short = 'n', long)]
        iterations: Option<u32>,

        /// Generation to report the lit count at; repeatable (default: 2 and 50)
        #[arg(short = 'c', long = "checkpoint")]
        checkpoints: Vec<u32>,

        /// Worker threads per pass
        #[arg(short, long, default_value_t = 1, env = "TRENCH_WORKERS")]
        workers: usize,

        /// Write every generation as DIR/frame_NNN.txt
        #[arg(long, value_name = "DIR")]
        frames: Option<PathBuf>,
    },

    /// Print the image after a number of passes
    Render {
        /// Puzzle file: table, blank line, image
        input: PathBuf,

        /// Passes to apply before rendering
        #[arg(short, long, default_value_t = 2)]
        generations: u32,
    },
}
