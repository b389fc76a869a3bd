//! # Command Line Arguments
//!
//! Parses the headless runner's options and maps them onto a
//! [`life::Viewport`] for rendering.

use std::path::PathBuf;

use clap::Parser;
use life::{Cell, Viewport};

/// Runs a pattern for a number of generations and prints each one.
///
/// ```bash
/// # 20 generations of a glider drawn in a 12x12 window
/// life_cli -i glider.txt -n 20 --width 12 --height 12
///
/// # resume a saved session and write the result back out
/// life_cli -i save.json -n 100 --quiet --save save.json
/// ```
#[derive(Parser, Debug)]
#[command(version, about)]
pub struct Args {
    /// Pattern file: `.json` snapshot, anything else is read as ASCII art
    #[arg(short = 'i', long)]
    pub input_file: PathBuf,

    /// Number of generations to run
    #[arg(short = 'n', long, default_value_t = 10)]
    pub iterations: u64,

    /// Window width; defaults to the snapshot's, or 20
    #[arg(long)]
    pub width: Option<u32>,

    /// Window height; defaults to the snapshot's, or 18
    #[arg(long)]
    pub height: Option<u32>,

    /// Window centre, x
    #[arg(long, allow_hyphen_values = true)]
    pub center_x: Option<i64>,

    /// Window centre, y
    #[arg(long, allow_hyphen_values = true)]
    pub center_y: Option<i64>,

    /// Write the final generation as a snapshot to this file
    #[arg(long)]
    pub save: Option<PathBuf>,

    /// Only print the final generation
    #[arg(short, long)]
    pub quiet: bool,
}

impl Args {
    /// Command line values override whatever the loaded file specified.
    pub fn viewport(&self, loaded: Viewport) -> Viewport {
        Viewport::new(
            self.width.unwrap_or(loaded.width),
            self.height.unwrap_or(loaded.height),
            Cell::new(
                self.center_x.unwrap_or(loaded.center.x),
                self.center_y.unwrap_or(loaded.center.y),
            ),
        )
    }
}
