//! Command line arguments for the desktop front end.

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use life::SessionConfig;

#[derive(Parser, Debug)]
#[command(version, about = "Conway's Game of Life on an unbounded plane")]
pub struct Args {
    /// Viewport width in cells
    #[arg(long, default_value_t = 20)]
    pub width: u32,

    /// Viewport height in cells
    #[arg(long, default_value_t = 18)]
    pub height: u32,

    /// Milliseconds between generations while running
    #[arg(long, default_value_t = 250)]
    pub interval_ms: u64,

    /// Pattern to load on start-up (`.json` snapshot or ASCII art)
    #[arg(short = 'i', long)]
    pub input: Option<PathBuf>,
}

impl Args {
    pub fn session_config(&self) -> SessionConfig {
        SessionConfig {
            width: self.width,
            height: self.height,
            interval: Duration::from_millis(self.interval_ms.max(1)),
            ..SessionConfig::default()
        }
    }
}
