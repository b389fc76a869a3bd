mod args;
mod load;

use std::io::{self, Write};

use anyhow::Result;
use clap::Parser;
use life::{Snapshot, ascii, tick};
use tracing::info;
use tracing_subscriber::EnvFilter;

use args::Args;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let loaded = load::load(&args.input_file)?;
    let viewport = args.viewport(loaded.viewport);
    info!(
        input = %args.input_file.display(),
        population = loaded.grid.len(),
        tick_count = loaded.tick_count,
        "loaded pattern"
    );

    let stdout = io::stdout();
    let mut out = stdout.lock();

    let mut grid = loaded.grid;
    let mut tick_count = loaded.tick_count;
    if !args.quiet {
        write_frame(&mut out, tick_count, &ascii::render(&grid, &viewport))?;
    }
    for _ in 0..args.iterations {
        grid = tick(&grid);
        tick_count += 1;
        if !args.quiet {
            write_frame(&mut out, tick_count, &ascii::render(&grid, &viewport))?;
        }
    }
    if args.quiet {
        write_frame(&mut out, tick_count, &ascii::render(&grid, &viewport))?;
    }
    out.flush()?;

    info!(tick_count, population = grid.len(), "finished");

    if let Some(path) = &args.save {
        load::save(path, &Snapshot { tick_count, viewport, grid })?;
        info!(path = %path.display(), "saved snapshot");
    }
    Ok(())
}

fn write_frame(out: &mut impl Write, tick_count: u64, frame: &str) -> io::Result<()> {
    writeln!(out, "# tick {tick_count}")?;
    writeln!(out, "{frame}")?;
    writeln!(out)
}
