// load.rs - Reading pattern files into a snapshot

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use life::{FileFormat, Snapshot, Viewport, ascii};

/// Reads `path` as a snapshot or as ASCII art. ASCII files start at tick 0
/// with the default window.
pub fn load(path: &Path) -> Result<Snapshot> {
    let text = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let snapshot = match FileFormat::for_path(path) {
        FileFormat::Snapshot => {
            Snapshot::decode(&text).with_context(|| format!("decoding {}", path.display()))?
        }
        FileFormat::Ascii => Snapshot {
            tick_count: 0,
            viewport: Viewport::default(),
            grid: ascii::parse(&text),
        },
    };
    Ok(snapshot)
}

pub fn save(path: &Path, snapshot: &Snapshot) -> Result<()> {
    let text = snapshot.encode()?;
    fs::write(path, text).with_context(|| format!("writing {}", path.display()))
}
