// format.rs - Choosing between the two text formats by file name

use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    /// Rows of `.` and `*`, see [`crate::ascii`].
    Ascii,
    /// Coordinate-keyed JSON, see [`crate::Snapshot`].
    Snapshot,
}

impl FileFormat {
    /// `.json` files are snapshots; everything else is read as ASCII art.
    pub fn for_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => FileFormat::Snapshot,
            _ => FileFormat::Ascii,
        }
    }
}
