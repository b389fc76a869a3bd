// snapshot.rs - Structured save format keyed by coordinate
//
// {
//   "tickCount": 12,
//   "fieldWidth": 20,
//   "fieldHeight": 18,
//   "fieldOffset": { "x": 0, "y": 0 },
//   "field": { "-1": { "0": true, "1": true }, "2": { "-3": true } }
// }

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{LifeError, Result};
use crate::{Cell, Grid, Viewport};

/// Everything needed to restore a session: the grid with its tick count and
/// the window it was being viewed through. Unlike the ASCII format this keeps
/// every live cell, including those outside the viewport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub tick_count: u64,
    pub viewport: Viewport,
    pub grid: Grid,
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SnapshotDoc {
    tick_count: u64,
    field_width: u32,
    field_height: u32,
    field_offset: OffsetDoc,
    // serde_json writes integer map keys as decimal strings
    field: BTreeMap<i64, BTreeMap<i64, bool>>,
}

#[derive(Serialize, Deserialize)]
struct OffsetDoc {
    x: i64,
    y: i64,
}

impl Snapshot {
    pub fn encode(&self) -> Result<String> {
        let field = self
            .grid
            .rows()
            .map(|(x, ys)| (x, ys.map(|y| (y, true)).collect()))
            .collect();

        let doc = SnapshotDoc {
            tick_count: self.tick_count,
            field_width: self.viewport.width,
            field_height: self.viewport.height,
            field_offset: OffsetDoc {
                x: self.viewport.center.x,
                y: self.viewport.center.y,
            },
            field,
        };

        serde_json::to_string_pretty(&doc).map_err(LifeError::Encode)
    }

    /// Parses a snapshot. Any deviation from the expected shape fails the
    /// whole decode; nothing is partially applied.
    pub fn decode(text: &str) -> Result<Snapshot> {
        let doc: SnapshotDoc = serde_json::from_str(text)
            .map_err(|err| LifeError::MalformedSnapshot(err.to_string()))?;

        let mut cells = Vec::new();
        for (&x, column) in &doc.field {
            for (&y, &alive) in column {
                if !alive {
                    return Err(LifeError::MalformedSnapshot(format!(
                        "cell ({x}, {y}) must be `true` or absent"
                    )));
                }
                cells.push(Cell::new(x, y));
            }
        }

        let snapshot = Snapshot {
            tick_count: doc.tick_count,
            viewport: Viewport::new(
                doc.field_width,
                doc.field_height,
                Cell::new(doc.field_offset.x, doc.field_offset.y),
            ),
            grid: cells.into_iter().collect(),
        };
        debug!(
            tick_count = snapshot.tick_count,
            population = snapshot.grid.len(),
            "decoded snapshot"
        );
        Ok(snapshot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Snapshot {
        Snapshot {
            tick_count: 7,
            viewport: Viewport::new(11, 9, Cell::new(-4, 2)),
            grid: [(-3, 0), (-3, 1), (250, -1000)]
                .into_iter()
                .map(Cell::from)
                .collect(),
        }
    }

    #[test]
    fn encodes_string_keyed_field() {
        let json = sample().encode().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["tickCount"], 7);
        assert_eq!(value["fieldWidth"], 11);
        assert_eq!(value["fieldHeight"], 9);
        assert_eq!(value["fieldOffset"]["x"], -4);
        assert_eq!(value["fieldOffset"]["y"], 2);
        assert_eq!(value["field"]["-3"]["0"], true);
        assert_eq!(value["field"]["-3"]["1"], true);
        assert_eq!(value["field"]["250"]["-1000"], true);
    }

    #[test]
    fn decode_restores_everything() {
        let original = sample();
        let decoded = Snapshot::decode(&original.encode().unwrap()).unwrap();
        assert_eq!(decoded, original);
    }

    #[test]
    fn decodes_hand_written_snapshot() {
        let json = r#"{
            "tickCount": 3,
            "fieldWidth": 4,
            "fieldHeight": 2,
            "fieldOffset": {"x": 1, "y": -1},
            "field": {"-1": {"-1": true}, "0": {"0": true}, "5": {}}
        }"#;
        let snap = Snapshot::decode(json).unwrap();
        assert_eq!(snap.tick_count, 3);
        assert_eq!(snap.viewport, Viewport::new(4, 2, Cell::new(1, -1)));
        let expected: Grid = [(-1, -1), (0, 0)].into_iter().map(Cell::from).collect();
        assert_eq!(snap.grid, expected);
        assert_eq!(snap.grid.rows().count(), 2);
    }

    #[test]
    fn rejects_invalid_json() {
        let err = Snapshot::decode("{ not json").unwrap_err();
        assert!(matches!(err, LifeError::MalformedSnapshot(_)));
    }

    #[test]
    fn rejects_missing_field() {
        let json = r#"{"tickCount": 0, "fieldWidth": 1, "fieldHeight": 1, "field": {}}"#;
        assert!(matches!(
            Snapshot::decode(json),
            Err(LifeError::MalformedSnapshot(_))
        ));
    }

    #[test]
    fn rejects_mistyped_field() {
        let json = r#"{"tickCount": "zero", "fieldWidth": 1, "fieldHeight": 1,
                       "fieldOffset": {"x": 0, "y": 0}, "field": {}}"#;
        assert!(matches!(
            Snapshot::decode(json),
            Err(LifeError::MalformedSnapshot(_))
        ));
    }

    #[test]
    fn rejects_non_numeric_key() {
        let json = r#"{"tickCount": 0, "fieldWidth": 1, "fieldHeight": 1,
                       "fieldOffset": {"x": 0, "y": 0}, "field": {"a": {"0": true}}}"#;
        assert!(matches!(
            Snapshot::decode(json),
            Err(LifeError::MalformedSnapshot(_))
        ));
    }

    #[test]
    fn rejects_explicit_false() {
        let json = r#"{"tickCount": 0, "fieldWidth": 1, "fieldHeight": 1,
                       "fieldOffset": {"x": 0, "y": 0}, "field": {"0": {"0": false}}}"#;
        let err = Snapshot::decode(json).unwrap_err();
        assert!(err.to_string().contains("must be `true`"));
    }
}
