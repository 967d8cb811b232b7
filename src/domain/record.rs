//! Boundary adapter for decoded tile features.
//!
//! Tile attributes arrive loosely typed: heights may be numbers or numeric
//! strings, and the extrusion flag may be a boolean or the string `"true"`.
//! Everything is normalized here once so the mesh code only sees [`Building`].

use serde::Deserialize;
use serde_json::Value;
use std::collections::HashMap;

use super::{Building, Point2D, Ring};
use crate::error::RecordError;

/// A building feature as handed over by the tile decoder
#[derive(Debug, Clone, Deserialize)]
pub struct BuildingRecord {
    /// Rings of tile-local points, closing point included
    pub geometry: Vec<Vec<Point2D>>,
    #[serde(default)]
    pub properties: HashMap<String, Value>,
}

impl BuildingRecord {
    pub fn into_building(self) -> Building {
        let height = self.properties.get("height").and_then(parse_number);
        let min_height = self
            .properties
            .get("min_height")
            .and_then(parse_number)
            .unwrap_or(0.0);
        let extrude = self.properties.get("extrude").is_some_and(parse_flag);

        Building {
            footprint: self.geometry.into_iter().map(Ring::new).collect(),
            height,
            min_height,
            extrude,
        }
    }
}

/// Parse a JSON array of building records
pub fn parse_records(json: &str) -> Result<Vec<Building>, RecordError> {
    let records: Vec<BuildingRecord> = serde_json::from_str(json)?;
    Ok(records
        .into_iter()
        .map(BuildingRecord::into_building)
        .collect())
}

/// Numbers and numeric strings; `"NaN"` and `"inf"` count as missing
fn parse_number(value: &Value) -> Option<f64> {
    let number = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    };
    number.filter(|v: &f64| v.is_finite())
}

fn parse_flag(value: &Value) -> bool {
    match value {
        Value::Bool(b) => *b,
        Value::String(s) => s == "true",
        _ => false,
    }
}
