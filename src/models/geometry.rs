//! Record geometry
//!
//! Records store their footprint as Solr `ENVELOPE(minX, maxX, maxY, minY)`
//! or as WKT `POINT` / `POLYGON`. The map viewer wants GeoJSON.

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::{json, Value};

static ENVELOPE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^\s*ENVELOPE\s*\(([^,]+),([^,]+),([^,]+),([^,)]+)\)\s*$").expect("valid regex")
});
static POINT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^\s*POINT\s*\(\s*(\S+)\s+(\S+)\s*\)\s*$").expect("valid regex"));
static POLYGON: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^\s*POLYGON\s*\((.*)\)\s*$").expect("valid regex"));
static RING: Lazy<Regex> = Lazy::new(|| Regex::new(r"\(([^()]*)\)").expect("valid regex"));

#[derive(Debug, Clone, PartialEq)]
pub enum Geometry {
    /// Bounding box: west, east, north, south
    Envelope { west: f64, east: f64, north: f64, south: f64 },
    Point { x: f64, y: f64 },
    Polygon { rings: Vec<Vec<[f64; 2]>> },
}

impl Geometry {
    /// Parse an envelope or WKT string; `None` when unrecognised
    pub fn parse(input: &str) -> Option<Self> {
        if let Some(caps) = ENVELOPE.captures(input) {
            let coord = |i: usize| caps[i].trim().parse::<f64>().ok();
            return Some(Geometry::Envelope {
                west: coord(1)?,
                east: coord(2)?,
                north: coord(3)?,
                south: coord(4)?,
            });
        }

        if let Some(caps) = POINT.captures(input) {
            return Some(Geometry::Point {
                x: caps[1].parse().ok()?,
                y: caps[2].parse().ok()?,
            });
        }

        if let Some(caps) = POLYGON.captures(input) {
            let rings = RING
                .captures_iter(&caps[1])
                .map(|ring| parse_ring(&ring[1]))
                .collect::<Option<Vec<_>>>()?;
            if rings.is_empty() {
                return None;
            }
            return Some(Geometry::Polygon { rings });
        }

        None
    }

    pub fn to_geojson_value(&self) -> Value {
        match self {
            Geometry::Envelope { west, east, north, south } => json!({
                "type": "Polygon",
                "coordinates": [[
                    [west, south],
                    [east, south],
                    [east, north],
                    [west, north],
                    [west, south]
                ]]
            }),
            Geometry::Point { x, y } => json!({
                "type": "Point",
                "coordinates": [x, y]
            }),
            Geometry::Polygon { rings } => json!({
                "type": "Polygon",
                "coordinates": rings
            }),
        }
    }

    pub fn geojson(&self) -> String {
        self.to_geojson_value().to_string()
    }
}

fn parse_ring(ring: &str) -> Option<Vec<[f64; 2]>> {
    ring.split(',')
        .map(|pair| {
            let mut parts = pair.split_whitespace();
            let x = parts.next()?.parse().ok()?;
            let y = parts.next()?.parse().ok()?;
            Some([x, y])
        })
        .collect()
}
