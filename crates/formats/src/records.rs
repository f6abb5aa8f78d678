use std::fmt;

use serde::Deserialize;

use data::dataset::{Dataset, DatasetError};
use data::horizon::Horizon;
use data::record::Record;
use foundation::geo::LatLon;

/// Population assumed when the payload carries no `pop` field. Chosen so
/// such places land in the smallest opacity band rather than vanishing.
pub const DEFAULT_POPULATION: u32 = 1_000;

#[derive(Debug)]
pub enum RecordParseError {
    Parse(serde_json::Error),
    InvalidPosition { id: String, lat: f64, lon: f64 },
    Dataset(DatasetError),
}

impl fmt::Display for RecordParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordParseError::Parse(err) => write!(f, "record payload parse error: {err}"),
            RecordParseError::InvalidPosition { id, lat, lon } => {
                write!(f, "record '{id}' has invalid position ({lat}, {lon})")
            }
            RecordParseError::Dataset(err) => write!(f, "record payload rejected: {err}"),
        }
    }
}

impl std::error::Error for RecordParseError {}

#[derive(Debug, Deserialize)]
struct WireRecord {
    z: String,
    lat: f64,
    lon: f64,
    #[serde(alias = "p")]
    price: Option<f64>,
    r: f64,
    #[serde(default)]
    pop: Option<u32>,
    n: String,
    #[serde(default)]
    p3m: Option<f64>,
    #[serde(default)]
    p6m: Option<f64>,
    #[serde(default)]
    p1y: Option<f64>,
}

/// Parses a record payload (JSON array of wire records) into a `Dataset`.
///
/// ZIP payloads use the short `p` field for price; metro payloads spell it
/// out. Missing change fields stay absent rather than becoming zero.
pub fn parse_records(payload: &str) -> Result<Dataset, RecordParseError> {
    let wire: Vec<WireRecord> = serde_json::from_str(payload).map_err(RecordParseError::Parse)?;
    let mut records = Vec::with_capacity(wire.len());
    for w in wire {
        let pos = LatLon::new(w.lat, w.lon);
        if !pos.is_valid() {
            return Err(RecordParseError::InvalidPosition {
                id: w.z,
                lat: w.lat,
                lon: w.lon,
            });
        }
        let mut changes = std::collections::BTreeMap::new();
        for (horizon, value) in [
            (Horizon::M3, w.p3m),
            (Horizon::M6, w.p6m),
            (Horizon::Y1, w.p1y),
        ] {
            if let Some(v) = value {
                changes.insert(horizon, v);
            }
        }
        records.push(Record {
            id: w.z,
            pos,
            population: w.pop.unwrap_or(DEFAULT_POPULATION),
            display_name: w.n,
            base_radius: w.r,
            price: w.price,
            changes,
        });
    }
    Dataset::new(records).map_err(RecordParseError::Dataset)
}

#[cfg(test)]
mod tests {
    use data::horizon::{Horizon, Metric};
    use pretty_assertions::assert_eq;

    use super::{DEFAULT_POPULATION, RecordParseError, parse_records};

    #[test]
    fn parses_zip_payload_with_short_price_field() {
        let payload = r#"[
            {"z":"80202","lat":39.75,"lon":-104.99,"p":550000,"r":6,"pop":12000,
             "n":"Denver, CO","p3m":1.2,"p1y":4.5}
        ]"#;
        let ds = parse_records(payload).unwrap();
        assert_eq!(ds.len(), 1);
        let r = ds.by_id("80202").unwrap();
        assert_eq!(r.value(Metric::Price), Some(550_000.0));
        assert_eq!(r.value(Metric::Change(Horizon::M3)), Some(1.2));
        assert_eq!(r.value(Metric::Change(Horizon::M6)), None);
        assert_eq!(r.value(Metric::Change(Horizon::Y1)), Some(4.5));
    }

    #[test]
    fn missing_population_defaults() {
        let payload = r#"[
            {"z":"1","lat":30.0,"lon":-90.0,"price":100000,"r":3,"n":"Somewhere"}
        ]"#;
        let ds = parse_records(payload).unwrap();
        assert_eq!(ds.by_id("1").unwrap().population, DEFAULT_POPULATION);
    }

    #[test]
    fn invalid_position_rejected() {
        let payload = r#"[
            {"z":"bad","lat":95.0,"lon":0.0,"p":1,"r":1,"n":"Nope"}
        ]"#;
        let err = parse_records(payload).unwrap_err();
        assert!(matches!(err, RecordParseError::InvalidPosition { .. }));
    }
}
