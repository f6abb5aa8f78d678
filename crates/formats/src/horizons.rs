use std::collections::BTreeMap;
use std::fmt;

use data::horizon::Horizon;

#[derive(Debug)]
pub enum HorizonParseError {
    Parse(serde_json::Error),
}

impl fmt::Display for HorizonParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HorizonParseError::Parse(err) => write!(f, "horizon payload parse error: {err}"),
        }
    }
}

impl std::error::Error for HorizonParseError {}

/// Parses the lazily fetched long-horizon payload: a map from record id to
/// wire fields (`p3y`, `p5y`, `p10y`, `p15y`). Unknown fields and embedded
/// horizons are ignored; fields may be absent per record.
pub fn parse_long_horizons(
    payload: &str,
) -> Result<BTreeMap<String, BTreeMap<Horizon, f64>>, HorizonParseError> {
    let wire: BTreeMap<String, BTreeMap<String, f64>> =
        serde_json::from_str(payload).map_err(HorizonParseError::Parse)?;
    let mut out = BTreeMap::new();
    for (id, fields) in wire {
        let mut horizons = BTreeMap::new();
        for (field, value) in fields {
            let Some(horizon) = Horizon::from_wire_field(&field) else {
                continue;
            };
            if !horizon.is_embedded() {
                horizons.insert(horizon, value);
            }
        }
        out.insert(id, horizons);
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use data::horizon::Horizon;
    use pretty_assertions::assert_eq;

    use super::parse_long_horizons;

    #[test]
    fn parses_sparse_horizon_map() {
        let payload = r#"{
            "80202": {"p3y": 20.0, "p15y": 110.5},
            "10001": {}
        }"#;
        let blob = parse_long_horizons(payload).unwrap();
        assert_eq!(blob.len(), 2);
        let denver = &blob["80202"];
        assert_eq!(denver.get(&Horizon::Y3), Some(&20.0));
        assert_eq!(denver.get(&Horizon::Y5), None);
        assert_eq!(denver.get(&Horizon::Y15), Some(&110.5));
        assert!(blob["10001"].is_empty());
    }

    #[test]
    fn unknown_and_embedded_fields_are_ignored() {
        let payload = r#"{"80202": {"p2w": 1.0, "p1y": 4.0, "p5y": 40.0}}"#;
        let blob = parse_long_horizons(payload).unwrap();
        let entry = &blob["80202"];
        assert_eq!(entry.len(), 1);
        assert_eq!(entry.get(&Horizon::Y5), Some(&40.0));
    }
}
