use std::fmt;

use serde::Deserialize;
use serde_json::Value;

use data::geometry::{GeometryFeature, GeometrySet};
use foundation::geo::LatLon;

#[derive(Debug)]
pub enum GeometryParseError {
    Parse(serde_json::Error),
    NotFeatureCollection,
    UnsupportedGeometry { id: String, kind: String },
}

impl fmt::Display for GeometryParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeometryParseError::Parse(err) => write!(f, "geometry payload parse error: {err}"),
            GeometryParseError::NotFeatureCollection => {
                write!(f, "geometry payload is not a FeatureCollection")
            }
            GeometryParseError::UnsupportedGeometry { id, kind } => {
                write!(f, "feature '{id}' has unsupported geometry type '{kind}'")
            }
        }
    }
}

impl std::error::Error for GeometryParseError {}

#[derive(Debug, Deserialize)]
struct WireCollection {
    #[serde(rename = "type")]
    kind: String,
    features: Vec<WireFeature>,
}

#[derive(Debug, Deserialize)]
struct WireFeature {
    properties: WireProperties,
    geometry: WireGeometry,
}

#[derive(Debug, Deserialize)]
struct WireProperties {
    zip: String,
}

#[derive(Debug, Deserialize)]
struct WireGeometry {
    #[serde(rename = "type")]
    kind: String,
    coordinates: Value,
}

/// Parses a GeoJSON FeatureCollection of region outlines.
///
/// Coordinates arrive GeoJSON-order (lon, lat) and are flipped into
/// `LatLon`. Only Polygon and MultiPolygon geometries are accepted;
/// features without a `zip` property fail to deserialize.
pub fn parse_geometry(payload: &str) -> Result<GeometrySet, GeometryParseError> {
    let wire: WireCollection = serde_json::from_str(payload).map_err(GeometryParseError::Parse)?;
    if wire.kind != "FeatureCollection" {
        return Err(GeometryParseError::NotFeatureCollection);
    }
    let mut features = Vec::with_capacity(wire.features.len());
    for feature in wire.features {
        let rings = match feature.geometry.kind.as_str() {
            "Polygon" => {
                let polygon: Vec<Vec<[f64; 2]>> =
                    serde_json::from_value(feature.geometry.coordinates)
                        .map_err(GeometryParseError::Parse)?;
                polygon.into_iter().map(flip_ring).collect()
            }
            "MultiPolygon" => {
                let polygons: Vec<Vec<Vec<[f64; 2]>>> =
                    serde_json::from_value(feature.geometry.coordinates)
                        .map_err(GeometryParseError::Parse)?;
                polygons
                    .into_iter()
                    .flat_map(|polygon| polygon.into_iter().map(flip_ring))
                    .collect()
            }
            other => {
                return Err(GeometryParseError::UnsupportedGeometry {
                    id: feature.properties.zip,
                    kind: other.to_string(),
                });
            }
        };
        features.push(GeometryFeature {
            id: feature.properties.zip,
            rings,
        });
    }
    Ok(GeometrySet { features })
}

fn flip_ring(ring: Vec<[f64; 2]>) -> Vec<LatLon> {
    ring.into_iter()
        .map(|[lon, lat]| LatLon::new(lat, lon))
        .collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::{GeometryParseError, parse_geometry};

    #[test]
    fn parses_polygon_and_multipolygon() {
        let payload = r#"{
            "type": "FeatureCollection",
            "features": [
                {"type": "Feature", "properties": {"zip": "80202"},
                 "geometry": {"type": "Polygon",
                              "coordinates": [[[-105.0, 39.7], [-104.9, 39.7], [-104.9, 39.8], [-105.0, 39.7]]]}},
                {"type": "Feature", "properties": {"zip": "96761"},
                 "geometry": {"type": "MultiPolygon",
                              "coordinates": [[[[-156.7, 20.9], [-156.6, 20.9], [-156.6, 21.0], [-156.7, 20.9]]]]}}
            ]
        }"#;
        let set = parse_geometry(payload).unwrap();
        assert_eq!(set.features.len(), 2);
        let denver = set.feature("80202").unwrap();
        assert_eq!(denver.rings.len(), 1);
        assert_eq!(denver.rings[0][0].lat, 39.7);
        assert_eq!(denver.rings[0][0].lon, -105.0);
    }

    #[test]
    fn rejects_point_geometry() {
        let payload = r#"{
            "type": "FeatureCollection",
            "features": [
                {"type": "Feature", "properties": {"zip": "1"},
                 "geometry": {"type": "Point", "coordinates": [-105.0, 39.7]}}
            ]
        }"#;
        let err = parse_geometry(payload).unwrap_err();
        assert!(matches!(
            err,
            GeometryParseError::UnsupportedGeometry { .. }
        ));
    }
}
