use data::dataset::Dataset;
use foundation::bounds::GeoBounds;

use crate::boundary::Boundary;

/// Indices of records whose centroid lies in the viewport, in the
/// dataset's layering order. Bounds edges are inclusive.
pub fn visible_records(dataset: &Dataset, viewport: GeoBounds) -> Vec<usize> {
    dataset
        .records()
        .iter()
        .enumerate()
        .filter(|(_, r)| viewport.contains(r.pos))
        .map(|(i, _)| i)
        .collect()
}

/// Indices of records inside the drawn boundary, viewport ignored.
pub fn records_in_boundary(dataset: &Dataset, boundary: &Boundary) -> Vec<usize> {
    dataset
        .records()
        .iter()
        .enumerate()
        .filter(|(_, r)| boundary.contains(r.pos))
        .map(|(i, _)| i)
        .collect()
}

/// Indices of records inside both the drawn boundary and the viewport.
pub fn records_in_boundary_and_viewport(
    dataset: &Dataset,
    boundary: &Boundary,
    viewport: GeoBounds,
) -> Vec<usize> {
    dataset
        .records()
        .iter()
        .enumerate()
        .filter(|(_, r)| viewport.contains(r.pos) && boundary.contains(r.pos))
        .map(|(i, _)| i)
        .collect()
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use data::dataset::Dataset;
    use data::record::Record;
    use foundation::bounds::GeoBounds;
    use foundation::geo::LatLon;

    use super::{records_in_boundary, visible_records};
    use crate::boundary::Boundary;

    fn record(id: &str, lat: f64, lon: f64, population: u32) -> Record {
        Record {
            id: id.to_string(),
            pos: LatLon::new(lat, lon),
            population,
            display_name: id.to_string(),
            base_radius: 4.0,
            price: Some(1.0),
            changes: BTreeMap::new(),
        }
    }

    #[test]
    fn viewport_edge_is_inclusive() {
        let ds = Dataset::new(vec![
            record("edge", 10.0, 10.0, 100),
            record("inside", 5.0, 5.0, 200),
            record("outside", 20.0, 5.0, 300),
        ])
        .unwrap();
        let viewport = GeoBounds::new(0.0, 0.0, 10.0, 10.0);
        let hits = visible_records(&ds, viewport);
        let ids: Vec<&str> = hits.iter().map(|&i| ds.records()[i].id.as_str()).collect();
        assert_eq!(ids, vec!["inside", "edge"]);
    }

    #[test]
    fn boundary_filter_is_viewport_independent() {
        let ds = Dataset::new(vec![
            record("in", 5.0, 5.0, 100),
            record("out", 15.0, 5.0, 200),
        ])
        .unwrap();
        let boundary = Boundary::polygon(vec![
            LatLon::new(0.0, 0.0),
            LatLon::new(0.0, 10.0),
            LatLon::new(10.0, 10.0),
            LatLon::new(10.0, 0.0),
        ])
        .unwrap();
        let hits = records_in_boundary(&ds, &boundary);
        assert_eq!(hits.len(), 1);
        assert_eq!(ds.records()[hits[0]].id, "in");
    }
}
