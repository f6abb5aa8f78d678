use data::dataset::Dataset;
use data::geometry::GeometrySet;
use data::horizon::Metric;
use foundation::geo::LatLon;
use stats::Quintiles;

use crate::scale::INTERACTIVE_MIN_ZOOM;
use crate::symbology::band_color;

/// Fill opacity for choropleth shapes. Flat, unlike bubble markers.
pub const SHAPE_FILL_OPACITY: f64 = 0.7;

#[derive(Debug, Clone, PartialEq)]
pub struct BoundaryShape {
    pub id: String,
    pub rings: Vec<Vec<LatLon>>,
    pub color: &'static str,
    pub fill_opacity: f64,
    /// Outlines appear only once the viewer is close enough to read them.
    pub outlined: bool,
    pub label: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct BoundaryLayer {
    pub shapes: Vec<BoundaryShape>,
}

/// Builds the choropleth layer for the given record indices from the
/// resident geometry tier. Features whose id has no record, records with
/// no value for the metric, and records with no feature in this tier are
/// all skipped.
pub fn build_boundary_layer(
    dataset: &Dataset,
    indices: &[usize],
    geometry: &GeometrySet,
    metric: Metric,
    quintiles: &Quintiles,
    zoom: f64,
) -> BoundaryLayer {
    let outlined = zoom >= INTERACTIVE_MIN_ZOOM;
    let mut shapes = Vec::new();
    for &index in indices {
        let Some(record) = dataset.get(index) else {
            continue;
        };
        let Some(value) = record.value(metric) else {
            continue;
        };
        let Some(feature) = geometry.feature(&record.id) else {
            continue;
        };
        shapes.push(BoundaryShape {
            id: record.id.clone(),
            rings: feature.rings.clone(),
            color: band_color(value, quintiles),
            fill_opacity: SHAPE_FILL_OPACITY,
            outlined,
            label: record.display_name.clone(),
        });
    }
    BoundaryLayer { shapes }
}
