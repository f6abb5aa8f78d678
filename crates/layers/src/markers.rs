use data::dataset::Dataset;
use data::horizon::Metric;
use data::record::Record;
use foundation::geo::LatLon;
use stats::Quintiles;

use crate::scale::{
    INTERACTIVE_MIN_ZOOM, SMALL_SET_LIMIT, fill_opacity, global_radius, local_radius,
};
use crate::symbology::band_color;

/// Everything the marker builder needs besides the records themselves.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderContext {
    pub metric: Metric,
    pub quintiles: Quintiles,
    pub zoom: f64,
    /// `None` in global mode; in local mode the visible population range
    /// driving relative sizing.
    pub pop_range: Option<(u32, u32)>,
    /// True when a drawn boundary is active, selecting the tighter radius
    /// range for small result sets.
    pub bounded: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    pub id: String,
    pub pos: LatLon,
    pub color: &'static str,
    pub radius: f64,
    pub opacity: f64,
    pub interactive: bool,
    pub label: String,
}

/// A complete marker layer, built off-screen and swapped in atomically by
/// the host so there is no intermediate empty frame.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MarkerLayer {
    pub markers: Vec<Marker>,
}

/// Builds markers for the given record indices, in layering order
/// (callers pass indices in dataset order, which is population
/// descending). Records with no value for the active metric are skipped.
pub fn build_marker_layer(dataset: &Dataset, indices: &[usize], ctx: &RenderContext) -> MarkerLayer {
    let interactive = ctx.zoom >= INTERACTIVE_MIN_ZOOM;
    let valued: Vec<(&Record, f64)> = indices
        .iter()
        .filter_map(|&index| {
            let record = dataset.get(index)?;
            let value = record.value(ctx.metric)?;
            Some((record, value))
        })
        .collect();
    // The tight radius range keys off how many markers actually render,
    // not how many records fell inside the boundary.
    let small_bounded = ctx.bounded && valued.len() < SMALL_SET_LIMIT;
    let mut markers = Vec::with_capacity(valued.len());
    for (record, value) in valued {
        let radius = match ctx.pop_range {
            Some(pop_range) => {
                local_radius(record.population, pop_range, ctx.zoom, small_bounded)
            }
            None => global_radius(record.base_radius, ctx.zoom),
        };
        markers.push(Marker {
            id: record.id.clone(),
            pos: record.pos,
            color: band_color(value, &ctx.quintiles),
            radius,
            opacity: fill_opacity(record.population, ctx.zoom),
            interactive,
            label: record.display_name.clone(),
        });
    }
    MarkerLayer { markers }
}
