/// Markers become hoverable and clickable at this zoom and above; below
/// it they render as inert shapes.
pub const INTERACTIVE_MIN_ZOOM: f64 = 8.0;

/// Relative-radius pixel range used in local mode.
pub const LOCAL_RADIUS_RANGE: (f64, f64) = (5.0, 25.0);

/// Tighter pixel range used when a drawn boundary is active and the
/// result set is small, so a handful of markers do not span wildly.
pub const BOUNDED_SMALL_RADIUS_RANGE: (f64, f64) = (10.0, 22.0);

/// Result sets at or above this size use the full local radius range.
pub const SMALL_SET_LIMIT: usize = 10;

/// Zoom-indexed multiplier applied to the precomputed base radius in
/// global mode. Rows are (inclusive max zoom, multiplier); zooms past the
/// last row stay at `GLOBAL_ZOOM_SCALE_DEFAULT` until
/// `GLOBAL_ZOOM_SCALE_HIGH_MIN`, where `GLOBAL_ZOOM_SCALE_HIGH` takes over.
pub const GLOBAL_ZOOM_SCALE: [(f64, f64); 6] = [
    (1.0, 0.02),
    (2.0, 0.05),
    (3.0, 0.15),
    (4.0, 0.3),
    (5.0, 0.5),
    (6.0, 0.8),
];
pub const GLOBAL_ZOOM_SCALE_HIGH: f64 = 1.5;
pub const GLOBAL_ZOOM_SCALE_HIGH_MIN: f64 = 9.0;
pub const GLOBAL_ZOOM_SCALE_DEFAULT: f64 = 1.0;

/// Zoom multiplier stacked on top of the relative radius in local mode.
pub const LOCAL_ZOOM_SCALE: [(f64, f64); 2] = [(3.0, 0.5), (5.0, 0.7)];
pub const LOCAL_ZOOM_SCALE_HIGH: f64 = 1.3;
pub const LOCAL_ZOOM_SCALE_HIGH_MIN: f64 = 9.0;
pub const LOCAL_ZOOM_SCALE_DEFAULT: f64 = 1.0;

fn global_zoom_multiplier(zoom: f64) -> f64 {
    for &(max_zoom, multiplier) in &GLOBAL_ZOOM_SCALE {
        if zoom <= max_zoom {
            return multiplier;
        }
    }
    if zoom >= GLOBAL_ZOOM_SCALE_HIGH_MIN {
        GLOBAL_ZOOM_SCALE_HIGH
    } else {
        GLOBAL_ZOOM_SCALE_DEFAULT
    }
}

fn local_zoom_multiplier(zoom: f64) -> f64 {
    for &(max_zoom, multiplier) in &LOCAL_ZOOM_SCALE {
        if zoom <= max_zoom {
            return multiplier;
        }
    }
    if zoom >= LOCAL_ZOOM_SCALE_HIGH_MIN {
        LOCAL_ZOOM_SCALE_HIGH
    } else {
        LOCAL_ZOOM_SCALE_DEFAULT
    }
}

/// Marker radius in global mode: the precomputed population-tier radius
/// scaled by the zoom multiplier table.
pub fn global_radius(base_radius: f64, zoom: f64) -> f64 {
    base_radius * global_zoom_multiplier(zoom)
}

/// Marker radius in local mode: linear position of this record's
/// population within the visible population range, mapped onto a pixel
/// range and scaled by the local zoom multiplier.
///
/// `small_bounded` selects the tighter pixel range for small drawn-boundary
/// result sets. A degenerate population range puts every marker at the
/// middle of the pixel range.
pub fn local_radius(
    population: u32,
    pop_range: (u32, u32),
    zoom: f64,
    small_bounded: bool,
) -> f64 {
    let (min_px, max_px) = if small_bounded {
        BOUNDED_SMALL_RADIUS_RANGE
    } else {
        LOCAL_RADIUS_RANGE
    };
    let (pop_min, pop_max) = pop_range;
    let t = if pop_max > pop_min {
        (population.saturating_sub(pop_min)) as f64 / (pop_max - pop_min) as f64
    } else {
        0.5
    };
    let t = t.clamp(0.0, 1.0);
    (min_px + t * (max_px - min_px)) * local_zoom_multiplier(zoom)
}

/// One row of the opacity policy: markers at or below `max_zoom` with a
/// population strictly below `max_population` get `opacity`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct OpacityRow {
    pub max_zoom: f64,
    pub max_population: u32,
    pub opacity: f64,
}

pub const DEFAULT_OPACITY: f64 = 0.8;

/// Zoom- and population-banded fill opacity. Rows are checked in order;
/// the first row whose zoom band matches and whose population cap admits
/// the record wins. Purely cosmetic, but reproduced exactly.
pub const OPACITY_TABLE: [OpacityRow; 12] = [
    OpacityRow { max_zoom: 1.0, max_population: u32::MAX, opacity: 0.4 },
    OpacityRow { max_zoom: 2.0, max_population: 50_000, opacity: 0.3 },
    OpacityRow { max_zoom: 2.0, max_population: 75_000, opacity: 0.4 },
    OpacityRow { max_zoom: 2.0, max_population: u32::MAX, opacity: 0.5 },
    OpacityRow { max_zoom: 3.0, max_population: 30_000, opacity: 0.4 },
    OpacityRow { max_zoom: 3.0, max_population: 50_000, opacity: 0.6 },
    OpacityRow { max_zoom: 3.0, max_population: u32::MAX, opacity: 0.75 },
    OpacityRow { max_zoom: 4.0, max_population: 20_000, opacity: 0.5 },
    OpacityRow { max_zoom: 4.0, max_population: 50_000, opacity: 0.7 },
    OpacityRow { max_zoom: 5.0, max_population: 5_000, opacity: 0.4 },
    OpacityRow { max_zoom: 5.0, max_population: 15_000, opacity: 0.6 },
    OpacityRow { max_zoom: 5.0, max_population: 30_000, opacity: 0.7 },
];

pub fn fill_opacity(population: u32, zoom: f64) -> f64 {
    let mut band_floor = f64::NEG_INFINITY;
    for row in &OPACITY_TABLE {
        if zoom <= row.max_zoom && zoom > band_floor && population < row.max_population {
            return row.opacity;
        }
        if row.max_zoom > band_floor && zoom > row.max_zoom {
            band_floor = row.max_zoom;
        }
    }
    DEFAULT_OPACITY
}

#[cfg(test)]
mod tests {
    use super::{
        DEFAULT_OPACITY, INTERACTIVE_MIN_ZOOM, fill_opacity, global_radius, local_radius,
    };

    #[test]
    fn global_radius_follows_the_zoom_table() {
        assert_eq!(global_radius(10.0, 1.0), 0.2);
        assert_eq!(global_radius(10.0, 4.0), 3.0);
        assert_eq!(global_radius(10.0, 7.0), 10.0);
        assert_eq!(global_radius(10.0, 8.0), 10.0);
        assert_eq!(global_radius(10.0, 8.5), 10.0);
        assert_eq!(global_radius(10.0, 9.0), 15.0);
    }

    #[test]
    fn local_radius_spans_full_range() {
        let range = (1_000, 50_000);
        assert_eq!(local_radius(1_000, range, 7.0, false), 5.0);
        assert_eq!(local_radius(50_000, range, 7.0, false), 25.0);
        let mid = local_radius(25_500, range, 7.0, false);
        assert!(mid > 5.0 && mid < 25.0);
    }

    #[test]
    fn local_radius_degenerate_range_uses_midpoint() {
        assert_eq!(local_radius(500, (500, 500), 7.0, false), 15.0);
    }

    #[test]
    fn small_bounded_sets_use_the_tight_range() {
        assert_eq!(local_radius(1_000, (1_000, 50_000), 7.0, true), 10.0);
        assert_eq!(local_radius(50_000, (1_000, 50_000), 7.0, true), 22.0);
    }

    #[test]
    fn local_radius_applies_zoom_multiplier() {
        assert_eq!(local_radius(50_000, (1_000, 50_000), 3.0, false), 12.5);
        assert_eq!(local_radius(50_000, (1_000, 50_000), 9.0, false), 32.5);
    }

    #[test]
    fn opacity_bands_by_zoom_and_population() {
        assert_eq!(fill_opacity(1_000_000, 0.5), 0.4);
        assert_eq!(fill_opacity(10_000, 2.0), 0.3);
        assert_eq!(fill_opacity(60_000, 2.0), 0.4);
        assert_eq!(fill_opacity(90_000, 2.0), 0.5);
        assert_eq!(fill_opacity(10_000, 3.0), 0.4);
        assert_eq!(fill_opacity(40_000, 3.0), 0.6);
        assert_eq!(fill_opacity(80_000, 3.0), 0.75);
        assert_eq!(fill_opacity(10_000, 4.0), 0.5);
        assert_eq!(fill_opacity(30_000, 4.0), 0.7);
        assert_eq!(fill_opacity(80_000, 4.0), DEFAULT_OPACITY);
        assert_eq!(fill_opacity(4_000, 5.0), 0.4);
        assert_eq!(fill_opacity(10_000, 5.0), 0.6);
        assert_eq!(fill_opacity(20_000, 5.0), 0.7);
        assert_eq!(fill_opacity(80_000, 5.0), DEFAULT_OPACITY);
        assert_eq!(fill_opacity(1_000, 6.0), DEFAULT_OPACITY);
    }

    #[test]
    fn interactivity_threshold_is_eight() {
        assert!(7.9 < INTERACTIVE_MIN_ZOOM);
        assert!(8.0 >= INTERACTIVE_MIN_ZOOM);
    }
}
