use stats::Quintiles;

/// Fixed palette for the five quintile bands, darkest to brightest.
/// Band colors are discrete, never interpolated.
pub const BAND_COLORS: [&str; 5] = ["#000000", "#999999", "#dadfce", "#99ccff", "#0bb4ff"];

/// Hex color for a value against the active quintile cut points.
pub fn band_color(value: f64, quintiles: &Quintiles) -> &'static str {
    BAND_COLORS[quintiles.band(value)]
}
