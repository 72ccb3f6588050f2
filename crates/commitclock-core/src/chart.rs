//! Text bar chart.

pub const FILLED_MARKER: char = '█';
pub const EMPTY_MARKER: char = '░';

/// Bar width used in published reports.
pub const REPORT_BAR_WIDTH: usize = 21;

/// Render a percentage (0 to 100) as a bar of exactly `width` characters.
///
/// The filled length is `percent / 100 * width` rounded half away from zero,
/// so an exact half-marker is always drawn.
pub fn render_bar(percent: f64, width: usize) -> String {
    let filled = (percent / 100.0 * width as f64)
        .round()
        .clamp(0.0, width as f64) as usize;

    let mut bar = String::with_capacity(width * FILLED_MARKER.len_utf8());
    bar.extend(std::iter::repeat(FILLED_MARKER).take(filled));
    bar.extend(std::iter::repeat(EMPTY_MARKER).take(width - filled));
    bar
}
