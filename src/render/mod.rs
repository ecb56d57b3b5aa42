//! SVG rendering for the analysis results.
//!
//! These are the rendering collaborators the aggregators hand off to. Each
//! function draws one chart to an SVG file via plotters:
//!
//! - [`render_growth`] — per-sender cumulative message counts over time
//! - [`render_histogram`] — per-sender message frequency bars
//! - [`render_wordcloud`] — word frequencies laid out as a cloud
//!
//! The aggregators do not depend on anything here; rendering consumes their
//! output and never mutates it.

pub mod growth;
pub mod histogram;
pub mod wordcloud;

pub use growth::render_growth;
pub use histogram::render_histogram;
pub use wordcloud::render_wordcloud;

use plotters::style::RGBColor;

use crate::error::ChatvizError;
use crate::name::first_name;

/// Line/bar colors, cycled when a chart has more series than entries.
pub(crate) const SERIES_COLORS: [RGBColor; 10] = [
    RGBColor(31, 119, 180),
    RGBColor(255, 127, 14),
    RGBColor(44, 160, 44),
    RGBColor(214, 39, 40),
    RGBColor(148, 103, 189),
    RGBColor(140, 86, 75),
    RGBColor(227, 119, 194),
    RGBColor(127, 127, 127),
    RGBColor(188, 189, 34),
    RGBColor(23, 190, 207),
];

pub(crate) fn series_color(index: usize) -> RGBColor {
    SERIES_COLORS[index % SERIES_COLORS.len()]
}

/// Maps any plotters drawing error into [`ChatvizError::Render`].
pub(crate) fn draw_error(e: impl std::fmt::Display) -> ChatvizError {
    ChatvizError::Render(e.to_string())
}

/// The label to show for a sender, optionally shortened to the first name.
pub(crate) fn display_name(full: &str, shorten: bool) -> String {
    if shorten {
        first_name(full).to_string()
    } else {
        full.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_series_colors_cycle() {
        assert_eq!(series_color(0), series_color(SERIES_COLORS.len()));
        assert_ne!(series_color(0), series_color(1));
    }

    #[test]
    fn test_display_name_shortening() {
        assert_eq!(display_name("Jane Q. Doe", true), "Jane");
        assert_eq!(display_name("Jane Q. Doe", false), "Jane Q. Doe");
    }
}
