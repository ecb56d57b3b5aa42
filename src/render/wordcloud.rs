//! Word-cloud rendering: words sized by frequency, packed into rows.

use std::path::Path;

use plotters::prelude::*;

use crate::error::{ChatvizError, Result};

use super::{draw_error, series_color};

/// Canvas size in pixels.
const CANVAS: (u32, u32) = (800, 400);

/// Horizontal margin on each side.
const MARGIN: i32 = 20;

/// Smallest and largest font sizes used for words.
const MIN_FONT: f64 = 14.0;
const MAX_FONT: f64 = 52.0;

/// Draws a word cloud to `out` as SVG.
///
/// `words` must be sorted by descending count (as
/// [`word_frequencies`](crate::analysis::word_frequencies) produces).
/// Font size scales with the square root of the count between [`MIN_FONT`]
/// and [`MAX_FONT`]; words are packed left-to-right into rows and drawing
/// stops when the canvas is full.
///
/// Fails with [`Usage`](ChatvizError::Usage) when there are no words.
pub fn render_wordcloud(title: &str, words: &[(String, u64)], out: &Path) -> Result<()> {
    if words.is_empty() {
        return Err(ChatvizError::Usage("no words to draw".into()));
    }

    let root = SVGBackend::new(out, CANVAS).into_drawing_area();
    root.fill(&WHITE).map_err(draw_error)?;
    root.draw(&Text::new(
        title.to_string(),
        (MARGIN, 12),
        ("sans-serif", 22).into_font().color(&BLACK),
    ))
    .map_err(draw_error)?;

    let max = words.first().map_or(1, |w| w.1) as f64;
    let min = words.last().map_or(1, |w| w.1) as f64;
    let right_edge = CANVAS.0 as i32 - MARGIN;
    let bottom_edge = CANVAS.1 as i32 - 10;

    let mut x = MARGIN;
    let mut y = 52;
    let mut row_height = 0;
    for (i, (word, count)) in words.iter().enumerate() {
        let size = font_size(*count as f64, min, max);
        // Rough glyph-width estimate; SVG lays the text out itself.
        let width = (word.chars().count() as f64 * f64::from(size) * 0.62) as i32 + 12;

        if x > MARGIN && x + width > right_edge {
            x = MARGIN;
            y += row_height + 10;
            row_height = 0;
        }
        if y + size > bottom_edge {
            break;
        }

        root.draw(&Text::new(
            word.clone(),
            (x, y),
            ("sans-serif", size).into_font().color(&series_color(i)),
        ))
        .map_err(draw_error)?;

        row_height = row_height.max(size);
        x += width;
    }

    root.present().map_err(draw_error)?;
    Ok(())
}

/// Scales a count into a font size, square-root weighted so mid-frequency
/// words stay legible.
fn font_size(count: f64, min: f64, max: f64) -> i32 {
    if max <= min {
        return 28;
    }
    let t = ((count - min) / (max - min)).sqrt();
    (MIN_FONT + t * (MAX_FONT - MIN_FONT)).round() as i32
}
