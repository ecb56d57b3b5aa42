//! Frequency histogram: one bar per sender.

use std::collections::HashMap;
use std::path::Path;

use plotters::prelude::*;

use crate::error::{ChatvizError, Result};

use super::{display_name, draw_error, series_color};

/// Draws the per-sender message-frequency bar chart to `out` as SVG.
///
/// The frequency mapping itself is unordered, so bars are arranged by
/// descending count with ties broken by name to keep the chart
/// deterministic.
///
/// Fails with [`Usage`](ChatvizError::Usage) when the mapping is empty.
pub fn render_histogram(
    title: &str,
    frequencies: &HashMap<String, u64>,
    first_names: bool,
    out: &Path,
) -> Result<()> {
    let mut entries: Vec<(String, u64)> = frequencies
        .iter()
        .map(|(sender, count)| (sender.clone(), *count))
        .collect();
    entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));

    if entries.is_empty() {
        return Err(ChatvizError::Usage("no messages to plot".into()));
    }

    let labels: Vec<String> = entries
        .iter()
        .map(|(sender, _)| display_name(sender, first_names))
        .collect();
    let max = entries.iter().map(|&(_, count)| count).max().unwrap_or(1);
    let n = entries.len() as i32;

    let root = SVGBackend::new(out, (1000, 600)).into_drawing_area();
    root.fill(&WHITE).map_err(draw_error)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(format!("{title} Message Frequency"), ("sans-serif", 28))
        .margin(16)
        .x_label_area_size(48)
        .y_label_area_size(56)
        .build_cartesian_2d(0i32..n, 0u64..max + max / 10 + 1)
        .map_err(draw_error)?;

    chart
        .configure_mesh()
        .x_desc("Members")
        .y_desc("Frequency")
        .x_labels(entries.len())
        .x_label_formatter(&|x| labels.get(*x as usize).cloned().unwrap_or_default())
        .disable_x_mesh()
        .draw()
        .map_err(draw_error)?;

    chart
        .draw_series(entries.iter().enumerate().map(|(i, &(_, count))| {
            Rectangle::new([(i as i32, 0), (i as i32 + 1, count)], series_color(i).filled())
        }))
        .map_err(draw_error)?;

    root.present().map_err(draw_error)?;
    Ok(())
}
