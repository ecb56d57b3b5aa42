//! Growth-curve chart: one line per sender, cumulative count over time.

use std::path::Path;

use chrono::{DateTime, Duration, Utc};
use plotters::prelude::*;

use crate::analysis::GrowthSeries;
use crate::error::{ChatvizError, Result};

use super::{display_name, draw_error, series_color};

/// Draws the chat-growth line chart to `out` as SVG.
///
/// The x-axis spans the earliest to the latest timestamp across all series;
/// each sender's line climbs one step per message. The legend sits in the
/// upper left, optionally with senders shortened to first names.
///
/// Fails with [`Usage`](ChatvizError::Usage) when there is nothing to plot.
pub fn render_growth(
    title: &str,
    series: &[GrowthSeries],
    first_names: bool,
    out: &Path,
) -> Result<()> {
    let mut start: Option<DateTime<Utc>> = None;
    let mut end: Option<DateTime<Utc>> = None;
    let mut max_count = 0u64;
    for s in series {
        if let (Some(first), Some(last)) = (s.timestamps.first(), s.timestamps.last()) {
            start = Some(start.map_or(*first, |v| v.min(*first)));
            end = Some(end.map_or(*last, |v| v.max(*last)));
        }
        max_count = max_count.max(s.len() as u64);
    }
    let (Some(start), Some(mut end)) = (start, end) else {
        return Err(ChatvizError::Usage(
            "no timestamped messages to plot".into(),
        ));
    };
    // A degenerate range breaks the axis; widen single-instant chats.
    if start == end {
        end = end + Duration::seconds(1);
    }

    let root = SVGBackend::new(out, (1000, 600)).into_drawing_area();
    root.fill(&WHITE).map_err(draw_error)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(format!("{title} Chat Growth"), ("sans-serif", 28))
        .margin(16)
        .x_label_area_size(48)
        .y_label_area_size(56)
        .build_cartesian_2d(start..end, 0u64..max_count + 1)
        .map_err(draw_error)?;

    chart
        .configure_mesh()
        .x_desc("Date")
        .y_desc("Number of Messages")
        .draw()
        .map_err(draw_error)?;

    for (i, s) in series.iter().enumerate() {
        let color = series_color(i);
        chart
            .draw_series(LineSeries::new(s.points(), &color))
            .map_err(draw_error)?
            .label(display_name(&s.sender, first_names))
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 18, y)], color));
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperLeft)
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()
        .map_err(draw_error)?;

    root.present().map_err(draw_error)?;
    Ok(())
}
