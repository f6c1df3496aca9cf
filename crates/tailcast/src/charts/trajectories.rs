//! Trajectory fan chart for simulated price paths.

use jiff::civil::Date;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    symbols,
    text::Span,
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType},
};
use tailcast_core::Forecast;

use crate::format::format_currency;

/// Paths drawn in the fan; more is visual noise at terminal resolution.
const MAX_DRAWN_PATHS: usize = 60;

pub fn render(frame: &mut Frame, area: Rect, asset: &str, initial_date: Date, forecast: &Forecast) {
    let paths = forecast.paths.paths();
    let horizon = forecast.paths.horizon_days();
    let start = forecast.paths.starting_price();

    let step = (paths.len() / MAX_DRAWN_PATHS).max(1);
    let drawn: Vec<Vec<(f64, f64)>> = paths
        .iter()
        .step_by(step)
        .take(MAX_DRAWN_PATHS)
        .map(|path| {
            path.iter()
                .enumerate()
                .map(|(day, &price)| (day as f64, price))
                .collect()
        })
        .collect();

    let mut min_y = f64::INFINITY;
    let mut max_y = f64::NEG_INFINITY;
    for series in &drawn {
        for &(_, y) in series {
            min_y = min_y.min(y);
            max_y = max_y.max(y);
        }
    }
    if !min_y.is_finite() || !max_y.is_finite() || min_y == max_y {
        // Degenerate (flat or empty) fan: give the axis some room
        min_y = start * 0.9;
        max_y = start * 1.1;
    }

    let datasets: Vec<Dataset> = drawn
        .iter()
        .map(|series| {
            let terminal = series.last().map_or(start, |&(_, y)| y);
            let color = if terminal >= start {
                Color::Green
            } else {
                Color::Red
            };
            Dataset::default()
                .marker(symbols::Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(color))
                .data(series)
        })
        .collect();

    let title = format!(
        " {asset}: {} simulated paths from {initial_date} ",
        forecast.paths.num_paths()
    );
    let chart = Chart::new(datasets)
        .block(Block::default().borders(Borders::ALL).title(title))
        .x_axis(
            Axis::default()
                .title("day")
                .bounds([0.0, horizon as f64])
                .labels(vec![
                    Span::raw("0"),
                    Span::raw(format!("{}", horizon / 2)),
                    Span::raw(format!("{horizon}")),
                ]),
        )
        .y_axis(
            Axis::default()
                .title("price")
                .bounds([min_y, max_y])
                .labels(vec![
                    Span::raw(format_currency(min_y)),
                    Span::raw(format_currency((min_y + max_y) / 2.0)),
                    Span::raw(format_currency(max_y)),
                ]),
        );

    frame.render_widget(chart, area);
}
