//! Terminal-price histogram with tail-risk annotations.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use tailcast_core::Forecast;

use crate::format::format_currency;

/// Block characters for sub-character precision (from empty to full)
const BIN_CHARS: [&str; 9] = [" ", "▁", "▂", "▃", "▄", "▅", "▆", "▇", "█"];

pub fn render(frame: &mut Frame, area: Rect, forecast: &Forecast) {
    let report = &forecast.report;
    let block = Block::default().borders(Borders::ALL).title(format!(
        " Terminal price distribution ({:.0}% confidence) ",
        report.confidence_level
    ));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let prices = &forecast.terminal_prices;
    if prices.is_empty() || inner.height < 6 || inner.width < 30 {
        let msg = Paragraph::new("Area too small").style(Style::default().fg(Color::DarkGray));
        frame.render_widget(msg, inner);
        return;
    }

    // Bottom rows hold the axis bounds and the VaR/CVaR/mean annotations
    let height = (inner.height as usize).saturating_sub(3);
    let num_bins = (inner.width as usize).max(10);

    let min_p = prices.iter().copied().fold(f64::INFINITY, f64::min);
    let max_p = prices.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let range = (max_p - min_p).max(1e-9);
    let bin_width = range / num_bins as f64;

    let mut bin_counts = vec![0usize; num_bins];
    for &price in prices {
        let bin = (((price - min_p) / bin_width).floor() as usize).min(num_bins - 1);
        bin_counts[bin] += 1;
    }
    let max_count = *bin_counts.iter().max().unwrap_or(&1);

    let height_units = height * 8;
    let bar_heights: Vec<usize> = bin_counts
        .iter()
        .map(|&count| ((count as f64 / max_count as f64) * height_units as f64).round() as usize)
        .collect();

    for row in 0..height {
        let row_base = (height - 1 - row) * 8;
        let row_top = row_base + 8;
        let mut spans = Vec::with_capacity(num_bins);

        for (i, &bar_h) in bar_heights.iter().enumerate() {
            let x = min_p + (i as f64 + 0.5) * bin_width;

            // Color by tail region: CVaR tail, VaR tail, then the body
            let color = if x <= report.price_at_cvar {
                Color::Red
            } else if x <= report.price_at_var {
                Color::Yellow
            } else {
                Color::Cyan
            };

            let cell = if bar_h >= row_top {
                "█"
            } else if bar_h > row_base {
                BIN_CHARS[(bar_h - row_base).min(8)]
            } else {
                " "
            };

            spans.push(Span::styled(cell, Style::default().fg(color)));
        }

        let row_area = Rect::new(inner.x, inner.y + row as u16, inner.width, 1);
        frame.render_widget(Paragraph::new(Line::from(spans)), row_area);
    }

    let axis = Line::from(vec![
        Span::styled(
            format!("{:<14}", format_currency(min_p)),
            Style::default().fg(Color::DarkGray),
        ),
        Span::raw(" ".repeat((inner.width as usize).saturating_sub(28))),
        Span::styled(
            format!("{:>14}", format_currency(max_p)),
            Style::default().fg(Color::DarkGray),
        ),
    ]);
    frame.render_widget(
        Paragraph::new(axis),
        Rect::new(inner.x, inner.y + height as u16, inner.width, 1),
    );

    let tail_line = Line::from(vec![
        Span::styled(
            "VaR  ",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(format!(
            "price {}  loss {}",
            format_currency(report.price_at_var),
            format_currency(report.value_at_risk)
        )),
        Span::raw("    "),
        Span::styled(
            "CVaR ",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
        Span::raw(format!(
            "price {}  loss {}",
            format_currency(report.price_at_cvar),
            format_currency(report.conditional_value_at_risk)
        )),
    ]);
    frame.render_widget(
        Paragraph::new(tail_line),
        Rect::new(inner.x, inner.y + height as u16 + 1, inner.width, 1),
    );

    let mean_line = Line::from(vec![
        Span::styled("Mean ", Style::default().add_modifier(Modifier::BOLD)),
        Span::raw(format!(
            "price {}  loss {}",
            format_currency(report.mean_price),
            format_currency(report.mean_loss)
        )),
    ]);
    frame.render_widget(
        Paragraph::new(mean_line),
        Rect::new(inner.x, inner.y + height as u16 + 2, inner.width, 1),
    );
}
