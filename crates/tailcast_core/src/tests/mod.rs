mod risk;

use jiff::ToSpan;
use jiff::civil::date;

use crate::model::{HistoricalSeries, PricePoint};

/// Build a series of consecutive daily closes starting 2024-01-01.
fn daily_series(closes: &[f64]) -> HistoricalSeries {
    let start = date(2024, 1, 1);
    let points = closes
        .iter()
        .enumerate()
        .map(|(i, &close)| PricePoint {
            date: start.saturating_add((i as i64).days()),
            close,
        })
        .collect();
    HistoricalSeries::new(points).expect("dates are strictly increasing")
}
