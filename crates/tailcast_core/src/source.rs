//! The engine's view of historical data retrieval.

use jiff::civil::Date;

use crate::error::SourceError;
use crate::model::{HistoricalSeries, PricePoint};

/// A provider of historical closing prices.
///
/// `fetch` returns the complete series for `asset` over the half-open
/// range `[start, end)`, or fails with the asset and range attached.
/// There is no partial-series handling, and retry policy belongs to
/// implementations, never to the engine.
pub trait PriceSource {
    fn fetch(&self, asset: &str, start: Date, end: Date) -> Result<HistoricalSeries, SourceError>;
}

/// In-memory source, mainly for tests and embedders.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    series: Vec<(String, HistoricalSeries)>,
}

impl MemorySource {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, asset: impl Into<String>, series: HistoricalSeries) {
        self.series.push((asset.into(), series));
    }
}

impl PriceSource for MemorySource {
    fn fetch(&self, asset: &str, start: Date, end: Date) -> Result<HistoricalSeries, SourceError> {
        let unavailable = |reason: String| SourceError::Unavailable {
            asset: asset.to_string(),
            start,
            end,
            reason,
        };

        let (_, series) = self
            .series
            .iter()
            .find(|(name, _)| name == asset)
            .ok_or_else(|| unavailable("unknown asset".to_string()))?;

        let points: Vec<PricePoint> = series
            .points()
            .iter()
            .copied()
            .filter(|p| p.date >= start && p.date < end)
            .collect();
        if points.is_empty() {
            return Err(unavailable("no data in range".to_string()));
        }

        // Filtering preserves the stored order, so this cannot fail.
        HistoricalSeries::new(points).map_err(|e| unavailable(e.to_string()))
    }
}
