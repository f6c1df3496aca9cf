//! CSV-backed price source.
//!
//! The offline stand-in for a market-data download: a local CSV of
//! `date,close` rows holding the asset's adjusted closing prices. An
//! optional header line is skipped, rows are sorted by date after parsing,
//! and duplicate dates are rejected when a range is fetched.

use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use jiff::civil::Date;
use tailcast_core::error::SourceError;
use tailcast_core::model::{HistoricalSeries, PricePoint};
use tailcast_core::source::PriceSource;

#[derive(Debug)]
pub enum CsvError {
    Io(PathBuf, io::Error),
    Malformed {
        path: PathBuf,
        line: usize,
        reason: String,
    },
}

impl fmt::Display for CsvError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CsvError::Io(path, e) => write!(f, "cannot read {}: {e}", path.display()),
            CsvError::Malformed { path, line, reason } => {
                write!(f, "{}:{line}: {reason}", path.display())
            }
        }
    }
}

impl std::error::Error for CsvError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CsvError::Io(_, e) => Some(e),
            CsvError::Malformed { .. } => None,
        }
    }
}

/// Historical closes loaded from a single-asset CSV file.
#[derive(Debug)]
pub struct CsvSource {
    path: PathBuf,
    points: Vec<PricePoint>,
}

impl CsvSource {
    /// Load and parse the whole file up front.
    pub fn open(path: &Path) -> Result<Self, CsvError> {
        let text = fs::read_to_string(path).map_err(|e| CsvError::Io(path.to_path_buf(), e))?;

        let malformed = |line: usize, reason: String| CsvError::Malformed {
            path: path.to_path_buf(),
            line,
            reason,
        };

        let mut points = Vec::new();
        for (idx, raw) in text.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() {
                continue;
            }
            // Header row: a first line that does not start with a digit
            if idx == 0 && !line.starts_with(|c: char| c.is_ascii_digit()) {
                continue;
            }

            let (date_str, close_str) = line
                .split_once(',')
                .ok_or_else(|| malformed(idx + 1, "expected `date,close`".to_string()))?;
            let date: Date = date_str
                .trim()
                .parse()
                .map_err(|e: jiff::Error| malformed(idx + 1, e.to_string()))?;
            let close: f64 = close_str
                .trim()
                .parse()
                .map_err(|e: std::num::ParseFloatError| malformed(idx + 1, e.to_string()))?;

            points.push(PricePoint { date, close });
        }

        points.sort_by_key(|p| p.date);

        Ok(Self {
            path: path.to_path_buf(),
            points,
        })
    }
}

impl PriceSource for CsvSource {
    fn fetch(&self, asset: &str, start: Date, end: Date) -> Result<HistoricalSeries, SourceError> {
        let unavailable = |reason: String| SourceError::Unavailable {
            asset: asset.to_string(),
            start,
            end,
            reason,
        };

        let in_range: Vec<PricePoint> = self
            .points
            .iter()
            .copied()
            .filter(|p| p.date >= start && p.date < end)
            .collect();
        if in_range.is_empty() {
            return Err(unavailable(format!(
                "no rows in range in {}",
                self.path.display()
            )));
        }

        HistoricalSeries::new(in_range).map_err(|e| unavailable(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    use jiff::civil::date;
    use tempfile::NamedTempFile;

    fn write_csv(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn parses_rows_and_skips_header() {
        let file = write_csv("date,close\n2024-01-02,185.64\n2024-01-03,184.25\n");
        let source = CsvSource::open(file.path()).unwrap();

        let series = source
            .fetch("AAPL", date(2024, 1, 1), date(2024, 2, 1))
            .unwrap();
        assert_eq!(series.len(), 2);
        assert_eq!(series.last_close(), Some(184.25));
    }

    #[test]
    fn fetch_range_is_half_open() {
        let file = write_csv("2024-01-02,10.0\n2024-01-03,11.0\n2024-01-04,12.0\n");
        let source = CsvSource::open(file.path()).unwrap();

        let series = source
            .fetch("AAPL", date(2024, 1, 2), date(2024, 1, 4))
            .unwrap();
        assert_eq!(series.len(), 2);
    }

    #[test]
    fn unsorted_rows_are_sorted_on_load() {
        let file = write_csv("2024-01-04,12.0\n2024-01-02,10.0\n2024-01-03,11.0\n");
        let source = CsvSource::open(file.path()).unwrap();

        let series = source
            .fetch("AAPL", date(2024, 1, 1), date(2024, 2, 1))
            .unwrap();
        assert_eq!(series.closes(), vec![10.0, 11.0, 12.0]);
    }

    #[test]
    fn duplicate_dates_fail_at_fetch() {
        let file = write_csv("2024-01-02,10.0\n2024-01-02,11.0\n");
        let source = CsvSource::open(file.path()).unwrap();

        let err = source
            .fetch("AAPL", date(2024, 1, 1), date(2024, 2, 1))
            .unwrap_err();
        assert!(err.to_string().contains("AAPL"));
    }

    #[test]
    fn malformed_row_reports_line_number() {
        let file = write_csv("2024-01-02,10.0\nnot-a-row\n");
        let err = CsvSource::open(file.path()).unwrap_err();
        assert!(err.to_string().contains(":2:"));
    }

    #[test]
    fn empty_range_is_unavailable() {
        let file = write_csv("2024-01-02,10.0\n");
        let source = CsvSource::open(file.path()).unwrap();

        let err = source
            .fetch("AAPL", date(2030, 1, 1), date(2030, 2, 1))
            .unwrap_err();
        assert!(err.to_string().contains("no rows in range"));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = CsvSource::open(Path::new("/nonexistent/prices.csv")).unwrap_err();
        assert!(matches!(err, CsvError::Io(..)));
    }
}
