//! Per-series summary statistics for tabular reports.

use rnd_provider::ResolvedSeries;

use crate::writer::ResultFields;

/// Columns reported by [`SeriesSummary`], in report order.
pub const SUMMARY_COLUMNS: [&str; 7] = ["frequency", "start", "length", "mean", "sd", "min", "max"];

/// Descriptive statistics of one resolved series.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesSummary {
    pub frequency: u16,
    /// First period, e.g. `2000-01`.
    pub start: String,
    pub length: usize,
    pub mean: f64,
    /// Sample standard deviation; `NaN` for fewer than two values.
    pub sd: f64,
    pub min: f64,
    pub max: f64,
}

impl SeriesSummary {
    pub fn from_series(series: &ResolvedSeries) -> Self {
        let values = &series.values;
        let n = values.len();
        let mean = if n == 0 {
            f64::NAN
        } else {
            values.iter().sum::<f64>() / n as f64
        };
        let sd = if n < 2 {
            f64::NAN
        } else {
            let ss: f64 = values.iter().map(|v| (v - mean).powi(2)).sum();
            (ss / (n - 1) as f64).sqrt()
        };
        Self {
            frequency: series.frequency.periods_per_year(),
            start: series.start.to_string(),
            length: n,
            mean,
            sd,
            min: values.iter().copied().fold(f64::NAN, f64::min),
            max: values.iter().copied().fold(f64::NAN, f64::max),
        }
    }
}

impl ResultFields for SeriesSummary {
    fn field(&self, column: &str) -> Option<String> {
        let value = match column {
            "frequency" => self.frequency.to_string(),
            "start" => self.start.clone(),
            "length" => self.length.to_string(),
            "mean" => self.mean.to_string(),
            "sd" => self.sd.to_string(),
            "min" => self.min.to_string(),
            "max" => self.max.to_string(),
            _ => return None,
        };
        Some(value)
    }
}
