//! # rnd-io
//!
//! Export of generated series: CSV reports of named result rows and JSON
//! dumps of resolved series. Every writer stages its output in a temporary
//! file next to the destination and persists it only once complete.

mod error;
mod json;
mod summary;
mod writer;

pub use error::IoError;
pub use json::write_series_json;
pub use summary::{SUMMARY_COLUMNS, SeriesSummary};
pub use writer::{CsvConfig, ResultFields, TextEncoding, write_results};
