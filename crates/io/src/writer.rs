//! CSV export of named result rows.

use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;
use tracing::debug;

use crate::error::IoError;

/// Text encoding of CSV output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TextEncoding {
    /// ISO-8859-1. Characters outside the range are written as `?`.
    #[default]
    Latin1,
    Utf8,
}

impl TextEncoding {
    fn encode(self, text: &str) -> Vec<u8> {
        match self {
            Self::Utf8 => text.as_bytes().to_vec(),
            Self::Latin1 => text
                .chars()
                .map(|c| u8::try_from(u32::from(c)).unwrap_or(b'?'))
                .collect(),
        }
    }
}

/// A result object whose fields can be looked up by column name.
pub trait ResultFields {
    /// Returns the formatted value of `column`, or `None` if the result has
    /// no such field.
    fn field(&self, column: &str) -> Option<String>;
}

/// Configuration for writing result rows to CSV.
#[derive(Debug, Clone)]
pub struct CsvConfig {
    delimiter: u8,
    encoding: TextEncoding,
}

impl Default for CsvConfig {
    fn default() -> Self {
        Self {
            delimiter: b',',
            encoding: TextEncoding::default(),
        }
    }
}

impl CsvConfig {
    /// Sets the field delimiter.
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Sets the text encoding.
    pub fn with_encoding(mut self, encoding: TextEncoding) -> Self {
        self.encoding = encoding;
        self
    }

    pub fn delimiter(&self) -> u8 {
        self.delimiter
    }

    pub fn encoding(&self) -> TextEncoding {
        self.encoding
    }

    /// Validates this configuration.
    ///
    /// # Errors
    ///
    /// Returns [`IoError::Validation`] if the delimiter is not ASCII, or is
    /// a quote or line break.
    fn validate(&self) -> Result<(), IoError> {
        if !self.delimiter.is_ascii() || matches!(self.delimiter, b'"' | b'\n' | b'\r') {
            return Err(IoError::Validation {
                details: format!("unusable delimiter 0x{:02x}", self.delimiter),
            });
        }
        Ok(())
    }
}

/// Writes one header row (`name` followed by `columns`) and one row per
/// `(name, result)` pair to `path`.
///
/// The file is written next to its destination under a temporary name and
/// moved into place once complete. On error the destination is untouched.
///
/// # Errors
///
/// Returns [`IoError::UnknownColumn`] if a result lacks a requested column,
/// [`IoError::Validation`] for an invalid configuration, and
/// [`IoError::Io`] or [`IoError::Csv`] when writing fails.
pub fn write_results<R: ResultFields>(
    path: &Path,
    rows: &[(String, R)],
    columns: &[&str],
    config: &CsvConfig,
) -> Result<(), IoError> {
    config.validate()?;

    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let tmp = NamedTempFile::new_in(dir).map_err(|e| IoError::io(path, e))?;

    let mut writer = csv::WriterBuilder::new()
        .delimiter(config.delimiter)
        .from_writer(tmp);

    let header = std::iter::once("name").chain(columns.iter().copied());
    writer.write_record(header.map(|h| config.encoding.encode(h)))?;

    for (name, result) in rows {
        let mut record = Vec::with_capacity(columns.len() + 1);
        record.push(config.encoding.encode(name));
        for column in columns {
            let value = result.field(column).ok_or_else(|| IoError::UnknownColumn {
                row: name.clone(),
                column: (*column).to_string(),
            })?;
            record.push(config.encoding.encode(&value));
        }
        writer.write_record(&record)?;
    }

    let mut tmp = writer.into_inner().map_err(|e| IoError::io(path, e.error()))?;
    tmp.flush().map_err(|e| IoError::io(path, e))?;
    tmp.persist(path).map_err(|e| IoError::io(path, e.error))?;

    debug!(path = %path.display(), rows = rows.len(), "wrote results");
    Ok(())
}
