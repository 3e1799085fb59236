//! JSON export of resolved series.

use std::io::{BufWriter, Write};
use std::path::Path;

use rnd_provider::ResolvedSeries;
use tempfile::NamedTempFile;
use tracing::debug;

use crate::error::IoError;

/// Writes `series` to `path` as a pretty-printed JSON array.
///
/// Like [`write_results`](crate::write_results), output goes to a temporary
/// file in the destination directory and is moved into place when complete.
///
/// # Errors
///
/// Returns [`IoError::Json`] if serialisation fails and [`IoError::Io`] if
/// the file cannot be written or moved into place.
pub fn write_series_json(path: &Path, series: &[ResolvedSeries]) -> Result<(), IoError> {
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let tmp = NamedTempFile::new_in(dir).map_err(|e| IoError::io(path, e))?;

    let mut out = BufWriter::new(tmp);
    serde_json::to_writer_pretty(&mut out, series)?;
    out.write_all(b"\n").map_err(|e| IoError::io(path, e))?;
    let tmp = out.into_inner().map_err(|e| IoError::io(path, e.error()))?;
    tmp.persist(path).map_err(|e| IoError::io(path, e.error))?;

    debug!(path = %path.display(), series = series.len(), "wrote series json");
    Ok(())
}
