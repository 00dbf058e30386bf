use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use log::info;

use crate::error::{Error, Result};
use crate::harness::benchmark::BenchmarkRecord;

/// Renders `records` as a pretty-printed JSON array.
pub fn to_json(records: &[BenchmarkRecord]) -> Result<String> {
    Ok(serde_json::to_string_pretty(records)?)
}

/// Writes `records` to `path` as a pretty-printed JSON array, replacing any existing file.
///
/// The file handle is closed on every return path.
///
/// # Errors
/// * `Error::SinkWrite` if the file cannot be created, written or flushed
/// * `Error::Serialize` if a record cannot be serialized
pub fn write_json(records: &[BenchmarkRecord], path: &Path) -> Result<()> {
    let sink_error = |source| Error::SinkWrite {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(sink_error)?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, records).map_err(|e| {
        if e.is_io() {
            sink_error(e.into())
        } else {
            Error::Serialize(e)
        }
    })?;
    writer.write_all(b"\n").map_err(sink_error)?;
    writer.flush().map_err(sink_error)?;

    info!("wrote {} records to {}", records.len(), path.display());
    Ok(())
}
