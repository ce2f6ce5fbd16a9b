//! Data-file writing shared by both output formats.

use crate::error::EmitError;
use crate::WRITE_BUFFER_SIZE;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use workload_engine::WorkloadKey;
use workload_types::Entry;

/// Write one `<key>,<value>` line per entry, flushing once at the end.
/// Returns the number of entries written.
pub(crate) fn write_data_file<T: WorkloadKey>(
    path: &Path,
    entries: &[Entry<T>],
) -> Result<u64, EmitError> {
    let file = File::create(path)?;
    let mut writer = BufWriter::with_capacity(WRITE_BUFFER_SIZE, file);

    for entry in entries {
        writeln!(writer, "{},{}", entry.key, entry.value)?;
    }
    writer.flush()?;

    Ok(entries.len() as u64)
}
