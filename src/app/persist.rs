use std::path::Path;

use tempfile::NamedTempFile;

use super::error::{AppError, Result};

fn map_csv_err(err: csv::Error) -> AppError {
    let msg = err.to_string();
    match err.into_kind() {
        csv::ErrorKind::Io(e) => AppError::Io(e),
        _ => AppError::Format(msg),
    }
}

/// Read a CSV file as raw rows. No header interpretation; every row is data.
///
/// Empty fields come back as empty strings. Rows with inconsistent field
/// counts are rejected (`AppError::Format`) rather than padded.
pub fn read_csv(path: &Path) -> Result<Vec<Vec<String>>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(false)
        .from_path(path)
        .map_err(map_csv_err)?;

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(map_csv_err)?;
        rows.push(record.iter().map(str::to_string).collect());
    }
    Ok(rows)
}

/// Write the full grid back as CSV: no header row, no index column.
///
/// Writes to a temp file in the target directory and renames it over
/// `path`, so a crash mid-write never leaves a truncated file behind.
pub fn write_csv_atomic(path: &Path, rows: &[Vec<String>]) -> Result<()> {
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let tmp = NamedTempFile::new_in(dir)?;

    let mut writer = csv::Writer::from_writer(tmp.as_file());
    for row in rows {
        writer.write_record(row).map_err(map_csv_err)?;
    }
    writer.flush()?;
    drop(writer);

    tmp.persist(path).map_err(|e| AppError::Io(e.error))?;
    Ok(())
}
