use crate::error::{AquaplanError, Result};
use crate::models::FieldRecord;
use std::fs::File;
use std::path::Path;

/// Load a field snapshot from disk, dispatching on the file extension.
///
/// JSON snapshots are an array of field records; CSV snapshots are
/// headered with one record per row. Missing attributes are
/// deserialization errors, never silently defaulted.
pub fn load(path: &Path) -> Result<Vec<FieldRecord>> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or_default();

    match ext {
        "json" => from_json(path),
        "csv" => from_csv(path),
        other => Err(AquaplanError::UnsupportedFormat(other.to_string())),
    }
}

fn from_json(path: &Path) -> Result<Vec<FieldRecord>> {
    let file = File::open(path)?;
    let records = serde_json::from_reader(file)?;
    Ok(records)
}

fn from_csv(path: &Path) -> Result<Vec<FieldRecord>> {
    let file = File::open(path)?;
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(file);

    let mut records = Vec::new();
    for result in reader.deserialize() {
        let record: FieldRecord = result?;
        records.push(record);
    }
    Ok(records)
}
