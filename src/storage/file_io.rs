//! File I/O utilities
//!
//! JSON and CSV readers for record files, plus atomic JSON writes used when
//! creating the initial data files.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use csv::StringRecord;
use serde::{de::DeserializeOwned, Serialize};

use crate::error::SpendguardError;

/// Read JSON from a file, returning a default value if file doesn't exist
pub fn read_json<T, P>(path: P) -> Result<T, SpendguardError>
where
    T: DeserializeOwned + Default,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    if !path.exists() {
        return Ok(T::default());
    }

    read_json_required(path)
}

/// Read JSON from a file, returning an error if file doesn't exist
pub fn read_json_required<T, P>(path: P) -> Result<T, SpendguardError>
where
    T: DeserializeOwned,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    if !path.exists() {
        return Err(SpendguardError::file_not_found(path.display().to_string()));
    }

    let file = File::open(path).map_err(|e| {
        SpendguardError::Storage(format!("Failed to open {}: {}", path.display(), e))
    })?;

    let reader = BufReader::new(file);
    serde_json::from_reader(reader).map_err(|e| {
        SpendguardError::Storage(format!("Failed to parse {}: {}", path.display(), e))
    })
}

/// Read CSV rows from a file, matching header names case-insensitively
pub fn read_csv_required<T, P>(path: P) -> Result<Vec<T>, SpendguardError>
where
    T: DeserializeOwned,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    if !path.exists() {
        return Err(SpendguardError::file_not_found(path.display().to_string()));
    }

    let file = File::open(path).map_err(|e| {
        SpendguardError::Storage(format!("Failed to open {}: {}", path.display(), e))
    })?;

    read_csv(BufReader::new(file)).map_err(|e| {
        SpendguardError::Storage(format!("Failed to parse {}: {}", path.display(), e))
    })
}

/// Deserialize CSV rows from any reader
pub fn read_csv<T, R>(reader: R) -> Result<Vec<T>, SpendguardError>
where
    T: DeserializeOwned,
    R: Read,
{
    let mut reader = csv::ReaderBuilder::new().trim(csv::Trim::Headers).from_reader(reader);

    let headers: StringRecord = reader
        .headers()?
        .iter()
        .map(|h| h.to_lowercase())
        .collect();
    reader.set_headers(headers);

    reader
        .deserialize()
        .collect::<Result<Vec<T>, csv::Error>>()
        .map_err(SpendguardError::from)
}

/// Write JSON to a file atomically (write to temp, then rename)
///
/// The file is either completely written or not modified at all.
pub fn write_json_atomic<T, P>(path: P, data: &T) -> Result<(), SpendguardError>
where
    T: Serialize,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| {
            SpendguardError::Storage(format!(
                "Failed to create directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }

    // Same directory so the rename stays on one filesystem
    let temp_path = path.with_extension("json.tmp");

    let file = File::create(&temp_path)
        .map_err(|e| SpendguardError::Storage(format!("Failed to create temp file: {}", e)))?;

    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, data)
        .map_err(|e| SpendguardError::Storage(format!("Failed to serialize data: {}", e)))?;

    writer
        .flush()
        .map_err(|e| SpendguardError::Storage(format!("Failed to flush data: {}", e)))?;

    writer
        .get_ref()
        .sync_all()
        .map_err(|e| SpendguardError::Storage(format!("Failed to sync data: {}", e)))?;

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        SpendguardError::Storage(format!("Failed to rename temp file: {}", e))
    })?;

    Ok(())
}
