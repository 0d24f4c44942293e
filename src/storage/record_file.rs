//! Budget record persistence
//!
//! A saved budget is a CSV file with one header row naming the nine fields and
//! one data row holding the raw text exactly as entered. Saving overwrites
//! the destination every time.

use std::ffi::OsString;
use std::fs::{self, File};
use std::io::{BufWriter, Read, Write};
use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::error::{BudgetError, BudgetResult};
use crate::models::{BudgetField, BudgetRecord};

/// Default file name for a saved budget
pub const DEFAULT_FILE_NAME: &str = "budget.csv";

/// Serialize a record as a header row plus one data row
pub fn write_record<W: Write>(record: &BudgetRecord, writer: W) -> BudgetResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record(BudgetField::ALL.iter().map(|f| f.label()))?;
    csv_writer.write_record(record.values().map(|(_, value)| value))?;
    csv_writer.flush()?;
    Ok(())
}

/// Save a record to `path`, replacing whatever was there
///
/// The data goes to a sibling temp file which is then renamed over the
/// destination, so a failed save leaves the previous file intact. Missing
/// parent directories are an error.
pub fn save_record<P: AsRef<Path>>(record: &BudgetRecord, path: P) -> BudgetResult<()> {
    let path = path.as_ref();
    let temp_path = temp_path_for(path);

    let result = write_temp(record, &temp_path).and_then(|()| {
        fs::rename(&temp_path, path)
            .map_err(|e| BudgetError::Io(format!("Failed to write {}: {}", path.display(), e)))
    });

    match &result {
        Ok(()) => info!(path = %path.display(), "budget saved"),
        Err(err) => {
            // Try to clean up temp file if anything failed
            let _ = fs::remove_file(&temp_path);
            warn!(path = %path.display(), "failed to save budget: {}", err);
        }
    }

    result
}

fn write_temp(record: &BudgetRecord, temp_path: &Path) -> BudgetResult<()> {
    let io_err = |e: std::io::Error| {
        BudgetError::Io(format!("Failed to write {}: {}", temp_path.display(), e))
    };

    let file = File::create(temp_path).map_err(io_err)?;
    let mut writer = BufWriter::new(file);
    write_record(record, &mut writer)?;
    writer.flush().map_err(io_err)?;
    writer.get_ref().sync_all().map_err(io_err)?;
    Ok(())
}

fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(".tmp");
    PathBuf::from(name)
}

/// Read a record back from any reader
pub fn read_record<R: Read>(reader: R) -> BudgetResult<BudgetRecord> {
    let mut csv_reader = csv::Reader::from_reader(reader);

    let headers = csv_reader.headers()?.clone();
    let expected: Vec<&str> = BudgetField::ALL.iter().map(|f| f.label()).collect();
    if headers.iter().collect::<Vec<_>>() != expected {
        return Err(BudgetError::Storage(format!(
            "Unexpected header row: expected {}",
            expected.join(",")
        )));
    }

    let mut rows = csv_reader.records();
    let row = rows
        .next()
        .ok_or_else(|| BudgetError::Storage("Saved budget has no data row".into()))??;
    if rows.next().is_some() {
        return Err(BudgetError::Storage(
            "Saved budget has more than one data row".into(),
        ));
    }

    let mut record = BudgetRecord::new();
    for (field, value) in BudgetField::ALL.into_iter().zip(row.iter()) {
        record.set(field, value);
    }
    Ok(record)
}

/// Load a record previously written by [`save_record`]
pub fn load_record<P: AsRef<Path>>(path: P) -> BudgetResult<BudgetRecord> {
    let path = path.as_ref();
    let file = File::open(path)
        .map_err(|e| BudgetError::Io(format!("Failed to open {}: {}", path.display(), e)))?;
    let record = read_record(file)?;
    info!(path = %path.display(), "budget loaded");
    Ok(record)
}
