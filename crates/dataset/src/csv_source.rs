use std::io::Read;
use std::path::{Path, PathBuf};

use crate::observation::Observation;
use crate::store::{LoadError, ObservationSource};

/// CSV-backed observation source.
///
/// The source is tabular with a header row carrying at least the contract
/// columns (`location, latitude, longitude, furColor, activities,
/// interaction`). Any row that fails to deserialize makes the whole load
/// fail; the dataset is load-once and a corrupt source blocks startup.
#[derive(Debug, Clone)]
pub struct CsvFile {
    path: PathBuf,
}

impl CsvFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ObservationSource for CsvFile {
    fn load(&self) -> Result<Vec<Observation>, LoadError> {
        let file = std::fs::File::open(&self.path)
            .map_err(|e| LoadError::Io(format!("{}: {e}", self.path.display())))?;
        read_observations(file)
    }
}

/// Reads observation rows from any CSV byte stream.
pub fn read_observations(reader: impl Read) -> Result<Vec<Observation>, LoadError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::Headers)
        .from_reader(reader);

    let mut rows = Vec::new();
    for result in csv_reader.deserialize::<Observation>() {
        match result {
            Ok(row) => rows.push(row),
            Err(e) => {
                let record = e.position().map(|p| p.record()).unwrap_or(0);
                return Err(LoadError::Malformed {
                    record,
                    reason: e.to_string(),
                });
            }
        }
    }
    Ok(rows)
}
