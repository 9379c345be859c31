//! The immutable launch table and its load-time derived values.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use super::checksum::records_checksum;
use super::error::{LoadError, LoadResult};
use super::loader::parse_launch_csv;
use crate::models::LaunchRecord;

/// Launch records loaded once at startup.
///
/// Besides the records themselves the table exposes the values the dashboard
/// controls are built from: the payload bounds and the distinct launch sites
/// in order of first appearance.
#[derive(Debug, Clone)]
pub struct Dataset {
    records: Vec<LaunchRecord>,
    distinct_sites: Vec<String>,
    min_payload: f64,
    max_payload: f64,
    checksum: String,
    source: Option<PathBuf>,
}

impl Dataset {
    /// Load the dataset from a CSV file.
    pub fn load<P: AsRef<Path>>(path: P) -> LoadResult<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let mut dataset = Self::from_reader(BufReader::new(file))?;
        dataset.source = Some(path.to_path_buf());

        log::info!(
            "Loaded {} launch records from {} ({} sites, payload {}..={} kg)",
            dataset.len(),
            path.display(),
            dataset.distinct_sites.len(),
            dataset.min_payload,
            dataset.max_payload
        );

        Ok(dataset)
    }

    /// Parse the dataset from any CSV source.
    pub fn from_reader<R: Read>(reader: R) -> LoadResult<Self> {
        let records = parse_launch_csv(reader)?;
        Self::from_records(records)
    }

    /// Build the table from already-parsed records.
    ///
    /// Fails with [`LoadError::Empty`] when `records` is empty, since payload
    /// bounds are undefined for an empty table.
    pub fn from_records(records: Vec<LaunchRecord>) -> LoadResult<Self> {
        let first = records.first().ok_or(LoadError::Empty)?;
        let mut min_payload = first.payload_mass_kg;
        let mut max_payload = first.payload_mass_kg;
        let mut distinct_sites: Vec<String> = Vec::new();

        for record in &records {
            min_payload = min_payload.min(record.payload_mass_kg);
            max_payload = max_payload.max(record.payload_mass_kg);
            if !distinct_sites.iter().any(|s| s == &record.site) {
                distinct_sites.push(record.site.clone());
            }
        }

        let checksum = records_checksum(&records);

        Ok(Self {
            records,
            distinct_sites,
            min_payload,
            max_payload,
            checksum,
            source: None,
        })
    }

    pub fn records(&self) -> &[LaunchRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Distinct launch sites, in order of first occurrence.
    pub fn distinct_sites(&self) -> &[String] {
        &self.distinct_sites
    }

    pub fn contains_site(&self, site: &str) -> bool {
        self.distinct_sites.iter().any(|s| s == site)
    }

    pub fn min_payload(&self) -> f64 {
        self.min_payload
    }

    pub fn max_payload(&self) -> f64 {
        self.max_payload
    }

    /// Hex SHA-256 over the parsed records.
    pub fn checksum(&self) -> &str {
        &self.checksum
    }

    /// Path the dataset was loaded from, if it came from a file.
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }
}
