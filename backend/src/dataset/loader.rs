//! CSV parsing for launch records.

use serde::Deserialize;
use std::io::Read;

use super::error::{LoadError, LoadResult};
use crate::models::{LaunchRecord, OutcomeClass};

pub const FLIGHT_NUMBER_COLUMN: &str = "Flight Number";
pub const LAUNCH_SITE_COLUMN: &str = "Launch Site";
pub const CLASS_COLUMN: &str = "class";
pub const PAYLOAD_MASS_COLUMN: &str = "Payload Mass (kg)";
pub const BOOSTER_VERSION_COLUMN: &str = "Booster Version";
pub const BOOSTER_CATEGORY_COLUMN: &str = "Booster Version Category";

/// Headers that must be present for the file to load.
pub const REQUIRED_COLUMNS: [&str; 4] = [
    LAUNCH_SITE_COLUMN,
    PAYLOAD_MASS_COLUMN,
    CLASS_COLUMN,
    BOOSTER_CATEGORY_COLUMN,
];

/// Row shape as it appears in the file. Columns not named here, including the
/// unnamed index column pandas writes, are ignored.
#[derive(Debug, Deserialize)]
struct CsvRowRaw {
    #[serde(rename = "Flight Number", default)]
    flight_number: Option<String>,
    #[serde(rename = "Launch Site")]
    site: String,
    #[serde(rename = "Payload Mass (kg)")]
    payload_mass_kg: f64,
    #[serde(rename = "class")]
    class: f64,
    #[serde(rename = "Booster Version", default)]
    booster_version: Option<String>,
    #[serde(rename = "Booster Version Category")]
    booster_category: String,
}

impl CsvRowRaw {
    fn into_record(self, row: usize) -> LoadResult<LaunchRecord> {
        if self.site.is_empty() {
            return Err(LoadError::malformed(row, "empty launch site"));
        }
        if !self.payload_mass_kg.is_finite() {
            return Err(LoadError::malformed(
                row,
                format!("payload mass must be finite, got {}", self.payload_mass_kg),
            ));
        }
        let outcome = OutcomeClass::from_cell(self.class).ok_or_else(|| {
            LoadError::malformed(row, format!("class must be 0 or 1, got {}", self.class))
        })?;

        let flight_number = self.flight_number.and_then(|raw| match raw.parse::<u32>() {
            Ok(n) => Some(n),
            Err(_) => {
                log::debug!("Ignoring non-integer flight number '{}' at row {}", raw, row);
                None
            }
        });

        Ok(LaunchRecord {
            flight_number,
            site: self.site,
            payload_mass_kg: self.payload_mass_kg,
            outcome,
            booster_version: self.booster_version,
            booster_category: self.booster_category,
        })
    }
}

/// Parse launch records from CSV text.
///
/// Fails on the first problem found: a missing required header, or a row whose
/// site is empty, whose payload is not a finite number, or whose class is not
/// 0/1. Records are returned in file order.
pub fn parse_launch_csv<R: Read>(reader: R) -> LoadResult<Vec<LaunchRecord>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = rdr
        .headers()
        .map_err(|e| LoadError::malformed(0, format!("invalid header: {}", e)))?
        .clone();

    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == column) {
            return Err(LoadError::MissingColumn(column.to_string()));
        }
    }

    let mut records = Vec::new();
    for (idx, result) in rdr.deserialize::<CsvRowRaw>().enumerate() {
        let row = idx + 1;
        let raw = result.map_err(|e| LoadError::malformed(row, e.to_string()))?;
        records.push(raw.into_record(row)?);
    }

    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str =
        ",Flight Number,Launch Site,class,Payload Mass (kg),Booster Version,Booster Version Category";

    #[test]
    fn test_parse_pandas_export() {
        let csv = format!(
            "{}\n0,1,CCAFS LC-40,0,0.0,F9 v1.0  B0003,v1.0\n1,19,CCAFS LC-40,1,2477.0,F9 v1.1 B1018,v1.1\n",
            HEADER
        );
        let records = parse_launch_csv(csv.as_bytes()).unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].flight_number, Some(1));
        assert_eq!(records[0].outcome, OutcomeClass::Failure);
        assert_eq!(records[1].payload_mass_kg, 2477.0);
        assert_eq!(records[1].booster_version.as_deref(), Some("F9 v1.1 B1018"));
        assert_eq!(records[1].booster_category, "v1.1");
    }

    #[test]
    fn test_parse_minimal_columns() {
        let csv = "Launch Site,Payload Mass (kg),class,Booster Version Category\nA,500,1,FT\n";
        let records = parse_launch_csv(csv.as_bytes()).unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].flight_number, None);
        assert_eq!(records[0].booster_version, None);
        assert_eq!(records[0].outcome, OutcomeClass::Success);
    }

    #[test]
    fn test_missing_required_column() {
        let csv = "Launch Site,Payload Mass (kg),Booster Version Category\nA,500,FT\n";
        let err = parse_launch_csv(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, LoadError::MissingColumn(ref c) if c == "class"));
    }

    #[test]
    fn test_bad_outcome_class() {
        let csv = "Launch Site,Payload Mass (kg),class,Booster Version Category\nA,500,1,FT\nB,600,2,FT\n";
        let err = parse_launch_csv(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, LoadError::Malformed { row: 2, .. }));
    }

    #[test]
    fn test_bad_payload() {
        let csv = "Launch Site,Payload Mass (kg),class,Booster Version Category\nA,heavy,1,FT\n";
        let err = parse_launch_csv(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, LoadError::Malformed { row: 1, .. }));

        let csv = "Launch Site,Payload Mass (kg),class,Booster Version Category\nA,NaN,1,FT\n";
        let err = parse_launch_csv(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, LoadError::Malformed { row: 1, .. }));
    }

    #[test]
    fn test_empty_site_rejected() {
        let csv = "Launch Site,Payload Mass (kg),class,Booster Version Category\n,500,1,FT\n";
        let err = parse_launch_csv(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, LoadError::Malformed { row: 1, .. }));
    }

    #[test]
    fn test_non_integer_flight_number_is_dropped() {
        let csv = "Flight Number,Launch Site,Payload Mass (kg),class,Booster Version Category\nx,A,500,1,FT\n";
        let records = parse_launch_csv(csv.as_bytes()).unwrap();
        assert_eq!(records[0].flight_number, None);
    }
}
