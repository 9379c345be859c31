//! Loading the launch table from files on disk.

mod support;

use launch_dash::dataset::{Dataset, LoadError};
use launch_dash::models::OutcomeClass;

#[test]
fn test_load_bundled_csv() {
    let dataset = Dataset::load(support::bundled_csv_path()).unwrap();
    let first = &dataset.records()[0];

    assert_eq!(first.flight_number, Some(1));
    assert_eq!(first.site, "CCAFS LC-40");
    assert_eq!(first.outcome, OutcomeClass::Failure);
    assert_eq!(first.booster_category, "v1.0");
    assert_eq!(dataset.source(), Some(support::bundled_csv_path().as_path()));
}

#[test]
fn test_missing_file_is_io_error() {
    let err = Dataset::load("no/such/launches.csv").unwrap_err();

    assert!(matches!(err, LoadError::Io { .. }));
    assert!(err.to_string().contains("launches.csv"));
}

#[test]
fn test_missing_column_file() {
    let file = support::write_temp_file(
        "Launch Site,class,Booster Version Category\nA,1,FT\n",
        ".csv",
    );
    let err = Dataset::load(file.path()).unwrap_err();

    assert!(matches!(err, LoadError::MissingColumn(ref c) if c == "Payload Mass (kg)"));
}

#[test]
fn test_malformed_row_reports_position() {
    let file = support::write_temp_file(
        "Launch Site,Payload Mass (kg),class,Booster Version Category\nA,500,1,FT\nB,600,1,FT\nC,,0,FT\n",
        ".csv",
    );
    let err = Dataset::load(file.path()).unwrap_err();

    assert!(matches!(err, LoadError::Malformed { row: 3, .. }));
}

#[test]
fn test_empty_file_is_rejected() {
    let file = support::write_temp_file("", ".csv");
    let err = Dataset::load(file.path()).unwrap_err();

    // No header at all means the required columns are missing.
    assert!(matches!(err, LoadError::MissingColumn(_)));
}

#[test]
fn test_header_only_file_is_empty() {
    let file = support::write_temp_file(
        "Launch Site,Payload Mass (kg),class,Booster Version Category\n",
        ".csv",
    );
    let err = Dataset::load(file.path()).unwrap_err();

    assert!(matches!(err, LoadError::Empty));
}

#[test]
fn test_checksum_ignores_formatting() {
    let compact = support::write_temp_file(support::TWO_SITE_CSV, ".csv");
    let padded = support::write_temp_file(
        "Launch Site , Payload Mass (kg) , class , Booster Version Category\n A , 500 , 1 , FT \n B , 2000 , 0 , v1.1 \n",
        ".csv",
    );

    let a = Dataset::load(compact.path()).unwrap();
    let b = Dataset::load(padded.path()).unwrap();
    assert_eq!(a.checksum(), b.checksum());
}
