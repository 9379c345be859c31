//! Content fingerprint for a loaded dataset.

use sha2::{Digest, Sha256};

use crate::models::LaunchRecord;

/// Checksum over the parsed records rather than the raw file bytes, so that
/// whitespace or column-order differences in the CSV do not change it.
pub fn records_checksum(records: &[LaunchRecord]) -> String {
    let mut hasher = Sha256::new();
    for record in records {
        let line = format!(
            "{}|{}|{}|{}|{}|{}\n",
            record
                .flight_number
                .map(|n| n.to_string())
                .unwrap_or_default(),
            record.site,
            record.payload_mass_kg,
            record.outcome,
            record.booster_version.as_deref().unwrap_or_default(),
            record.booster_category,
        );
        hasher.update(line.as_bytes());
    }
    hex::encode(hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::OutcomeClass;

    #[test]
    fn test_records_checksum_is_stable_hex() {
        let records = [LaunchRecord::new("A", 500.0, OutcomeClass::Success, "FT")];
        let checksum = records_checksum(&records);
        assert_eq!(checksum, records_checksum(&records));
        assert_eq!(checksum.len(), 64);
        assert!(checksum.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_records_checksum_is_order_sensitive() {
        let a = LaunchRecord::new("A", 500.0, OutcomeClass::Success, "FT");
        let b = LaunchRecord::new("B", 2000.0, OutcomeClass::Failure, "v1.1");

        let forward = records_checksum(&[a.clone(), b.clone()]);
        let reverse = records_checksum(&[b, a]);
        assert_ne!(forward, reverse);
    }
}
