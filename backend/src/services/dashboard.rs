use crate::api::DashboardInfo;
use crate::dataset::Dataset;
use crate::routes::dashboard::DASHBOARD_TITLE;

/// Describe the dataset for control construction.
pub fn dashboard_info(dataset: &Dataset) -> DashboardInfo {
    DashboardInfo {
        title: DASHBOARD_TITLE.to_string(),
        sites: dataset.distinct_sites().to_vec(),
        min_payload: dataset.min_payload(),
        max_payload: dataset.max_payload(),
        record_count: dataset.len(),
        checksum: dataset.checksum().to_string(),
    }
}
