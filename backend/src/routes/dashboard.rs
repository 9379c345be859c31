use serde::{Deserialize, Serialize};

// =========================================================
// Dashboard metadata + route
// =========================================================

/// Everything the page needs to build its controls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardInfo {
    pub title: String,
    /// Distinct launch sites in order of first appearance. The page prepends `ALL`.
    pub sites: Vec<String>,
    pub min_payload: f64,
    pub max_payload: f64,
    pub record_count: usize,
    pub checksum: String,
}

/// Path of the dashboard metadata endpoint, relative to the versioned API root.
pub const DASHBOARD_PATH: &str = "/dashboard";

/// Page heading.
pub const DASHBOARD_TITLE: &str = "SpaceX Launch Records Dashboard";
