//! Data Transfer Objects for the HTTP API.
//!
//! Chart DTOs are re-exported from the routes module since they already
//! derive Serialize/Deserialize. Only query and health types live here.

use serde::{Deserialize, Serialize};

pub use crate::api::{
    DashboardInfo, PayloadRange, PieChartData, PieEntry, ScatterChartData, ScatterPoint,
    SiteSelection,
};

/// Query parameters for the pie chart endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct PieQuery {
    /// Launch site or `ALL` (default: `ALL`)
    #[serde(default)]
    pub site: Option<String>,
}

/// Query parameters for the scatter chart endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ScatterQuery {
    /// Launch site or `ALL` (default: `ALL`)
    #[serde(default)]
    pub site: Option<String>,
    /// Lower payload bound in kg, inclusive (default: dataset minimum)
    #[serde(default)]
    pub low: Option<f64>,
    /// Upper payload bound in kg, inclusive (default: dataset maximum)
    #[serde(default)]
    pub high: Option<f64>,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status of the service
    pub status: String,
    /// Version of the API
    pub version: String,
    /// Number of launch records served
    pub records: usize,
    /// Dataset checksum
    pub checksum: String,
}
