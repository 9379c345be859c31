//! Public API surface for the dashboard backend.
//!
//! This file consolidates the DTO types for the HTTP API together with the two
//! input types every aggregation takes. All types derive Serialize/Deserialize
//! for JSON serialization.

pub use crate::dataset::Dataset;
pub use crate::models::{LaunchRecord, OutcomeClass};
pub use crate::routes::dashboard::DashboardInfo;
pub use crate::routes::pie::PieChartData;
pub use crate::routes::pie::PieEntry;
pub use crate::routes::scatter::ScatterChartData;
pub use crate::routes::scatter::ScatterPoint;
pub use crate::services::pie::PieOptions;

use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Sentinel selecting every launch site.
pub const ALL_SITES: &str = "ALL";

/// Launch site filter: every site, or exactly one.
///
/// Parsed from and serialized to a plain string; the exact value `"ALL"` is
/// the sentinel. A site that is not in the dataset is representable and simply
/// matches nothing.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SiteSelection {
    #[default]
    All,
    Site(String),
}

impl SiteSelection {
    pub fn site(name: impl Into<String>) -> Self {
        SiteSelection::from(name.into())
    }

    /// Whether a record launched from `site` passes this filter.
    pub fn matches(&self, site: &str) -> bool {
        match self {
            SiteSelection::All => true,
            SiteSelection::Site(selected) => selected == site,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            SiteSelection::All => ALL_SITES,
            SiteSelection::Site(site) => site,
        }
    }
}

impl From<String> for SiteSelection {
    fn from(value: String) -> Self {
        if value == ALL_SITES {
            SiteSelection::All
        } else {
            SiteSelection::Site(value)
        }
    }
}

impl From<&str> for SiteSelection {
    fn from(value: &str) -> Self {
        SiteSelection::from(value.to_string())
    }
}

impl From<SiteSelection> for String {
    fn from(selection: SiteSelection) -> Self {
        match selection {
            SiteSelection::All => ALL_SITES.to_string(),
            SiteSelection::Site(site) => site,
        }
    }
}

impl FromStr for SiteSelection {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(SiteSelection::from(s))
    }
}

impl fmt::Display for SiteSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Closed payload interval `[low, high]` in kilograms.
///
/// `low > high` is accepted and contains nothing.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayloadRange {
    pub low: f64,
    pub high: f64,
}

impl PayloadRange {
    pub fn new(low: f64, high: f64) -> Self {
        Self { low, high }
    }

    /// The range spanning every payload in the dataset.
    pub fn full(dataset: &Dataset) -> Self {
        Self::new(dataset.min_payload(), dataset.max_payload())
    }

    /// Inclusive on both ends.
    pub fn contains(&self, payload_mass_kg: f64) -> bool {
        self.low <= payload_mass_kg && payload_mass_kg <= self.high
    }

    pub fn is_inverted(&self) -> bool {
        self.low > self.high
    }
}
