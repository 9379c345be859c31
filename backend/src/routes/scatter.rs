use serde::{Deserialize, Serialize};

use crate::api::{PayloadRange, SiteSelection};
use crate::models::OutcomeClass;

// =========================================================
// Scatter chart types + route
// =========================================================

/// One launch plotted as payload mass against outcome.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScatterPoint {
    pub payload_mass_kg: f64,
    pub class: OutcomeClass,
    pub booster_category: String,
}

/// Payload vs. outcome points for one site selection and payload range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScatterChartData {
    pub site: SiteSelection,
    pub title: String,
    pub range: PayloadRange,
    pub points: Vec<ScatterPoint>,
    /// Booster categories present in `points`, in order of first appearance.
    pub categories: Vec<String>,
}

/// Path of the scatter chart endpoint, relative to the versioned API root.
pub const SCATTER_CHART_PATH: &str = "/charts/scatter";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scatter_point_serialization() {
        let point = ScatterPoint {
            payload_mass_kg: 525.0,
            class: OutcomeClass::Failure,
            booster_category: "v1.0".to_string(),
        };
        let json = serde_json::to_value(&point).unwrap();
        assert_eq!(json["payload_mass_kg"], 525.0);
        assert_eq!(json["class"], 0);
        assert_eq!(json["booster_category"], "v1.0");
    }
}
