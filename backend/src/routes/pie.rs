use serde::{Deserialize, Serialize};

use crate::api::SiteSelection;
use crate::models::OutcomeClass;

// =========================================================
// Pie chart types + route
// =========================================================

/// Count of launches with one outcome class.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PieEntry {
    pub class: OutcomeClass,
    pub label: String,
    pub count: usize,
    pub color: String,
}

/// Outcome breakdown for one site selection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PieChartData {
    pub site: SiteSelection,
    pub title: String,
    pub entries: Vec<PieEntry>,
    /// Number of records matched by the site filter.
    pub total: usize,
}

impl PieChartData {
    /// Count for one class, or `None` when the class was omitted.
    pub fn count_for(&self, class: OutcomeClass) -> Option<usize> {
        self.entries
            .iter()
            .find(|e| e.class == class)
            .map(|e| e.count)
    }
}

/// Path of the pie chart endpoint, relative to the versioned API root.
pub const PIE_CHART_PATH: &str = "/charts/pie";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_for() {
        let data = PieChartData {
            site: SiteSelection::All,
            title: "t".to_string(),
            entries: vec![PieEntry {
                class: OutcomeClass::Success,
                label: "Success".to_string(),
                count: 4,
                color: "green".to_string(),
            }],
            total: 4,
        };
        assert_eq!(data.count_for(OutcomeClass::Success), Some(4));
        assert_eq!(data.count_for(OutcomeClass::Failure), None);
    }

    #[test]
    fn test_pie_chart_serialization() {
        let data = PieChartData {
            site: SiteSelection::Site("KSC LC-39A".to_string()),
            title: "Success vs Failure Rate for KSC LC-39A".to_string(),
            entries: vec![],
            total: 0,
        };
        let json = serde_json::to_value(&data).unwrap();
        assert_eq!(json["site"], "KSC LC-39A");
        assert_eq!(json["total"], 0);
    }
}
