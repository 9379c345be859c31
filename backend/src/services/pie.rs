use serde::{Deserialize, Serialize};

use crate::api::{PieChartData, PieEntry, SiteSelection};
use crate::dataset::Dataset;
use crate::models::OutcomeClass;

/// Tuning for [`pie_for`].
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PieOptions {
    /// Emit an entry for both outcome classes even when one has no launches.
    /// When false, classes with zero matching records are omitted.
    pub zero_fill: bool,
}

/// Count launches per outcome class for the selected site.
///
/// `All` counts every record, a named site counts records launched from it.
/// Entries come back ordered by descending count, ties by class value. A site
/// absent from the dataset yields no entries and a zero total.
pub fn pie_for(dataset: &Dataset, site: &SiteSelection, options: PieOptions) -> PieChartData {
    let mut counts = [0usize; 2];
    for record in dataset.records().iter().filter(|r| site.matches(&r.site)) {
        counts[record.outcome.value() as usize] += 1;
    }
    let total = counts.iter().sum();

    let mut entries: Vec<PieEntry> = OutcomeClass::ALL
        .iter()
        .zip(counts)
        .filter(|(_, count)| options.zero_fill || *count > 0)
        .map(|(class, count)| PieEntry {
            class: *class,
            label: class.label().to_string(),
            count,
            color: class.color().to_string(),
        })
        .collect();
    // Stable sort keeps ascending class order among equal counts.
    entries.sort_by(|a, b| b.count.cmp(&a.count));

    PieChartData {
        site: site.clone(),
        title: format!("Success vs Failure Rate for {}", site),
        entries,
        total,
    }
}
