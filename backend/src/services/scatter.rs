use crate::api::{PayloadRange, ScatterChartData, ScatterPoint, SiteSelection};
use crate::dataset::Dataset;

/// Payload vs. outcome points for the selected site within a payload range.
///
/// The payload filter is inclusive on both ends and always applied; the site
/// filter applies unless the selection is `All`. Points keep dataset order.
/// An inverted range yields no points.
pub fn scatter_for(
    dataset: &Dataset,
    site: &SiteSelection,
    range: PayloadRange,
) -> ScatterChartData {
    let mut categories: Vec<String> = Vec::new();
    let points: Vec<ScatterPoint> = dataset
        .records()
        .iter()
        .filter(|r| range.contains(r.payload_mass_kg))
        .filter(|r| site.matches(&r.site))
        .map(|r| {
            if !categories.contains(&r.booster_category) {
                categories.push(r.booster_category.clone());
            }
            ScatterPoint {
                payload_mass_kg: r.payload_mass_kg,
                class: r.outcome,
                booster_category: r.booster_category.clone(),
            }
        })
        .collect();

    ScatterChartData {
        site: site.clone(),
        title: format!("Payload vs. Success for {}", site),
        range,
        points,
        categories,
    }
}
