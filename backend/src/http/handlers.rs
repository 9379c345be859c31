//! HTTP handlers for the REST API.
//!
//! Each handler corresponds to an API endpoint and delegates to the
//! service layer for the actual filtering and counting.

use axum::{
    extract::{Query, State},
    http::Uri,
    response::Html,
    Json,
};
use tracing::debug;

use super::dto::{
    DashboardInfo, HealthResponse, PayloadRange, PieChartData, PieQuery, ScatterChartData,
    ScatterQuery, SiteSelection,
};
use super::error::AppError;
use super::page::INDEX_HTML;
use super::state::AppState;
use crate::services;

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

fn site_from_query(state: &AppState, site: Option<String>) -> SiteSelection {
    let site = site.map(SiteSelection::from).unwrap_or_default();
    if let SiteSelection::Site(name) = &site {
        if !state.dataset.contains_site(name) {
            debug!(site = %name, "unknown site, charts will be empty");
        }
    }
    site
}

// =============================================================================
// Page + Health Check
// =============================================================================

/// GET /
///
/// The dashboard page. Controls and charts are driven by the JSON endpoints below.
pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// GET /health
///
/// Health check endpoint reporting the size and fingerprint of the loaded dataset.
pub async fn health_check(State(state): State<AppState>) -> HandlerResult<HealthResponse> {
    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: "v1".to_string(),
        records: state.dataset.len(),
        checksum: state.dataset.checksum().to_string(),
    }))
}

// =============================================================================
// Dashboard Endpoints
// =============================================================================

/// GET /v1/dashboard
///
/// Site list and payload bounds used to build the page controls.
pub async fn get_dashboard(State(state): State<AppState>) -> HandlerResult<DashboardInfo> {
    Ok(Json(services::dashboard_info(&state.dataset)))
}

/// GET /v1/charts/pie?site=ALL
///
/// Success vs. failure counts for the selected site.
pub async fn get_pie_chart(
    State(state): State<AppState>,
    Query(query): Query<PieQuery>,
) -> HandlerResult<PieChartData> {
    let site = site_from_query(&state, query.site);
    debug!(%site, "pie chart requested");

    Ok(Json(services::pie_for(
        &state.dataset,
        &site,
        state.pie_options,
    )))
}

/// GET /v1/charts/scatter?site=ALL&low=0&high=10000
///
/// Payload vs. outcome points. Missing bounds default to the dataset extremes.
pub async fn get_scatter_chart(
    State(state): State<AppState>,
    Query(query): Query<ScatterQuery>,
) -> HandlerResult<ScatterChartData> {
    let site = site_from_query(&state, query.site);
    let range = PayloadRange::new(
        query.low.unwrap_or_else(|| state.dataset.min_payload()),
        query.high.unwrap_or_else(|| state.dataset.max_payload()),
    );
    if range.low.is_nan() || range.high.is_nan() {
        return Err(AppError::BadRequest(
            "Payload bounds must be numbers".to_string(),
        ));
    }
    debug!(%site, low = range.low, high = range.high, "scatter chart requested");
    if range.is_inverted() {
        debug!(low = range.low, high = range.high, "inverted payload range, no points");
    }

    Ok(Json(services::scatter_for(&state.dataset, &site, range)))
}

/// Fallback for unknown paths.
pub async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(uri.path().to_string())
}
