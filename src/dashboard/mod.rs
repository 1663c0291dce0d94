pub mod alerts;
pub mod analytics;
pub mod directory;
pub(crate) mod fields;
pub mod overview;
pub mod schedule;
pub mod search;
pub mod types;

use axum::Router;
use axum::routing::get;
use std::collections::HashMap;
use std::str::FromStr;

use crate::AppState;

pub fn dashboard_routes() -> Router<AppState> {
    Router::new()
        .route("/summary", get(overview::summary))
        .route("/reservations/today", get(overview::reservations_today))
        .route(
            "/reservations/checked-in",
            get(overview::reservations_checked_in),
        )
        .route("/back-of-house", get(overview::back_of_house))
        .route("/reservation-types", get(overview::reservation_types))
        .route("/locations", get(overview::locations))
        .route("/owner/{id}", get(directory::owner))
        .route("/owners", get(directory::owners))
        .route("/animals", get(directory::animals))
        .route(
            "/analytics/business-intelligence",
            get(analytics::business_intelligence_report),
        )
        .route("/alerts", get(alerts::alerts_report))
        .route("/search", get(search::search_directory))
        .route("/schedule/today", get(schedule::schedule_today))
}

/// Current UTC date as `YYYY-MM-DD`, the format Gingr expects for dates.
pub fn today() -> String {
    chrono::Utc::now().format("%Y-%m-%d").to_string()
}

/// Parse a query parameter, falling back to `default` when it is missing or
/// malformed.
fn param_or<T: FromStr>(params: &HashMap<String, String>, name: &str, default: T) -> T {
    params
        .get(name)
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}

/// Boolean query flag. Only `true`, `1`, `yes` and `on` count as set, so
/// `?vip_only=false` really means false.
fn flag(params: &HashMap<String, String>, name: &str) -> bool {
    params.get(name).is_some_and(|v| {
        matches!(
            v.trim().to_ascii_lowercase().as_str(),
            "true" | "1" | "yes" | "on"
        )
    })
}
