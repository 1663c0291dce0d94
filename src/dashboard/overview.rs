use axum::Json;
use axum::extract::{Query, State};
use serde_json::Value;
use std::collections::HashMap;

use crate::AppState;
use crate::envelope::{ApiResult, Envelope};
use crate::error::UpstreamContext;
use crate::gingr::{GingrClient, GingrError, Params, split_ids};

use super::{param_or, today};

/// Reservation type ids shown on the board when the caller names none.
pub const DEFAULT_TYPE_IDS: &str = "1,2,3,4,5";
pub const DEFAULT_LOCATION_ID: u32 = 1;

pub async fn fetch_summary(gingr: &GingrClient, date: &str) -> Result<Value, GingrError> {
    gingr
        .get(
            "reservation_widget_data",
            Params::new().with("timestamp", date),
        )
        .await
}

pub async fn fetch_reservations_between(
    gingr: &GingrClient,
    start_date: &str,
    end_date: &str,
) -> Result<Value, GingrError> {
    gingr
        .post(
            "reservations",
            Params::new()
                .with("start_date", start_date)
                .with("end_date", end_date),
        )
        .await
}

pub async fn fetch_checked_in(gingr: &GingrClient) -> Result<Value, GingrError> {
    gingr
        .post("reservations", Params::new().with("checked_in", true))
        .await
}

pub async fn fetch_back_of_house(
    gingr: &GingrClient,
    location_id: u32,
    type_ids: Vec<String>,
) -> Result<Value, GingrError> {
    gingr
        .get(
            "back_of_house",
            Params::new()
                .with("location_id", location_id)
                .with("type_ids", type_ids)
                .with("full_day", true),
        )
        .await
}

pub async fn fetch_reservation_types(gingr: &GingrClient) -> Result<Value, GingrError> {
    gingr
        .get("reservation_types", Params::new().with("active_only", true))
        .await
}

pub async fn fetch_locations(gingr: &GingrClient) -> Result<Value, GingrError> {
    gingr.get("get_locations", Params::new()).await
}

/// GET /api/dashboard/summary
pub(super) async fn summary(State(state): State<AppState>) -> ApiResult {
    let data = fetch_summary(&state.gingr, &today())
        .await
        .context("Failed to fetch dashboard summary")?;
    Ok(Json(Envelope::ok(data)))
}

/// GET /api/dashboard/reservations/today
pub(super) async fn reservations_today(State(state): State<AppState>) -> ApiResult {
    let today = today();
    let data = fetch_reservations_between(&state.gingr, &today, &today)
        .await
        .context("Failed to fetch today's reservations")?;
    Ok(Json(Envelope::ok(data)))
}

/// GET /api/dashboard/reservations/checked-in
pub(super) async fn reservations_checked_in(State(state): State<AppState>) -> ApiResult {
    let data = fetch_checked_in(&state.gingr)
        .await
        .context("Failed to fetch checked-in reservations")?;
    Ok(Json(Envelope::ok(data)))
}

/// GET /api/dashboard/back-of-house?location_id=&type_ids=
pub(super) async fn back_of_house(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> ApiResult {
    let location_id = param_or(&params, "location_id", DEFAULT_LOCATION_ID);
    let type_ids = split_ids(
        params
            .get("type_ids")
            .map(String::as_str)
            .unwrap_or(DEFAULT_TYPE_IDS),
    );

    let data = fetch_back_of_house(&state.gingr, location_id, type_ids)
        .await
        .context("Failed to fetch back of house data")?;
    Ok(Json(Envelope::ok(data)))
}

/// GET /api/dashboard/reservation-types
pub(super) async fn reservation_types(State(state): State<AppState>) -> ApiResult {
    let data = fetch_reservation_types(&state.gingr)
        .await
        .context("Failed to fetch reservation types")?;
    Ok(Json(Envelope::ok(data)))
}

/// GET /api/dashboard/locations
pub(super) async fn locations(State(state): State<AppState>) -> ApiResult {
    let data = fetch_locations(&state.gingr)
        .await
        .context("Failed to fetch locations")?;
    Ok(Json(Envelope::ok(data)))
}
