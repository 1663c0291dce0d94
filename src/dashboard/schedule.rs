use axum::Json;
use axum::extract::State;
use serde_json::Value;

use crate::AppState;
use crate::envelope::{ApiResult, Envelope};
use crate::error::UpstreamContext;
use crate::gingr::{GingrClient, GingrError, split_ids};

use super::fields::{is_truthy, records};
use super::overview::{
    DEFAULT_LOCATION_ID, DEFAULT_TYPE_IDS, fetch_back_of_house, fetch_reservations_between,
};
use super::today;
use super::types::{Schedule, ScheduleSummary};

/// Reservations and the back-of-house board for `date`, fetched concurrently.
pub async fn fetch_schedule(gingr: &GingrClient, date: &str) -> Result<Schedule, GingrError> {
    let (reservations, back_of_house) = tokio::try_join!(
        fetch_reservations_between(gingr, date, date),
        fetch_back_of_house(gingr, DEFAULT_LOCATION_ID, split_ids(DEFAULT_TYPE_IDS)),
    )?;

    Ok(schedule(reservations, back_of_house))
}

pub fn schedule(reservations: Value, back_of_house: Value) -> Schedule {
    let summary = summarize(records(&reservations));

    Schedule {
        reservations: or_empty(reservations),
        back_of_house: or_empty(back_of_house),
        summary,
    }
}

fn summarize(reservations: &[Value]) -> ScheduleSummary {
    let checked_in = |r: &Value| is_truthy(r.get("checked_in"));
    let checked_out = |r: &Value| is_truthy(r.get("checked_out"));

    ScheduleSummary {
        total_reservations: reservations.len(),
        checked_in: reservations.iter().filter(|&r| checked_in(r)).count(),
        pending_check_in: reservations
            .iter()
            .filter(|&r| !checked_in(r) && !checked_out(r))
            .count(),
    }
}

fn or_empty(payload: Value) -> Value {
    match payload {
        Value::Null => Value::Array(Vec::new()),
        other => other,
    }
}

/// GET /api/dashboard/schedule/today
pub(super) async fn schedule_today(State(state): State<AppState>) -> ApiResult<Schedule> {
    let data = fetch_schedule(&state.gingr, &today())
        .await
        .context("Failed to fetch today's schedule")?;
    Ok(Json(Envelope::ok(data)))
}
