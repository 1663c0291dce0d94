use axum::Json;
use axum::extract::State;
use serde_json::Value;

use crate::AppState;
use crate::envelope::{ApiResult, Envelope};
use crate::error::UpstreamContext;
use crate::gingr::{GingrClient, GingrError, Params};

use super::analytics::ANALYSIS_LIMIT;
use super::fields::{has_items, is_truthy, records};
use super::types::Alerts;

pub async fn fetch_alerts(gingr: &GingrClient) -> Result<Alerts, GingrError> {
    let animals = gingr
        .get("animals", Params::new().with("limit", ANALYSIS_LIMIT))
        .await?;
    Ok(alerts(&animals))
}

pub fn alerts(animals: &Value) -> Alerts {
    let animals = records(animals);
    let select = |keep: fn(&Value) -> bool| -> Vec<Value> {
        animals.iter().filter(|&a| keep(a)).cloned().collect()
    };

    Alerts {
        vip_pets: select(is_vip),
        special_needs: select(has_special_needs),
        medication_required: select(needs_medication),
    }
}

fn is_vip(animal: &Value) -> bool {
    animal.get("vip") == Some(&Value::Bool(true))
}

fn needs_medication(animal: &Value) -> bool {
    has_items(animal.get("medicines"))
}

fn has_special_needs(animal: &Value) -> bool {
    let has_instructions = match animal.get("special_instructions") {
        Some(Value::Array(items)) => !items.is_empty(),
        Some(Value::Object(fields)) => !fields.is_empty(),
        other => is_truthy(other),
    };

    needs_medication(animal) || has_items(animal.get("allergies")) || has_instructions
}

/// GET /api/dashboard/alerts
pub(super) async fn alerts_report(State(state): State<AppState>) -> ApiResult<Alerts> {
    let data = fetch_alerts(&state.gingr)
        .await
        .context("Failed to fetch alerts")?;
    Ok(Json(Envelope::ok(data)))
}
