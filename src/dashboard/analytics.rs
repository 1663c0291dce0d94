use axum::Json;
use axum::extract::State;
use serde_json::Value;
use std::collections::BTreeMap;

use crate::AppState;
use crate::envelope::{ApiResult, Envelope};
use crate::error::UpstreamContext;
use crate::gingr::{GingrClient, GingrError, Params};

use super::fields::{amount, fixed_cents, label, records};
use super::overview::fetch_reservation_types;
use super::types::{BusinessIntelligence, Overview};

/// Page size used when the whole customer base is pulled for analysis.
pub const ANALYSIS_LIMIT: u32 = 1000;

/// Fetch owners, animals and active reservation types concurrently and
/// derive the business-intelligence report. Any failed call fails the whole
/// report.
pub async fn fetch_business_intelligence(
    gingr: &GingrClient,
) -> Result<BusinessIntelligence, GingrError> {
    let (owners, animals, reservation_types) = tokio::try_join!(
        gingr.get("owners", Params::new().with("limit", ANALYSIS_LIMIT)),
        gingr.get("animals", Params::new().with("limit", ANALYSIS_LIMIT)),
        fetch_reservation_types(gingr),
    )?;

    Ok(business_intelligence(&owners, &animals, reservation_types))
}

pub fn business_intelligence(
    owners: &Value,
    animals: &Value,
    reservation_types: Value,
) -> BusinessIntelligence {
    let owners = records(owners);
    let animals = records(animals);

    let total_customers = owners.len();
    let total_pets = animals.len();
    let pets_per_customer = if total_customers > 0 {
        round_cents(total_pets as f64 / total_customers as f64)
    } else {
        0.0
    };

    let vip_pets = animals
        .iter()
        .filter(|a| a.get("vip") == Some(&Value::Bool(true)))
        .count();

    let total_balance: f64 = owners
        .iter()
        .map(|o| amount(o.get("current_balance")))
        .sum();

    BusinessIntelligence {
        overview: Overview {
            total_customers,
            total_pets,
            pets_per_customer,
            vip_pets,
            total_balance: fixed_cents(total_balance),
        },
        breed_analysis: count_by(animals, "breed"),
        species_analysis: count_by(animals, "species"),
        service_types: match reservation_types {
            Value::Null => Value::Array(Vec::new()),
            other => other,
        },
    }
}

fn count_by(records: &[Value], field: &str) -> BTreeMap<String, u64> {
    let mut counts = BTreeMap::new();
    for record in records {
        *counts.entry(label(record, field)).or_insert(0) += 1;
    }
    counts
}

fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// GET /api/dashboard/analytics/business-intelligence
pub(super) async fn business_intelligence_report(
    State(state): State<AppState>,
) -> ApiResult<BusinessIntelligence> {
    let report = fetch_business_intelligence(&state.gingr)
        .await
        .context("Failed to fetch business intelligence data")?;
    Ok(Json(Envelope::ok(report)))
}
