use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BusinessIntelligence {
    pub overview: Overview,
    pub breed_analysis: BTreeMap<String, u64>,
    pub species_analysis: BTreeMap<String, u64>,
    pub service_types: Value,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Overview {
    pub total_customers: usize,
    pub total_pets: usize,
    pub pets_per_customer: f64,
    pub vip_pets: usize,
    /// Two-decimal string, e.g. `"10.50"`.
    pub total_balance: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Alerts {
    pub vip_pets: Vec<Value>,
    pub special_needs: Vec<Value>,
    pub medication_required: Vec<Value>,
}

/// Search hits. A scope that was not searched is left out entirely.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SearchResults {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owners: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub animals: Option<Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Schedule {
    pub reservations: Value,
    pub back_of_house: Value,
    pub summary: ScheduleSummary,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleSummary {
    pub total_reservations: usize,
    pub checked_in: usize,
    pub pending_check_in: usize,
}
