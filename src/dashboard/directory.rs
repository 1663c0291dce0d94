use axum::Json;
use axum::extract::{Path, Query, State};
use serde_json::Value;
use std::collections::HashMap;

use crate::AppState;
use crate::envelope::{ApiResult, Envelope};
use crate::error::UpstreamContext;
use crate::gingr::{GingrClient, GingrError, Params};

use super::{flag, param_or};

pub const DEFAULT_PAGE_SIZE: u32 = 100;

/// Paging and filter options for owner/animal listings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListQuery {
    pub limit: u32,
    pub offset: u32,
    pub search: String,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            limit: DEFAULT_PAGE_SIZE,
            offset: 0,
            search: String::new(),
        }
    }
}

impl ListQuery {
    fn from_params(params: &HashMap<String, String>) -> Self {
        Self {
            limit: param_or(params, "limit", DEFAULT_PAGE_SIZE),
            offset: param_or(params, "offset", 0),
            search: params.get("search").cloned().unwrap_or_default(),
        }
    }

    fn to_params(&self) -> Params {
        Params::new()
            .with("limit", self.limit)
            .with("offset", self.offset)
            .with("search", self.search.as_str())
    }
}

pub async fn fetch_owner(gingr: &GingrClient, id: &str) -> Result<Value, GingrError> {
    gingr.get("owner", Params::new().with("id", id)).await
}

pub async fn fetch_owners(gingr: &GingrClient, query: &ListQuery) -> Result<Value, GingrError> {
    gingr.get("owners", query.to_params()).await
}

pub async fn fetch_animals(
    gingr: &GingrClient,
    query: &ListQuery,
    vip_only: bool,
) -> Result<Value, GingrError> {
    gingr
        .get("animals", query.to_params().with("vip_only", vip_only))
        .await
}

/// GET /api/dashboard/owner/{id}
pub(super) async fn owner(State(state): State<AppState>, Path(id): Path<String>) -> ApiResult {
    let data = fetch_owner(&state.gingr, &id)
        .await
        .context("Failed to fetch owner information")?;
    Ok(Json(Envelope::ok(data)))
}

/// GET /api/dashboard/owners?limit=&offset=&search=
pub(super) async fn owners(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> ApiResult {
    let query = ListQuery::from_params(&params);
    let data = fetch_owners(&state.gingr, &query)
        .await
        .context("Failed to fetch owners")?;
    Ok(Json(Envelope::ok(data)))
}

/// GET /api/dashboard/animals?limit=&offset=&search=&vip_only=
pub(super) async fn animals(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> ApiResult {
    let query = ListQuery::from_params(&params);
    let vip_only = flag(&params, "vip_only");
    let data = fetch_animals(&state.gingr, &query, vip_only)
        .await
        .context("Failed to fetch animals")?;
    Ok(Json(Envelope::ok(data)))
}
