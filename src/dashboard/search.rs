use axum::Json;
use axum::extract::{Query, State};
use serde_json::Value;
use std::collections::HashMap;

use crate::AppState;
use crate::envelope::{ApiResult, Envelope};
use crate::error::UpstreamContext;
use crate::gingr::{GingrClient, GingrError, Params};

use super::types::SearchResults;

pub const MIN_QUERY_LEN: usize = 2;
pub const SEARCH_LIMIT: u32 = 20;

/// Which collections a search covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchScope {
    All,
    Owners,
    Animals,
    /// An unrecognized `type`; nothing is searched.
    Unknown,
}

impl SearchScope {
    pub fn parse(raw: Option<&str>) -> Self {
        match raw {
            None | Some("all") => SearchScope::All,
            Some("owners") => SearchScope::Owners,
            Some("animals") => SearchScope::Animals,
            Some(_) => SearchScope::Unknown,
        }
    }

    fn includes_owners(self) -> bool {
        matches!(self, SearchScope::All | SearchScope::Owners)
    }

    fn includes_animals(self) -> bool {
        matches!(self, SearchScope::All | SearchScope::Animals)
    }
}

/// Search owners and/or animals. Queries shorter than [`MIN_QUERY_LEN`]
/// UTF-16 units return empty lists without touching Gingr.
pub async fn search(
    gingr: &GingrClient,
    query: &str,
    scope: SearchScope,
) -> Result<SearchResults, GingrError> {
    if query.encode_utf16().count() < MIN_QUERY_LEN {
        return Ok(SearchResults {
            owners: Some(Value::Array(Vec::new())),
            animals: Some(Value::Array(Vec::new())),
        });
    }

    let params = Params::new()
        .with("search", query)
        .with("limit", SEARCH_LIMIT);

    let owners = async {
        if scope.includes_owners() {
            gingr.get("owners", params.clone()).await.map(Some)
        } else {
            Ok(None)
        }
    };
    let animals = async {
        if scope.includes_animals() {
            gingr.get("animals", params.clone()).await.map(Some)
        } else {
            Ok(None)
        }
    };

    let (owners, animals) = tokio::try_join!(owners, animals)?;
    Ok(SearchResults { owners, animals })
}

/// GET /api/dashboard/search?q=&type=
pub(super) async fn search_directory(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> ApiResult<SearchResults> {
    let query = params.get("q").map(String::as_str).unwrap_or_default();
    let scope = SearchScope::parse(params.get("type").map(String::as_str));

    let results = search(&state.gingr, query, scope)
        .await
        .context("Failed to perform search")?;
    Ok(Json(Envelope::ok(results)))
}
