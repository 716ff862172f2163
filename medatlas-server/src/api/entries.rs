// Copyright 2025 Sushanth (https://github.com/sushanthpy)
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program. If not, see <https://www.gnu.org/licenses/>.

//! Read-only store endpoints under `/api/v1/:store`.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use medatlas_content::CategoryCount;
use medatlas_index::StoreStats;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::api::{ApiError, AppState};

/// Query parameters for entry listing
#[derive(Debug, Default, Deserialize)]
pub struct EntriesQuery {
    /// Case-insensitive substring; empty matches everything
    pub query: Option<String>,
    /// Comma-separated category names; blank means no category filter
    pub category: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct EntriesResponse {
    pub store: &'static str,
    pub count: usize,
    pub entries: Vec<Value>,
}

#[derive(Debug, Serialize)]
pub struct CategoriesResponse {
    pub store: &'static str,
    pub categories: Vec<&'static str>,
}

#[derive(Debug, Serialize)]
pub struct CountsResponse {
    pub store: &'static str,
    pub counts: Vec<CategoryCount>,
}

fn parse_category_list(raw: Option<&str>) -> Option<Vec<String>> {
    let categories: Vec<String> = raw?
        .split(',')
        .map(str::trim)
        .filter(|category| !category.is_empty())
        .map(String::from)
        .collect();
    (!categories.is_empty()).then_some(categories)
}

/// GET /api/v1/:store/entries
pub async fn list_entries(
    State(state): State<AppState>,
    Path(store): Path<String>,
    Query(params): Query<EntriesQuery>,
) -> Result<Json<EntriesResponse>, ApiError> {
    let view = state.view(&store)?;
    let categories = parse_category_list(params.category.as_deref());
    let entries = view.find(params.query.as_deref(), categories.as_deref())?;

    debug!(store = view.name(), count = entries.len(), "Listed entries");
    Ok(Json(EntriesResponse {
        store: view.name(),
        count: entries.len(),
        entries,
    }))
}

/// GET /api/v1/:store/entries/:id
pub async fn get_entry(
    State(state): State<AppState>,
    Path((store, id)): Path<(String, String)>,
) -> Result<Json<Value>, ApiError> {
    let view = state.view(&store)?;
    view.get(&id)?
        .map(Json)
        .ok_or_else(|| ApiError::NotFound(format!("No entry '{}' in the {} store", id, view.name())))
}

/// GET /api/v1/:store/categories
pub async fn get_categories(
    State(state): State<AppState>,
    Path(store): Path<String>,
) -> Result<Json<CategoriesResponse>, ApiError> {
    let view = state.view(&store)?;
    Ok(Json(CategoriesResponse {
        store: view.name(),
        categories: view.categories(),
    }))
}

/// GET /api/v1/:store/counts
pub async fn get_counts(
    State(state): State<AppState>,
    Path(store): Path<String>,
) -> Result<Json<CountsResponse>, ApiError> {
    let view = state.view(&store)?;
    Ok(Json(CountsResponse {
        store: view.name(),
        counts: view.counts(),
    }))
}

/// GET /api/v1/:store/stats
pub async fn get_stats(
    State(state): State<AppState>,
    Path(store): Path<String>,
) -> Result<Json<StoreStats>, ApiError> {
    let view = state.view(&store)?;
    Ok(Json(view.stats()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_category_list() {
        assert_eq!(parse_category_list(None), None);
        assert_eq!(parse_category_list(Some(" , ")), None);
        assert_eq!(
            parse_category_list(Some("respiratory, toxic")),
            Some(vec!["respiratory".to_string(), "toxic".to_string()])
        );
    }
}
