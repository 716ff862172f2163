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

//! HTTP API tests driven through the router with `oneshot`.

use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use medatlas_content::Catalog;
use medatlas_core::StoreConfig;
use medatlas_server::{api::AppState, router};
use serde_json::Value;
use tower::ServiceExt;

fn app() -> Router {
    let catalog = Catalog::load(&StoreConfig::default()).unwrap();
    router(AppState::new(catalog))
}

async fn get(uri: &str) -> (StatusCode, Value) {
    let response = app()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn test_health() {
    let (status, body) = get("/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["stores"]["occupational"], 27);
    assert_eq!(body["stores"]["muscular"], 79);
}

#[tokio::test]
async fn test_get_entry_camel_case() {
    let (status, body) = get("/api/v1/muscular/entries/deltoid-left").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Left Deltoid");
    assert_eq!(body["region"], "shoulder-girdle");
    assert!(body.get("latinName").is_some());
}

#[tokio::test]
async fn test_missing_entry_is_404() {
    let (status, body) = get("/api/v1/occupational/entries/nonexistent-id").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["error"].as_str().unwrap().contains("nonexistent-id"));
}

#[tokio::test]
async fn test_search_and_category_filter() {
    let (status, body) = get("/api/v1/occupational/entries?query=organophosphate").await;
    assert_eq!(status, StatusCode::OK);
    let ids: Vec<&str> = body["entries"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["id"].as_str().unwrap())
        .collect();
    assert!(ids.contains(&"occupational_asthma"));
    assert!(ids.contains(&"chemical_burn"));
    assert!(!ids.contains(&"lead_poisoning"));

    let (_, body) = get("/api/v1/occupational/entries?category=respiratory").await;
    assert_eq!(body["count"], 7);

    let (_, body) = get("/api/v1/occupational/entries?category=regulatory,infectious-occupational").await;
    assert_eq!(body["count"], 3);

    // blank category means no filter
    let (_, body) = get("/api/v1/occupational/entries?category=").await;
    assert_eq!(body["count"], 27);
}

#[tokio::test]
async fn test_unknown_store_and_category_are_400() {
    let (status, body) = get("/api/v1/cardiology/entries").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());

    let (status, _) = get("/api/v1/muscular/entries?category=elbow").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_categories_counts_stats() {
    let (status, body) = get("/api/v1/occupational/categories").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["categories"].as_array().unwrap().len(), 8);
    assert_eq!(body["categories"][0], "respiratory");

    let (_, body) = get("/api/v1/occupational/counts").await;
    assert_eq!(body["counts"][0]["category"], "respiratory");
    assert_eq!(body["counts"][0]["count"], 7);

    let (_, body) = get("/api/v1/topics/stats").await;
    assert_eq!(body["store"], "topics");
    assert_eq!(body["total"], 3);
    assert!(body["danglingReferences"].as_u64().unwrap() > 0);
}
