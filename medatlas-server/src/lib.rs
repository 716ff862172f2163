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

//! Medatlas Server
//!
//! Read-only HTTP API over the muscular, occupational medicine and safety
//! topic stores. Stores are built once at startup and shared by every
//! request.

pub mod api;
pub mod config;

use anyhow::{Context, Result};
use axum::{routing::get, Router};
use medatlas_content::Catalog;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use api::{get_categories, get_counts, get_entry, get_stats, health_check, list_entries, AppState};
use config::ServerConfig;

/// Build the application router
pub fn router(state: AppState) -> Router {
    let store_routes = Router::new()
        .route("/:store/entries", get(list_entries))
        .route("/:store/entries/:id", get(get_entry))
        .route("/:store/categories", get(get_categories))
        .route("/:store/counts", get(get_counts))
        .route("/:store/stats", get(get_stats));

    Router::new()
        .route("/health", get(health_check))
        .nest("/api/v1", store_routes)
        .with_state(state)
}

pub async fn run_server(config: ServerConfig) -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "medatlas_server=info,medatlas_index=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Medatlas Server");
    tracing::debug!("Configuration: {:#?}", config);

    config.validate()?;
    let addr = config.socket_addr()?;

    let catalog = Catalog::load(&config.store).context("Failed to build content stores")?;
    let state = AppState::new(catalog);

    let app = router(state)
        .layer(if config.server.enable_cors {
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        } else {
            CorsLayer::new()
        })
        .layer(TraceLayer::new_for_http());

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    tracing::info!("HTTP server listening on http://{}", addr);

    axum::serve(listener, app).await?;
    Ok(())
}
