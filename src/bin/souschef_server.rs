// ABOUTME: Main server binary for the Sous Chef meal planning API
// ABOUTME: Loads configuration, opens the catalog, and serves the JSON API
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sous Chef Contributors

//! Sous Chef server entry point

use anyhow::Result;
use souschef::cache::ExportCache;
use souschef::config::ServerConfig;
use souschef::database::{self, RecipeCatalog};
use souschef::logging::LoggingConfig;
use souschef::routes::{self, AppState};
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    LoggingConfig::from_env().init()?;
    let config = ServerConfig::from_env()?;

    let pool = database::connect(&config.database_url).await?;
    database::migrate(&pool).await?;

    let state = Arc::new(AppState {
        catalog: RecipeCatalog::new(pool),
        export_cache: ExportCache::new(config.export_cache_entries),
        max_plan_days: config.max_plan_days,
    });

    let app = routes::router(state);
    let addr = format!("0.0.0.0:{}", config.http_port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!(%addr, "souschef server listening");
    axum::serve(listener, app).await?;

    Ok(())
}
