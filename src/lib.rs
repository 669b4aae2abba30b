//! Class marks roster served over HTTP: per-student grades and GPA,
//! class statistics, and printable report cards.

pub mod auth;
pub mod calc;
pub mod config;
pub mod report;
pub mod roster;
pub mod web;

use anyhow::Context;
use tracing::info;

pub use config::AppConfig;
pub use web::{build_router, AppState};

/// Binds `cfg.bind` and serves until the process is stopped.
pub async fn serve(cfg: AppConfig) -> anyhow::Result<()> {
    let state = AppState::from_config(&cfg);
    let router = build_router(state);

    let listener = tokio::net::TcpListener::bind(cfg.bind)
        .await
        .with_context(|| format!("binding {}", cfg.bind))?;
    info!(
        addr = %cfg.bind,
        institute = %cfg.institute_name,
        subjects = cfg.subjects.len(),
        "report card server listening"
    );
    axum::serve(listener, router).await.context("http server")?;
    Ok(())
}
