use axum::extract::State;
use axum::response::Html;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::json;
use tracing::debug;

use crate::calc;
use crate::roster::SearchQuery;
use crate::web::error::AppResult;
use crate::web::types::AppState;
use crate::web::views::IndexPage;

/// The one derived view shown alongside the roster.
#[derive(Debug, Clone, Default)]
pub enum Panel {
    #[default]
    Plain,
    ClassAverage,
    Topper,
    Search(SearchQuery),
}

/// Statistics are recomputed from the current roster on every call.
pub fn render_roster(state: &AppState, panel: Panel) -> AppResult<Html<String>> {
    let roster = state.roster.read();
    let records = roster.all();
    let averages = calc::average_per_subject(records, state.school.subjects.len());
    let mut view = IndexPage::new(&state.school, records, averages);
    match &panel {
        Panel::Plain => {}
        Panel::ClassAverage => view.class_average = Some(calc::class_average(records)),
        Panel::Topper => view.topper = calc::topper(records),
        Panel::Search(query) => {
            view.search_active = true;
            for row in &mut view.rows {
                row.highlight = query.matches(row.record);
            }
        }
    }
    debug!(panel = ?panel, students = records.len(), "roster rendered");
    Ok(Html(state.views.index(&view)?))
}

async fn home(State(state): State<AppState>) -> AppResult<Html<String>> {
    render_roster(&state, Panel::Plain)
}

async fn average(State(state): State<AppState>) -> AppResult<Html<String>> {
    render_roster(&state, Panel::ClassAverage)
}

async fn topper(State(state): State<AppState>) -> AppResult<Html<String>> {
    render_roster(&state, Panel::Topper)
}

async fn health(State(state): State<AppState>) -> Json<serde_json::Value> {
    Json(json!({
        "version": env!("CARGO_PKG_VERSION"),
        "students": state.roster.read().len(),
    }))
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home))
        .route("/average", get(average))
        .route("/topper", get(topper))
        .route("/health", get(health))
}
