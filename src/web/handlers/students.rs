use std::collections::HashMap;

use axum::extract::rejection::FormRejection;
use axum::extract::{Query, State};
use axum::http::HeaderMap;
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::routing::{get, post};
use axum::{Form, Router};
use tracing::{debug, info};

use super::core::{render_roster, Panel};
use super::required_field;
use crate::auth;
use crate::roster::{SearchQuery, StudentRecord};
use crate::web::error::{AppError, AppResult};
use crate::web::types::AppState;

/// Missing, blank, unparsable and non-finite input all count as 0.
pub fn parse_mark(raw: Option<&str>) -> f64 {
    raw.and_then(|v| v.trim().parse::<f64>().ok())
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}

async fn add_student(
    State(state): State<AppState>,
    headers: HeaderMap,
    form: Result<Form<HashMap<String, String>>, FormRejection>,
) -> AppResult<Response> {
    if !state.sessions.is_logged_in(auth::session_id(&headers)) {
        debug!("add refused without login");
        return Ok(Redirect::to("/login").into_response());
    }

    let Form(fields) = form.map_err(|e| AppError::BadRequest(e.body_text()))?;
    let name = required_field(&fields, "name")?;
    let father = required_field(&fields, "father")?;
    let roll = required_field(&fields, "roll")?;

    let marks: Vec<f64> = state
        .school
        .subjects
        .iter()
        .map(|subject| parse_mark(fields.get(subject).map(String::as_str)))
        .collect();
    let record = StudentRecord::new(name, father, roll, marks);
    info!(
        roll = %record.roll_number,
        percentage = record.percentage,
        grade = %record.grade,
        "student added"
    );
    state.roster.write().append(record);

    Ok(Redirect::to("/").into_response())
}

async fn search(
    State(state): State<AppState>,
    Query(params): Query<Vec<(String, String)>>,
) -> AppResult<Html<String>> {
    render_roster(&state, Panel::Search(SearchQuery::from_pairs(params)))
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/add", post(add_student))
        .route("/search", get(search))
}
