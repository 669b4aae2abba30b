use std::collections::HashMap;

use axum::extract::rejection::FormRejection;
use axum::extract::State;
use axum::http::{header, HeaderMap};
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::routing::get;
use axum::{Form, Router};
use tracing::{info, warn};

use super::required_field;
use crate::auth;
use crate::web::error::{AppError, AppResult};
use crate::web::types::AppState;

pub const INVALID_CREDENTIALS: &str = "Invalid credentials";

async fn login_form(State(state): State<AppState>) -> AppResult<Html<String>> {
    Ok(Html(state.views.login(None)?))
}

async fn login_submit(
    State(state): State<AppState>,
    headers: HeaderMap,
    form: Result<Form<HashMap<String, String>>, FormRejection>,
) -> AppResult<Response> {
    let Form(fields) = form.map_err(|e| AppError::BadRequest(e.body_text()))?;
    let username = required_field(&fields, "username")?;
    let password = required_field(&fields, "password")?;

    if !state.credentials.verify(username, password) {
        warn!(username = %username, "login failed");
        return Ok(Html(state.views.login(Some(INVALID_CREDENTIALS))?).into_response());
    }

    let id = state.sessions.login(auth::session_id(&headers));
    info!(session = %id, "operator logged in");
    let mut resp = Redirect::to("/").into_response();
    resp.headers_mut()
        .insert(header::SET_COOKIE, auth::session_cookie(id));
    Ok(resp)
}

pub fn routes() -> Router<AppState> {
    Router::new().route("/login", get(login_form).post(login_submit))
}
