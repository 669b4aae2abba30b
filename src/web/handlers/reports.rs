use axum::extract::{Path, State};
use axum::http::{header, HeaderValue};
use axum::response::{Html, IntoResponse, Response};
use axum::routing::get;
use axum::Router;
use chrono::Local;
use tracing::info;

use crate::report::ReportCard;
use crate::web::error::{AppError, AppResult};
use crate::web::types::AppState;

fn report_card(state: &AppState, roll: &str) -> Option<ReportCard> {
    let roster = state.roster.read();
    roster
        .find_by_roll(roll)
        .map(|student| ReportCard::new(&state.school, student, Local::now().date_naive()))
}

/// The file name goes in unquoted. Only bytes the header grammar rejects
/// (control characters) are replaced.
pub fn attachment_header(file_name: &str) -> HeaderValue {
    let value = format!("attachment; filename={file_name}");
    HeaderValue::from_str(&value).unwrap_or_else(|_| {
        let cleaned: String = value
            .chars()
            .map(|c| if c.is_control() { '_' } else { c })
            .collect();
        HeaderValue::from_str(&cleaned).unwrap_or_else(|_| HeaderValue::from_static("attachment"))
    })
}

async fn student_report(
    State(state): State<AppState>,
    Path(roll): Path<String>,
) -> AppResult<Html<String>> {
    let card = report_card(&state, &roll)
        .ok_or_else(|| AppError::NotFound(format!("No student with Roll {roll}")))?;
    Ok(Html(state.views.report(&state.school, &card)?))
}

async fn student_report_pdf(
    State(state): State<AppState>,
    Path(roll): Path<String>,
) -> AppResult<Response> {
    let card = report_card(&state, &roll)
        .ok_or_else(|| AppError::NotFound("Student not found".to_string()))?;
    let bytes = state.renderer.render(&card)?;
    info!(roll = %roll, bytes = bytes.len(), "report pdf rendered");
    Ok((
        [
            (header::CONTENT_TYPE, HeaderValue::from_static("application/pdf")),
            (header::CONTENT_DISPOSITION, attachment_header(&card.file_name())),
        ],
        bytes,
    )
        .into_response())
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/report/:roll", get(student_report))
        .route("/report/:roll/pdf", get(student_report_pdf))
}
