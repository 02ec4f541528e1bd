use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::models::{AppointmentForm, BookingDraft, FormPhase, SubmissionStatus};
use crate::services::booking::BookingError;
use crate::state::AppState;

pub const UNREADABLE_FORM_MESSAGE: &str =
    "We could not read your appointment details. Please check the form and try again.";

#[derive(Serialize)]
pub struct AppointmentResponse {
    phase: FormPhase,
    status: Option<SubmissionStatus>,
    draft: BookingDraft,
    #[serde(skip_serializing_if = "Option::is_none")]
    booking_id: Option<String>,
}

impl AppointmentResponse {
    fn from_form(form: AppointmentForm, booking_id: Option<String>) -> Self {
        Self {
            phase: form.phase,
            status: form.status,
            draft: form.draft,
            booking_id,
        }
    }
}

fn status_code(outcome: &Result<String, BookingError>) -> StatusCode {
    match outcome {
        Ok(_) => StatusCode::CREATED,
        Err(BookingError::Validation(_)) => StatusCode::UNPROCESSABLE_ENTITY,
        // InProgress cannot come from this route: every request starts a fresh form.
        Err(BookingError::SlotUnavailable | BookingError::InProgress) => StatusCode::CONFLICT,
        Err(BookingError::Persistence(_)) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// A body the flow never saw still answers with a failed form.
fn rejected(rejection: JsonRejection) -> Response {
    let code = match &rejection {
        JsonRejection::JsonDataError(_) => StatusCode::UNPROCESSABLE_ENTITY,
        JsonRejection::JsonSyntaxError(_) => StatusCode::BAD_REQUEST,
        other => other.status(),
    };
    tracing::info!(error = %rejection.body_text(), "unreadable appointment request");

    let form = AppointmentForm::new().fail(UNREADABLE_FORM_MESSAGE);
    (code, Json(AppointmentResponse::from_form(form, None))).into_response()
}

// POST /api/appointments
pub async fn create_appointment(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<BookingDraft>, JsonRejection>,
) -> Response {
    let draft = match payload {
        Ok(Json(draft)) => draft,
        Err(rejection) => return rejected(rejection),
    };

    tracing::info!(date = %draft.date, time = %draft.time, "appointment request");

    let submission = state
        .booking
        .submit(AppointmentForm::with_draft(draft))
        .await;

    let outcome = submission.outcome.map(|b| b.id);
    let code = status_code(&outcome);

    (
        code,
        Json(AppointmentResponse::from_form(submission.form, outcome.ok())),
    )
        .into_response()
}
