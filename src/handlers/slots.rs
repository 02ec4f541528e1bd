use std::sync::Arc;

use axum::extract::{Query, State};
use axum::Json;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::models::{SlotWindow, TIME_SLOTS};
use crate::services::validation::earliest_bookable_date;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct SlotsQuery {
    pub date: Option<String>,
}

#[derive(Serialize)]
pub struct SlotView {
    label: &'static str,
    window: SlotWindow,
    available: bool,
}

#[derive(Serialize)]
pub struct SlotsResponse {
    min_date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    date: Option<String>,
    slots: Vec<SlotView>,
}

// GET /api/slots?date=YYYY-MM-DD
pub async fn list_slots(
    State(state): State<Arc<AppState>>,
    Query(query): Query<SlotsQuery>,
) -> Result<Json<SlotsResponse>, AppError> {
    let min_date = earliest_bookable_date(state.booking.today());

    let date = match query.date.as_deref().map(str::trim) {
        Some(raw) if !raw.is_empty() => Some(
            NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                .map_err(|_| AppError::BadRequest(format!("invalid date: {raw}")))?,
        ),
        _ => None,
    };

    let booked = match date {
        Some(d) => state.booking.booked_labels(d).await,
        None => Vec::new(),
    };

    let slots = TIME_SLOTS
        .iter()
        .map(|slot| SlotView {
            label: slot.label,
            window: slot.window(),
            available: !booked.iter().any(|b| b == slot.label),
        })
        .collect();

    Ok(Json(SlotsResponse {
        min_date: min_date.format("%Y-%m-%d").to_string(),
        date: date.map(|d| d.format("%Y-%m-%d").to_string()),
        slots,
    }))
}
