//! JSON endpoints for the booking form.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};

use crate::error::Result;
use crate::AppState;

use super::models::BookingRecord;
use super::requests::{BookingFormRequest, FormEventRequest};
use super::responses::{BookingSavedResponse, FieldErrorResponse, FormEventResponse};
use super::services;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/bookings", post(create_booking))
        .route("/api/bookings/events", post(form_event))
        .route("/api/bookings/client/:client_id", get(client_bookings))
}

/// Live recompute for a field blur or room selection.
async fn form_event(Json(request): Json<FormEventRequest>) -> Json<FormEventResponse> {
    let input = request.form.into_input();
    let outcome = services::handle_event(request.event, &input, &request.derived);

    Json(FormEventResponse {
        derived: outcome.derived,
        error: outcome.error.as_ref().map(FieldErrorResponse::from),
    })
}

/// Save button.
async fn create_booking(
    State(state): State<AppState>,
    Json(request): Json<BookingFormRequest>,
) -> Result<(StatusCode, Json<BookingSavedResponse>)> {
    let input = request.into_input();
    let booking = services::save_booking(state.store.as_ref(), &input).await?;

    Ok((
        StatusCode::CREATED,
        Json(BookingSavedResponse {
            message: "Booking Saved Successfully!".to_string(),
            booking,
        }),
    ))
}

async fn client_bookings(
    State(state): State<AppState>,
    Path(client_id): Path<i32>,
) -> Result<Json<Vec<BookingRecord>>> {
    let bookings = state.store.find_by_client(client_id).await?;
    Ok(Json(bookings))
}
