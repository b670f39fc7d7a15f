//! Booking HTTP handlers

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use crate::application::BookingService;
use crate::interfaces::http::common::{error_reply, ApiResponse};

use super::dto::*;

/// Application state for booking handlers.
#[derive(Clone)]
pub struct BookingAppState {
    pub service: Arc<BookingService>,
}

#[utoipa::path(
    post,
    path = "/api/bookings",
    tag = "Bookings",
    request_body = CreateBookingDto,
    responses(
        (status = 201, description = "Booking confirmed", body = ApiResponse<BookingDto>),
        (status = 400, description = "Validation failed"),
        (status = 404, description = "No direct route available"),
        (status = 409, description = "Seat already booked for this journey")
    )
)]
pub async fn create_booking(
    State(state): State<BookingAppState>,
    Json(request): Json<CreateBookingDto>,
) -> Result<
    (StatusCode, Json<ApiResponse<BookingDto>>),
    (StatusCode, Json<ApiResponse<BookingDto>>),
> {
    let booking = state
        .service
        .create_booking(request.into())
        .await
        .map_err(error_reply)?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(booking.into())),
    ))
}

#[utoipa::path(
    get,
    path = "/api/bookings/{ticket_id}",
    tag = "Bookings",
    params(("ticket_id" = String, Path, description = "Ticket id (case-insensitive)")),
    responses(
        (status = 200, description = "Booking details", body = ApiResponse<BookingDto>),
        (status = 404, description = "Ticket not found")
    )
)]
pub async fn get_booking(
    State(state): State<BookingAppState>,
    Path(ticket_id): Path<String>,
) -> Result<Json<ApiResponse<BookingDto>>, (StatusCode, Json<ApiResponse<BookingDto>>)> {
    let booking = state
        .service
        .get_booking(&ticket_id)
        .await
        .map_err(error_reply)?;

    Ok(Json(ApiResponse::success(booking.into())))
}

#[utoipa::path(
    delete,
    path = "/api/bookings/{ticket_id}",
    tag = "Bookings",
    params(("ticket_id" = String, Path, description = "Ticket id (case-insensitive)")),
    responses(
        (status = 200, description = "Booking cancelled", body = ApiResponse<CancelBookingResponse>),
        (status = 404, description = "Ticket not found"),
        (status = 409, description = "Ticket already cancelled")
    )
)]
pub async fn cancel_booking(
    State(state): State<BookingAppState>,
    Path(ticket_id): Path<String>,
) -> Result<
    Json<ApiResponse<CancelBookingResponse>>,
    (StatusCode, Json<ApiResponse<CancelBookingResponse>>),
> {
    let cancelled = state
        .service
        .cancel_booking(&ticket_id)
        .await
        .map_err(error_reply)?;

    Ok(Json(ApiResponse::success(CancelBookingResponse {
        ticket_id: cancelled.ticket_id,
        status: cancelled.status.to_string(),
        message: "Ticket cancelled successfully".to_string(),
    })))
}
