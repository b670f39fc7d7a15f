//! Operator HTTP handlers

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use rust_decimal::Decimal;

use crate::application::{BookingService, StatsService};
use crate::auth::CredentialGate;
use crate::domain::{DomainError, RouteCatalog};
use crate::interfaces::http::common::{error_reply, ApiResponse, ValidatedJson};
use crate::interfaces::http::modules::bookings::dto::BookingDto;

use super::dto::*;

/// Application state for operator handlers.
#[derive(Clone)]
pub struct AdminAppState {
    pub booking: Arc<BookingService>,
    pub stats: Arc<StatsService>,
    pub catalog: Arc<dyn RouteCatalog>,
    pub gate: Arc<dyn CredentialGate>,
}

/// Schedule sentinel, mirrored from the public route listing.
const SCHEDULE_UNAVAILABLE: &str = "N/A";

#[utoipa::path(
    post,
    path = "/api/admin/login",
    tag = "Admin",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Credentials accepted", body = ApiResponse<LoginResponse>),
        (status = 401, description = "Invalid credentials")
    )
)]
pub async fn login(
    State(state): State<AdminAppState>,
    ValidatedJson(request): ValidatedJson<LoginRequest>,
) -> Result<Json<ApiResponse<LoginResponse>>, (StatusCode, Json<ApiResponse<LoginResponse>>)> {
    if !state.gate.verify(&request.username, &request.password) {
        return Err((
            StatusCode::UNAUTHORIZED,
            Json(ApiResponse::error("Invalid credentials")),
        ));
    }

    Ok(Json(ApiResponse::success(LoginResponse {
        username: request.username.trim().to_string(),
    })))
}

#[utoipa::path(
    get,
    path = "/api/admin/bookings",
    tag = "Admin",
    security(("basic_auth" = [])),
    responses(
        (status = 200, description = "All bookings, newest first", body = ApiResponse<Vec<BookingDto>>),
        (status = 401, description = "Invalid credentials")
    )
)]
pub async fn list_bookings(
    State(state): State<AdminAppState>,
) -> Result<Json<ApiResponse<Vec<BookingDto>>>, (StatusCode, Json<ApiResponse<Vec<BookingDto>>>)> {
    let bookings = state.booking.list_bookings().await.map_err(error_reply)?;
    let dtos: Vec<BookingDto> = bookings.into_iter().map(Into::into).collect();
    Ok(Json(ApiResponse::success(dtos)))
}

#[utoipa::path(
    get,
    path = "/api/admin/stats",
    tag = "Admin",
    security(("basic_auth" = [])),
    responses(
        (status = 200, description = "Booking statistics", body = ApiResponse<StatsDto>),
        (status = 401, description = "Invalid credentials")
    )
)]
pub async fn stats(
    State(state): State<AdminAppState>,
) -> Result<Json<ApiResponse<StatsDto>>, (StatusCode, Json<ApiResponse<StatsDto>>)> {
    let summary = state.stats.summary().await.map_err(error_reply)?;
    Ok(Json(ApiResponse::success(summary.into())))
}

#[utoipa::path(
    get,
    path = "/api/admin/routes",
    tag = "Admin",
    security(("basic_auth" = [])),
    responses(
        (status = 200, description = "Full route table", body = ApiResponse<Vec<RouteDto>>),
        (status = 401, description = "Invalid credentials")
    )
)]
pub async fn list_routes(
    State(state): State<AdminAppState>,
) -> Result<Json<ApiResponse<Vec<RouteDto>>>, (StatusCode, Json<ApiResponse<Vec<RouteDto>>>)> {
    let routes = state.catalog.list_routes().await.map_err(error_reply)?;

    let dtos: Vec<RouteDto> = routes
        .into_iter()
        .map(|route| RouteDto {
            route: route.name(),
            fare: route.fare,
            schedule: route
                .schedule
                .unwrap_or_else(|| SCHEDULE_UNAVAILABLE.to_string()),
        })
        .collect();

    Ok(Json(ApiResponse::success(dtos)))
}

#[utoipa::path(
    put,
    path = "/api/admin/routes",
    tag = "Admin",
    security(("basic_auth" = [])),
    request_body = UpdateFareRequest,
    responses(
        (status = 200, description = "Fare updated", body = ApiResponse<MessageResponse>),
        (status = 404, description = "Route not found"),
        (status = 422, description = "Invalid fare"),
        (status = 401, description = "Invalid credentials")
    )
)]
pub async fn update_fare(
    State(state): State<AdminAppState>,
    ValidatedJson(request): ValidatedJson<UpdateFareRequest>,
) -> Result<Json<ApiResponse<MessageResponse>>, (StatusCode, Json<ApiResponse<MessageResponse>>)> {
    let fare = Decimal::from_f64_retain(request.fare).ok_or_else(|| {
        error_reply(DomainError::Validation(
            "fare must be a non-negative number".into(),
        ))
    })?;

    state
        .catalog
        .update_fare(&request.route, fare)
        .await
        .map_err(error_reply)?;

    Ok(Json(ApiResponse::success(MessageResponse {
        message: "Route updated successfully".to_string(),
    })))
}
