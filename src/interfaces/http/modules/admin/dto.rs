//! Operator DTOs

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::application::services::stats::{BookingStats, RouteCount};

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct LoginRequest {
    #[validate(length(min = 1, max = 64))]
    pub username: String,
    #[validate(length(min = 1, max = 128))]
    pub password: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct LoginResponse {
    pub username: String,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateFareRequest {
    /// Canonical route name, e.g. "Bulawayo to Harare"
    #[validate(length(min = 1))]
    pub route: String,
    #[validate(range(min = 0.0))]
    pub fare: f64,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct RouteDto {
    pub route: String,
    pub fare: Decimal,
    /// "N/A" when the route runs unscheduled
    pub schedule: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct TopRouteDto {
    pub route: String,
    pub count: u64,
}

impl From<RouteCount> for TopRouteDto {
    fn from(rc: RouteCount) -> Self {
        Self {
            route: rc.route,
            count: rc.count,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct StatsDto {
    pub total_bookings: u64,
    pub confirmed: u64,
    pub cancelled: u64,
    pub total_revenue: Decimal,
    pub top_routes: Vec<TopRouteDto>,
}

impl From<BookingStats> for StatsDto {
    fn from(stats: BookingStats) -> Self {
        Self {
            total_bookings: stats.total_bookings,
            confirmed: stats.confirmed,
            cancelled: stats.cancelled,
            total_revenue: stats.total_revenue,
            top_routes: stats.top_routes.into_iter().map(Into::into).collect(),
        }
    }
}
