//! Route and catalog DTOs

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Everything the booking UI needs up front: cities, fares, schedules,
/// stops, seat capacity, and company contact details.
#[derive(Debug, Serialize, ToSchema)]
pub struct ConfigResponse {
    pub cities: Vec<String>,
    /// Route name → fare
    pub routes: BTreeMap<String, Decimal>,
    /// Route name → departure time (scheduled routes only)
    pub schedules: BTreeMap<String, String>,
    /// City → stop description
    pub stops: BTreeMap<String, String>,
    pub total_seats: u32,
    pub company_name: String,
    pub contact_phone: String,
    pub contact_email: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct RouteInfoRequest {
    pub departure: Option<String>,
    pub destination: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct RouteInfoResponse {
    pub fare: Decimal,
    /// "N/A" when the route runs unscheduled
    pub schedule: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ScheduleEntry {
    pub route: String,
    pub schedule: String,
    pub fare: Decimal,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct StopInfoResponse {
    pub city: String,
    pub stops: String,
}
