//! Booking DTOs

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::BookingRequest;
use crate::domain::Booking;

/// Request to create a booking.
///
/// Every field is optional at the wire level on purpose: presence is the
/// first step of the core's ordered validation pipeline, so missing
/// fields must reach the service rather than fail deserialization.
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateBookingDto {
    pub name: Option<String>,
    pub age: Option<i64>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub departure: Option<String>,
    pub destination: Option<String>,
    /// Travel date, YYYY-MM-DD
    pub date: Option<String>,
    /// Departure time as shown on the schedule
    pub time: Option<String>,
    pub seat: Option<i64>,
}

impl From<CreateBookingDto> for BookingRequest {
    fn from(dto: CreateBookingDto) -> Self {
        BookingRequest {
            name: dto.name,
            age: dto.age,
            phone: dto.phone,
            email: dto.email,
            departure: dto.departure,
            destination: dto.destination,
            date: dto.date,
            time: dto.time,
            seat: dto.seat,
        }
    }
}

/// Booking details in API responses
#[derive(Debug, Serialize, ToSchema)]
pub struct BookingDto {
    pub ticket_id: String,
    pub name: String,
    pub age: i32,
    pub phone: String,
    pub email: Option<String>,
    pub departure: String,
    pub destination: String,
    pub date: String,
    pub time: String,
    pub seat: u32,
    pub fare: Decimal,
    pub status: String,
    pub booked_at: String,
    pub updated_at: String,
}

impl From<Booking> for BookingDto {
    fn from(b: Booking) -> Self {
        Self {
            ticket_id: b.ticket_id,
            name: b.name,
            age: b.age,
            phone: b.phone,
            email: b.email,
            departure: b.departure,
            destination: b.destination,
            date: b.date.format("%Y-%m-%d").to_string(),
            time: b.time,
            seat: b.seat,
            fare: b.fare,
            status: b.status.to_string(),
            booked_at: b.booked_at.to_rfc3339(),
            updated_at: b.updated_at.to_rfc3339(),
        }
    }
}

/// Response from cancelling a booking
#[derive(Debug, Serialize, ToSchema)]
pub struct CancelBookingResponse {
    pub ticket_id: String,
    pub status: String,
    pub message: String,
}
