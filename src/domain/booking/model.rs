//! Booking domain entity

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Booking status
///
/// Two-state machine: a booking is created `Confirmed` and the only
/// transition is Confirmed → Cancelled. Cancellation is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Confirmed,
    Cancelled,
}

impl BookingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Confirmed => "confirmed",
            Self::Cancelled => "cancelled",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "cancelled" => Self::Cancelled,
            _ => Self::Confirmed,
        }
    }
}

impl std::fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The tuple the seat-collision invariant ranges over: at most one
/// confirmed booking may hold a given (departure, destination, date,
/// time, seat) combination.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct JourneyKey {
    pub departure: String,
    pub destination: String,
    pub date: NaiveDate,
    pub time: String,
    pub seat: u32,
}

impl JourneyKey {
    /// Route name in the canonical `"{departure} to {destination}"` form.
    pub fn route_name(&self) -> String {
        format!("{} to {}", self.departure, self.destination)
    }
}

/// A seat reservation on a single journey
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Booking {
    /// Short shareable identifier, stored uppercase
    pub ticket_id: String,
    pub name: String,
    pub age: i32,
    pub phone: String,
    pub email: Option<String>,
    pub departure: String,
    pub destination: String,
    /// Travel date (calendar date, `YYYY-MM-DD` on the wire)
    pub date: NaiveDate,
    /// Departure time-of-day as shown on the schedule (e.g. "08:00 AM")
    pub time: String,
    pub seat: u32,
    /// Fare captured from the catalog at booking time; later fare edits
    /// never touch this snapshot.
    pub fare: Decimal,
    pub status: BookingStatus,
    pub booked_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Booking {
    pub fn route_name(&self) -> String {
        format!("{} to {}", self.departure, self.destination)
    }

    pub fn journey(&self) -> JourneyKey {
        JourneyKey {
            departure: self.departure.clone(),
            destination: self.destination.clone(),
            date: self.date,
            time: self.time.clone(),
            seat: self.seat,
        }
    }

    pub fn is_confirmed(&self) -> bool {
        self.status == BookingStatus::Confirmed
    }

    /// Flip to cancelled and stamp the update time.
    pub fn cancel(&mut self) {
        self.status = BookingStatus::Cancelled;
        self.updated_at = Utc::now();
    }

    /// Whether this booking holds the given slot (confirmed only;
    /// cancelled bookings free the slot).
    pub fn occupies(&self, key: &JourneyKey) -> bool {
        self.is_confirmed()
            && self.departure == key.departure
            && self.destination == key.destination
            && self.date == key.date
            && self.time == key.time
            && self.seat == key.seat
    }
}

/// Normalize a ticket id for lookup: ids are case-insensitive and
/// stored uppercase on both write and read.
pub fn normalize_ticket_id(raw: &str) -> String {
    raw.trim().to_uppercase()
}

/// Generate a fresh ticket identifier: 8 uppercase hex characters from
/// a UUIDv4. Collisions are astronomically unlikely; the caller retries
/// once on a duplicate.
pub fn generate_ticket_id() -> String {
    Uuid::new_v4().simple().to_string()[..8].to_uppercase()
}

// ── Tests ──────────────────────────────────────────────────────
