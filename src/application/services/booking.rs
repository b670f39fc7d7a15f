//! Booking service: the consistency core
//!
//! Validates booking requests against the route catalog and the booking
//! store, enforces the seat-collision invariant, assigns ticket
//! identifiers, and drives the confirmed/cancelled transitions. Bookings
//! are created here and nowhere else.
//!
//! Validation runs as an explicit ordered pipeline (structure → semantic
//! fields → cross-entity checks → availability); when several checks
//! would fail, the first one wins, so error reporting is deterministic.

use std::sync::Arc;

use chrono::{NaiveDate, Utc};
use metrics::counter;
use tracing::{debug, info};

use crate::domain::booking::{generate_ticket_id, normalize_ticket_id};
use crate::domain::catalog::route_name;
use crate::domain::{Booking, BookingStatus, BookingStore, DomainError, DomainResult, JourneyKey, RouteCatalog};

/// Transport-agnostic booking request. All fields arrive optional so the
/// presence check belongs to the pipeline, not to deserialization.
#[derive(Debug, Clone, Default)]
pub struct BookingRequest {
    pub name: Option<String>,
    pub age: Option<i64>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub departure: Option<String>,
    pub destination: Option<String>,
    pub date: Option<String>,
    pub time: Option<String>,
    pub seat: Option<i64>,
}

/// Request fields after the presence check.
struct RequiredFields {
    name: String,
    age: i64,
    phone: String,
    email: Option<String>,
    departure: String,
    destination: String,
    date: String,
    time: String,
    seat: i64,
}

pub struct BookingService {
    catalog: Arc<dyn RouteCatalog>,
    store: Arc<dyn BookingStore>,
}

impl BookingService {
    pub fn new(catalog: Arc<dyn RouteCatalog>, store: Arc<dyn BookingStore>) -> Self {
        Self { catalog, store }
    }

    /// Create a booking, running the full validation pipeline.
    pub async fn create_booking(&self, request: BookingRequest) -> DomainResult<Booking> {
        // 1. presence  2. age  3. date  4. seat  5. route  6. availability
        let fields = required_fields(request)?;
        let age = parse_age(fields.age)?;
        let date = parse_travel_date(&fields.date, Utc::now().date_naive())?;
        let total_seats = self.catalog.total_seats().await?;
        let seat = parse_seat(fields.seat, total_seats)?;

        let fare = self
            .catalog
            .fare(&fields.departure, &fields.destination)
            .await?
            .ok_or_else(|| DomainError::NotFound {
                entity: "Route",
                field: "name",
                value: route_name(&fields.departure, &fields.destination),
            })?;

        let key = JourneyKey {
            departure: fields.departure.clone(),
            destination: fields.destination.clone(),
            date,
            time: fields.time.clone(),
            seat,
        };
        if !self.store.is_seat_available(&key).await? {
            counter!("bookings_seat_conflicts_total").increment(1);
            return Err(seat_conflict(&key));
        }

        let now = Utc::now();
        let booking = Booking {
            ticket_id: generate_ticket_id(),
            name: fields.name,
            age,
            phone: fields.phone,
            email: fields.email,
            departure: fields.departure,
            destination: fields.destination,
            date,
            time: fields.time,
            seat,
            fare,
            status: BookingStatus::Confirmed,
            booked_at: now,
            updated_at: now,
        };

        // The store re-checks the slot inside its critical section; an id
        // collision gets one fresh identifier before giving up.
        let created = match self.store.create(booking.clone()).await {
            Ok(created) => created,
            Err(DomainError::DuplicateTicketId(old)) => {
                debug!(ticket_id = %old, "Ticket id collision, regenerating");
                let mut retry = booking;
                retry.ticket_id = generate_ticket_id();
                self.store.create(retry).await?
            }
            Err(err) => {
                if matches!(err, DomainError::SeatConflict { .. }) {
                    counter!("bookings_seat_conflicts_total").increment(1);
                }
                return Err(err);
            }
        };

        counter!("bookings_created_total").increment(1);
        info!(
            ticket_id = %created.ticket_id,
            route = %created.route_name(),
            seat = created.seat,
            "Booking confirmed"
        );
        Ok(created)
    }

    /// Fetch a booking by ticket id (case-insensitive).
    pub async fn get_booking(&self, ticket_id: &str) -> DomainResult<Booking> {
        let id = normalize_ticket_id(ticket_id);
        self.store
            .get(&id)
            .await?
            .ok_or(DomainError::NotFound {
                entity: "Booking",
                field: "ticket_id",
                value: id,
            })
    }

    /// Cancel a booking. Cancellation is terminal: a second cancel fails
    /// with `AlreadyCancelled`, never silently succeeds.
    pub async fn cancel_booking(&self, ticket_id: &str) -> DomainResult<Booking> {
        let id = normalize_ticket_id(ticket_id);
        let cancelled = self.store.cancel(&id).await?;
        counter!("bookings_cancelled_total").increment(1);
        info!(ticket_id = %cancelled.ticket_id, "Booking cancelled");
        Ok(cancelled)
    }

    /// All bookings, for the operator view.
    pub async fn list_bookings(&self) -> DomainResult<Vec<Booking>> {
        self.store.list_all().await
    }
}

// ── Validation pipeline steps ──────────────────────────────────

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}

fn required_fields(request: BookingRequest) -> DomainResult<RequiredFields> {
    let missing = || DomainError::Validation("missing required fields".into());
    Ok(RequiredFields {
        name: non_blank(request.name).ok_or_else(missing)?,
        age: request.age.ok_or_else(missing)?,
        phone: non_blank(request.phone).ok_or_else(missing)?,
        email: non_blank(request.email),
        departure: non_blank(request.departure).ok_or_else(missing)?,
        destination: non_blank(request.destination).ok_or_else(missing)?,
        date: non_blank(request.date).ok_or_else(missing)?,
        time: non_blank(request.time).ok_or_else(missing)?,
        seat: request.seat.ok_or_else(missing)?,
    })
}

fn parse_age(age: i64) -> DomainResult<i32> {
    if (1..=120).contains(&age) {
        Ok(age as i32)
    } else {
        Err(DomainError::Validation("invalid age".into()))
    }
}

fn parse_travel_date(raw: &str, today: NaiveDate) -> DomainResult<NaiveDate> {
    let date = NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map_err(|_| DomainError::Validation("invalid or past date".into()))?;
    if date < today {
        return Err(DomainError::Validation("invalid or past date".into()));
    }
    Ok(date)
}

fn parse_seat(seat: i64, total_seats: u32) -> DomainResult<u32> {
    if seat >= 1 && seat <= i64::from(total_seats) {
        Ok(seat as u32)
    } else {
        Err(DomainError::Validation("invalid seat".into()))
    }
}

fn seat_conflict(key: &JourneyKey) -> DomainError {
    DomainError::SeatConflict {
        route: key.route_name(),
        date: key.date.to_string(),
        time: key.time.clone(),
        seat: key.seat,
    }
}

// ── Tests ──────────────────────────────────────────────────────
