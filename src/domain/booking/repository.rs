//! Booking store interface
//!
//! Two interchangeable backends implement this contract (durable SeaORM
//! store and in-memory fallback); both must behave identically to every
//! caller. The shared conformance suite in `tests/` runs against each.

use async_trait::async_trait;

use super::model::{Booking, JourneyKey};
use crate::domain::DomainResult;

#[async_trait]
pub trait BookingStore: Send + Sync {
    /// Append a new booking.
    ///
    /// The availability check and the insert form a single logical unit:
    /// implementations re-check the seat-collision invariant inside their
    /// critical section (lock or transaction) and fail with `SeatConflict`
    /// if a confirmed booking already holds the slot, so two concurrent
    /// requests for the same tuple can never both succeed. Fails with
    /// `DuplicateTicketId` on identifier collision; the caller regenerates
    /// and retries once.
    async fn create(&self, booking: Booking) -> DomainResult<Booking>;

    /// Find a booking by ticket id (case-insensitive).
    async fn get(&self, ticket_id: &str) -> DomainResult<Option<Booking>>;

    /// Cancel a booking: fails with `NotFound` if absent and
    /// `AlreadyCancelled` if the status is already cancelled; otherwise
    /// flips the status, stamps the update time, and returns the record.
    async fn cancel(&self, ticket_id: &str) -> DomainResult<Booking>;

    /// All bookings, newest first. The record is retained permanently for
    /// audit and statistics; cancelled bookings are included.
    async fn list_all(&self) -> DomainResult<Vec<Booking>>;

    /// True iff no confirmed booking occupies the exact journey tuple.
    async fn is_seat_available(&self, key: &JourneyKey) -> DomainResult<bool>;
}
