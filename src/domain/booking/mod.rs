//! Booking aggregate
//!
//! Contains the Booking entity, journey key, and store interface.

pub mod model;
pub mod repository;

pub use model::{generate_ticket_id, normalize_ticket_id, Booking, BookingStatus, JourneyKey};
pub use repository::BookingStore;
