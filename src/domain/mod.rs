//! Core business entities, types and traits

pub mod booking;
pub mod catalog;
pub mod error;

pub use booking::{Booking, BookingStatus, BookingStore, JourneyKey};
pub use catalog::{Route, RouteCatalog};
pub use error::{DomainError, DomainResult};
