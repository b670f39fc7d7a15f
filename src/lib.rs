//! # Chikukwa Bus Booking Service
//!
//! Reservation service for a fixed network of intercity bus routes:
//! customers create, look up, and cancel bookings; operators view
//! statistics and edit fares.
//!
//! ## Architecture
//!
//! The project follows Clean Architecture principles:
//!
//! - **domain**: Core business entities, types and traits
//! - **application**: Booking and statistics services
//! - **infrastructure**: Database, in-memory fallback, resilience wrapper
//! - **interfaces**: REST API (thin dispatch to the core)
//! - **auth**: Operator credential gate
//!
//! The booking store has two interchangeable backends behind one
//! contract, durable (SeaORM) and in-memory; a resilient wrapper retries
//! transient failures once and then degrades to the fallback.

pub mod application;
pub mod auth;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;
pub mod shared;

pub use config::{default_config_path, AppConfig};

// Re-export database types for easy access
pub use infrastructure::{init_database, DatabaseConfig};

// Re-export API router
pub use interfaces::http::create_api_router;
