//! Route catalog aggregate
//!
//! The pricing and validity oracle for all bookings: directional
//! route → fare/schedule entries, bus-stop descriptions, and the uniform
//! seat capacity.

pub mod defaults;
pub mod model;
pub mod repository;

pub use model::{route_name, split_route_name, Route};
pub use repository::RouteCatalog;
