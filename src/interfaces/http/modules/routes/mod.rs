//! Public route, schedule, and stop endpoints

pub mod dto;
pub mod handlers;

pub use handlers::RoutesAppState;
