//! SeaORM-backed repositories

mod booking_store;
mod route_catalog;

pub use booking_store::SeaOrmBookingStore;
pub use route_catalog::{SeaOrmRouteCatalog, TOTAL_SEATS_KEY};
