//! SeaORM entities

pub mod booking;
pub mod bus_stop;
pub mod config_entry;
pub mod route;
