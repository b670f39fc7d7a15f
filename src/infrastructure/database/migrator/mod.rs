//! Database migrations

pub use sea_orm_migration::prelude::*;

mod m20250801_000001_create_bookings;
mod m20250801_000002_create_routes;
mod m20250801_000003_create_bus_stops;
mod m20250801_000004_create_system_config;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250801_000001_create_bookings::Migration),
            Box::new(m20250801_000002_create_routes::Migration),
            Box::new(m20250801_000003_create_bus_stops::Migration),
            Box::new(m20250801_000004_create_system_config::Migration),
        ]
    }
}
