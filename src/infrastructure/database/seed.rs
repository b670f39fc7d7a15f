//! First-start catalog seeding
//!
//! Populates empty routes / bus_stops / system_config tables with the
//! built-in network, mirroring the defaults served by the in-memory
//! catalog. Existing rows are never touched, so operator fare edits
//! survive restarts.

use chrono::Utc;
use sea_orm::{DatabaseConnection, EntityTrait, PaginatorTrait, Set};
use tracing::info;

use crate::domain::catalog::defaults::{default_routes, default_stops};
use crate::infrastructure::database::entities::{bus_stop, config_entry, route};
use crate::infrastructure::database::repositories::TOTAL_SEATS_KEY;

pub async fn seed_default_catalog(
    db: &DatabaseConnection,
    total_seats: u32,
) -> Result<(), sea_orm::DbErr> {
    let now = Utc::now();

    if route::Entity::find().count(db).await? == 0 {
        let rows: Vec<route::ActiveModel> = default_routes()
            .into_iter()
            .map(|r| route::ActiveModel {
                route_name: Set(r.name()),
                fare: Set(r.fare),
                schedule: Set(r.schedule),
                updated_at: Set(now),
            })
            .collect();
        let count = rows.len();
        route::Entity::insert_many(rows).exec(db).await?;
        info!("Seeded {} default routes", count);
    }

    if bus_stop::Entity::find().count(db).await? == 0 {
        let rows: Vec<bus_stop::ActiveModel> = default_stops()
            .into_iter()
            .map(|(city, description)| bus_stop::ActiveModel {
                city: Set(city),
                description: Set(description),
            })
            .collect();
        let count = rows.len();
        bus_stop::Entity::insert_many(rows).exec(db).await?;
        info!("Seeded {} bus stops", count);
    }

    let seats_entry = config_entry::Entity::find_by_id(TOTAL_SEATS_KEY.to_string())
        .one(db)
        .await?;
    if seats_entry.is_none() {
        config_entry::Entity::insert(config_entry::ActiveModel {
            config_key: Set(TOTAL_SEATS_KEY.to_string()),
            config_value: Set(total_seats.to_string()),
            updated_at: Set(now),
        })
        .exec(db)
        .await?;
        info!("Seeded seat capacity: {}", total_seats);
    }

    Ok(())
}
