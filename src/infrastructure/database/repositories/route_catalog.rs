//! SeaORM implementation of RouteCatalog
//!
//! Route reads are served from a cached snapshot of the routes table;
//! `update_fare` drops the snapshot so the very next read observes the
//! new value.

use std::collections::{BTreeSet, HashMap};
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use log::debug;
use rust_decimal::Decimal;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, Set};
use tokio::sync::RwLock;
use tracing::warn;

use crate::domain::catalog::defaults::DEFAULT_TOTAL_SEATS;
use crate::domain::catalog::{split_route_name, Route};
use crate::domain::{DomainError, DomainResult, RouteCatalog};
use crate::infrastructure::database::entities::{bus_stop, config_entry, route};

/// Key of the seat-capacity entry in the system_config table.
pub const TOTAL_SEATS_KEY: &str = "total_seats";

pub struct SeaOrmRouteCatalog {
    db: DatabaseConnection,
    cache: RwLock<Option<Arc<HashMap<String, Route>>>>,
}

impl SeaOrmRouteCatalog {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            db,
            cache: RwLock::new(None),
        }
    }

    async fn snapshot(&self) -> DomainResult<Arc<HashMap<String, Route>>> {
        if let Some(snapshot) = self.cache.read().await.clone() {
            return Ok(snapshot);
        }

        debug!("Loading route table from database");
        let models = route::Entity::find().all(&self.db).await.map_err(db_err)?;

        let mut routes = HashMap::with_capacity(models.len());
        for m in models {
            let Some((origin, destination)) = split_route_name(&m.route_name) else {
                warn!(route_name = %m.route_name, "Skipping malformed route name");
                continue;
            };
            routes.insert(
                m.route_name.clone(),
                Route::new(origin, destination, m.fare, m.schedule),
            );
        }

        let snapshot = Arc::new(routes);
        *self.cache.write().await = Some(snapshot.clone());
        Ok(snapshot)
    }

    async fn invalidate(&self) {
        *self.cache.write().await = None;
    }
}

fn db_err(e: sea_orm::DbErr) -> DomainError {
    DomainError::Storage(e.to_string())
}

#[async_trait]
impl RouteCatalog for SeaOrmRouteCatalog {
    async fn fare(&self, departure: &str, destination: &str) -> DomainResult<Option<Decimal>> {
        let name = crate::domain::catalog::route_name(departure, destination);
        Ok(self.snapshot().await?.get(&name).map(|r| r.fare))
    }

    async fn schedule(&self, departure: &str, destination: &str) -> DomainResult<Option<String>> {
        let name = crate::domain::catalog::route_name(departure, destination);
        Ok(self
            .snapshot()
            .await?
            .get(&name)
            .and_then(|r| r.schedule.clone()))
    }

    async fn list_routes(&self) -> DomainResult<Vec<Route>> {
        let mut routes: Vec<Route> = self.snapshot().await?.values().cloned().collect();
        routes.sort_by_key(Route::name);
        Ok(routes)
    }

    async fn cities(&self) -> DomainResult<Vec<String>> {
        let cities: BTreeSet<String> = self
            .snapshot()
            .await?
            .values()
            .flat_map(|r| [r.origin.clone(), r.destination.clone()])
            .collect();
        Ok(cities.into_iter().collect())
    }

    async fn update_fare(&self, name: &str, fare: Decimal) -> DomainResult<()> {
        if fare.is_sign_negative() {
            return Err(DomainError::Validation(
                "fare must be a non-negative number".into(),
            ));
        }

        let existing = route::Entity::find_by_id(name.to_string())
            .one(&self.db)
            .await
            .map_err(db_err)?;

        let Some(existing) = existing else {
            return Err(DomainError::NotFound {
                entity: "Route",
                field: "name",
                value: name.to_string(),
            });
        };

        debug!("Updating fare for {}: {}", name, fare);
        let mut active: route::ActiveModel = existing.into();
        active.fare = Set(fare);
        active.updated_at = Set(Utc::now());
        active.update(&self.db).await.map_err(db_err)?;

        self.invalidate().await;
        Ok(())
    }

    async fn total_seats(&self) -> DomainResult<u32> {
        let entry = config_entry::Entity::find_by_id(TOTAL_SEATS_KEY.to_string())
            .one(&self.db)
            .await
            .map_err(db_err)?;

        Ok(entry
            .and_then(|e| e.config_value.parse().ok())
            .unwrap_or_else(|| {
                warn!("total_seats missing from system_config, using default");
                DEFAULT_TOTAL_SEATS
            }))
    }

    async fn stop_info(&self, city: &str) -> DomainResult<Option<String>> {
        let stop = bus_stop::Entity::find_by_id(city.to_string())
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(stop.map(|s| s.description))
    }
}
