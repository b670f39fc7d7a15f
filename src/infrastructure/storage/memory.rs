//! In-memory storage implementation
//!
//! The fallback backend: behaviorally identical to the durable store but
//! process-local. Used directly when the database is unreachable and as
//! the degradation target of the resilient wrapper.

use std::collections::{BTreeSet, HashMap};
use std::sync::{PoisonError, RwLock};

use async_trait::async_trait;
use dashmap::DashMap;
use rust_decimal::Decimal;
use tokio::sync::Mutex;

use crate::domain::booking::normalize_ticket_id;
use crate::domain::catalog::{route_name, Route};
use crate::domain::{
    Booking, BookingStore, DomainError, DomainResult, JourneyKey, RouteCatalog,
};

/// In-memory booking store.
///
/// Bookings live in a concurrent map keyed by normalized ticket id. The
/// seat-collision invariant spans rows, so `create` serializes its
/// check-then-insert sequence behind one mutex; per-entry operations
/// (get, cancel) do not need it.
pub struct InMemoryBookingStore {
    bookings: DashMap<String, Booking>,
    create_lock: Mutex<()>,
}

impl InMemoryBookingStore {
    pub fn new() -> Self {
        Self {
            bookings: DashMap::new(),
            create_lock: Mutex::new(()),
        }
    }

    fn slot_taken(&self, key: &JourneyKey) -> bool {
        self.bookings.iter().any(|entry| entry.value().occupies(key))
    }
}

impl Default for InMemoryBookingStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BookingStore for InMemoryBookingStore {
    async fn create(&self, mut booking: Booking) -> DomainResult<Booking> {
        booking.ticket_id = normalize_ticket_id(&booking.ticket_id);

        // Single critical section across the availability check and the
        // insert; two concurrent requests for the same slot cannot both
        // observe it free.
        let _guard = self.create_lock.lock().await;

        if self.slot_taken(&booking.journey()) {
            return Err(DomainError::SeatConflict {
                route: booking.route_name(),
                date: booking.date.to_string(),
                time: booking.time.clone(),
                seat: booking.seat,
            });
        }
        if self.bookings.contains_key(&booking.ticket_id) {
            return Err(DomainError::DuplicateTicketId(booking.ticket_id));
        }

        self.bookings
            .insert(booking.ticket_id.clone(), booking.clone());
        Ok(booking)
    }

    async fn get(&self, ticket_id: &str) -> DomainResult<Option<Booking>> {
        let id = normalize_ticket_id(ticket_id);
        Ok(self.bookings.get(&id).map(|b| b.clone()))
    }

    async fn cancel(&self, ticket_id: &str) -> DomainResult<Booking> {
        let id = normalize_ticket_id(ticket_id);
        let Some(mut entry) = self.bookings.get_mut(&id) else {
            return Err(DomainError::NotFound {
                entity: "Booking",
                field: "ticket_id",
                value: id,
            });
        };
        if !entry.is_confirmed() {
            return Err(DomainError::AlreadyCancelled(id));
        }
        entry.cancel();
        Ok(entry.clone())
    }

    async fn list_all(&self) -> DomainResult<Vec<Booking>> {
        let mut bookings: Vec<Booking> = self.bookings.iter().map(|b| b.clone()).collect();
        bookings.sort_by(|a, b| {
            b.booked_at
                .cmp(&a.booked_at)
                .then_with(|| a.ticket_id.cmp(&b.ticket_id))
        });
        Ok(bookings)
    }

    async fn is_seat_available(&self, key: &JourneyKey) -> DomainResult<bool> {
        Ok(!self.slot_taken(key))
    }
}

// ── Route catalog ──────────────────────────────────────────────

struct CatalogTable {
    routes: HashMap<String, Route>,
    stops: HashMap<String, String>,
    total_seats: u32,
}

/// In-memory route catalog, seeded from the built-in network or an
/// explicit table. The whole table sits behind one lock; `update_fare`
/// takes the write side, so readers always observe the new fare.
pub struct InMemoryRouteCatalog {
    table: RwLock<CatalogTable>,
}

impl InMemoryRouteCatalog {
    pub fn new(routes: Vec<Route>, stops: Vec<(String, String)>, total_seats: u32) -> Self {
        Self {
            table: RwLock::new(CatalogTable {
                routes: routes.into_iter().map(|r| (r.name(), r)).collect(),
                stops: stops.into_iter().collect(),
                total_seats,
            }),
        }
    }

    /// The default Chikukwa network with the standard seat capacity.
    pub fn with_defaults() -> Self {
        use crate::domain::catalog::defaults;
        Self::new(
            defaults::default_routes(),
            defaults::default_stops(),
            defaults::DEFAULT_TOTAL_SEATS,
        )
    }

    fn read(&self) -> std::sync::RwLockReadGuard<'_, CatalogTable> {
        self.table.read().unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait]
impl RouteCatalog for InMemoryRouteCatalog {
    async fn fare(&self, departure: &str, destination: &str) -> DomainResult<Option<Decimal>> {
        let name = route_name(departure, destination);
        Ok(self.read().routes.get(&name).map(|r| r.fare))
    }

    async fn schedule(&self, departure: &str, destination: &str) -> DomainResult<Option<String>> {
        let name = route_name(departure, destination);
        Ok(self.read().routes.get(&name).and_then(|r| r.schedule.clone()))
    }

    async fn list_routes(&self) -> DomainResult<Vec<Route>> {
        let mut routes: Vec<Route> = self.read().routes.values().cloned().collect();
        routes.sort_by_key(Route::name);
        Ok(routes)
    }

    async fn cities(&self) -> DomainResult<Vec<String>> {
        let cities: BTreeSet<String> = self
            .read()
            .routes
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
        let mut table = self.table.write().unwrap_or_else(PoisonError::into_inner);
        let route = table
            .routes
            .get_mut(name)
            .ok_or_else(|| DomainError::NotFound {
                entity: "Route",
                field: "name",
                value: name.to_string(),
            })?;
        route.fare = fare;
        Ok(())
    }

    async fn total_seats(&self) -> DomainResult<u32> {
        Ok(self.read().total_seats)
    }

    async fn stop_info(&self, city: &str) -> DomainResult<Option<String>> {
        Ok(self.read().stops.get(city).cloned())
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn fare_lookup_is_strictly_directional() {
        let catalog = InMemoryRouteCatalog::new(
            vec![Route::new("A", "B", Decimal::from(5), None)],
            vec![],
            10,
        );
        assert_eq!(catalog.fare("A", "B").await.unwrap(), Some(Decimal::from(5)));
        // No implicit reverse-route fallback
        assert_eq!(catalog.fare("B", "A").await.unwrap(), None);
    }

    #[tokio::test]
    async fn missing_schedule_degrades_to_none() {
        let catalog = InMemoryRouteCatalog::with_defaults();
        assert_eq!(catalog.schedule("Bulawayo", "Norton").await.unwrap(), None);
        assert_eq!(
            catalog.schedule("Bulawayo", "Harare").await.unwrap(),
            Some("12:00 PM".into())
        );
    }

    #[tokio::test]
    async fn cities_are_sorted_union_of_endpoints() {
        let catalog = InMemoryRouteCatalog::new(
            vec![
                Route::new("Gweru", "Harare", Decimal::from(7), None),
                Route::new("Bulawayo", "Gweru", Decimal::from(5), None),
            ],
            vec![],
            10,
        );
        assert_eq!(
            catalog.cities().await.unwrap(),
            vec!["Bulawayo".to_string(), "Gweru".into(), "Harare".into()]
        );
    }

    #[tokio::test]
    async fn update_fare_rejects_negative_before_lookup() {
        let catalog = InMemoryRouteCatalog::with_defaults();
        let err = catalog
            .update_fare("No Such Route", Decimal::from(-1))
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[tokio::test]
    async fn update_fare_unknown_route_is_not_found() {
        let catalog = InMemoryRouteCatalog::with_defaults();
        let err = catalog
            .update_fare("Harare to Nowhere", Decimal::from(9))
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::NotFound { .. }));
    }

    #[tokio::test]
    async fn update_fare_is_visible_to_subsequent_reads() {
        let catalog = InMemoryRouteCatalog::with_defaults();
        catalog
            .update_fare("Bulawayo to Harare", Decimal::new(175, 1))
            .await
            .unwrap();
        assert_eq!(
            catalog.fare("Bulawayo", "Harare").await.unwrap(),
            Some(Decimal::new(175, 1))
        );
        // The opposite direction keeps its own fare
        assert_eq!(
            catalog.fare("Harare", "Bulawayo").await.unwrap(),
            Some(Decimal::from(15))
        );
    }

    #[tokio::test]
    async fn list_routes_is_sorted_by_name() {
        let catalog = InMemoryRouteCatalog::with_defaults();
        let routes = catalog.list_routes().await.unwrap();
        let names: Vec<String> = routes.iter().map(Route::name).collect();
        let mut sorted = names.clone();
        sorted.sort();
        assert_eq!(names, sorted);
    }

    #[tokio::test]
    async fn stop_info_for_unknown_city_is_none() {
        let catalog = InMemoryRouteCatalog::with_defaults();
        assert!(catalog.stop_info("Harare").await.unwrap().is_some());
        assert!(catalog.stop_info("Victoria Falls").await.unwrap().is_none());
    }
}
