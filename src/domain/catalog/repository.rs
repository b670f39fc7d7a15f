//! Route catalog interface

use async_trait::async_trait;
use rust_decimal::Decimal;

use super::model::Route;
use crate::domain::DomainResult;

/// Pricing and validity oracle consulted by every booking.
///
/// Reads may be served from a cached snapshot, but the cache must be
/// refreshed immediately after `update_fare` so subsequent fare quotes
/// observe the new value.
#[async_trait]
pub trait RouteCatalog: Send + Sync {
    /// Fare for the exact directional route, or `None` when no such
    /// route exists. No reverse-route fallback, no multi-hop pathing.
    async fn fare(&self, departure: &str, destination: &str) -> DomainResult<Option<Decimal>>;

    /// Scheduled departure time for the route. `None` means the route
    /// exists but runs unscheduled (rendered as "N/A"), and also covers
    /// unknown routes; callers that must distinguish use `fare` first.
    async fn schedule(&self, departure: &str, destination: &str) -> DomainResult<Option<String>>;

    /// The full route table (admin view and public schedule listing).
    async fn list_routes(&self) -> DomainResult<Vec<Route>>;

    /// Union of all origins and destinations, sorted for deterministic
    /// presentation.
    async fn cities(&self) -> DomainResult<Vec<String>>;

    /// Overwrite the fare for future bookings. Fails with `Validation`
    /// for a negative fare (checked before any mutation) and `NotFound`
    /// when the route does not exist. Existing fare snapshots on
    /// bookings are untouched.
    async fn update_fare(&self, route_name: &str, fare: Decimal) -> DomainResult<()>;

    /// Uniform seat capacity per journey (positive).
    async fn total_seats(&self) -> DomainResult<u32>;

    /// Free-text description of a city's physical stops.
    async fn stop_info(&self, city: &str) -> DomainResult<Option<String>>;
}
