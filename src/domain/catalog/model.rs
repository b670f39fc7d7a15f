//! Route domain entity

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Separator used in canonical route names ("Bulawayo to Harare").
const ROUTE_SEPARATOR: &str = " to ";

/// A directional city pair with its fare and optional schedule.
///
/// Routes are directional: A→B and B→A are distinct entries with
/// independently configured fare and schedule. There is no implicit
/// reverse-route fallback and no multi-hop pathing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Route {
    pub origin: String,
    pub destination: String,
    /// Non-negative fare quoted for future bookings
    pub fare: Decimal,
    /// Departure time-of-day as free text; absent schedules are reported
    /// as "N/A" rather than treated as errors.
    pub schedule: Option<String>,
}

impl Route {
    pub fn new(
        origin: impl Into<String>,
        destination: impl Into<String>,
        fare: Decimal,
        schedule: Option<String>,
    ) -> Self {
        Self {
            origin: origin.into(),
            destination: destination.into(),
            fare,
            schedule,
        }
    }

    /// Canonical route name: `"{origin} to {destination}"`.
    pub fn name(&self) -> String {
        route_name(&self.origin, &self.destination)
    }
}

/// Build the canonical route name for a city pair.
pub fn route_name(origin: &str, destination: &str) -> String {
    format!("{}{}{}", origin, ROUTE_SEPARATOR, destination)
}

/// Split a canonical route name back into its (origin, destination) pair.
/// Returns `None` when the separator is missing.
pub fn split_route_name(name: &str) -> Option<(&str, &str)> {
    name.split_once(ROUTE_SEPARATOR)
}

// ── Tests ──────────────────────────────────────────────────────
