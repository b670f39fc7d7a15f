//! Built-in catalog data
//!
//! The default route network, schedules, and bus-stop descriptions used
//! to seed a fresh catalog (both the in-memory table and the durable
//! `routes` / `bus_stops` tables on first start).

use rust_decimal::Decimal;

use super::model::Route;

/// Default uniform seat capacity per journey.
pub const DEFAULT_TOTAL_SEATS: u32 = 50;

/// (origin, destination, fare, schedule). The Bulawayo↔Norton pair runs
/// without a published schedule.
const ROUTE_TABLE: &[(&str, &str, u32, Option<&str>)] = &[
    ("Bulawayo", "Gweru", 5, Some("08:00 AM")),
    ("Gweru", "Bulawayo", 5, Some("02:00 PM")),
    ("Bulawayo", "Kwekwe", 7, Some("09:00 AM")),
    ("Kwekwe", "Bulawayo", 7, Some("03:30 PM")),
    ("Bulawayo", "Kadoma", 8, Some("10:00 AM")),
    ("Kadoma", "Bulawayo", 8, Some("04:30 PM")),
    ("Bulawayo", "Chegutu", 10, Some("11:00 AM")),
    ("Chegutu", "Bulawayo", 10, Some("05:00 PM")),
    ("Bulawayo", "Norton", 13, None),
    ("Norton", "Bulawayo", 13, None),
    ("Bulawayo", "Harare", 15, Some("12:00 PM")),
    ("Harare", "Bulawayo", 15, Some("06:00 PM")),
    ("Gweru", "Kwekwe", 3, Some("09:00 AM")),
    ("Kwekwe", "Gweru", 3, Some("03:00 PM")),
    ("Gweru", "Kadoma", 4, Some("09:30 AM")),
    ("Kadoma", "Gweru", 4, Some("02:30 PM")),
    ("Gweru", "Chegutu", 5, Some("10:15 AM")),
    ("Chegutu", "Gweru", 5, Some("03:15 PM")),
    ("Gweru", "Norton", 6, Some("11:00 AM")),
    ("Norton", "Gweru", 6, Some("04:00 PM")),
    ("Gweru", "Harare", 7, Some("11:30 AM")),
    ("Harare", "Gweru", 7, Some("05:00 PM")),
    ("Kwekwe", "Kadoma", 2, Some("10:00 AM")),
    ("Kadoma", "Kwekwe", 2, Some("04:00 PM")),
    ("Kwekwe", "Chegutu", 6, Some("10:45 AM")),
    ("Chegutu", "Kwekwe", 6, Some("04:15 PM")),
    ("Kwekwe", "Norton", 9, Some("11:30 AM")),
    ("Norton", "Kwekwe", 9, Some("05:15 PM")),
    ("Kwekwe", "Harare", 10, Some("12:15 PM")),
    ("Harare", "Kwekwe", 10, Some("06:15 PM")),
    ("Kadoma", "Chegutu", 4, Some("10:30 AM")),
    ("Chegutu", "Kadoma", 4, Some("04:45 PM")),
    ("Kadoma", "Norton", 5, Some("11:00 AM")),
    ("Norton", "Kadoma", 5, Some("05:00 PM")),
    ("Kadoma", "Harare", 6, Some("11:30 AM")),
    ("Harare", "Kadoma", 6, Some("05:30 PM")),
    ("Chegutu", "Norton", 1, Some("11:45 AM")),
    ("Norton", "Chegutu", 1, Some("05:45 PM")),
    ("Chegutu", "Harare", 3, Some("12:15 PM")),
    ("Harare", "Chegutu", 3, Some("06:15 PM")),
    ("Norton", "Harare", 2, Some("12:30 PM")),
    ("Harare", "Norton", 2, Some("06:30 PM")),
];

const STOP_TABLE: &[(&str, &str)] = &[
    (
        "Bulawayo",
        "City Hall, Renkini Bus Terminus, and National Railways of Zimbabwe Station.",
    ),
    ("Gweru", "Main Street, City Centre, and Railway Station."),
    ("Kwekwe", "City Centre, Kwekwe Mall, and Railway Station."),
    ("Kadoma", "City Centre, Kadoma Mall, and Railway Station."),
    ("Chegutu", "City Centre, Chegutu Mall, and Railway Station."),
    ("Norton", "Main Street, Town Centre, and near the Post Office."),
    (
        "Harare",
        "City Centre, Avondale, and Mbare Musika Bus Terminus.",
    ),
];

/// The full default route network.
pub fn default_routes() -> Vec<Route> {
    ROUTE_TABLE
        .iter()
        .map(|(origin, destination, fare, schedule)| {
            Route::new(
                *origin,
                *destination,
                Decimal::from(*fare),
                schedule.map(str::to_string),
            )
        })
        .collect()
}

/// Default bus-stop descriptions per city.
pub fn default_stops() -> Vec<(String, String)> {
    STOP_TABLE
        .iter()
        .map(|(city, stops)| (city.to_string(), stops.to_string()))
        .collect()
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn every_route_has_a_reverse_entry() {
        let routes = default_routes();
        let names: HashSet<String> = routes.iter().map(Route::name).collect();
        assert_eq!(names.len(), routes.len());
        for r in &routes {
            let reverse = crate::domain::catalog::route_name(&r.destination, &r.origin);
            assert!(names.contains(&reverse), "missing reverse of {}", r.name());
        }
    }

    #[test]
    fn every_city_has_stop_info() {
        let cities: HashSet<String> = default_routes()
            .iter()
            .flat_map(|r| [r.origin.clone(), r.destination.clone()])
            .collect();
        let stops: HashSet<String> = default_stops().into_iter().map(|(city, _)| city).collect();
        assert_eq!(cities, stops);
    }

    #[test]
    fn bulawayo_norton_runs_unscheduled() {
        let routes = default_routes();
        let r = routes
            .iter()
            .find(|r| r.name() == "Bulawayo to Norton")
            .unwrap();
        assert!(r.schedule.is_none());
    }
}
