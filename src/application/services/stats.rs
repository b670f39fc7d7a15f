//! Statistics aggregation
//!
//! Read-only summary metrics over the booking store. No side effects;
//! every figure is recomputed from `list_all` on request.

use std::collections::HashMap;
use std::sync::Arc;

use rust_decimal::Decimal;

use crate::domain::{Booking, BookingStore, DomainResult};

/// Number of routes returned by the default top-routes listing.
pub const DEFAULT_TOP_ROUTES: usize = 5;

/// One route with its confirmed-booking count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteCount {
    pub route: String,
    pub count: u64,
}

/// Aggregate booking metrics.
#[derive(Debug, Clone, PartialEq)]
pub struct BookingStats {
    pub total_bookings: u64,
    pub confirmed: u64,
    pub cancelled: u64,
    /// Sum of fare snapshots over confirmed bookings only; cancelled
    /// bookings contribute zero even though their fare was captured.
    pub total_revenue: Decimal,
    pub top_routes: Vec<RouteCount>,
}

pub struct StatsService {
    store: Arc<dyn BookingStore>,
}

impl StatsService {
    pub fn new(store: Arc<dyn BookingStore>) -> Self {
        Self { store }
    }

    pub async fn summary(&self) -> DomainResult<BookingStats> {
        let bookings = self.store.list_all().await?;
        Ok(aggregate(&bookings, DEFAULT_TOP_ROUTES))
    }

    pub async fn top_routes(&self, n: usize) -> DomainResult<Vec<RouteCount>> {
        let bookings = self.store.list_all().await?;
        Ok(aggregate(&bookings, n).top_routes)
    }
}

/// Compute the full summary from a booking snapshot.
///
/// Top routes are sorted descending by count; the order among equal
/// counts follows map iteration and is not specified.
pub fn aggregate(bookings: &[Booking], top_n: usize) -> BookingStats {
    let mut confirmed = 0u64;
    let mut cancelled = 0u64;
    let mut total_revenue = Decimal::ZERO;
    let mut route_counts: HashMap<String, u64> = HashMap::new();

    for booking in bookings {
        if booking.is_confirmed() {
            confirmed += 1;
            total_revenue += booking.fare;
            *route_counts.entry(booking.route_name()).or_insert(0) += 1;
        } else {
            cancelled += 1;
        }
    }

    let mut top_routes: Vec<RouteCount> = route_counts
        .into_iter()
        .map(|(route, count)| RouteCount { route, count })
        .collect();
    top_routes.sort_by(|a, b| b.count.cmp(&a.count));
    top_routes.truncate(top_n);

    BookingStats {
        total_bookings: bookings.len() as u64,
        confirmed,
        cancelled,
        total_revenue,
        top_routes,
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::BookingStatus;
    use chrono::{NaiveDate, Utc};

    fn sample_booking(route: (&str, &str), seat: u32, fare: u32) -> Booking {
        Booking {
            ticket_id: format!("T{seat:07}"),
            name: "Passenger".into(),
            age: 30,
            phone: "+263770000000".into(),
            email: None,
            departure: route.0.into(),
            destination: route.1.into(),
            date: NaiveDate::from_ymd_opt(2030, 1, 10).unwrap(),
            time: "08:00 AM".into(),
            seat,
            fare: Decimal::from(fare),
            status: BookingStatus::Confirmed,
            booked_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn empty_store_yields_zeroes() {
        let stats = aggregate(&[], DEFAULT_TOP_ROUTES);
        assert_eq!(stats.total_bookings, 0);
        assert_eq!(stats.confirmed, 0);
        assert_eq!(stats.cancelled, 0);
        assert_eq!(stats.total_revenue, Decimal::ZERO);
        assert!(stats.top_routes.is_empty());
    }

    #[test]
    fn revenue_counts_confirmed_only() {
        let mut cancelled = sample_booking(("Gweru", "Harare"), 2, 7);
        cancelled.cancel();
        let bookings = vec![
            sample_booking(("Bulawayo", "Harare"), 1, 15),
            cancelled,
            sample_booking(("Norton", "Harare"), 3, 2),
        ];

        let stats = aggregate(&bookings, DEFAULT_TOP_ROUTES);
        assert_eq!(stats.total_bookings, 3);
        assert_eq!(stats.confirmed, 2);
        assert_eq!(stats.cancelled, 1);
        assert_eq!(stats.total_revenue, Decimal::from(17));
    }

    #[test]
    fn cancelling_reduces_revenue_by_exactly_that_fare() {
        let mut bookings = vec![
            sample_booking(("Bulawayo", "Harare"), 1, 15),
            sample_booking(("Bulawayo", "Harare"), 2, 15),
        ];
        let before = aggregate(&bookings, DEFAULT_TOP_ROUTES).total_revenue;

        bookings[0].cancel();
        let after = aggregate(&bookings, DEFAULT_TOP_ROUTES).total_revenue;

        assert_eq!(before - after, Decimal::from(15));
    }

    #[test]
    fn top_routes_sorted_by_confirmed_count() {
        let mut cancelled = sample_booking(("Gweru", "Kwekwe"), 9, 3);
        cancelled.cancel();
        let bookings = vec![
            sample_booking(("Bulawayo", "Harare"), 1, 15),
            sample_booking(("Bulawayo", "Harare"), 2, 15),
            sample_booking(("Bulawayo", "Harare"), 3, 15),
            sample_booking(("Gweru", "Kwekwe"), 4, 3),
            // cancelled bookings never count toward route totals
            cancelled,
        ];

        let stats = aggregate(&bookings, DEFAULT_TOP_ROUTES);
        assert_eq!(stats.top_routes.len(), 2);
        assert_eq!(
            stats.top_routes[0],
            RouteCount {
                route: "Bulawayo to Harare".into(),
                count: 3
            }
        );
        assert_eq!(
            stats.top_routes[1],
            RouteCount {
                route: "Gweru to Kwekwe".into(),
                count: 1
            }
        );
    }

    #[test]
    fn top_routes_truncates_to_n_and_keeps_counts_on_ties() {
        let bookings: Vec<Booking> = [
            ("Bulawayo", "Harare"),
            ("Gweru", "Harare"),
            ("Kwekwe", "Harare"),
            ("Kadoma", "Harare"),
            ("Chegutu", "Harare"),
            ("Norton", "Harare"),
        ]
        .iter()
        .enumerate()
        .map(|(i, route)| sample_booking(*route, i as u32 + 1, 5))
        .collect();

        let top = aggregate(&bookings, 3).top_routes;
        // All counts tie at 1; the order among ties is unspecified, so
        // only size and counts are asserted.
        assert_eq!(top.len(), 3);
        assert!(top.iter().all(|rc| rc.count == 1));
    }
}
