//! Resilient booking store
//!
//! Wraps the durable backend with the in-memory fallback: a transient
//! primary failure is retried once, and if it persists the operation is
//! served by the fallback instead of failing the request, trading
//! durability for availability. Validation and business-rule failures
//! pass through untouched; they are answers, not outages.

use std::sync::Arc;

use async_trait::async_trait;
use metrics::counter;
use tracing::warn;

use crate::domain::{Booking, BookingStore, DomainError, DomainResult, JourneyKey};
use crate::shared::retry::{retry_transient, RetryConfig};

pub struct ResilientBookingStore {
    primary: Arc<dyn BookingStore>,
    fallback: Arc<dyn BookingStore>,
    retry: RetryConfig,
}

impl ResilientBookingStore {
    pub fn new(primary: Arc<dyn BookingStore>, fallback: Arc<dyn BookingStore>) -> Self {
        Self {
            primary,
            fallback,
            retry: RetryConfig::default(),
        }
    }

    fn degrade(&self, operation: &str, err: &DomainError) {
        counter!("store_fallback_total").increment(1);
        warn!(
            operation,
            error = %err,
            "Durable store unavailable, serving from in-memory fallback"
        );
    }
}

#[async_trait]
impl BookingStore for ResilientBookingStore {
    async fn create(&self, booking: Booking) -> DomainResult<Booking> {
        let primary = retry_transient(
            &self.retry,
            || self.primary.create(booking.clone()),
            "create",
        )
        .await;
        match primary {
            Err(err) if err.is_transient() => {
                self.degrade("create", &err);
                self.fallback.create(booking).await
            }
            other => other,
        }
    }

    async fn get(&self, ticket_id: &str) -> DomainResult<Option<Booking>> {
        let primary =
            retry_transient(&self.retry, || self.primary.get(ticket_id), "get").await;
        match primary {
            Err(err) if err.is_transient() => {
                self.degrade("get", &err);
                self.fallback.get(ticket_id).await
            }
            other => other,
        }
    }

    async fn cancel(&self, ticket_id: &str) -> DomainResult<Booking> {
        let primary =
            retry_transient(&self.retry, || self.primary.cancel(ticket_id), "cancel").await;
        match primary {
            Err(err) if err.is_transient() => {
                self.degrade("cancel", &err);
                self.fallback.cancel(ticket_id).await
            }
            other => other,
        }
    }

    async fn list_all(&self) -> DomainResult<Vec<Booking>> {
        let primary =
            retry_transient(&self.retry, || self.primary.list_all(), "list_all").await;
        match primary {
            Err(err) if err.is_transient() => {
                self.degrade("list_all", &err);
                self.fallback.list_all().await
            }
            other => other,
        }
    }

    async fn is_seat_available(&self, key: &JourneyKey) -> DomainResult<bool> {
        let primary = retry_transient(
            &self.retry,
            || self.primary.is_seat_available(key),
            "is_seat_available",
        )
        .await;
        match primary {
            Err(err) if err.is_transient() => {
                self.degrade("is_seat_available", &err);
                self.fallback.is_seat_available(key).await
            }
            other => other,
        }
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::storage::InMemoryBookingStore;
    use chrono::{NaiveDate, Utc};
    use rust_decimal::Decimal;
    use std::sync::atomic::{AtomicU32, Ordering};

    use crate::domain::BookingStatus;

    /// Primary that always fails the configured way.
    struct BrokenStore {
        error: fn() -> DomainError,
        calls: AtomicU32,
    }

    impl BrokenStore {
        fn transient() -> Self {
            Self {
                error: || DomainError::Storage("connection refused".into()),
                calls: AtomicU32::new(0),
            }
        }

        fn rejecting() -> Self {
            Self {
                error: || DomainError::AlreadyCancelled("AB12CD34".into()),
                calls: AtomicU32::new(0),
            }
        }
    }

    #[async_trait]
    impl BookingStore for BrokenStore {
        async fn create(&self, _booking: Booking) -> DomainResult<Booking> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Err((self.error)())
        }
        async fn get(&self, _ticket_id: &str) -> DomainResult<Option<Booking>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Err((self.error)())
        }
        async fn cancel(&self, _ticket_id: &str) -> DomainResult<Booking> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Err((self.error)())
        }
        async fn list_all(&self) -> DomainResult<Vec<Booking>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Err((self.error)())
        }
        async fn is_seat_available(&self, _key: &JourneyKey) -> DomainResult<bool> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Err((self.error)())
        }
    }

    fn sample_booking() -> Booking {
        Booking {
            ticket_id: "AB12CD34".into(),
            name: "Tariro Moyo".into(),
            age: 28,
            phone: "+263771234567".into(),
            email: None,
            departure: "Bulawayo".into(),
            destination: "Harare".into(),
            date: NaiveDate::from_ymd_opt(2030, 6, 15).unwrap(),
            time: "12:00 PM".into(),
            seat: 14,
            fare: Decimal::from(15),
            status: BookingStatus::Confirmed,
            booked_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn transient_failure_degrades_to_fallback() {
        let primary = Arc::new(BrokenStore::transient());
        let fallback = Arc::new(InMemoryBookingStore::new());
        let store = ResilientBookingStore::new(primary.clone(), fallback.clone());

        let created = store.create(sample_booking()).await.unwrap();
        assert_eq!(created.ticket_id, "AB12CD34");

        // Retried once before degrading
        assert_eq!(primary.calls.load(Ordering::SeqCst), 2);

        // The record lives in the fallback and stays reachable
        let found = store.get("ab12cd34").await.unwrap().unwrap();
        assert_eq!(found.ticket_id, "AB12CD34");
    }

    #[tokio::test]
    async fn business_errors_pass_through_without_fallback() {
        let primary = Arc::new(BrokenStore::rejecting());
        let fallback = Arc::new(InMemoryBookingStore::new());
        let store = ResilientBookingStore::new(primary.clone(), fallback);

        let err = store.cancel("AB12CD34").await.unwrap_err();
        assert!(matches!(err, DomainError::AlreadyCancelled(_)));
        // No retry either: the error is an answer, not an outage
        assert_eq!(primary.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn healthy_primary_is_used_directly() {
        let primary = Arc::new(InMemoryBookingStore::new());
        let fallback = Arc::new(InMemoryBookingStore::new());
        let store = ResilientBookingStore::new(primary.clone(), fallback.clone());

        store.create(sample_booking()).await.unwrap();
        assert!(primary.get("AB12CD34").await.unwrap().is_some());
        assert!(fallback.get("AB12CD34").await.unwrap().is_none());
    }
}
