//! Booking store conformance suite
//!
//! One behavioral suite executed against both backends (the in-memory
//! fallback and the durable SeaORM store) to guarantee callers cannot
//! tell them apart.

use std::sync::Arc;

use chrono::{Duration, NaiveDate, Utc};
use rust_decimal::Decimal;
use sea_orm::{ConnectOptions, Database};
use sea_orm_migration::MigratorTrait;

use chikukwa_bus::domain::{Booking, BookingStatus, BookingStore, DomainError, JourneyKey};
use chikukwa_bus::infrastructure::database::migrator::Migrator;
use chikukwa_bus::infrastructure::database::repositories::SeaOrmBookingStore;
use chikukwa_bus::infrastructure::InMemoryBookingStore;

fn memory_store() -> Arc<dyn BookingStore> {
    Arc::new(InMemoryBookingStore::new())
}

async fn seaorm_store() -> Arc<dyn BookingStore> {
    // One pooled connection: every query must observe the same
    // in-memory database.
    let mut options = ConnectOptions::new("sqlite::memory:");
    options.max_connections(1);
    let db = Database::connect(options)
        .await
        .expect("connect to in-memory sqlite");
    Migrator::up(&db, None).await.expect("run migrations");
    Arc::new(SeaOrmBookingStore::new(db))
}

fn booking(ticket_id: &str, seat: u32) -> Booking {
    let now = Utc::now();
    Booking {
        ticket_id: ticket_id.to_string(),
        name: "Tariro Moyo".into(),
        age: 28,
        phone: "+263771234567".into(),
        email: Some("tariro@example.com".into()),
        departure: "Bulawayo".into(),
        destination: "Harare".into(),
        date: NaiveDate::from_ymd_opt(2030, 6, 15).unwrap(),
        time: "12:00 PM".into(),
        seat,
        fare: Decimal::from(15),
        status: BookingStatus::Confirmed,
        booked_at: now,
        updated_at: now,
    }
}

fn journey(seat: u32) -> JourneyKey {
    JourneyKey {
        departure: "Bulawayo".into(),
        destination: "Harare".into(),
        date: NaiveDate::from_ymd_opt(2030, 6, 15).unwrap(),
        time: "12:00 PM".into(),
        seat,
    }
}

// ── The suite ──────────────────────────────────────────────────

async fn create_get_roundtrip(store: Arc<dyn BookingStore>) {
    let created = store.create(booking("AB12CD34", 1)).await.unwrap();
    assert_eq!(created.ticket_id, "AB12CD34");
    assert_eq!(created.status, BookingStatus::Confirmed);

    let found = store.get("AB12CD34").await.unwrap().unwrap();
    assert_eq!(found.ticket_id, created.ticket_id);
    assert_eq!(found.seat, 1);
    assert_eq!(found.fare, Decimal::from(15));
    assert_eq!(found.date, created.date);
}

async fn ids_normalize_on_write_and_read(store: Arc<dyn BookingStore>) {
    let created = store.create(booking("ab12cd34", 1)).await.unwrap();
    assert_eq!(created.ticket_id, "AB12CD34");

    assert!(store.get("AB12CD34").await.unwrap().is_some());
    assert!(store.get("ab12cd34").await.unwrap().is_some());
    assert!(store.get("Ab12Cd34").await.unwrap().is_some());
    assert!(store.get("ZZ99ZZ99").await.unwrap().is_none());
}

async fn duplicate_id_is_rejected(store: Arc<dyn BookingStore>) {
    store.create(booking("AB12CD34", 1)).await.unwrap();
    let err = store.create(booking("ab12cd34", 2)).await.unwrap_err();
    assert!(matches!(err, DomainError::DuplicateTicketId(id) if id == "AB12CD34"));
}

async fn seat_collision_is_enforced(store: Arc<dyn BookingStore>) {
    store.create(booking("AAAA1111", 7)).await.unwrap();
    assert!(!store.is_seat_available(&journey(7)).await.unwrap());

    let err = store.create(booking("BBBB2222", 7)).await.unwrap_err();
    assert!(matches!(err, DomainError::SeatConflict { seat: 7, .. }));

    // Exact-tuple only: different seat, date, time, or direction all pass
    assert!(store.is_seat_available(&journey(8)).await.unwrap());

    let mut other_date = booking("CCCC3333", 7);
    other_date.date = other_date.date.succ_opt().unwrap();
    store.create(other_date).await.unwrap();

    let mut other_time = booking("DDDD4444", 7);
    other_time.time = "06:00 PM".into();
    store.create(other_time).await.unwrap();

    let mut reversed = booking("EEEE5555", 7);
    std::mem::swap(&mut reversed.departure, &mut reversed.destination);
    store.create(reversed).await.unwrap();
}

async fn cancel_frees_the_slot(store: Arc<dyn BookingStore>) {
    store.create(booking("AAAA1111", 3)).await.unwrap();
    let cancelled = store.cancel("AAAA1111").await.unwrap();
    assert_eq!(cancelled.status, BookingStatus::Cancelled);

    assert!(store.is_seat_available(&journey(3)).await.unwrap());
    let rebooked = store.create(booking("BBBB2222", 3)).await.unwrap();
    assert_eq!(rebooked.seat, 3);
}

async fn cancel_is_terminal_and_stamps_update(store: Arc<dyn BookingStore>) {
    store.create(booking("AAAA1111", 3)).await.unwrap();

    let cancelled = store.cancel("aaaa1111").await.unwrap();
    assert!(cancelled.updated_at >= cancelled.booked_at);

    let err = store.cancel("AAAA1111").await.unwrap_err();
    assert!(matches!(err, DomainError::AlreadyCancelled(_)));

    let err = store.cancel("ZZ99ZZ99").await.unwrap_err();
    assert!(matches!(err, DomainError::NotFound { .. }));
}

async fn list_keeps_cancelled_newest_first(store: Arc<dyn BookingStore>) {
    let mut oldest = booking("AAAA1111", 1);
    oldest.booked_at = oldest.booked_at - Duration::minutes(10);
    store.create(oldest).await.unwrap();
    store.create(booking("BBBB2222", 2)).await.unwrap();
    store.cancel("AAAA1111").await.unwrap();

    let all = store.list_all().await.unwrap();
    assert_eq!(all.len(), 2);
    assert_eq!(all[0].ticket_id, "BBBB2222");
    assert_eq!(all[1].ticket_id, "AAAA1111");
    assert_eq!(all[1].status, BookingStatus::Cancelled);
}

async fn concurrent_creates_yield_one_winner(store: Arc<dyn BookingStore>) {
    let mut handles = Vec::new();
    for i in 0..8u32 {
        let store = store.clone();
        handles.push(tokio::spawn(async move {
            store.create(booking(&format!("TKT{:05}", i), 9)).await
        }));
    }

    let mut winners = 0;
    let mut conflicts = 0;
    for handle in handles {
        match handle.await.unwrap() {
            Ok(_) => winners += 1,
            Err(DomainError::SeatConflict { .. }) => conflicts += 1,
            Err(other) => panic!("unexpected error: {other:?}"),
        }
    }
    assert_eq!(winners, 1);
    assert_eq!(conflicts, 7);
}

// ── In-memory backend ──────────────────────────────────────────

#[tokio::test]
async fn memory_create_get_roundtrip() {
    create_get_roundtrip(memory_store()).await;
}

#[tokio::test]
async fn memory_ids_normalize() {
    ids_normalize_on_write_and_read(memory_store()).await;
}

#[tokio::test]
async fn memory_duplicate_id_rejected() {
    duplicate_id_is_rejected(memory_store()).await;
}

#[tokio::test]
async fn memory_seat_collision() {
    seat_collision_is_enforced(memory_store()).await;
}

#[tokio::test]
async fn memory_cancel_frees_slot() {
    cancel_frees_the_slot(memory_store()).await;
}

#[tokio::test]
async fn memory_cancel_terminal() {
    cancel_is_terminal_and_stamps_update(memory_store()).await;
}

#[tokio::test]
async fn memory_list_ordering() {
    list_keeps_cancelled_newest_first(memory_store()).await;
}

#[tokio::test]
async fn memory_concurrent_creates() {
    concurrent_creates_yield_one_winner(memory_store()).await;
}

// ── Durable backend ────────────────────────────────────────────

#[tokio::test]
async fn seaorm_create_get_roundtrip() {
    create_get_roundtrip(seaorm_store().await).await;
}

#[tokio::test]
async fn seaorm_ids_normalize() {
    ids_normalize_on_write_and_read(seaorm_store().await).await;
}

#[tokio::test]
async fn seaorm_duplicate_id_rejected() {
    duplicate_id_is_rejected(seaorm_store().await).await;
}

#[tokio::test]
async fn seaorm_seat_collision() {
    seat_collision_is_enforced(seaorm_store().await).await;
}

#[tokio::test]
async fn seaorm_cancel_frees_slot() {
    cancel_frees_the_slot(seaorm_store().await).await;
}

#[tokio::test]
async fn seaorm_cancel_terminal() {
    cancel_is_terminal_and_stamps_update(seaorm_store().await).await;
}

#[tokio::test]
async fn seaorm_list_ordering() {
    list_keeps_cancelled_newest_first(seaorm_store().await).await;
}

#[tokio::test]
async fn seaorm_concurrent_creates() {
    concurrent_creates_yield_one_winner(seaorm_store().await).await;
}
