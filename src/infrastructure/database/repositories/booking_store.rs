//! SeaORM implementation of BookingStore

use async_trait::async_trait;
use chrono::Utc;
use log::debug;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, Set, TransactionTrait,
};

use crate::domain::booking::normalize_ticket_id;
use crate::domain::{Booking, BookingStatus, BookingStore, DomainError, DomainResult, JourneyKey};
use crate::infrastructure::database::entities::booking;

pub struct SeaOrmBookingStore {
    db: DatabaseConnection,
}

impl SeaOrmBookingStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

// ── Conversion helpers ──────────────────────────────────────────

fn model_to_domain(m: booking::Model) -> Booking {
    Booking {
        ticket_id: m.ticket_id,
        name: m.name,
        age: m.age,
        phone: m.phone,
        email: m.email,
        departure: m.departure,
        destination: m.destination,
        date: m.travel_date,
        time: m.travel_time,
        seat: m.seat as u32,
        fare: m.fare,
        status: BookingStatus::from_str(&m.status),
        booked_at: m.booked_at,
        updated_at: m.updated_at,
    }
}

fn domain_to_active(b: &Booking) -> booking::ActiveModel {
    booking::ActiveModel {
        ticket_id: Set(b.ticket_id.clone()),
        name: Set(b.name.clone()),
        age: Set(b.age),
        phone: Set(b.phone.clone()),
        email: Set(b.email.clone()),
        departure: Set(b.departure.clone()),
        destination: Set(b.destination.clone()),
        travel_date: Set(b.date),
        travel_time: Set(b.time.clone()),
        seat: Set(b.seat as i32),
        fare: Set(b.fare),
        status: Set(b.status.as_str().to_string()),
        booked_at: Set(b.booked_at),
        updated_at: Set(b.updated_at),
    }
}

fn db_err(e: sea_orm::DbErr) -> DomainError {
    DomainError::Storage(e.to_string())
}

fn journey_filter(query: sea_orm::Select<booking::Entity>, key: &JourneyKey) -> sea_orm::Select<booking::Entity> {
    query
        .filter(booking::Column::Departure.eq(&key.departure))
        .filter(booking::Column::Destination.eq(&key.destination))
        .filter(booking::Column::TravelDate.eq(key.date))
        .filter(booking::Column::TravelTime.eq(&key.time))
        .filter(booking::Column::Seat.eq(key.seat as i32))
        .filter(booking::Column::Status.eq(BookingStatus::Confirmed.as_str()))
}

// ── BookingStore impl ───────────────────────────────────────────

#[async_trait]
impl BookingStore for SeaOrmBookingStore {
    async fn create(&self, mut b: Booking) -> DomainResult<Booking> {
        b.ticket_id = normalize_ticket_id(&b.ticket_id);
        debug!("Creating booking: {}", b.ticket_id);

        // Availability re-check and insert in one transaction; the
        // rollback-on-conflict path surfaces as SeatConflict.
        let txn = self.db.begin().await.map_err(db_err)?;

        let occupied = journey_filter(booking::Entity::find(), &b.journey())
            .count(&txn)
            .await
            .map_err(db_err)?;
        if occupied > 0 {
            txn.rollback().await.map_err(db_err)?;
            return Err(DomainError::SeatConflict {
                route: b.route_name(),
                date: b.date.to_string(),
                time: b.time.clone(),
                seat: b.seat,
            });
        }

        let duplicate = booking::Entity::find_by_id(b.ticket_id.clone())
            .one(&txn)
            .await
            .map_err(db_err)?;
        if duplicate.is_some() {
            txn.rollback().await.map_err(db_err)?;
            return Err(DomainError::DuplicateTicketId(b.ticket_id));
        }

        domain_to_active(&b).insert(&txn).await.map_err(db_err)?;
        txn.commit().await.map_err(db_err)?;
        Ok(b)
    }

    async fn get(&self, ticket_id: &str) -> DomainResult<Option<Booking>> {
        let id = normalize_ticket_id(ticket_id);
        let model = booking::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(model.map(model_to_domain))
    }

    async fn cancel(&self, ticket_id: &str) -> DomainResult<Booking> {
        let id = normalize_ticket_id(ticket_id);
        debug!("Cancelling booking: {}", id);

        let existing = booking::Entity::find_by_id(id.clone())
            .one(&self.db)
            .await
            .map_err(db_err)?;

        let Some(existing) = existing else {
            return Err(DomainError::NotFound {
                entity: "Booking",
                field: "ticket_id",
                value: id,
            });
        };

        if existing.status == BookingStatus::Cancelled.as_str() {
            return Err(DomainError::AlreadyCancelled(id));
        }

        let mut active: booking::ActiveModel = existing.into();
        active.status = Set(BookingStatus::Cancelled.as_str().to_string());
        active.updated_at = Set(Utc::now());
        let updated = active.update(&self.db).await.map_err(db_err)?;
        Ok(model_to_domain(updated))
    }

    async fn list_all(&self) -> DomainResult<Vec<Booking>> {
        let models = booking::Entity::find()
            .order_by_desc(booking::Column::BookedAt)
            .order_by_asc(booking::Column::TicketId)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        Ok(models.into_iter().map(model_to_domain).collect())
    }

    async fn is_seat_available(&self, key: &JourneyKey) -> DomainResult<bool> {
        let occupied = journey_filter(booking::Entity::find(), key)
            .count(&self.db)
            .await
            .map_err(db_err)?;
        Ok(occupied == 0)
    }
}
