//! Booking entity

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "bookings")]
pub struct Model {
    /// Uppercase 8-character ticket identifier
    #[sea_orm(primary_key, auto_increment = false)]
    pub ticket_id: String,

    pub name: String,
    pub age: i32,
    pub phone: String,

    #[sea_orm(nullable)]
    pub email: Option<String>,

    pub departure: String,
    pub destination: String,
    pub travel_date: Date,
    pub travel_time: String,
    pub seat: i32,

    /// Fare snapshot taken at booking time
    #[sea_orm(column_type = "Decimal(Some((16, 2)))")]
    pub fare: Decimal,

    /// Booking status: confirmed, cancelled
    pub status: String,

    pub booked_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
