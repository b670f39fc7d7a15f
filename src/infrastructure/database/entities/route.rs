//! Route entity

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "routes")]
pub struct Model {
    /// Canonical route name, e.g. "Bulawayo to Harare"
    #[sea_orm(primary_key, auto_increment = false)]
    pub route_name: String,

    #[sea_orm(column_type = "Decimal(Some((16, 2)))")]
    pub fare: Decimal,

    /// Departure time-of-day; NULL when the route runs unscheduled
    #[sea_orm(nullable)]
    pub schedule: Option<String>,

    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
