//! Create bookings table
//!
//! One row per booking, keyed by ticket id. The journey index backs the
//! seat-availability check; rows are never deleted, only flipped to
//! cancelled.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Bookings::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Bookings::TicketId)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Bookings::Name).string().not_null())
                    .col(ColumnDef::new(Bookings::Age).integer().not_null())
                    .col(ColumnDef::new(Bookings::Phone).string().not_null())
                    .col(ColumnDef::new(Bookings::Email).string())
                    .col(ColumnDef::new(Bookings::Departure).string().not_null())
                    .col(ColumnDef::new(Bookings::Destination).string().not_null())
                    .col(ColumnDef::new(Bookings::TravelDate).date().not_null())
                    .col(ColumnDef::new(Bookings::TravelTime).string().not_null())
                    .col(ColumnDef::new(Bookings::Seat).integer().not_null())
                    .col(
                        ColumnDef::new(Bookings::Fare)
                            .decimal_len(16, 2)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Bookings::Status)
                            .string()
                            .not_null()
                            .default("confirmed"),
                    )
                    .col(
                        ColumnDef::new(Bookings::BookedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Bookings::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_bookings_journey")
                    .table(Bookings::Table)
                    .col(Bookings::Departure)
                    .col(Bookings::Destination)
                    .col(Bookings::TravelDate)
                    .col(Bookings::TravelTime)
                    .col(Bookings::Seat)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_bookings_status")
                    .table(Bookings::Table)
                    .col(Bookings::Status)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Bookings::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum Bookings {
    Table,
    TicketId,
    Name,
    Age,
    Phone,
    Email,
    Departure,
    Destination,
    TravelDate,
    TravelTime,
    Seat,
    Fare,
    Status,
    BookedAt,
    UpdatedAt,
}
