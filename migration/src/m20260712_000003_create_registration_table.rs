use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]

pub struct Migration;

#[async_trait::async_trait]

impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Registration::Table)
                    .if_not_exists()
                    .col(pk_auto(Registration::Id))
                    .col(integer(Registration::CampId))
                    .col(string(Registration::CampName))
                    .col(string(Registration::ParticipantEmail))
                    .col(string(Registration::ParticipantName))
                    .col(double(Registration::Fees))
                    .col(string(Registration::PaymentStatus))
                    .col(string(Registration::ConfirmationStatus))
                    .col(string_null(Registration::TransactionId))
                    .col(boolean(Registration::FeedbackEligible).default(false))
                    .col(timestamp_with_time_zone(Registration::CreatedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Registration::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]

pub enum Registration {
    Table,
    Id,
    CampId,
    CampName,
    ParticipantEmail,
    ParticipantName,
    Fees,
    PaymentStatus,
    ConfirmationStatus,
    TransactionId,
    FeedbackEligible,
    CreatedAt,
}
