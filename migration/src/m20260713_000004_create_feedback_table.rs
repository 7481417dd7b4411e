use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]

pub struct Migration;

#[async_trait::async_trait]

impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Feedback::Table)
                    .if_not_exists()
                    .col(pk_auto(Feedback::Id))
                    .col(integer(Feedback::CampId))
                    .col(string(Feedback::ParticipantEmail))
                    .col(integer(Feedback::Rating))
                    .col(string(Feedback::Comment))
                    .col(timestamp_with_time_zone(Feedback::CreatedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Feedback::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]

pub enum Feedback {
    Table,
    Id,
    CampId,
    ParticipantEmail,
    Rating,
    Comment,
    CreatedAt,
}
