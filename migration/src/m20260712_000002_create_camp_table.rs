use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]

pub struct Migration;

#[async_trait::async_trait]

impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Camp::Table)
                    .if_not_exists()
                    .col(pk_auto(Camp::Id))
                    .col(string(Camp::Name))
                    .col(string(Camp::Image))
                    .col(timestamp_with_time_zone(Camp::DateTime))
                    .col(string(Camp::Location))
                    .col(string(Camp::Professional))
                    .col(integer(Camp::Participants).default(0))
                    .col(double(Camp::Fees))
                    .col(string(Camp::Description))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Camp::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]

pub enum Camp {
    Table,
    Id,
    Name,
    Image,
    DateTime,
    Location,
    Professional,
    Participants,
    Fees,
    Description,
}
