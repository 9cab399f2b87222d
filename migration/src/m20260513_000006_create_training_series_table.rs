use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TrainingSeries::Table)
                    .if_not_exists()
                    .col(pk_auto(TrainingSeries::Id))
                    .col(string(TrainingSeries::Rule))
                    .col(string(TrainingSeries::Timezone).default("UTC"))
                    .col(timestamp(TrainingSeries::StartTime))
                    .col(timestamp(TrainingSeries::EndTime))
                    .col(timestamp_null(TrainingSeries::Until))
                    .col(integer_null(TrainingSeries::Count))
                    .col(
                        timestamp(TrainingSeries::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp(TrainingSeries::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(TrainingSeries::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum TrainingSeries {
    Table,
    Id,
    Rule,
    Timezone,
    StartTime,
    EndTime,
    Until,
    Count,
    CreatedAt,
    UpdatedAt,
}
