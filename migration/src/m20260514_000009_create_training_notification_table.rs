use sea_orm_migration::{prelude::*, schema::*};

use super::m20260513_000007_create_training_table::Training;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TrainingNotification::Table)
                    .if_not_exists()
                    .col(pk_auto(TrainingNotification::Id))
                    .col(integer(TrainingNotification::TrainingId))
                    .col(string(TrainingNotification::Kind))
                    .col(integer(TrainingNotification::Delivered))
                    .col(integer(TrainingNotification::Failed))
                    .col(
                        timestamp(TrainingNotification::SentAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_training_notification_training_id")
                            .from(
                                TrainingNotification::Table,
                                TrainingNotification::TrainingId,
                            )
                            .to(Training::Table, Training::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(TrainingNotification::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum TrainingNotification {
    Table,
    Id,
    TrainingId,
    Kind,
    Delivered,
    Failed,
    SentAt,
}
