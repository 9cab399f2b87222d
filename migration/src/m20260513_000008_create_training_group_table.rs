use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260512_000003_create_group_table::Group, m20260513_000007_create_training_table::Training,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TrainingGroup::Table)
                    .if_not_exists()
                    .col(pk_auto(TrainingGroup::Id))
                    .col(integer(TrainingGroup::TrainingId))
                    .col(integer(TrainingGroup::GroupId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_training_group_training_id")
                            .from(TrainingGroup::Table, TrainingGroup::TrainingId)
                            .to(Training::Table, Training::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_training_group_group_id")
                            .from(TrainingGroup::Table, TrainingGroup::GroupId)
                            .to(Group::Table, Group::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(TrainingGroup::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum TrainingGroup {
    Table,
    Id,
    TrainingId,
    GroupId,
}
