use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260513_000005_create_questionnaire_table::Questionnaire,
    m20260513_000006_create_training_series_table::TrainingSeries,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Training::Table)
                    .if_not_exists()
                    .col(pk_auto(Training::Id))
                    .col(integer_null(Training::SeriesId))
                    .col(integer_null(Training::Sequence))
                    .col(string(Training::Title))
                    .col(text_null(Training::Description))
                    .col(timestamp(Training::StartTime))
                    .col(timestamp(Training::EndTime))
                    .col(boolean(Training::Detached).default(false))
                    .col(boolean(Training::GroupDetached).default(false))
                    .col(integer_null(Training::PreQuestionnaireId))
                    .col(integer_null(Training::PostQuestionnaireId))
                    .col(
                        timestamp(Training::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp(Training::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_training_series_id")
                            .from(Training::Table, Training::SeriesId)
                            .to(TrainingSeries::Table, TrainingSeries::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_training_pre_questionnaire_id")
                            .from(Training::Table, Training::PreQuestionnaireId)
                            .to(Questionnaire::Table, Questionnaire::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_training_post_questionnaire_id")
                            .from(Training::Table, Training::PostQuestionnaireId)
                            .to(Questionnaire::Table, Questionnaire::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // NULL series ids stay distinct under SQLite unique-index rules, so
        // standalone trainings never collide here.
        manager
            .create_index(
                Index::create()
                    .name("idx_training_series_sequence")
                    .table(Training::Table)
                    .col(Training::SeriesId)
                    .col(Training::Sequence)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Training::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Training {
    Table,
    Id,
    SeriesId,
    Sequence,
    Title,
    Description,
    StartTime,
    EndTime,
    Detached,
    GroupDetached,
    PreQuestionnaireId,
    PostQuestionnaireId,
    CreatedAt,
    UpdatedAt,
}
