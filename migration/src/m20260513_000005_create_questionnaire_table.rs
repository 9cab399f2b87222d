use sea_orm_migration::{prelude::*, schema::*};

use super::m20260512_000002_create_club_table::Club;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Questionnaire::Table)
                    .if_not_exists()
                    .col(pk_auto(Questionnaire::Id))
                    .col(integer(Questionnaire::ClubId))
                    .col(string(Questionnaire::Title))
                    .col(
                        timestamp(Questionnaire::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_questionnaire_club_id")
                            .from(Questionnaire::Table, Questionnaire::ClubId)
                            .to(Club::Table, Club::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Questionnaire::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Questionnaire {
    Table,
    Id,
    ClubId,
    Title,
    CreatedAt,
}
