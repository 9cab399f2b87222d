pub use sea_orm_migration::prelude::*;

mod m20260512_000001_create_user_table;
mod m20260512_000002_create_club_table;
mod m20260512_000003_create_group_table;
mod m20260512_000004_create_group_member_table;
mod m20260513_000005_create_questionnaire_table;
mod m20260513_000006_create_training_series_table;
mod m20260513_000007_create_training_table;
mod m20260513_000008_create_training_group_table;
mod m20260514_000009_create_training_notification_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260512_000001_create_user_table::Migration),
            Box::new(m20260512_000002_create_club_table::Migration),
            Box::new(m20260512_000003_create_group_table::Migration),
            Box::new(m20260512_000004_create_group_member_table::Migration),
            Box::new(m20260513_000005_create_questionnaire_table::Migration),
            Box::new(m20260513_000006_create_training_series_table::Migration),
            Box::new(m20260513_000007_create_training_table::Migration),
            Box::new(m20260513_000008_create_training_group_table::Migration),
            Box::new(m20260514_000009_create_training_notification_table::Migration),
        ]
    }
}
