use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter,
};

pub struct TrainingNotificationRepository<'a, C> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> TrainingNotificationRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Records a dispatched notification batch for a training
    pub async fn create(
        &self,
        training_id: i32,
        kind: String,
        delivered: u32,
        failed: u32,
    ) -> Result<entity::training_notification::Model, DbErr> {
        entity::training_notification::ActiveModel {
            training_id: ActiveValue::Set(training_id),
            kind: ActiveValue::Set(kind),
            delivered: ActiveValue::Set(delivered as i32),
            failed: ActiveValue::Set(failed as i32),
            sent_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Checks whether a notification of the given kind was already sent for
    /// a training
    pub async fn exists_for_training(&self, training_id: i32, kind: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::TrainingNotification::find()
            .filter(entity::training_notification::Column::TrainingId.eq(training_id))
            .filter(entity::training_notification::Column::Kind.eq(kind))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }
}
