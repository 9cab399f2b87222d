use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, EntityTrait};

use crate::model::series::{CreateSeriesParam, UpdateSeriesParam};

pub struct TrainingSeriesRepository<'a, C> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> TrainingSeriesRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new training series
    pub async fn create(
        &self,
        param: CreateSeriesParam,
    ) -> Result<entity::training_series::Model, DbErr> {
        let now = Utc::now();

        entity::training_series::ActiveModel {
            rule: ActiveValue::Set(param.rule),
            timezone: ActiveValue::Set(param.timezone),
            start_time: ActiveValue::Set(param.start_time),
            end_time: ActiveValue::Set(param.end_time),
            until: ActiveValue::Set(param.until),
            count: ActiveValue::Set(param.count.map(|count| count as i32)),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Gets a training series by ID
    pub async fn get_by_id(
        &self,
        id: i32,
    ) -> Result<Option<entity::training_series::Model>, DbErr> {
        entity::prelude::TrainingSeries::find_by_id(id)
            .one(self.db)
            .await
    }

    /// Updates a training series definition
    pub async fn update(
        &self,
        id: i32,
        param: UpdateSeriesParam,
    ) -> Result<entity::training_series::Model, DbErr> {
        let series = entity::prelude::TrainingSeries::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Training series with id {} not found",
                id
            )))?;

        let mut active_model: entity::training_series::ActiveModel = series.into();
        active_model.rule = ActiveValue::Set(param.rule);
        active_model.timezone = ActiveValue::Set(param.timezone);
        active_model.start_time = ActiveValue::Set(param.start_time);
        active_model.end_time = ActiveValue::Set(param.end_time);
        active_model.until = ActiveValue::Set(param.until);
        active_model.count = ActiveValue::Set(param.count.map(|count| count as i32));
        active_model.updated_at = ActiveValue::Set(Utc::now());

        active_model.update(self.db).await
    }
}
