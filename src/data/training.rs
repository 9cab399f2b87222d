use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::model::training::UpdateTrainingParam;

pub struct TrainingRepository<'a, C> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> TrainingRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new standalone training
    pub async fn create(
        &self,
        title: String,
        description: Option<String>,
        start_time: DateTime<Utc>,
        end_time: DateTime<Utc>,
    ) -> Result<entity::training::Model, DbErr> {
        let now = Utc::now();

        entity::training::ActiveModel {
            title: ActiveValue::Set(title),
            description: ActiveValue::Set(description),
            start_time: ActiveValue::Set(start_time),
            end_time: ActiveValue::Set(end_time),
            detached: ActiveValue::Set(false),
            group_detached: ActiveValue::Set(false),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Inserts a single prepared occurrence row, stamping its timestamps
    pub async fn insert(
        &self,
        row: entity::training::ActiveModel,
    ) -> Result<entity::training::Model, DbErr> {
        let now = Utc::now();

        let mut row = row;
        row.created_at = ActiveValue::Set(now);
        row.updated_at = ActiveValue::Set(now);

        row.insert(self.db).await
    }

    /// Inserts a batch of materialized occurrence rows, stamping their
    /// timestamps
    pub async fn insert_many(
        &self,
        rows: Vec<entity::training::ActiveModel>,
    ) -> Result<(), DbErr> {
        let now = Utc::now();

        let rows = rows
            .into_iter()
            .map(|mut row| {
                row.created_at = ActiveValue::Set(now);
                row.updated_at = ActiveValue::Set(now);
                row
            })
            .collect::<Vec<_>>();

        entity::prelude::Training::insert_many(rows)
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Gets a training by ID
    pub async fn get_by_id(&self, id: i32) -> Result<Option<entity::training::Model>, DbErr> {
        entity::prelude::Training::find_by_id(id).one(self.db).await
    }

    /// Gets paginated trainings ordered by start time
    pub async fn get_all_paginated(
        &self,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<entity::training::Model>, u64), DbErr> {
        let paginator = entity::prelude::Training::find()
            .order_by_asc(entity::training::Column::StartTime)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let trainings = paginator.fetch_page(page).await?;

        Ok((trainings, total))
    }

    /// Gets all occurrences of a series ordered by sequence
    pub async fn get_by_series_id(
        &self,
        series_id: i32,
    ) -> Result<Vec<entity::training::Model>, DbErr> {
        entity::prelude::Training::find()
            .filter(entity::training::Column::SeriesId.eq(series_id))
            .order_by_asc(entity::training::Column::Sequence)
            .all(self.db)
            .await
    }

    /// Gets trainings starting inside a time window, earliest first
    pub async fn get_starting_between(
        &self,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> Result<Vec<entity::training::Model>, DbErr> {
        entity::prelude::Training::find()
            .filter(entity::training::Column::StartTime.gte(from))
            .filter(entity::training::Column::StartTime.lte(to))
            .order_by_asc(entity::training::Column::StartTime)
            .all(self.db)
            .await
    }

    /// Updates a training's content fields and marks it detached
    pub async fn update_content(
        &self,
        id: i32,
        param: UpdateTrainingParam,
    ) -> Result<entity::training::Model, DbErr> {
        let training = self.require(id).await?;

        let mut active_model: entity::training::ActiveModel = training.into();
        active_model.title = ActiveValue::Set(param.title);
        active_model.description = ActiveValue::Set(param.description);
        active_model.start_time = ActiveValue::Set(param.start_time);
        active_model.end_time = ActiveValue::Set(param.end_time);
        active_model.detached = ActiveValue::Set(true);
        active_model.updated_at = ActiveValue::Set(Utc::now());

        active_model.update(self.db).await
    }

    /// Updates a training's start and end time without touching its flags
    pub async fn update_times(
        &self,
        id: i32,
        start_time: DateTime<Utc>,
        end_time: DateTime<Utc>,
    ) -> Result<entity::training::Model, DbErr> {
        let training = self.require(id).await?;

        let mut active_model: entity::training::ActiveModel = training.into();
        active_model.start_time = ActiveValue::Set(start_time);
        active_model.end_time = ActiveValue::Set(end_time);
        active_model.updated_at = ActiveValue::Set(Utc::now());

        active_model.update(self.db).await
    }

    /// Sets a training's pre and post questionnaire assignment
    pub async fn set_questionnaires(
        &self,
        id: i32,
        pre_questionnaire_id: Option<i32>,
        post_questionnaire_id: Option<i32>,
    ) -> Result<entity::training::Model, DbErr> {
        let training = self.require(id).await?;

        let mut active_model: entity::training::ActiveModel = training.into();
        active_model.pre_questionnaire_id = ActiveValue::Set(pre_questionnaire_id);
        active_model.post_questionnaire_id = ActiveValue::Set(post_questionnaire_id);
        active_model.updated_at = ActiveValue::Set(Utc::now());

        active_model.update(self.db).await
    }

    /// Marks a training's group assignment as independently edited
    pub async fn mark_group_detached(&self, id: i32) -> Result<entity::training::Model, DbErr> {
        let training = self.require(id).await?;

        let mut active_model: entity::training::ActiveModel = training.into();
        active_model.group_detached = ActiveValue::Set(true);
        active_model.updated_at = ActiveValue::Set(Utc::now());

        active_model.update(self.db).await
    }

    /// Attaches a training to a series at the given sequence, clearing both
    /// detachment flags
    pub async fn attach_to_series(
        &self,
        id: i32,
        series_id: i32,
        sequence: i32,
    ) -> Result<entity::training::Model, DbErr> {
        let training = self.require(id).await?;

        let mut active_model: entity::training::ActiveModel = training.into();
        active_model.series_id = ActiveValue::Set(Some(series_id));
        active_model.sequence = ActiveValue::Set(Some(sequence));
        active_model.detached = ActiveValue::Set(false);
        active_model.group_detached = ActiveValue::Set(false);
        active_model.updated_at = ActiveValue::Set(Utc::now());

        active_model.update(self.db).await
    }

    /// Deletes a training
    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::Training::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Deletes trainings by ID
    pub async fn delete_by_ids(&self, ids: Vec<i32>) -> Result<u64, DbErr> {
        let result = entity::prelude::Training::delete_many()
            .filter(entity::training::Column::Id.is_in(ids))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Deletes every occurrence of a series at or past the given sequence
    pub async fn delete_from_sequence(
        &self,
        series_id: i32,
        from_sequence: i32,
    ) -> Result<u64, DbErr> {
        let result = entity::prelude::Training::delete_many()
            .filter(entity::training::Column::SeriesId.eq(series_id))
            .filter(entity::training::Column::Sequence.gte(from_sequence))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    async fn require(&self, id: i32) -> Result<entity::training::Model, DbErr> {
        entity::prelude::Training::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Training with id {} not found",
                id
            )))
    }
}

pub struct TrainingGroupRepository<'a, C> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> TrainingGroupRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Replaces the group assignment of a training with the given set
    pub async fn replace_for_training(
        &self,
        training_id: i32,
        group_ids: &[i32],
    ) -> Result<(), DbErr> {
        entity::prelude::TrainingGroup::delete_many()
            .filter(entity::training_group::Column::TrainingId.eq(training_id))
            .exec(self.db)
            .await?;

        if group_ids.is_empty() {
            return Ok(());
        }

        let rows = group_ids
            .iter()
            .map(|group_id| entity::training_group::ActiveModel {
                training_id: ActiveValue::Set(training_id),
                group_id: ActiveValue::Set(*group_id),
                ..Default::default()
            })
            .collect::<Vec<_>>();

        entity::prelude::TrainingGroup::insert_many(rows)
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Gets the IDs of the groups assigned to a training
    pub async fn get_group_ids(&self, training_id: i32) -> Result<Vec<i32>, DbErr> {
        let assignments = entity::prelude::TrainingGroup::find()
            .filter(entity::training_group::Column::TrainingId.eq(training_id))
            .order_by_asc(entity::training_group::Column::GroupId)
            .all(self.db)
            .await?;

        Ok(assignments
            .into_iter()
            .map(|assignment| assignment.group_id)
            .collect())
    }
}
