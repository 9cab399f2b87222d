//! Training lifecycle operations.
//!
//! Covers creating standalone and recurring trainings, reading them back,
//! and deleting single occurrences. Occurrence edits live in [`update`] and
//! series-wide changes driven from one occurrence live in [`cascade`].

mod cascade;
mod update;

#[cfg(test)]
mod test;

use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    data::training::{TrainingGroupRepository, TrainingRepository},
    error::AppError,
    model::{
        series::CreateSeriesParam,
        training::{
            CreateTrainingDto, CreateTrainingParam, PaginatedTrainingsDto, Training, TrainingDto,
        },
    },
    service::{group::require_groups_exist, series::SeriesService},
    util::parse::parse_timestamp,
};

pub struct TrainingService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TrainingService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a training, either standalone or as a recurring series
    ///
    /// With a recurrence attached the whole series is generated and the
    /// returned DTO is its seed occurrence.
    pub async fn create(&self, create: CreateTrainingDto) -> Result<TrainingDto, AppError> {
        let start_time = parse_timestamp(&create.start_time)?;
        let end_time = parse_timestamp(&create.end_time)?;

        let param = CreateTrainingParam {
            title: create.title,
            description: create.description,
            start_time,
            end_time,
            group_ids: create.group_ids,
        };

        match create.recurrence {
            Some(recurrence) => {
                let until = recurrence
                    .until
                    .as_deref()
                    .map(parse_timestamp)
                    .transpose()?;

                let series_param = CreateSeriesParam {
                    rule: recurrence.rule,
                    timezone: recurrence.timezone.unwrap_or_else(|| "UTC".to_string()),
                    start_time,
                    end_time,
                    until,
                    count: recurrence.count,
                };

                SeriesService::new(self.db)
                    .create_recurring(param, series_param)
                    .await
            }
            None => self.create_standalone(param).await,
        }
    }

    async fn create_standalone(
        &self,
        param: CreateTrainingParam,
    ) -> Result<TrainingDto, AppError> {
        let mut group_ids = param.group_ids;
        group_ids.sort_unstable();
        group_ids.dedup();

        require_groups_exist(self.db, &group_ids).await?;

        let txn = self.db.begin().await?;

        let training = TrainingRepository::new(&txn)
            .create(param.title, param.description, param.start_time, param.end_time)
            .await?;

        TrainingGroupRepository::new(&txn)
            .replace_for_training(training.id, &group_ids)
            .await?;

        txn.commit().await?;

        tracing::info!("Created standalone training {}", training.id);

        Ok(Training::from_entity(training).into_dto(group_ids))
    }

    /// Gets a training with its assigned group IDs
    pub async fn get(&self, id: i32) -> Result<TrainingDto, AppError> {
        let training = TrainingRepository::new(self.db)
            .get_by_id(id)
            .await?
            .ok_or(AppError::NotFound(format!("Training {} not found", id)))?;

        let group_ids = TrainingGroupRepository::new(self.db)
            .get_group_ids(id)
            .await?;

        Ok(Training::from_entity(training).into_dto(group_ids))
    }

    /// Gets paginated trainings ordered by start time
    pub async fn get_paginated(
        &self,
        page: u64,
        per_page: u64,
    ) -> Result<PaginatedTrainingsDto, AppError> {
        let (trainings, total) = TrainingRepository::new(self.db)
            .get_all_paginated(page, per_page)
            .await?;

        let total_pages = if per_page > 0 {
            (total as f64 / per_page as f64).ceil() as u64
        } else {
            0
        };

        Ok(PaginatedTrainingsDto {
            trainings: trainings
                .into_iter()
                .map(|training| Training::from_entity(training).into_list_item())
                .collect(),
            total,
            page,
            per_page,
            total_pages,
        })
    }

    /// Deletes a single training occurrence
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let repo = TrainingRepository::new(self.db);

        repo.get_by_id(id)
            .await?
            .ok_or(AppError::NotFound(format!("Training {} not found", id)))?;

        repo.delete(id).await?;

        tracing::info!("Deleted training {}", id);

        Ok(())
    }
}
