//! Series lifecycle operations.
//!
//! Creating a recurring training, upgrading a standalone training into a
//! series and re-syncing occurrences after a definition change all live
//! here. Every operation that writes more than one row runs inside a single
//! transaction so a series is never observed half-updated.

use chrono::{DateTime, Duration, Utc};
use sea_orm::{ActiveValue, DatabaseConnection, TransactionTrait};

use crate::{
    data::{
        series::TrainingSeriesRepository,
        training::{TrainingGroupRepository, TrainingRepository},
    },
    error::AppError,
    model::{
        series::{
            CreateSeriesParam, Series, SeriesDto, UpdateSeriesDto, UpdateSeriesParam,
            UpgradeTrainingDto,
        },
        training::{CreateTrainingParam, Training, TrainingDto},
    },
    recurrence::{expand, materialize, resolve_zone, RecurrenceRule},
    service::group::require_groups_exist,
    util::parse::parse_timestamp,
};

#[cfg(test)]
mod test;

pub struct SeriesService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SeriesService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets a series definition
    pub async fn get(&self, id: i32) -> Result<SeriesDto, AppError> {
        let series = TrainingSeriesRepository::new(self.db)
            .get_by_id(id)
            .await?
            .ok_or(AppError::NotFound(format!("Series {} not found", id)))?;

        Ok(Series::from_entity(series).into_dto())
    }

    /// Creates a recurring series and materializes all its occurrences
    ///
    /// The series row and every generated occurrence are persisted in one
    /// transaction. A rule that yields no occurrences rejects the request
    /// and nothing is persisted.
    pub async fn create_recurring(
        &self,
        training: CreateTrainingParam,
        recurrence: CreateSeriesParam,
    ) -> Result<TrainingDto, AppError> {
        // Surface rule and timezone problems before touching the database
        RecurrenceRule::parse(&recurrence.rule, recurrence.until, recurrence.count)?;
        resolve_zone(&recurrence.timezone)?;

        let mut group_ids = training.group_ids;
        group_ids.sort_unstable();
        group_ids.dedup();

        require_groups_exist(self.db, &group_ids).await?;

        let txn = self.db.begin().await?;

        let series = TrainingSeriesRepository::new(&txn)
            .create(recurrence)
            .await?;

        let title = training.title;
        let description = training.description;
        let rows = materialize(&series, || entity::training::ActiveModel {
            title: ActiveValue::Set(title.clone()),
            description: ActiveValue::Set(description.clone()),
            ..Default::default()
        })?;

        if rows.is_empty() {
            return Err(AppError::BadRequest(
                "Recurrence rule produces no occurrences".to_string(),
            ));
        }

        let training_repo = TrainingRepository::new(&txn);
        training_repo.insert_many(rows).await?;

        let occurrences = training_repo.get_by_series_id(series.id).await?;

        let group_repo = TrainingGroupRepository::new(&txn);
        for occurrence in &occurrences {
            group_repo
                .replace_for_training(occurrence.id, &group_ids)
                .await?;
        }

        let occurrence_count = occurrences.len();
        let seed = occurrences
            .into_iter()
            .next()
            .ok_or(AppError::InternalError(format!(
                "Series {} has no occurrences after materialization",
                series.id
            )))?;

        txn.commit().await?;

        tracing::info!(
            "Created series {} with {} occurrence(s)",
            series.id,
            occurrence_count
        );

        Ok(Training::from_entity(seed).into_dto(group_ids))
    }

    /// Upgrades a standalone training into the seed of a new series
    ///
    /// The original row becomes occurrence 1, re-timed onto the first
    /// expanded instant, and the remaining occurrences are generated from
    /// its content. Its current group assignment carries over to every new
    /// occurrence.
    pub async fn upgrade(
        &self,
        training_id: i32,
        upgrade: UpgradeTrainingDto,
    ) -> Result<TrainingDto, AppError> {
        let training = TrainingRepository::new(self.db)
            .get_by_id(training_id)
            .await?
            .ok_or(AppError::NotFound(format!(
                "Training {} not found",
                training_id
            )))?;

        if training.series_id.is_some() {
            return Err(AppError::BadRequest(format!(
                "Training {} already belongs to a series",
                training_id
            )));
        }

        let until = upgrade
            .until
            .as_deref()
            .map(parse_timestamp)
            .transpose()?;
        let timezone = upgrade.timezone.unwrap_or_else(|| "UTC".to_string());

        RecurrenceRule::parse(&upgrade.rule, until, upgrade.count)?;
        resolve_zone(&timezone)?;

        let txn = self.db.begin().await?;

        let series = TrainingSeriesRepository::new(&txn)
            .create(CreateSeriesParam {
                rule: upgrade.rule,
                timezone,
                start_time: training.start_time,
                end_time: training.end_time,
                until,
                count: upgrade.count,
            })
            .await?;

        let title = training.title.clone();
        let description = training.description.clone();
        let pre_questionnaire_id = training.pre_questionnaire_id;
        let post_questionnaire_id = training.post_questionnaire_id;
        let rows = materialize(&series, || entity::training::ActiveModel {
            title: ActiveValue::Set(title.clone()),
            description: ActiveValue::Set(description.clone()),
            pre_questionnaire_id: ActiveValue::Set(pre_questionnaire_id),
            post_questionnaire_id: ActiveValue::Set(post_questionnaire_id),
            ..Default::default()
        })?;

        if rows.is_empty() {
            return Err(AppError::BadRequest(
                "Recurrence rule produces no occurrences".to_string(),
            ));
        }

        let (seed_start, seed_end) = match (&rows[0].start_time, &rows[0].end_time) {
            (ActiveValue::Set(start), ActiveValue::Set(end)) => (*start, *end),
            _ => {
                return Err(AppError::InternalError(
                    "Materialized occurrence row is missing its timestamps".to_string(),
                ))
            }
        };

        let training_repo = TrainingRepository::new(&txn);

        // The original row takes the seat of occurrence 1
        training_repo
            .attach_to_series(training.id, series.id, 1)
            .await?;
        let upgraded = training_repo
            .update_times(training.id, seed_start, seed_end)
            .await?;

        let remainder = rows.into_iter().skip(1).collect::<Vec<_>>();
        if !remainder.is_empty() {
            training_repo.insert_many(remainder).await?;
        }

        let group_repo = TrainingGroupRepository::new(&txn);
        let group_ids = group_repo.get_group_ids(training.id).await?;

        let occurrences = training_repo.get_by_series_id(series.id).await?;
        for occurrence in occurrences.iter().filter(|o| o.id != training.id) {
            group_repo
                .replace_for_training(occurrence.id, &group_ids)
                .await?;
        }

        txn.commit().await?;

        tracing::info!(
            "Upgraded training {} into series {} with {} occurrence(s)",
            training_id,
            series.id,
            occurrences.len()
        );

        Ok(Training::from_entity(upgraded).into_dto(group_ids))
    }

    /// Updates a series definition and re-times its occurrences
    ///
    /// Occurrences that were never edited independently are walked in
    /// sequence order and assigned the re-expanded timestamps in order.
    /// Leftover occurrences beyond the new expansion are deleted, extra
    /// timestamps are appended as fresh occurrences, and detached
    /// occurrences keep their own times throughout.
    pub async fn update_and_resync(
        &self,
        series_id: i32,
        update: UpdateSeriesDto,
    ) -> Result<SeriesDto, AppError> {
        let stored = TrainingSeriesRepository::new(self.db)
            .get_by_id(series_id)
            .await?
            .ok_or(AppError::NotFound(format!(
                "Series {} not found",
                series_id
            )))?;

        // Merge the request over the stored definition; absent timezone and
        // seed times keep their stored values, absent bounds clear
        let param = UpdateSeriesParam {
            rule: update.rule,
            timezone: update.timezone.unwrap_or(stored.timezone),
            start_time: update
                .start_time
                .as_deref()
                .map(parse_timestamp)
                .transpose()?
                .unwrap_or(stored.start_time),
            end_time: update
                .end_time
                .as_deref()
                .map(parse_timestamp)
                .transpose()?
                .unwrap_or(stored.end_time),
            until: update.until.as_deref().map(parse_timestamp).transpose()?,
            count: update.count,
        };

        let rule = RecurrenceRule::parse(&param.rule, param.until, param.count)?;
        let tz = resolve_zone(&param.timezone)?;

        let template_duration = param.end_time - param.start_time;
        let duration = if template_duration > Duration::zero() {
            template_duration
        } else {
            Duration::zero()
        };

        let seed = param.start_time.with_timezone(&tz);
        let timestamps = expand(&rule, seed)
            .into_iter()
            .map(|instant| instant.with_timezone(&Utc))
            .collect::<Vec<_>>();

        if timestamps.is_empty() {
            return Err(AppError::BadRequest(
                "Recurrence rule produces no occurrences".to_string(),
            ));
        }

        let txn = self.db.begin().await?;

        let series = TrainingSeriesRepository::new(&txn)
            .update(series_id, param)
            .await?;

        let training_repo = TrainingRepository::new(&txn);
        let group_repo = TrainingGroupRepository::new(&txn);

        let occurrences = training_repo.get_by_series_id(series_id).await?;

        // Sequence numbers are never reused, including those of detached
        // and deleted occurrences
        let mut next_sequence = occurrences
            .iter()
            .filter_map(|occurrence| occurrence.sequence)
            .max()
            .unwrap_or(0)
            + 1;

        let survivors = occurrences
            .iter()
            .filter(|occurrence| !occurrence.detached)
            .collect::<Vec<_>>();

        // Walk survivors and fresh timestamps in lockstep
        let mut timestamp_iter = timestamps.iter().copied();
        let mut stale_ids = Vec::new();
        let mut retimed = 0u32;
        for survivor in &survivors {
            match timestamp_iter.next() {
                Some(start) => {
                    training_repo
                        .update_times(survivor.id, start, start + duration)
                        .await?;
                    retimed += 1;
                }
                None => stale_ids.push(survivor.id),
            }
        }

        let deleted = stale_ids.len();
        if !stale_ids.is_empty() {
            training_repo.delete_by_ids(stale_ids).await?;
        }

        let extra = timestamp_iter.collect::<Vec<_>>();
        let mut appended = 0u32;
        if !extra.is_empty() {
            // New occurrences copy their content from the earliest occurrence
            // that still follows the series, falling back to the earliest at all
            let template = survivors
                .first()
                .copied()
                .or_else(|| occurrences.first())
                .ok_or(AppError::BadRequest(format!(
                    "Series {} has no occurrence left to derive new ones from",
                    series_id
                )))?;

            let template_group_ids = group_repo.get_group_ids(template.id).await?;

            for start in extra {
                let row = entity::training::ActiveModel {
                    series_id: ActiveValue::Set(Some(series_id)),
                    sequence: ActiveValue::Set(Some(next_sequence)),
                    title: ActiveValue::Set(template.title.clone()),
                    description: ActiveValue::Set(template.description.clone()),
                    start_time: ActiveValue::Set(start),
                    end_time: ActiveValue::Set(start + duration),
                    detached: ActiveValue::Set(false),
                    group_detached: ActiveValue::Set(false),
                    pre_questionnaire_id: ActiveValue::Set(template.pre_questionnaire_id),
                    post_questionnaire_id: ActiveValue::Set(template.post_questionnaire_id),
                    ..Default::default()
                };

                let inserted = training_repo.insert(row).await?;
                group_repo
                    .replace_for_training(inserted.id, &template_group_ids)
                    .await?;

                next_sequence += 1;
                appended += 1;
            }
        }

        txn.commit().await?;

        tracing::info!(
            "Resynced series {}: {} re-timed, {} deleted, {} appended",
            series_id,
            retimed,
            deleted,
            appended
        );

        Ok(Series::from_entity(series).into_dto())
    }
}
