//! Series-wide changes driven from one occurrence.
//!
//! These operations take a pivot occurrence and fan the change out across
//! its series, honoring the detachment flags: occurrences with an
//! independent group assignment keep it during group cascades, and detached
//! occurrences that already carry a questionnaire keep their own during
//! questionnaire cascades. A standalone pivot is updated alone.

use sea_orm::TransactionTrait;

use crate::{
    data::{
        questionnaire::QuestionnaireRepository,
        training::{TrainingGroupRepository, TrainingRepository},
    },
    error::{internal::InternalError, AppError},
    model::training::{SeriesQuestionnairesDto, TrainingDto, UpdateTrainingGroupsDto},
    service::group::require_groups_exist,
};

use super::TrainingService;

impl<'a> TrainingService<'a> {
    /// Applies a new group set to every occurrence of the pivot's series
    ///
    /// Occurrences flagged as independently grouped are skipped, the pivot
    /// included.
    pub async fn apply_groups_to_series(
        &self,
        pivot_id: i32,
        update: UpdateTrainingGroupsDto,
    ) -> Result<TrainingDto, AppError> {
        let pivot = TrainingRepository::new(self.db)
            .get_by_id(pivot_id)
            .await?
            .ok_or(AppError::NotFound(format!(
                "Training {} not found",
                pivot_id
            )))?;

        let mut group_ids = update.group_ids;
        group_ids.sort_unstable();
        group_ids.dedup();

        require_groups_exist(self.db, &group_ids).await?;

        let txn = self.db.begin().await?;
        let group_repo = TrainingGroupRepository::new(&txn);

        let mut updated = 0u32;
        match pivot.series_id {
            None => {
                group_repo
                    .replace_for_training(pivot.id, &group_ids)
                    .await?;
                updated += 1;
            }
            Some(series_id) => {
                let occurrences = TrainingRepository::new(&txn)
                    .get_by_series_id(series_id)
                    .await?;

                for occurrence in occurrences {
                    if occurrence.group_detached {
                        continue;
                    }

                    group_repo
                        .replace_for_training(occurrence.id, &group_ids)
                        .await?;
                    updated += 1;
                }
            }
        }

        txn.commit().await?;

        tracing::info!(
            "Applied group set to {} occurrence(s) via training {}",
            updated,
            pivot_id
        );

        self.get(pivot_id).await
    }

    /// Applies pre and post questionnaires across the pivot's series
    ///
    /// Detached occurrences already carrying at least one questionnaire keep
    /// their own assignment. Identical pre and post IDs are rejected.
    pub async fn apply_questionnaires_to_series(
        &self,
        pivot_id: i32,
        questionnaires: SeriesQuestionnairesDto,
    ) -> Result<TrainingDto, AppError> {
        if let (Some(pre), Some(post)) = (
            questionnaires.pre_questionnaire_id,
            questionnaires.post_questionnaire_id,
        ) {
            if pre == post {
                return Err(AppError::BadRequest(
                    "Pre and post questionnaire must differ".to_string(),
                ));
            }
        }

        let pivot = TrainingRepository::new(self.db)
            .get_by_id(pivot_id)
            .await?
            .ok_or(AppError::NotFound(format!(
                "Training {} not found",
                pivot_id
            )))?;

        let questionnaire_repo = QuestionnaireRepository::new(self.db);
        for id in [
            questionnaires.pre_questionnaire_id,
            questionnaires.post_questionnaire_id,
        ]
        .into_iter()
        .flatten()
        {
            if !questionnaire_repo.exists(id).await? {
                return Err(AppError::NotFound(format!(
                    "Questionnaire {} not found",
                    id
                )));
            }
        }

        let txn = self.db.begin().await?;
        let repo = TrainingRepository::new(&txn);

        match pivot.series_id {
            None => {
                repo.set_questionnaires(
                    pivot.id,
                    questionnaires.pre_questionnaire_id,
                    questionnaires.post_questionnaire_id,
                )
                .await?;
            }
            Some(series_id) => {
                let occurrences = repo.get_by_series_id(series_id).await?;

                for occurrence in occurrences {
                    let has_questionnaire = occurrence.pre_questionnaire_id.is_some()
                        || occurrence.post_questionnaire_id.is_some();
                    if occurrence.detached && has_questionnaire {
                        continue;
                    }

                    repo.set_questionnaires(
                        occurrence.id,
                        questionnaires.pre_questionnaire_id,
                        questionnaires.post_questionnaire_id,
                    )
                    .await?;
                }
            }
        }

        txn.commit().await?;

        self.get(pivot_id).await
    }

    /// Deletes an occurrence and everything after it in its series
    ///
    /// A standalone pivot is deleted alone. Returns the number of deleted
    /// trainings.
    pub async fn delete_following(&self, pivot_id: i32) -> Result<u64, AppError> {
        let repo = TrainingRepository::new(self.db);

        let pivot = repo
            .get_by_id(pivot_id)
            .await?
            .ok_or(AppError::NotFound(format!(
                "Training {} not found",
                pivot_id
            )))?;

        let deleted = match (pivot.series_id, pivot.sequence) {
            (Some(series_id), Some(sequence)) => {
                repo.delete_from_sequence(series_id, sequence).await?
            }
            (Some(series_id), None) => {
                return Err(InternalError::MissingSequence {
                    training_id: pivot.id,
                    series_id,
                }
                .into())
            }
            (None, _) => {
                repo.delete(pivot.id).await?;
                1
            }
        };

        tracing::info!(
            "Deleted {} training(s) from training {} onward",
            deleted,
            pivot_id
        );

        Ok(deleted)
    }
}
