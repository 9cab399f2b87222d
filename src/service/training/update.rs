//! Single-occurrence edits.
//!
//! Editing one occurrence directly detaches it from its series: content
//! edits set `detached`, group edits set `group_detached`. Later
//! series-wide changes leave detached occurrences alone.

use sea_orm::TransactionTrait;

use crate::{
    data::training::{TrainingGroupRepository, TrainingRepository},
    error::AppError,
    model::training::{
        Training, TrainingDto, UpdateTrainingDto, UpdateTrainingGroupsDto, UpdateTrainingParam,
    },
    service::group::require_groups_exist,
    util::parse::parse_timestamp,
};

use super::TrainingService;

impl<'a> TrainingService<'a> {
    /// Edits one occurrence's content and detaches it from its series
    pub async fn update_content(
        &self,
        id: i32,
        update: UpdateTrainingDto,
    ) -> Result<TrainingDto, AppError> {
        let repo = TrainingRepository::new(self.db);

        repo.get_by_id(id)
            .await?
            .ok_or(AppError::NotFound(format!("Training {} not found", id)))?;

        let param = UpdateTrainingParam {
            title: update.title,
            description: update.description,
            start_time: parse_timestamp(&update.start_time)?,
            end_time: parse_timestamp(&update.end_time)?,
        };

        let updated = repo.update_content(id, param).await?;

        let group_ids = TrainingGroupRepository::new(self.db)
            .get_group_ids(id)
            .await?;

        Ok(Training::from_entity(updated).into_dto(group_ids))
    }

    /// Replaces one occurrence's group assignment and marks it independently
    /// grouped
    pub async fn update_groups(
        &self,
        id: i32,
        update: UpdateTrainingGroupsDto,
    ) -> Result<TrainingDto, AppError> {
        TrainingRepository::new(self.db)
            .get_by_id(id)
            .await?
            .ok_or(AppError::NotFound(format!("Training {} not found", id)))?;

        let mut group_ids = update.group_ids;
        group_ids.sort_unstable();
        group_ids.dedup();

        require_groups_exist(self.db, &group_ids).await?;

        let txn = self.db.begin().await?;

        TrainingGroupRepository::new(&txn)
            .replace_for_training(id, &group_ids)
            .await?;
        let updated = TrainingRepository::new(&txn).mark_group_detached(id).await?;

        txn.commit().await?;

        Ok(Training::from_entity(updated).into_dto(group_ids))
    }
}
