//! Scheduled reminder processing.
//!
//! The scheduler calls [`ReminderService::process_due`] once a minute. Each
//! training entering the lead window gets exactly one reminder batch: the
//! notification log is checked before dispatching and written after, so a
//! training is never reminded twice even across restarts.

use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use sea_orm::DatabaseConnection;

use crate::{
    data::{
        group::GroupMemberRepository,
        notification::TrainingNotificationRepository,
        training::{TrainingGroupRepository, TrainingRepository},
    },
    error::AppError,
    model::notification::{DispatchSummary, Recipient, ReminderNotice},
    service::notification::NotificationDispatch,
};

#[cfg(test)]
mod test;

/// Log kind recorded for upcoming-training reminders.
pub const REMINDER_KIND: &str = "reminder";

pub struct ReminderService<'a> {
    db: &'a DatabaseConnection,
    dispatch: Arc<dyn NotificationDispatch>,
}

impl<'a> ReminderService<'a> {
    pub fn new(db: &'a DatabaseConnection, dispatch: Arc<dyn NotificationDispatch>) -> Self {
        Self { db, dispatch }
    }

    /// Processes every training due a reminder inside the lead window
    ///
    /// Trainings already present in the notification log are skipped. Each
    /// training is handled independently; a failure in one batch is logged
    /// and never stops the scan. Returns the number of trainings processed.
    pub async fn process_due(
        &self,
        now: DateTime<Utc>,
        lead: Duration,
    ) -> Result<u32, AppError> {
        let due = TrainingRepository::new(self.db)
            .get_starting_between(now, now + lead)
            .await?;

        let notification_repo = TrainingNotificationRepository::new(self.db);

        let mut processed = 0;
        for training in due {
            if notification_repo
                .exists_for_training(training.id, REMINDER_KIND)
                .await?
            {
                continue;
            }

            match self.send_reminder(&training).await {
                Ok(summary) => {
                    notification_repo
                        .create(
                            training.id,
                            REMINDER_KIND.to_string(),
                            summary.delivered,
                            summary.failed,
                        )
                        .await?;
                    processed += 1;

                    tracing::info!(
                        "Reminder for training {} delivered to {} recipient(s), {} failed",
                        training.id,
                        summary.delivered,
                        summary.failed
                    );
                }
                Err(err) => {
                    tracing::error!(
                        "Failed to process reminder for training {}: {}",
                        training.id,
                        err
                    );
                }
            }
        }

        Ok(processed)
    }

    /// Dispatches one training's reminder to the members of its groups
    async fn send_reminder(
        &self,
        training: &entity::training::Model,
    ) -> Result<DispatchSummary, AppError> {
        let group_ids = TrainingGroupRepository::new(self.db)
            .get_group_ids(training.id)
            .await?;
        let users = GroupMemberRepository::new(self.db)
            .get_users_in_groups(&group_ids)
            .await?;

        let notice = ReminderNotice {
            training_id: training.id,
            title: training.title.clone(),
            starts_at: training.start_time,
        };

        let mut summary = DispatchSummary::default();
        for user in users {
            let recipient = Recipient {
                user_id: user.id,
                name: user.name,
                push_token: user.push_token,
            };

            match self.dispatch.send(&recipient, &notice).await {
                Ok(()) => summary.delivered += 1,
                Err(err) => {
                    summary.failed += 1;
                    tracing::warn!(
                        "Reminder dispatch to user {} failed: {}",
                        recipient.user_id,
                        err
                    );
                }
            }
        }

        Ok(summary)
    }
}
