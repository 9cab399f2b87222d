use std::sync::Arc;

use chrono::{Duration, Utc};
use sea_orm::DatabaseConnection;
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::{
    error::AppError,
    service::{notification::NotificationDispatch, reminder::ReminderService},
};

/// Starts the training reminder scheduler
///
/// This scheduler runs every minute and dispatches reminders for trainings
/// whose start time falls inside the configured lead window. Trainings that
/// already have a reminder logged are skipped.
///
/// # Arguments
/// - `db`: Database connection
/// - `dispatch`: Notification channel reminders are sent through
/// - `lead_minutes`: How far ahead of a training's start the reminder fires
pub async fn start_scheduler(
    db: DatabaseConnection,
    dispatch: Arc<dyn NotificationDispatch>,
    lead_minutes: i64,
) -> Result<(), AppError> {
    let scheduler = JobScheduler::new().await?;

    // Clone resources for the job
    let job_db = db.clone();
    let job_dispatch = dispatch.clone();

    // Schedule job to run every minute
    let job = Job::new_async("0 * * * * *", move |_uuid, _lock| {
        let db = job_db.clone();
        let dispatch = job_dispatch.clone();

        Box::pin(async move {
            if let Err(e) = ReminderService::new(&db, dispatch)
                .process_due(Utc::now(), Duration::minutes(lead_minutes))
                .await
            {
                tracing::error!("Error processing training reminders: {}", e);
            }
        })
    })?;

    scheduler.add(job).await?;
    scheduler.start().await?;

    tracing::info!("Training reminder scheduler started");

    Ok(())
}
