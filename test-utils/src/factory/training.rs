//! Training factory for creating test training entities.
//!
//! This module provides factory methods for creating training entities with
//! sensible defaults, reducing boilerplate in tests. The factory supports
//! customization through a builder pattern.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test trainings with customizable fields.
///
/// Provides a builder pattern for creating training entities with default
/// values that can be overridden as needed for specific test scenarios.
/// Trainings are standalone by default; use `series()` to attach them to a
/// series with a sequence number.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::training::TrainingFactory;
///
/// let training = TrainingFactory::new(&db)
///     .series(series.id, 3)
///     .detached(true)
///     .build()
///     .await?;
/// ```
pub struct TrainingFactory<'a> {
    db: &'a DatabaseConnection,
    series_id: Option<i32>,
    sequence: Option<i32>,
    title: String,
    description: Option<String>,
    start_time: chrono::DateTime<Utc>,
    end_time: chrono::DateTime<Utc>,
    detached: bool,
    group_detached: bool,
    pre_questionnaire_id: Option<i32>,
    post_questionnaire_id: Option<i32>,
}

impl<'a> TrainingFactory<'a> {
    /// Creates a new TrainingFactory with default values.
    ///
    /// Defaults:
    /// - title: `"Training {id}"` where id is auto-incremented
    /// - description: `Some("Test training description")`
    /// - start_time: 1 hour from now
    /// - end_time: 2 hours from now
    /// - standalone (no series, no sequence), not detached
    /// - no questionnaires
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    ///
    /// # Returns
    /// - `TrainingFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        let now = Utc::now();
        Self {
            db,
            series_id: None,
            sequence: None,
            title: format!("Training {}", id),
            description: Some("Test training description".to_string()),
            start_time: now + chrono::Duration::hours(1),
            end_time: now + chrono::Duration::hours(2),
            detached: false,
            group_detached: false,
            pre_questionnaire_id: None,
            post_questionnaire_id: None,
        }
    }

    /// Attaches the training to a series with a sequence position.
    ///
    /// # Arguments
    /// - `series_id` - Owning series
    /// - `sequence` - 1-based position within the series
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn series(mut self, series_id: i32, sequence: i32) -> Self {
        self.series_id = Some(series_id);
        self.sequence = Some(sequence);
        self
    }

    /// Sets the training title.
    ///
    /// # Arguments
    /// - `title` - Display title for the training
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the training description.
    ///
    /// # Arguments
    /// - `description` - Optional training description
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn description(mut self, description: Option<String>) -> Self {
        self.description = description;
        self
    }

    /// Sets the start time.
    ///
    /// # Arguments
    /// - `start_time` - Scheduled start of the training
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn start_time(mut self, start_time: chrono::DateTime<Utc>) -> Self {
        self.start_time = start_time;
        self
    }

    /// Sets the end time.
    ///
    /// # Arguments
    /// - `end_time` - Scheduled end of the training
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn end_time(mut self, end_time: chrono::DateTime<Utc>) -> Self {
        self.end_time = end_time;
        self
    }

    /// Sets the detached flag.
    ///
    /// # Arguments
    /// - `detached` - Whether the occurrence content was edited independently
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn detached(mut self, detached: bool) -> Self {
        self.detached = detached;
        self
    }

    /// Sets the group-detached flag.
    ///
    /// # Arguments
    /// - `group_detached` - Whether the occurrence groups were edited independently
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn group_detached(mut self, group_detached: bool) -> Self {
        self.group_detached = group_detached;
        self
    }

    /// Sets the pre-training questionnaire.
    ///
    /// # Arguments
    /// - `pre_questionnaire_id` - Optional questionnaire id
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn pre_questionnaire(mut self, pre_questionnaire_id: Option<i32>) -> Self {
        self.pre_questionnaire_id = pre_questionnaire_id;
        self
    }

    /// Sets the post-training questionnaire.
    ///
    /// # Arguments
    /// - `post_questionnaire_id` - Optional questionnaire id
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn post_questionnaire(mut self, post_questionnaire_id: Option<i32>) -> Self {
        self.post_questionnaire_id = post_questionnaire_id;
        self
    }

    /// Builds and inserts the training entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::training::Model)` - Created training entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::training::Model, DbErr> {
        let now = Utc::now();
        entity::training::ActiveModel {
            series_id: ActiveValue::Set(self.series_id),
            sequence: ActiveValue::Set(self.sequence),
            title: ActiveValue::Set(self.title),
            description: ActiveValue::Set(self.description),
            start_time: ActiveValue::Set(self.start_time),
            end_time: ActiveValue::Set(self.end_time),
            detached: ActiveValue::Set(self.detached),
            group_detached: ActiveValue::Set(self.group_detached),
            pre_questionnaire_id: ActiveValue::Set(self.pre_questionnaire_id),
            post_questionnaire_id: ActiveValue::Set(self.post_questionnaire_id),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a standalone training with default values.
///
/// Shorthand for `TrainingFactory::new(db).build().await`.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok(entity::training::Model)` - Created training entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_training(db: &DatabaseConnection) -> Result<entity::training::Model, DbErr> {
    TrainingFactory::new(db).build().await
}

/// Assigns a group to a training.
///
/// # Arguments
/// - `db` - Database connection
/// - `training_id` - Training to assign the group to
/// - `group_id` - Group to assign
///
/// # Returns
/// - `Ok(entity::training_group::Model)` - Created assignment row
/// - `Err(DbErr)` - Database error during insert
pub async fn create_training_group(
    db: &DatabaseConnection,
    training_id: i32,
    group_id: i32,
) -> Result<entity::training_group::Model, DbErr> {
    entity::training_group::ActiveModel {
        training_id: ActiveValue::Set(training_id),
        group_id: ActiveValue::Set(group_id),
        ..Default::default()
    }
    .insert(db)
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::TestBuilder;

    #[tokio::test]
    async fn creates_standalone_training_with_defaults() -> Result<(), DbErr> {
        let test = TestBuilder::new()
            .with_training_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let training = create_training(db).await?;

        assert!(training.series_id.is_none());
        assert!(training.sequence.is_none());
        assert!(!training.detached);
        assert!(!training.group_detached);
        assert!(training.end_time > training.start_time);

        Ok(())
    }

    #[tokio::test]
    async fn creates_series_training_with_sequence() -> Result<(), DbErr> {
        let test = TestBuilder::new()
            .with_training_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let series = crate::factory::training_series::create_series(db).await?;
        let training = TrainingFactory::new(db).series(series.id, 2).build().await?;

        assert_eq!(training.series_id, Some(series.id));
        assert_eq!(training.sequence, Some(2));

        Ok(())
    }
}
