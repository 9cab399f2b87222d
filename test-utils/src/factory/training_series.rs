//! Training series factory for creating test series entities.
//!
//! The defaults describe a weekly series of four occurrences starting one
//! hour from now, which matches what most series tests need as a baseline.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test training series with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::training_series::TrainingSeriesFactory;
///
/// let series = TrainingSeriesFactory::new(&db)
///     .rule("FREQ=DAILY;COUNT=10")
///     .timezone("Europe/Berlin")
///     .build()
///     .await?;
/// ```
pub struct TrainingSeriesFactory<'a> {
    db: &'a DatabaseConnection,
    rule: String,
    timezone: String,
    start_time: chrono::DateTime<Utc>,
    end_time: chrono::DateTime<Utc>,
    until: Option<chrono::DateTime<Utc>>,
    count: Option<i32>,
}

impl<'a> TrainingSeriesFactory<'a> {
    /// Creates a new TrainingSeriesFactory with default values.
    ///
    /// Defaults:
    /// - rule: `"FREQ=WEEKLY;COUNT=4"`
    /// - timezone: `"UTC"`
    /// - start_time: 1 hour from now
    /// - end_time: 2 hours from now
    /// - until: `None`
    /// - count: `Some(4)` (mirrors the rule's COUNT)
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    ///
    /// # Returns
    /// - `TrainingSeriesFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let now = Utc::now();
        Self {
            db,
            rule: "FREQ=WEEKLY;COUNT=4".to_string(),
            timezone: "UTC".to_string(),
            start_time: now + chrono::Duration::hours(1),
            end_time: now + chrono::Duration::hours(2),
            until: None,
            count: Some(4),
        }
    }

    /// Sets the recurrence rule string.
    ///
    /// # Arguments
    /// - `rule` - Rule string, e.g. `"FREQ=DAILY;COUNT=10"`
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn rule(mut self, rule: impl Into<String>) -> Self {
        self.rule = rule.into();
        self
    }

    /// Sets the IANA timezone name.
    ///
    /// # Arguments
    /// - `timezone` - Zone name, e.g. `"Europe/Berlin"`
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn timezone(mut self, timezone: impl Into<String>) -> Self {
        self.timezone = timezone.into();
        self
    }

    /// Sets the series start time (duration template start).
    ///
    /// # Arguments
    /// - `start_time` - Absolute start instant of the first occurrence
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn start_time(mut self, start_time: chrono::DateTime<Utc>) -> Self {
        self.start_time = start_time;
        self
    }

    /// Sets the series end time (duration template end).
    ///
    /// # Arguments
    /// - `end_time` - Absolute end instant of the first occurrence
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn end_time(mut self, end_time: chrono::DateTime<Utc>) -> Self {
        self.end_time = end_time;
        self
    }

    /// Sets the inclusive until bound and clears the count.
    ///
    /// # Arguments
    /// - `until` - Inclusive upper bound on occurrence starts
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn until(mut self, until: chrono::DateTime<Utc>) -> Self {
        self.until = Some(until);
        self.count = None;
        self
    }

    /// Sets the occurrence count and clears the until bound.
    ///
    /// # Arguments
    /// - `count` - Maximum number of occurrences
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn count(mut self, count: i32) -> Self {
        self.count = Some(count);
        self.until = None;
        self
    }

    /// Builds and inserts the series entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::training_series::Model)` - Created series entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::training_series::Model, DbErr> {
        let now = Utc::now();
        entity::training_series::ActiveModel {
            rule: ActiveValue::Set(self.rule),
            timezone: ActiveValue::Set(self.timezone),
            start_time: ActiveValue::Set(self.start_time),
            end_time: ActiveValue::Set(self.end_time),
            until: ActiveValue::Set(self.until),
            count: ActiveValue::Set(self.count),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a training series with default values.
///
/// Shorthand for `TrainingSeriesFactory::new(db).build().await`.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok(entity::training_series::Model)` - Created series entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_series(
    db: &DatabaseConnection,
) -> Result<entity::training_series::Model, DbErr> {
    TrainingSeriesFactory::new(db).build().await
}
