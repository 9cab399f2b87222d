//! Training series domain models, parameters and DTOs.
//!
//! A series is the stored recurrence definition behind a set of training
//! occurrences: the canonical rule string, the IANA timezone the rule is
//! evaluated in, the seed start/end times acting as the duration template,
//! and the optional until/count bounds.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Training series with full data from the database.
///
/// The `start_time`/`end_time` pair doubles as the duration template for
/// generated occurrences; the rule string never embeds its own start.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    /// Unique identifier for the series.
    pub id: i32,
    /// Canonical recurrence rule string.
    pub rule: String,
    /// IANA timezone name the rule is evaluated in.
    pub timezone: String,
    /// Seed start time.
    pub start_time: DateTime<Utc>,
    /// Seed end time, defining the per-occurrence duration.
    pub end_time: DateTime<Utc>,
    /// Inclusive until bound, if the series is bounded by date.
    pub until: Option<DateTime<Utc>>,
    /// Occurrence count bound, if the series is bounded by count.
    pub count: Option<i32>,
    /// When the series was created.
    pub created_at: DateTime<Utc>,
}

impl Series {
    /// Converts an entity model to the series domain model.
    ///
    /// # Arguments
    /// - `entity` - The entity model from the database
    ///
    /// # Returns
    /// - `Series` - The converted series domain model
    pub fn from_entity(entity: entity::training_series::Model) -> Self {
        Self {
            id: entity.id,
            rule: entity.rule,
            timezone: entity.timezone,
            start_time: entity.start_time,
            end_time: entity.end_time,
            until: entity.until,
            count: entity.count,
            created_at: entity.created_at,
        }
    }

    /// Converts the series domain model to a DTO for API responses.
    ///
    /// # Returns
    /// - `SeriesDto` - The converted series DTO
    pub fn into_dto(self) -> SeriesDto {
        SeriesDto {
            id: self.id,
            rule: self.rule,
            timezone: self.timezone,
            start_time: self.start_time,
            end_time: self.end_time,
            until: self.until,
            count: self.count,
            created_at: self.created_at,
        }
    }
}

/// Parameters for creating a new series.
#[derive(Debug, Clone)]
pub struct CreateSeriesParam {
    /// Canonical recurrence rule string.
    pub rule: String,
    /// IANA timezone name the rule is evaluated in.
    pub timezone: String,
    /// Seed start time.
    pub start_time: DateTime<Utc>,
    /// Seed end time, defining the per-occurrence duration.
    pub end_time: DateTime<Utc>,
    /// Inclusive until bound.
    pub until: Option<DateTime<Utc>>,
    /// Occurrence count bound.
    pub count: Option<u32>,
}

/// Parameters for updating an existing series definition.
///
/// Carries the full new definition; occurrences are re-timed against it
/// by the resync pass afterwards.
#[derive(Debug, Clone)]
pub struct UpdateSeriesParam {
    /// New recurrence rule string.
    pub rule: String,
    /// New IANA timezone name.
    pub timezone: String,
    /// New seed start time.
    pub start_time: DateTime<Utc>,
    /// New seed end time.
    pub end_time: DateTime<Utc>,
    /// New inclusive until bound.
    pub until: Option<DateTime<Utc>>,
    /// New occurrence count bound.
    pub count: Option<u32>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct SeriesDto {
    pub id: i32,
    pub rule: String,
    pub timezone: String,
    #[serde(with = "chrono::serde::ts_seconds")]
    pub start_time: DateTime<Utc>,
    #[serde(with = "chrono::serde::ts_seconds")]
    pub end_time: DateTime<Utc>,
    #[serde(with = "chrono::serde::ts_seconds_option")]
    pub until: Option<DateTime<Utc>>,
    pub count: Option<i32>,
    #[serde(with = "chrono::serde::ts_seconds")]
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct UpdateSeriesDto {
    pub rule: String,
    /// IANA timezone name (None keeps the stored zone).
    #[serde(default)]
    pub timezone: Option<String>,
    /// New seed start time as ISO-8601 (None keeps the stored time).
    #[serde(default)]
    pub start_time: Option<String>,
    /// New seed end time as ISO-8601 (None keeps the stored time).
    #[serde(default)]
    pub end_time: Option<String>,
    /// New until bound as ISO-8601 (None clears the bound).
    #[serde(default)]
    pub until: Option<String>,
    /// New count bound (None clears the bound).
    #[serde(default)]
    pub count: Option<u32>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct UpgradeTrainingDto {
    pub rule: String,
    /// IANA timezone name the rule is evaluated in (default: "UTC").
    #[serde(default)]
    pub timezone: Option<String>,
    pub until: Option<String>, // Format: ISO-8601 with offset
    pub count: Option<u32>,
}
