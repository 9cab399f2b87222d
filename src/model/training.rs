//! Training domain models, parameters and DTOs.
//!
//! A training is a single session a group attends, either standalone or as
//! one occurrence of a recurring series. Request DTOs carry timestamps as
//! ISO-8601 strings and are parsed at the service boundary; response DTOs
//! serialize timestamps as unix seconds.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Training occurrence with full data from the database.
///
/// This is the primary model returned by repository methods. The `detached`
/// and `group_detached` flags record that the occurrence was edited
/// independently of its series and must be skipped by series-wide changes.
#[derive(Debug, Clone, PartialEq)]
pub struct Training {
    /// Unique identifier for the training.
    pub id: i32,
    /// Series this occurrence belongs to, None for standalone trainings.
    pub series_id: Option<i32>,
    /// One-based position within the series, None for standalone trainings.
    pub sequence: Option<i32>,
    /// Title of the training.
    pub title: String,
    /// Optional free-form description.
    pub description: Option<String>,
    /// Start of the session.
    pub start_time: DateTime<Utc>,
    /// End of the session.
    pub end_time: DateTime<Utc>,
    /// Whether the occurrence content was edited independently.
    pub detached: bool,
    /// Whether the occurrence group assignment was edited independently.
    pub group_detached: bool,
    /// Questionnaire to fill in before the session, if assigned.
    pub pre_questionnaire_id: Option<i32>,
    /// Questionnaire to fill in after the session, if assigned.
    pub post_questionnaire_id: Option<i32>,
    /// When the training was created.
    pub created_at: DateTime<Utc>,
}

impl Training {
    /// Converts an entity model to the training domain model.
    ///
    /// # Arguments
    /// - `entity` - The entity model from the database
    ///
    /// # Returns
    /// - `Training` - The converted training domain model
    pub fn from_entity(entity: entity::training::Model) -> Self {
        Self {
            id: entity.id,
            series_id: entity.series_id,
            sequence: entity.sequence,
            title: entity.title,
            description: entity.description,
            start_time: entity.start_time,
            end_time: entity.end_time,
            detached: entity.detached,
            group_detached: entity.group_detached,
            pre_questionnaire_id: entity.pre_questionnaire_id,
            post_questionnaire_id: entity.post_questionnaire_id,
            created_at: entity.created_at,
        }
    }

    /// Converts the training domain model to a DTO for API responses.
    ///
    /// # Arguments
    /// - `group_ids` - IDs of the groups assigned to this training
    ///
    /// # Returns
    /// - `TrainingDto` - The converted training DTO
    pub fn into_dto(self, group_ids: Vec<i32>) -> TrainingDto {
        TrainingDto {
            id: self.id,
            series_id: self.series_id,
            sequence: self.sequence,
            title: self.title,
            description: self.description,
            start_time: self.start_time,
            end_time: self.end_time,
            detached: self.detached,
            group_detached: self.group_detached,
            pre_questionnaire_id: self.pre_questionnaire_id,
            post_questionnaire_id: self.post_questionnaire_id,
            group_ids,
            created_at: self.created_at,
        }
    }

    /// Converts the training domain model to a list item DTO.
    ///
    /// # Returns
    /// - `TrainingListItemDto` - The converted list item DTO
    pub fn into_list_item(self) -> TrainingListItemDto {
        TrainingListItemDto {
            id: self.id,
            series_id: self.series_id,
            sequence: self.sequence,
            title: self.title,
            start_time: self.start_time,
            end_time: self.end_time,
            detached: self.detached,
            group_detached: self.group_detached,
        }
    }
}

/// Parameters for creating a new training occurrence.
#[derive(Debug, Clone)]
pub struct CreateTrainingParam {
    /// Title of the training.
    pub title: String,
    /// Optional free-form description.
    pub description: Option<String>,
    /// Start of the session.
    pub start_time: DateTime<Utc>,
    /// End of the session.
    pub end_time: DateTime<Utc>,
    /// Groups to assign to the training.
    pub group_ids: Vec<i32>,
}

/// Parameters for editing a single training occurrence's content.
#[derive(Debug, Clone)]
pub struct UpdateTrainingParam {
    /// New title.
    pub title: String,
    /// New description.
    pub description: Option<String>,
    /// New start of the session.
    pub start_time: DateTime<Utc>,
    /// New end of the session.
    pub end_time: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CreateTrainingDto {
    pub title: String,
    pub description: Option<String>,
    pub start_time: String, // Format: ISO-8601 with offset, e.g. "2025-01-06T10:00:00Z"
    pub end_time: String,   // Format: ISO-8601 with offset
    #[serde(default)]
    pub group_ids: Vec<i32>,
    /// When present the training is created as a recurring series and the
    /// response carries the seed occurrence.
    #[serde(default)]
    pub recurrence: Option<RecurrenceDto>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct RecurrenceDto {
    pub rule: String,
    /// IANA timezone name the rule is evaluated in (default: "UTC").
    #[serde(default)]
    pub timezone: Option<String>,
    pub until: Option<String>, // Format: ISO-8601 with offset
    pub count: Option<u32>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct UpdateTrainingDto {
    pub title: String,
    pub description: Option<String>,
    pub start_time: String, // Format: ISO-8601 with offset
    pub end_time: String,   // Format: ISO-8601 with offset
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct UpdateTrainingGroupsDto {
    pub group_ids: Vec<i32>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct SeriesQuestionnairesDto {
    pub pre_questionnaire_id: Option<i32>,
    pub post_questionnaire_id: Option<i32>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct TrainingDto {
    pub id: i32,
    pub series_id: Option<i32>,
    pub sequence: Option<i32>,
    pub title: String,
    pub description: Option<String>,
    #[serde(with = "chrono::serde::ts_seconds")]
    pub start_time: DateTime<Utc>,
    #[serde(with = "chrono::serde::ts_seconds")]
    pub end_time: DateTime<Utc>,
    pub detached: bool,
    pub group_detached: bool,
    pub pre_questionnaire_id: Option<i32>,
    pub post_questionnaire_id: Option<i32>,
    pub group_ids: Vec<i32>,
    #[serde(with = "chrono::serde::ts_seconds")]
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct TrainingListItemDto {
    pub id: i32,
    pub series_id: Option<i32>,
    pub sequence: Option<i32>,
    pub title: String,
    #[serde(with = "chrono::serde::ts_seconds")]
    pub start_time: DateTime<Utc>,
    #[serde(with = "chrono::serde::ts_seconds")]
    pub end_time: DateTime<Utc>,
    pub detached: bool,
    pub group_detached: bool,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct PaginatedTrainingsDto {
    pub trainings: Vec<TrainingListItemDto>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}
