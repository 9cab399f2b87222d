//! Questionnaire factory for creating test questionnaire entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test questionnaires with customizable fields.
pub struct QuestionnaireFactory<'a> {
    db: &'a DatabaseConnection,
    club_id: i32,
    title: String,
}

impl<'a> QuestionnaireFactory<'a> {
    /// Creates a new QuestionnaireFactory with default values.
    ///
    /// Defaults:
    /// - title: `"Questionnaire {id}"` where id is auto-incremented
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `club_id` - Club the questionnaire belongs to
    ///
    /// # Returns
    /// - `QuestionnaireFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection, club_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            club_id,
            title: format!("Questionnaire {}", id),
        }
    }

    /// Sets the questionnaire title.
    ///
    /// # Arguments
    /// - `title` - Display title for the questionnaire
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Builds and inserts the questionnaire entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::questionnaire::Model)` - Created questionnaire entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::questionnaire::Model, DbErr> {
        entity::questionnaire::ActiveModel {
            club_id: ActiveValue::Set(self.club_id),
            title: ActiveValue::Set(self.title),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a questionnaire with default values.
///
/// Shorthand for `QuestionnaireFactory::new(db, club_id).build().await`.
///
/// # Arguments
/// - `db` - Database connection
/// - `club_id` - Club the questionnaire belongs to
///
/// # Returns
/// - `Ok(entity::questionnaire::Model)` - Created questionnaire entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_questionnaire(
    db: &DatabaseConnection,
    club_id: i32,
) -> Result<entity::questionnaire::Model, DbErr> {
    QuestionnaireFactory::new(db, club_id).build().await
}
