//! Group factory for creating test group and membership entities.
//!
//! Groups always belong to a club, so the factory takes the owning club id
//! up front. Membership rows are plain join entries and get a direct
//! convenience function instead of a builder.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test groups with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::group::GroupFactory;
///
/// let group = GroupFactory::new(&db, club.id)
///     .name("U19 squad")
///     .build()
///     .await?;
/// ```
pub struct GroupFactory<'a> {
    db: &'a DatabaseConnection,
    club_id: i32,
    name: String,
}

impl<'a> GroupFactory<'a> {
    /// Creates a new GroupFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Group {id}"` where id is auto-incremented
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `club_id` - Club the group belongs to
    ///
    /// # Returns
    /// - `GroupFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection, club_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            club_id,
            name: format!("Group {}", id),
        }
    }

    /// Sets the group name.
    ///
    /// # Arguments
    /// - `name` - Display name for the group
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Builds and inserts the group entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::group::Model)` - Created group entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::group::Model, DbErr> {
        entity::group::ActiveModel {
            club_id: ActiveValue::Set(self.club_id),
            name: ActiveValue::Set(self.name),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a group with default values.
///
/// Shorthand for `GroupFactory::new(db, club_id).build().await`.
///
/// # Arguments
/// - `db` - Database connection
/// - `club_id` - Club the group belongs to
///
/// # Returns
/// - `Ok(entity::group::Model)` - Created group entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_group(
    db: &DatabaseConnection,
    club_id: i32,
) -> Result<entity::group::Model, DbErr> {
    GroupFactory::new(db, club_id).build().await
}

/// Adds a user to a group.
///
/// # Arguments
/// - `db` - Database connection
/// - `group_id` - Group to add the user to
/// - `user_id` - User to add
///
/// # Returns
/// - `Ok(entity::group_member::Model)` - Created membership row
/// - `Err(DbErr)` - Database error during insert
pub async fn create_group_member(
    db: &DatabaseConnection,
    group_id: i32,
    user_id: i32,
) -> Result<entity::group_member::Model, DbErr> {
    entity::group_member::ActiveModel {
        group_id: ActiveValue::Set(group_id),
        user_id: ActiveValue::Set(user_id),
        created_at: ActiveValue::Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await
}
