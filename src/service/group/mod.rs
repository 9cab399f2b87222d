//! Group membership operations.

use sea_orm::{ConnectionTrait, DatabaseConnection, TransactionTrait};

use crate::{
    data::{
        group::{GroupMemberRepository, GroupRepository},
        user::UserRepository,
    },
    error::AppError,
    model::group::{AddMembersDto, GroupMemberDto, GroupMembersDto},
};

#[cfg(test)]
mod test;

/// Checks that every referenced group exists.
///
/// Duplicate IDs are collapsed before counting, so a request naming the same
/// group twice is still valid.
///
/// # Arguments
/// - `db` - Database connection or open transaction
/// - `group_ids` - The group IDs to verify
///
/// # Returns
/// - `Ok(())` - Every group exists (or the slice was empty)
/// - `Err(AppError::NotFound)` - At least one group does not exist
pub async fn require_groups_exist<C: ConnectionTrait>(
    db: &C,
    group_ids: &[i32],
) -> Result<(), AppError> {
    if group_ids.is_empty() {
        return Ok(());
    }

    let mut ids = group_ids.to_vec();
    ids.sort_unstable();
    ids.dedup();

    let existing = GroupRepository::new(db).count_existing(&ids).await?;
    if existing as usize != ids.len() {
        return Err(AppError::NotFound(
            "One or more referenced groups do not exist".to_string(),
        ));
    }

    Ok(())
}

pub struct GroupService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GroupService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Adds users to a group and returns the fresh member snapshot
    ///
    /// The whole batch is applied in one transaction; a missing user or an
    /// existing membership anywhere in the batch rejects all of it.
    pub async fn add_members(
        &self,
        group_id: i32,
        add_members: AddMembersDto,
    ) -> Result<GroupMembersDto, AppError> {
        // Ensure the group exists
        GroupRepository::new(self.db)
            .get_by_id(group_id)
            .await?
            .ok_or(AppError::NotFound(format!("Group {} not found", group_id)))?;

        let mut user_ids = add_members.user_ids;
        user_ids.sort_unstable();
        user_ids.dedup();

        if user_ids.is_empty() {
            return Err(AppError::BadRequest("No users given to add".to_string()));
        }

        let txn = self.db.begin().await?;

        let user_repo = UserRepository::new(&txn);
        let member_repo = GroupMemberRepository::new(&txn);

        for user_id in &user_ids {
            if !user_repo.exists(*user_id).await? {
                return Err(AppError::NotFound(format!("User {} not found", user_id)));
            }

            if member_repo.exists(group_id, *user_id).await? {
                return Err(AppError::BadRequest(format!(
                    "User {} is already a member of group {}",
                    user_id, group_id
                )));
            }

            member_repo.add(group_id, *user_id).await?;
        }

        txn.commit().await?;

        tracing::info!("Added {} member(s) to group {}", user_ids.len(), group_id);

        self.get_members(group_id).await
    }

    /// Removes a user from a group and returns the fresh member snapshot
    pub async fn remove_member(
        &self,
        group_id: i32,
        user_id: i32,
    ) -> Result<GroupMembersDto, AppError> {
        GroupRepository::new(self.db)
            .get_by_id(group_id)
            .await?
            .ok_or(AppError::NotFound(format!("Group {} not found", group_id)))?;

        let removed = GroupMemberRepository::new(self.db)
            .remove(group_id, user_id)
            .await?;

        if removed == 0 {
            return Err(AppError::NotFound(format!(
                "User {} is not a member of group {}",
                user_id, group_id
            )));
        }

        self.get_members(group_id).await
    }

    /// Gets the member snapshot of a group
    pub async fn get_members(&self, group_id: i32) -> Result<GroupMembersDto, AppError> {
        GroupRepository::new(self.db)
            .get_by_id(group_id)
            .await?
            .ok_or(AppError::NotFound(format!("Group {} not found", group_id)))?;

        let memberships = GroupMemberRepository::new(self.db)
            .get_members(group_id)
            .await?;

        let members = memberships
            .into_iter()
            .map(|(membership, user)| {
                let user = user.ok_or(AppError::InternalError(format!(
                    "Group membership {} references a missing user",
                    membership.id
                )))?;

                Ok(GroupMemberDto {
                    user_id: user.id,
                    name: user.name,
                    email: user.email,
                    member_since: membership.created_at,
                })
            })
            .collect::<Result<Vec<_>, AppError>>()?;

        Ok(GroupMembersDto { group_id, members })
    }
}
