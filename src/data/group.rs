use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

pub struct GroupRepository<'a, C> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> GroupRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets a group by ID
    pub async fn get_by_id(&self, id: i32) -> Result<Option<entity::group::Model>, DbErr> {
        entity::prelude::Group::find_by_id(id).one(self.db).await
    }

    /// Counts how many of the given group IDs exist
    pub async fn count_existing(&self, ids: &[i32]) -> Result<u64, DbErr> {
        entity::prelude::Group::find()
            .filter(entity::group::Column::Id.is_in(ids.to_vec()))
            .count(self.db)
            .await
    }
}

pub struct GroupMemberRepository<'a, C> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> GroupMemberRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Adds a user to a group
    pub async fn add(
        &self,
        group_id: i32,
        user_id: i32,
    ) -> Result<entity::group_member::Model, DbErr> {
        entity::group_member::ActiveModel {
            group_id: ActiveValue::Set(group_id),
            user_id: ActiveValue::Set(user_id),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Removes a user from a group, returning the number of rows removed
    pub async fn remove(&self, group_id: i32, user_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::GroupMember::delete_many()
            .filter(entity::group_member::Column::GroupId.eq(group_id))
            .filter(entity::group_member::Column::UserId.eq(user_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Checks whether a user is a member of a group
    pub async fn exists(&self, group_id: i32, user_id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::GroupMember::find()
            .filter(entity::group_member::Column::GroupId.eq(group_id))
            .filter(entity::group_member::Column::UserId.eq(user_id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Gets the members of a group with their user rows, ordered by join date
    pub async fn get_members(
        &self,
        group_id: i32,
    ) -> Result<Vec<(entity::group_member::Model, Option<entity::user::Model>)>, DbErr> {
        entity::prelude::GroupMember::find()
            .filter(entity::group_member::Column::GroupId.eq(group_id))
            .order_by_asc(entity::group_member::Column::CreatedAt)
            .find_also_related(entity::prelude::User)
            .all(self.db)
            .await
    }

    /// Gets the distinct users who are members of any of the given groups
    pub async fn get_users_in_groups(
        &self,
        group_ids: &[i32],
    ) -> Result<Vec<entity::user::Model>, DbErr> {
        if group_ids.is_empty() {
            return Ok(Vec::new());
        }

        let memberships = entity::prelude::GroupMember::find()
            .filter(entity::group_member::Column::GroupId.is_in(group_ids.to_vec()))
            .all(self.db)
            .await?;

        let mut user_ids = memberships
            .into_iter()
            .map(|membership| membership.user_id)
            .collect::<Vec<_>>();
        user_ids.sort_unstable();
        user_ids.dedup();

        entity::prelude::User::find()
            .filter(entity::user::Column::Id.is_in(user_ids))
            .all(self.db)
            .await
    }
}
