//! Group membership DTOs.
//!
//! Groups are managed per club; the endpoints here only mutate membership.
//! Every mutation returns a fresh member snapshot so clients never have to
//! reconstruct the list from the request they just sent.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct AddMembersDto {
    pub user_ids: Vec<i32>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct GroupMemberDto {
    pub user_id: i32,
    pub name: String,
    pub email: String,
    #[serde(with = "chrono::serde::ts_seconds")]
    pub member_since: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct GroupMembersDto {
    pub group_id: i32,
    pub members: Vec<GroupMemberDto>,
}
