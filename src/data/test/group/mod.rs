use crate::data::group::{GroupMemberRepository, GroupRepository};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod count_existing;
mod members;
