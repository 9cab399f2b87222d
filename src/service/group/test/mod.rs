use crate::{error::AppError, model::group::AddMembersDto, service::group::GroupService};
use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter};
use test_utils::{builder::TestBuilder, factory};
