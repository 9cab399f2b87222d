use crate::{
    data::series::TrainingSeriesRepository,
    model::series::{CreateSeriesParam, UpdateSeriesParam},
};
use chrono::{Duration, Utc};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod get_by_id;
mod update;
