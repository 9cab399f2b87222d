use crate::{
    error::AppError,
    model::series::{UpdateSeriesDto, UpgradeTrainingDto},
    service::series::SeriesService,
};
use chrono::{Duration, TimeZone, Utc};
use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter};
use test_utils::{builder::TestBuilder, factory};
