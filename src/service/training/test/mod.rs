use crate::{
    error::AppError,
    model::training::{
        CreateTrainingDto, RecurrenceDto, SeriesQuestionnairesDto, UpdateTrainingDto,
        UpdateTrainingGroupsDto,
    },
    service::training::TrainingService,
};
use chrono::{Duration, TimeZone, Utc};
use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter};
use test_utils::{builder::TestBuilder, factory};

mod cascade;
