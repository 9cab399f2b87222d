use crate::{
    data::training::{TrainingGroupRepository, TrainingRepository},
    model::training::UpdateTrainingParam,
};
use chrono::{Duration, Utc};
use sea_orm::{ActiveValue, DbErr};
use test_utils::{builder::TestBuilder, factory};

mod attach_to_series;
mod create;
mod delete_from_sequence;
mod get_all_paginated;
mod get_starting_between;
mod groups;
mod update_content;
mod update_times;
