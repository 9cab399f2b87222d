use crate::data::notification::TrainingNotificationRepository;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
