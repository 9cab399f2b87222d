pub mod prelude;

pub mod club;
pub mod group;
pub mod group_member;
pub mod questionnaire;
pub mod training;
pub mod training_group;
pub mod training_notification;
pub mod training_series;
pub mod user;
