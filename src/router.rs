use axum::{
    routing::{delete, get, post, put},
    Router,
};
use utoipa::OpenApi;

use crate::{
    controller::{group, series, training},
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "trainboard API",
        version = "0.1.0",
        description = "Training schedule management with recurring series, group assignments, and reminder notifications.",
    ),
    tags(
        (name = "training", description = "Training CRUD, group assignments, and series-wide edits"),
        (name = "series", description = "Recurring series definitions and resynchronization"),
        (name = "group", description = "Group membership management"),
    ),
    paths(
        // Training
        crate::controller::training::create_training,
        crate::controller::training::get_trainings,
        crate::controller::training::get_training,
        crate::controller::training::update_training,
        crate::controller::training::update_training_groups,
        crate::controller::training::delete_training,
        crate::controller::training::delete_training_following,
        crate::controller::training::apply_series_groups,
        crate::controller::training::apply_series_questionnaires,
        crate::controller::training::upgrade_training,
        // Series
        crate::controller::series::get_series,
        crate::controller::series::update_series,
        // Group
        crate::controller::group::add_group_members,
        crate::controller::group::remove_group_member,
        crate::controller::group::get_group_members,
    ),
    components(schemas(
        crate::model::api::ErrorDto,
        crate::model::training::CreateTrainingDto,
        crate::model::training::RecurrenceDto,
        crate::model::training::UpdateTrainingDto,
        crate::model::training::UpdateTrainingGroupsDto,
        crate::model::training::SeriesQuestionnairesDto,
        crate::model::training::TrainingDto,
        crate::model::training::TrainingListItemDto,
        crate::model::training::PaginatedTrainingsDto,
        crate::model::series::SeriesDto,
        crate::model::series::UpdateSeriesDto,
        crate::model::series::UpgradeTrainingDto,
        crate::model::group::AddMembersDto,
        crate::model::group::GroupMemberDto,
        crate::model::group::GroupMembersDto,
    ))
)]
pub struct ApiDoc;

pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/api/trainings",
            get(training::get_trainings).post(training::create_training),
        )
        .route(
            "/api/trainings/{id}",
            get(training::get_training)
                .put(training::update_training)
                .delete(training::delete_training),
        )
        .route(
            "/api/trainings/{id}/groups",
            put(training::update_training_groups),
        )
        .route(
            "/api/trainings/{id}/following",
            delete(training::delete_training_following),
        )
        .route("/api/trainings/{id}/series", post(training::upgrade_training))
        .route(
            "/api/trainings/{id}/series/groups",
            put(training::apply_series_groups),
        )
        .route(
            "/api/trainings/{id}/series/questionnaires",
            put(training::apply_series_questionnaires),
        )
        .route(
            "/api/series/{id}",
            get(series::get_series).put(series::update_series),
        )
        .route(
            "/api/groups/{id}/members",
            get(group::get_group_members).post(group::add_group_members),
        )
        .route(
            "/api/groups/{id}/members/{user_id}",
            delete(group::remove_group_member),
        )
}
