use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    controller::param::PaginationParam,
    error::AppError,
    model::{
        api::ErrorDto,
        series::UpgradeTrainingDto,
        training::{
            CreateTrainingDto, PaginatedTrainingsDto, SeriesQuestionnairesDto, TrainingDto,
            UpdateTrainingDto, UpdateTrainingGroupsDto,
        },
    },
    service::{series::SeriesService, training::TrainingService},
    state::AppState,
};

/// Tag for grouping training endpoints in OpenAPI documentation
pub static TRAINING_TAG: &str = "training";

#[utoipa::path(
    post,
    path = "/api/trainings",
    tag = TRAINING_TAG,
    request_body = CreateTrainingDto,
    responses(
        (status = 201, description = "Successfully created training", body = TrainingDto),
        (status = 400, description = "Invalid training data or recurrence rule", body = ErrorDto),
        (status = 404, description = "Referenced group not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_training(
    State(state): State<AppState>,
    Json(payload): Json<CreateTrainingDto>,
) -> Result<impl IntoResponse, AppError> {
    let training = TrainingService::new(&state.db).create(payload).await?;

    Ok((StatusCode::CREATED, Json(training)))
}

#[utoipa::path(
    get,
    path = "/api/trainings",
    tag = TRAINING_TAG,
    params(
        ("page" = Option<u64>, Query, description = "Page number (default: 0)"),
        ("per_page" = Option<u64>, Query, description = "Items per page (default: 10)")
    ),
    responses(
        (status = 200, description = "Successfully retrieved trainings", body = PaginatedTrainingsDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_trainings(
    State(state): State<AppState>,
    Query(pagination): Query<PaginationParam>,
) -> Result<impl IntoResponse, AppError> {
    let page = TrainingService::new(&state.db)
        .get_paginated(pagination.page, pagination.per_page)
        .await?;

    Ok((StatusCode::OK, Json(page)))
}

#[utoipa::path(
    get,
    path = "/api/trainings/{id}",
    tag = TRAINING_TAG,
    params(
        ("id" = i32, Path, description = "Training ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved training", body = TrainingDto),
        (status = 404, description = "Training not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_training(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let training = TrainingService::new(&state.db).get(id).await?;

    Ok((StatusCode::OK, Json(training)))
}

#[utoipa::path(
    put,
    path = "/api/trainings/{id}",
    tag = TRAINING_TAG,
    params(
        ("id" = i32, Path, description = "Training ID")
    ),
    request_body = UpdateTrainingDto,
    responses(
        (status = 200, description = "Successfully updated training", body = TrainingDto),
        (status = 400, description = "Invalid training data", body = ErrorDto),
        (status = 404, description = "Training not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_training(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateTrainingDto>,
) -> Result<impl IntoResponse, AppError> {
    let training = TrainingService::new(&state.db)
        .update_content(id, payload)
        .await?;

    Ok((StatusCode::OK, Json(training)))
}

#[utoipa::path(
    put,
    path = "/api/trainings/{id}/groups",
    tag = TRAINING_TAG,
    params(
        ("id" = i32, Path, description = "Training ID")
    ),
    request_body = UpdateTrainingGroupsDto,
    responses(
        (status = 200, description = "Successfully replaced the training's groups", body = TrainingDto),
        (status = 404, description = "Training or group not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_training_groups(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateTrainingGroupsDto>,
) -> Result<impl IntoResponse, AppError> {
    let training = TrainingService::new(&state.db)
        .update_groups(id, payload)
        .await?;

    Ok((StatusCode::OK, Json(training)))
}

#[utoipa::path(
    delete,
    path = "/api/trainings/{id}",
    tag = TRAINING_TAG,
    params(
        ("id" = i32, Path, description = "Training ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted training"),
        (status = 404, description = "Training not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_training(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    TrainingService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    delete,
    path = "/api/trainings/{id}/following",
    tag = TRAINING_TAG,
    params(
        ("id" = i32, Path, description = "Training ID the deletion starts from")
    ),
    responses(
        (status = 204, description = "Successfully deleted the training and all later occurrences"),
        (status = 404, description = "Training not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_training_following(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = TrainingService::new(&state.db).delete_following(id).await?;

    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    put,
    path = "/api/trainings/{id}/series/groups",
    tag = TRAINING_TAG,
    params(
        ("id" = i32, Path, description = "Training ID the change is applied through")
    ),
    request_body = UpdateTrainingGroupsDto,
    responses(
        (status = 200, description = "Successfully applied the group set across the series", body = TrainingDto),
        (status = 404, description = "Training or group not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn apply_series_groups(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateTrainingGroupsDto>,
) -> Result<impl IntoResponse, AppError> {
    let training = TrainingService::new(&state.db)
        .apply_groups_to_series(id, payload)
        .await?;

    Ok((StatusCode::OK, Json(training)))
}

#[utoipa::path(
    put,
    path = "/api/trainings/{id}/series/questionnaires",
    tag = TRAINING_TAG,
    params(
        ("id" = i32, Path, description = "Training ID the change is applied through")
    ),
    request_body = SeriesQuestionnairesDto,
    responses(
        (status = 200, description = "Successfully applied the questionnaire pair across the series", body = TrainingDto),
        (status = 400, description = "Pre and post questionnaire are identical", body = ErrorDto),
        (status = 404, description = "Training or questionnaire not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn apply_series_questionnaires(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<SeriesQuestionnairesDto>,
) -> Result<impl IntoResponse, AppError> {
    let training = TrainingService::new(&state.db)
        .apply_questionnaires_to_series(id, payload)
        .await?;

    Ok((StatusCode::OK, Json(training)))
}

#[utoipa::path(
    post,
    path = "/api/trainings/{id}/series",
    tag = TRAINING_TAG,
    params(
        ("id" = i32, Path, description = "Training ID to upgrade")
    ),
    request_body = UpgradeTrainingDto,
    responses(
        (status = 201, description = "Successfully upgraded the training into a series", body = TrainingDto),
        (status = 400, description = "Training already recurring or invalid rule", body = ErrorDto),
        (status = 404, description = "Training not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn upgrade_training(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpgradeTrainingDto>,
) -> Result<impl IntoResponse, AppError> {
    let training = SeriesService::new(&state.db).upgrade(id, payload).await?;

    Ok((StatusCode::CREATED, Json(training)))
}
