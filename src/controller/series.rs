use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    error::AppError,
    model::{
        api::ErrorDto,
        series::{SeriesDto, UpdateSeriesDto},
    },
    service::series::SeriesService,
    state::AppState,
};

/// Tag for grouping series endpoints in OpenAPI documentation
pub static SERIES_TAG: &str = "series";

/// Retrieves a recurring series by its ID.
///
/// # Arguments
/// * `id` - The series ID from the URL path
///
/// # Returns
/// The series definition including its recurrence rule and bounds.
#[utoipa::path(
    get,
    path = "/api/series/{id}",
    tag = SERIES_TAG,
    params(
        ("id" = i32, Path, description = "Series ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved series", body = SeriesDto),
        (status = 404, description = "Series not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_series(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let series = SeriesService::new(&state.db).get(id).await?;

    Ok((StatusCode::OK, Json(series)))
}

/// Updates a series definition and resynchronizes its occurrences.
///
/// Occurrences that were individually re-timed keep their times; all
/// others are shifted, deleted, or appended to match the new rule.
///
/// # Arguments
/// * `id` - The series ID from the URL path
/// * `payload` - The fields to change; absent fields keep their stored values
///
/// # Returns
/// The updated series definition.
#[utoipa::path(
    put,
    path = "/api/series/{id}",
    tag = SERIES_TAG,
    params(
        ("id" = i32, Path, description = "Series ID")
    ),
    request_body = UpdateSeriesDto,
    responses(
        (status = 200, description = "Successfully updated series", body = SeriesDto),
        (status = 400, description = "Invalid rule or empty expansion", body = ErrorDto),
        (status = 404, description = "Series not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_series(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateSeriesDto>,
) -> Result<impl IntoResponse, AppError> {
    let series = SeriesService::new(&state.db)
        .update_and_resync(id, payload)
        .await?;

    Ok((StatusCode::OK, Json(series)))
}
