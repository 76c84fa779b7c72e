//! Handlers for county endpoints.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use validator::Validate;

use crate::api::dto::county::{CountyItem, CountyPayload};
use crate::api::dto::message::MessageResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Lists all counties with their cities.
///
/// # Endpoint
///
/// `GET /api/counties`
pub async fn county_list_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<CountyItem>>, AppError> {
    let counties = state.county_service.list_counties().await?;

    Ok(Json(counties.into_iter().map(CountyItem::from).collect()))
}

/// Retrieves one county with its cities and their postal codes.
///
/// # Endpoint
///
/// `GET /api/counties/{id}`
///
/// # Errors
///
/// Returns 404 Not Found if the county does not exist.
pub async fn county_get_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<CountyItem>, AppError> {
    let county = state.county_service.get_county(id).await?;

    Ok(Json(county.into()))
}

/// Creates a new county.
///
/// # Endpoint
///
/// `POST /api/counties`
///
/// # Request Body
///
/// ```json
/// { "name": "Pest" }
/// ```
///
/// # Errors
///
/// Returns 422 Unprocessable Entity with a `name`-keyed error map if the
/// name is missing, empty, or already taken.
pub async fn county_create_handler(
    State(state): State<AppState>,
    Json(payload): Json<CountyPayload>,
) -> Result<(StatusCode, Json<CountyItem>), AppError> {
    payload.validate()?;

    let county = state
        .county_service
        .create_county(payload.name.unwrap_or_default())
        .await?;

    Ok((StatusCode::CREATED, Json(county.into())))
}

/// Renames a county.
///
/// # Endpoint
///
/// `PUT /api/counties/{id}`
///
/// # Errors
///
/// Returns 404 Not Found if the county does not exist.
/// Returns 422 Unprocessable Entity on validation failure.
pub async fn county_update_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<CountyPayload>,
) -> Result<Json<CountyItem>, AppError> {
    payload.validate()?;

    let county = state
        .county_service
        .update_county(id, payload.name.unwrap_or_default())
        .await?;

    Ok(Json(county.into()))
}

/// Deletes a county together with its cities and their postal codes.
///
/// # Endpoint
///
/// `DELETE /api/counties/{id}`
///
/// # Errors
///
/// Returns 404 Not Found if the county does not exist.
pub async fn county_delete_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<MessageResponse>, AppError> {
    state.county_service.delete_county(id).await?;

    Ok(Json(MessageResponse::new("County deleted successfully")))
}
