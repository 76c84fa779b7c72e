//! Handlers for city endpoints.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use validator::Validate;

use crate::api::dto::city::{CityItem, CityPayload};
use crate::api::dto::message::MessageResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Lists all cities, each with its county and postal codes.
///
/// # Endpoint
///
/// `GET /api/cities`
pub async fn city_list_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<CityItem>>, AppError> {
    let cities = state.city_service.list_cities().await?;

    Ok(Json(cities.into_iter().map(CityItem::from).collect()))
}

/// Retrieves one city with its county and postal codes.
///
/// # Endpoint
///
/// `GET /api/cities/{id}`
///
/// # Errors
///
/// Returns 404 Not Found if the city does not exist.
pub async fn city_get_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<CityItem>, AppError> {
    let city = state.city_service.get_city(id).await?;

    Ok(Json(city.into()))
}

/// Creates a new city under a county.
///
/// # Endpoint
///
/// `POST /api/cities`
///
/// # Request Body
///
/// ```json
/// { "name": "Budapest", "county_id": 1 }
/// ```
///
/// # Errors
///
/// Returns 422 Unprocessable Entity with `name` and/or `county_id` keyed
/// errors; both are reported when both fail.
pub async fn city_create_handler(
    State(state): State<AppState>,
    Json(payload): Json<CityPayload>,
) -> Result<(StatusCode, Json<CityItem>), AppError> {
    payload.validate()?;

    let city = state
        .city_service
        .create_city(
            payload.name.unwrap_or_default(),
            payload.county_id.unwrap_or_default(),
        )
        .await?;

    Ok((StatusCode::CREATED, Json(city.into())))
}

/// Updates a city's name and owning county.
///
/// # Endpoint
///
/// `PUT /api/cities/{id}`
///
/// # Errors
///
/// Returns 404 Not Found if the city does not exist.
/// Returns 422 Unprocessable Entity on validation failure.
pub async fn city_update_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<CityPayload>,
) -> Result<Json<CityItem>, AppError> {
    payload.validate()?;

    let city = state
        .city_service
        .update_city(
            id,
            payload.name.unwrap_or_default(),
            payload.county_id.unwrap_or_default(),
        )
        .await?;

    Ok(Json(city.into()))
}

/// Deletes a city together with its postal codes.
///
/// # Endpoint
///
/// `DELETE /api/cities/{id}`
///
/// # Errors
///
/// Returns 404 Not Found if the city does not exist.
pub async fn city_delete_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<MessageResponse>, AppError> {
    state.city_service.delete_city(id).await?;

    Ok(Json(MessageResponse::new("City deleted successfully")))
}
