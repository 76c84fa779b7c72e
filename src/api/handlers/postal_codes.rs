//! Handlers for postal code endpoints.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use validator::Validate;

use crate::api::dto::message::MessageResponse;
use crate::api::dto::postal_code::{PostalCodeItem, PostalCodePayload};
use crate::error::AppError;
use crate::state::AppState;

/// Lists all postal codes, each with its city and county.
///
/// # Endpoint
///
/// `GET /api/postal-codes`
pub async fn postal_code_list_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<PostalCodeItem>>, AppError> {
    let postal_codes = state.postal_code_service.list_postal_codes().await?;

    Ok(Json(
        postal_codes
            .into_iter()
            .map(PostalCodeItem::from)
            .collect(),
    ))
}

/// Retrieves one postal code with its city and county.
///
/// # Endpoint
///
/// `GET /api/postal-codes/{id}`
///
/// # Errors
///
/// Returns 404 Not Found if the postal code does not exist.
pub async fn postal_code_get_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<PostalCodeItem>, AppError> {
    let postal_code = state.postal_code_service.get_postal_code(id).await?;

    Ok(Json(postal_code.into()))
}

/// Creates a new postal code under a city.
///
/// # Endpoint
///
/// `POST /api/postal-codes`
///
/// # Request Body
///
/// ```json
/// { "code": "1011", "city_id": 7 }
/// ```
///
/// # Errors
///
/// Returns 422 Unprocessable Entity with `code` and/or `city_id` keyed
/// errors; both are reported when both fail.
pub async fn postal_code_create_handler(
    State(state): State<AppState>,
    Json(payload): Json<PostalCodePayload>,
) -> Result<(StatusCode, Json<PostalCodeItem>), AppError> {
    payload.validate()?;

    let postal_code = state
        .postal_code_service
        .create_postal_code(
            payload.code.unwrap_or_default(),
            payload.city_id.unwrap_or_default(),
        )
        .await?;

    Ok((StatusCode::CREATED, Json(postal_code.into())))
}

/// Updates a postal code's value and owning city.
///
/// # Endpoint
///
/// `PUT /api/postal-codes/{id}`
///
/// # Errors
///
/// Returns 404 Not Found if the postal code does not exist.
/// Returns 422 Unprocessable Entity on validation failure.
pub async fn postal_code_update_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<PostalCodePayload>,
) -> Result<Json<PostalCodeItem>, AppError> {
    payload.validate()?;

    let postal_code = state
        .postal_code_service
        .update_postal_code(
            id,
            payload.code.unwrap_or_default(),
            payload.city_id.unwrap_or_default(),
        )
        .await?;

    Ok(Json(postal_code.into()))
}

/// Deletes a postal code.
///
/// # Endpoint
///
/// `DELETE /api/postal-codes/{id}`
///
/// # Errors
///
/// Returns 404 Not Found if the postal code does not exist.
pub async fn postal_code_delete_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<MessageResponse>, AppError> {
    state.postal_code_service.delete_postal_code(id).await?;

    Ok(Json(MessageResponse::new("Postal code deleted successfully")))
}
