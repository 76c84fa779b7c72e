//! Handler for the cross-category search endpoint.

use axum::{
    Json,
    extract::{Query, State},
};

use crate::api::dto::search::{SearchParams, SearchResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Searches postal codes, cities and counties for a substring.
///
/// # Endpoint
///
/// `GET /api/search?q=<query>`
///
/// # Matching
///
/// Literal, case-sensitive substring match per category, up to 10 rows
/// each. LIKE metacharacters in the query are escaped, so `10%` matches
/// the text `10%` and nothing else.
///
/// # Response
///
/// ```json
/// {
///   "postal_codes": [ ... ],
///   "cities": [ ... ],
///   "counties": [ ... ]
/// }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request with `{"error": "Search query is required"}`
/// when `q` is missing or blank.
pub async fn search_handler(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<SearchResponse>, AppError> {
    let query = params.q.unwrap_or_default();

    let results = state.search_service.search(&query).await?;

    Ok(Json(results.into()))
}
