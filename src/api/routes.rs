//! API route configuration.
//!
//! Read routes are public; write routes require Bearer token
//! authentication via [`crate::api::middleware::auth`]. Both sets share
//! resource paths, so the composed router merges them per method.

use axum::{
    Router,
    routing::{get, post, put},
};

use crate::api::handlers::{
    city_create_handler, city_delete_handler, city_get_handler, city_list_handler,
    city_update_handler, county_create_handler, county_delete_handler, county_get_handler,
    county_list_handler, county_update_handler, postal_code_create_handler,
    postal_code_delete_handler, postal_code_get_handler, postal_code_list_handler,
    postal_code_update_handler, search_handler,
};
use crate::state::AppState;

/// Read-only routes, open without authentication.
///
/// # Endpoints
///
/// - `GET /counties`            - List counties with cities
/// - `GET /counties/{id}`       - One county, two levels deep
/// - `GET /cities`              - List cities with county and postal codes
/// - `GET /cities/{id}`         - One city with relations
/// - `GET /postal-codes`        - List postal codes with city and county
/// - `GET /postal-codes/{id}`   - One postal code with relations
/// - `GET /search?q=…`          - Substring search across all categories
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/counties", get(county_list_handler))
        .route("/counties/{id}", get(county_get_handler))
        .route("/cities", get(city_list_handler))
        .route("/cities/{id}", get(city_get_handler))
        .route("/postal-codes", get(postal_code_list_handler))
        .route("/postal-codes/{id}", get(postal_code_get_handler))
        .route("/search", get(search_handler))
}

/// Write routes, protected by Bearer token authentication.
///
/// # Endpoints
///
/// - `POST   /counties`              - Create a county
/// - `PUT    /counties/{id}`         - Rename a county
/// - `DELETE /counties/{id}`         - Delete a county (cascades)
/// - `POST   /cities`                - Create a city
/// - `PUT    /cities/{id}`           - Update a city
/// - `DELETE /cities/{id}`           - Delete a city (cascades)
/// - `POST   /postal-codes`          - Create a postal code
/// - `PUT    /postal-codes/{id}`     - Update a postal code
/// - `DELETE /postal-codes/{id}`     - Delete a postal code
pub fn protected_routes() -> Router<AppState> {
    Router::new()
        .route("/counties", post(county_create_handler))
        .route(
            "/counties/{id}",
            put(county_update_handler).delete(county_delete_handler),
        )
        .route("/cities", post(city_create_handler))
        .route(
            "/cities/{id}",
            put(city_update_handler).delete(city_delete_handler),
        )
        .route("/postal-codes", post(postal_code_create_handler))
        .route(
            "/postal-codes/{id}",
            put(postal_code_update_handler).delete(postal_code_delete_handler),
        )
}
