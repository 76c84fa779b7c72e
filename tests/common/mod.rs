#![allow(dead_code)]

use axum::{Router, middleware};
use sqlx::PgPool;
use std::sync::Arc;
use zipcode_api::api::middleware::auth;
use zipcode_api::api::routes::{protected_routes, public_routes};
use zipcode_api::state::AppState;
use zipcode_api::utils::token::{generate_token, hash_token};

/// Signing secret used by every test state; token seeds must hash with the
/// same value.
pub const TEST_SIGNING_SECRET: &str = "test-signing-secret";

pub fn create_test_state(pool: PgPool) -> AppState {
    AppState::new(Arc::new(pool), TEST_SIGNING_SECRET.to_string())
}

/// Full API router under `/api`: public reads merged with auth-guarded
/// writes, without the rate-limit and trace layers the server adds.
pub fn api_router(state: AppState) -> Router {
    let protected = protected_routes().route_layer(middleware::from_fn_with_state(
        state.clone(),
        auth::layer,
    ));

    Router::new()
        .nest("/api", public_routes().merge(protected))
        .with_state(state)
}

pub async fn seed_county(pool: &PgPool, name: &str) -> i64 {
    sqlx::query_scalar::<_, i64>("INSERT INTO counties (name) VALUES ($1) RETURNING id")
        .bind(name)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn seed_city(pool: &PgPool, name: &str, county_id: i64) -> i64 {
    sqlx::query_scalar::<_, i64>(
        "INSERT INTO cities (name, county_id) VALUES ($1, $2) RETURNING id",
    )
    .bind(name)
    .bind(county_id)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn seed_postal_code(pool: &PgPool, code: &str, city_id: i64) -> i64 {
    sqlx::query_scalar::<_, i64>(
        "INSERT INTO postal_codes (code, city_id) VALUES ($1, $2) RETURNING id",
    )
    .bind(code)
    .bind(city_id)
    .fetch_one(pool)
    .await
    .unwrap()
}

/// Issues a valid API token and returns the raw value for Bearer headers.
pub async fn seed_token(pool: &PgPool, name: &str) -> String {
    let raw = generate_token();
    let hash = hash_token(&raw, TEST_SIGNING_SECRET);

    sqlx::query("INSERT INTO api_tokens (name, token_hash) VALUES ($1, $2)")
        .bind(name)
        .bind(&hash)
        .execute(pool)
        .await
        .unwrap();

    raw
}

pub async fn revoke_token(pool: &PgPool, raw: &str) {
    let hash = hash_token(raw, TEST_SIGNING_SECRET);

    sqlx::query("UPDATE api_tokens SET revoked_at = NOW() WHERE token_hash = $1")
        .bind(&hash)
        .execute(pool)
        .await
        .unwrap();
}

pub async fn count_rows(pool: &PgPool, table: &str) -> i64 {
    sqlx::query_scalar::<_, i64>(&format!("SELECT COUNT(*) FROM {table}"))
        .fetch_one(pool)
        .await
        .unwrap()
}
