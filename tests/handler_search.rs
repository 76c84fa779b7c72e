mod common;

use axum::{Router, routing::get};
use axum_test::TestServer;
use serde_json::json;
use sqlx::PgPool;
use zipcode_api::api::handlers::search_handler;

fn make_server(pool: PgPool) -> TestServer {
    let state = common::create_test_state(pool);
    let app = Router::new()
        .route("/api/search", get(search_handler))
        .with_state(state);
    TestServer::new(app).unwrap()
}

/// Pest county, Budapest city, code 1011.
async fn seed_directory(pool: &PgPool) {
    let pest = common::seed_county(pool, "Pest").await;
    let budapest = common::seed_city(pool, "Budapest", pest).await;
    common::seed_postal_code(pool, "1011", budapest).await;
}

// ─── Matching ────────────────────────────────────────────────────────────────

#[sqlx::test]
async fn test_search_finds_postal_code(pool: PgPool) {
    seed_directory(&pool).await;

    let server = make_server(pool);
    let response = server.get("/api/search").add_query_param("q", "1011").await;

    response.assert_status_ok();

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["postal_codes"][0]["code"], "1011");
    assert_eq!(body["postal_codes"][0]["city"]["name"], "Budapest");
    assert_eq!(
        body["postal_codes"][0]["city"]["county"]["name"],
        "Pest"
    );
    // Other categories stay empty without making the search fail.
    assert_eq!(body["cities"], json!([]));
    assert_eq!(body["counties"], json!([]));
}

#[sqlx::test]
async fn test_search_matches_substring(pool: PgPool) {
    seed_directory(&pool).await;

    let server = make_server(pool);
    let response = server.get("/api/search").add_query_param("q", "101").await;

    response.assert_status_ok();

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["postal_codes"][0]["code"], "1011");
}

#[sqlx::test]
async fn test_search_is_case_sensitive(pool: PgPool) {
    seed_directory(&pool).await;

    let server = make_server(pool);

    // "Pest" matches the county, not the lowercase tail of "Budapest".
    let response = server.get("/api/search").add_query_param("q", "Pest").await;
    let body = response.json::<serde_json::Value>();
    assert_eq!(body["counties"][0]["name"], "Pest");
    assert_eq!(body["cities"], json!([]));

    // "pest" matches only the city.
    let response = server.get("/api/search").add_query_param("q", "pest").await;
    let body = response.json::<serde_json::Value>();
    assert_eq!(body["counties"], json!([]));
    assert_eq!(body["cities"][0]["name"], "Budapest");
}

#[sqlx::test]
async fn test_search_city_match_carries_relations(pool: PgPool) {
    seed_directory(&pool).await;

    let server = make_server(pool);
    let response = server
        .get("/api/search")
        .add_query_param("q", "Budapest")
        .await;

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["cities"][0]["county"]["name"], "Pest");
    assert_eq!(body["cities"][0]["postal_codes"][0]["code"], "1011");
}

#[sqlx::test]
async fn test_search_county_match_carries_cities(pool: PgPool) {
    seed_directory(&pool).await;

    let server = make_server(pool);
    let response = server.get("/api/search").add_query_param("q", "Pest").await;

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["counties"][0]["cities"][0]["name"], "Budapest");
}

#[sqlx::test]
async fn test_search_no_matches_is_empty_not_error(pool: PgPool) {
    seed_directory(&pool).await;

    let server = make_server(pool);
    let response = server
        .get("/api/search")
        .add_query_param("q", "zzzz")
        .await;

    response.assert_status_ok();
    assert_eq!(
        response.json::<serde_json::Value>(),
        json!({ "postal_codes": [], "cities": [], "counties": [] })
    );
}

// ─── Result cap ──────────────────────────────────────────────────────────────

#[sqlx::test]
async fn test_search_caps_each_category_at_ten(pool: PgPool) {
    let pest = common::seed_county(&pool, "Pest").await;
    let budapest = common::seed_city(&pool, "Budapest", pest).await;
    for n in 0..12 {
        common::seed_postal_code(&pool, &format!("10{n:02}"), budapest).await;
    }

    let server = make_server(pool);
    let response = server.get("/api/search").add_query_param("q", "10").await;

    response.assert_status_ok();

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["postal_codes"].as_array().unwrap().len(), 10);
}

// ─── Metacharacters ──────────────────────────────────────────────────────────

#[sqlx::test]
async fn test_search_treats_wildcards_literally(pool: PgPool) {
    seed_directory(&pool).await;

    let server = make_server(pool);

    // "%" would match everything as a LIKE wildcard; escaped, it matches
    // only rows containing a literal percent sign.
    let response = server.get("/api/search").add_query_param("q", "%").await;

    response.assert_status_ok();
    assert_eq!(
        response.json::<serde_json::Value>(),
        json!({ "postal_codes": [], "cities": [], "counties": [] })
    );
}

// ─── Empty query ─────────────────────────────────────────────────────────────

#[sqlx::test]
async fn test_search_empty_query_is_bad_request(pool: PgPool) {
    let server = make_server(pool);

    let response = server.get("/api/search").add_query_param("q", "").await;

    response.assert_status_bad_request();
    assert_eq!(
        response.json::<serde_json::Value>(),
        json!({ "error": "Search query is required" })
    );
}

#[sqlx::test]
async fn test_search_missing_query_is_bad_request(pool: PgPool) {
    let server = make_server(pool);

    let response = server.get("/api/search").await;

    response.assert_status_bad_request();
    assert_eq!(
        response.json::<serde_json::Value>(),
        json!({ "error": "Search query is required" })
    );
}

#[sqlx::test]
async fn test_search_blank_query_is_bad_request(pool: PgPool) {
    let server = make_server(pool);

    let response = server.get("/api/search").add_query_param("q", "   ").await;

    response.assert_status_bad_request();
}
