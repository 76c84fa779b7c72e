//! End-to-end flow over the full API router: build the Pest → Budapest →
//! 1011 hierarchy through authenticated writes, read it back through the
//! public surface, then tear it down.

mod common;

use axum_test::TestServer;
use serde_json::json;
use sqlx::PgPool;

#[sqlx::test]
async fn test_directory_lifecycle(pool: PgPool) {
    let token = common::seed_token(&pool, "ci").await;
    let state = common::create_test_state(pool);
    let server = TestServer::new(common::api_router(state)).unwrap();

    // Build the hierarchy top-down.
    let response = server
        .post("/api/counties")
        .authorization_bearer(&token)
        .json(&json!({ "name": "Pest" }))
        .await;
    response.assert_status(axum::http::StatusCode::CREATED);
    let county_id = response.json::<serde_json::Value>()["id"].as_i64().unwrap();

    let response = server
        .post("/api/cities")
        .authorization_bearer(&token)
        .json(&json!({ "name": "Budapest", "county_id": county_id }))
        .await;
    response.assert_status(axum::http::StatusCode::CREATED);
    let city_id = response.json::<serde_json::Value>()["id"].as_i64().unwrap();

    let response = server
        .post("/api/postal-codes")
        .authorization_bearer(&token)
        .json(&json!({ "code": "1011", "city_id": city_id }))
        .await;
    response.assert_status(axum::http::StatusCode::CREATED);
    let code_id = response.json::<serde_json::Value>()["id"].as_i64().unwrap();

    // The city reads back with both relations attached.
    let response = server.get(&format!("/api/cities/{city_id}")).await;
    response.assert_status_ok();
    let city = response.json::<serde_json::Value>();
    assert_eq!(city["name"], "Budapest");
    assert_eq!(city["county"]["name"], "Pest");
    assert_eq!(city["postal_codes"][0]["code"], "1011");

    // The search surface sees the new code.
    let response = server.get("/api/search").add_query_param("q", "1011").await;
    response.assert_status_ok();
    assert_eq!(
        response.json::<serde_json::Value>()["postal_codes"][0]["code"],
        "1011"
    );

    // An unauthenticated delete bounces and leaves the record intact.
    server
        .delete(&format!("/api/postal-codes/{code_id}"))
        .await
        .assert_status_unauthorized();
    server
        .get(&format!("/api/postal-codes/{code_id}"))
        .await
        .assert_status_ok();

    // The authenticated delete lands, and the record is gone.
    let response = server
        .delete(&format!("/api/postal-codes/{code_id}"))
        .authorization_bearer(&token)
        .await;
    response.assert_status_ok();
    assert_eq!(
        response.json::<serde_json::Value>(),
        json!({ "message": "Postal code deleted successfully" })
    );

    server
        .get(&format!("/api/postal-codes/{code_id}"))
        .await
        .assert_status_not_found();
}

#[sqlx::test]
async fn test_county_delete_cascades_through_api(pool: PgPool) {
    let token = common::seed_token(&pool, "ci").await;
    let pest = common::seed_county(&pool, "Pest").await;
    let budapest = common::seed_city(&pool, "Budapest", pest).await;
    let code = common::seed_postal_code(&pool, "1011", budapest).await;

    let state = common::create_test_state(pool);
    let server = TestServer::new(common::api_router(state)).unwrap();

    server
        .delete(&format!("/api/counties/{pest}"))
        .authorization_bearer(&token)
        .await
        .assert_status_ok();

    // The whole subtree went with the county.
    server
        .get(&format!("/api/cities/{budapest}"))
        .await
        .assert_status_not_found();
    server
        .get(&format!("/api/postal-codes/{code}"))
        .await
        .assert_status_not_found();
}
