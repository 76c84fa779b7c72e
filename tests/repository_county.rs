mod common;

use sqlx::PgPool;
use std::sync::Arc;
use zipcode_api::domain::repositories::CountyRepository;
use zipcode_api::error::AppError;
use zipcode_api::infrastructure::persistence::PgCountyRepository;

#[sqlx::test]
async fn test_create_county(pool: PgPool) {
    let repo = PgCountyRepository::new(Arc::new(pool));

    let county = repo.create("Pest").await.unwrap();

    assert_eq!(county.name, "Pest");
    assert!(county.id > 0);
}

#[sqlx::test]
async fn test_create_duplicate_surfaces_as_validation(pool: PgPool) {
    let repo = PgCountyRepository::new(Arc::new(pool));
    repo.create("Pest").await.unwrap();

    // The unique index is the final arbiter; its violation maps back to
    // the same field-keyed error the advisory pre-check produces.
    let err = repo.create("Pest").await.unwrap_err();

    match err {
        AppError::Validation { details, .. } => {
            assert_eq!(details["name"][0], "Name has already been taken");
        }
        other => panic!("expected validation error, got {other:?}"),
    }
}

#[sqlx::test]
async fn test_find_by_id(pool: PgPool) {
    let id = common::seed_county(&pool, "Pest").await;
    let repo = PgCountyRepository::new(Arc::new(pool));

    let county = repo.find_by_id(id).await.unwrap();

    assert_eq!(county.unwrap().name, "Pest");
}

#[sqlx::test]
async fn test_find_by_id_not_found(pool: PgPool) {
    let repo = PgCountyRepository::new(Arc::new(pool));

    assert!(repo.find_by_id(9999).await.unwrap().is_none());
}

#[sqlx::test]
async fn test_find_by_name_is_exact_match(pool: PgPool) {
    common::seed_county(&pool, "Pest").await;
    let repo = PgCountyRepository::new(Arc::new(pool));

    assert!(repo.find_by_name("Pest").await.unwrap().is_some());
    assert!(repo.find_by_name("pest").await.unwrap().is_none());
    assert!(repo.find_by_name("Pes").await.unwrap().is_none());
}

#[sqlx::test]
async fn test_exists(pool: PgPool) {
    let id = common::seed_county(&pool, "Pest").await;
    let repo = PgCountyRepository::new(Arc::new(pool));

    assert!(repo.exists(id).await.unwrap());
    assert!(!repo.exists(9999).await.unwrap());
}

#[sqlx::test]
async fn test_update_county(pool: PgPool) {
    let id = common::seed_county(&pool, "Pest").await;
    let repo = PgCountyRepository::new(Arc::new(pool));

    let county = repo.update(id, "Fejér").await.unwrap().unwrap();

    assert_eq!(county.name, "Fejér");
    assert!(county.updated_at >= county.created_at);
}

#[sqlx::test]
async fn test_update_missing_county_is_none(pool: PgPool) {
    let repo = PgCountyRepository::new(Arc::new(pool));

    assert!(repo.update(9999, "Fejér").await.unwrap().is_none());
}

#[sqlx::test]
async fn test_list_with_cities_groups_by_owner(pool: PgPool) {
    let pest = common::seed_county(&pool, "Pest").await;
    let fejer = common::seed_county(&pool, "Fejér").await;
    common::seed_city(&pool, "Budapest", pest).await;
    common::seed_city(&pool, "Gödöllő", pest).await;
    common::seed_city(&pool, "Székesfehérvár", fejer).await;

    let repo = PgCountyRepository::new(Arc::new(pool));
    let counties = repo.list_with_cities().await.unwrap();

    assert_eq!(counties.len(), 2);
    assert_eq!(counties[0].county.name, "Pest");
    assert_eq!(counties[0].cities.len(), 2);
    assert_eq!(counties[1].county.name, "Fejér");
    assert_eq!(counties[1].cities.len(), 1);
}

#[sqlx::test]
async fn test_find_detail_reaches_postal_codes(pool: PgPool) {
    let pest = common::seed_county(&pool, "Pest").await;
    let budapest = common::seed_city(&pool, "Budapest", pest).await;
    let god = common::seed_city(&pool, "Gödöllő", pest).await;
    common::seed_postal_code(&pool, "1011", budapest).await;
    common::seed_postal_code(&pool, "2100", god).await;

    let repo = PgCountyRepository::new(Arc::new(pool));
    let detail = repo.find_detail(pest).await.unwrap().unwrap();

    assert_eq!(detail.county.name, "Pest");
    assert_eq!(detail.cities.len(), 2);
    assert_eq!(detail.cities[0].postal_codes[0].code, "1011");
    assert_eq!(detail.cities[1].postal_codes[0].code, "2100");
}

#[sqlx::test]
async fn test_find_detail_not_found(pool: PgPool) {
    let repo = PgCountyRepository::new(Arc::new(pool));

    assert!(repo.find_detail(9999).await.unwrap().is_none());
}

#[sqlx::test]
async fn test_delete_county_cascades(pool: PgPool) {
    let pest = common::seed_county(&pool, "Pest").await;
    let budapest = common::seed_city(&pool, "Budapest", pest).await;
    common::seed_postal_code(&pool, "1011", budapest).await;

    let repo = PgCountyRepository::new(Arc::new(pool.clone()));

    assert!(repo.delete(pest).await.unwrap());
    assert_eq!(common::count_rows(&pool, "cities").await, 0);
    assert_eq!(common::count_rows(&pool, "postal_codes").await, 0);
}

#[sqlx::test]
async fn test_delete_missing_county_is_false(pool: PgPool) {
    let repo = PgCountyRepository::new(Arc::new(pool));

    assert!(!repo.delete(9999).await.unwrap());
}

#[sqlx::test]
async fn test_search_matches_substring(pool: PgPool) {
    common::seed_county(&pool, "Pest").await;
    common::seed_county(&pool, "Fejér").await;

    let repo = PgCountyRepository::new(Arc::new(pool));
    let matches = repo.search("est", 10).await.unwrap();

    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].county.name, "Pest");
}

#[sqlx::test]
async fn test_search_respects_limit(pool: PgPool) {
    for n in 0..5 {
        common::seed_county(&pool, &format!("County {n}")).await;
    }

    let repo = PgCountyRepository::new(Arc::new(pool));
    let matches = repo.search("County", 3).await.unwrap();

    assert_eq!(matches.len(), 3);
}

#[sqlx::test]
async fn test_search_escapes_like_wildcards(pool: PgPool) {
    common::seed_county(&pool, "Pest").await;
    common::seed_county(&pool, "100% Pest").await;

    let repo = PgCountyRepository::new(Arc::new(pool));
    let matches = repo.search("%", 10).await.unwrap();

    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].county.name, "100% Pest");
}
