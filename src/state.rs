//! Shared application state injected into HTTP handlers.

use std::sync::Arc;

use sqlx::PgPool;

use crate::application::services::{
    AuthService, CityService, CountyService, PostalCodeService, SearchService,
};
use crate::infrastructure::persistence::{
    PgCityRepository, PgCountyRepository, PgPostalCodeRepository, PgTokenRepository,
};

/// Application state shared across all request handlers.
///
/// Services are concrete over the Postgres repositories; the server and
/// the integration tests wire the same shapes.
#[derive(Clone)]
pub struct AppState {
    pub pool: Arc<PgPool>,
    pub county_service: Arc<CountyService<PgCountyRepository>>,
    pub city_service: Arc<CityService<PgCityRepository, PgCountyRepository>>,
    pub postal_code_service: Arc<PostalCodeService<PgPostalCodeRepository, PgCityRepository>>,
    pub search_service:
        Arc<SearchService<PgCountyRepository, PgCityRepository, PgPostalCodeRepository>>,
    pub auth_service: Arc<AuthService<PgTokenRepository>>,
}

impl AppState {
    /// Wires repositories and services over a shared connection pool.
    pub fn new(pool: Arc<PgPool>, token_signing_secret: String) -> Self {
        let county_repository = Arc::new(PgCountyRepository::new(pool.clone()));
        let city_repository = Arc::new(PgCityRepository::new(pool.clone()));
        let postal_code_repository = Arc::new(PgPostalCodeRepository::new(pool.clone()));
        let token_repository = Arc::new(PgTokenRepository::new(pool.clone()));

        let county_service = Arc::new(CountyService::new(county_repository.clone()));
        let city_service = Arc::new(CityService::new(
            city_repository.clone(),
            county_repository.clone(),
        ));
        let postal_code_service = Arc::new(PostalCodeService::new(
            postal_code_repository.clone(),
            city_repository.clone(),
        ));
        let search_service = Arc::new(SearchService::new(
            county_repository,
            city_repository,
            postal_code_repository,
        ));
        let auth_service = Arc::new(AuthService::new(token_repository, token_signing_secret));

        Self {
            pool,
            county_service,
            city_service,
            postal_code_service,
            search_service,
            auth_service,
        }
    }
}
