//! City management service.

use std::sync::Arc;

use serde_json::json;

use crate::domain::entities::CityDetail;
use crate::domain::repositories::{CityRepository, CountyRepository};
use crate::error::{AppError, FieldErrors};

/// Service for city CRUD operations.
///
/// Cities sit in the middle of the hierarchy, so writes check both their
/// own name and that the referenced county exists. Failures on both fields
/// are collected into a single response.
pub struct CityService<C: CityRepository, K: CountyRepository> {
    city_repository: Arc<C>,
    county_repository: Arc<K>,
}

impl<C: CityRepository, K: CountyRepository> CityService<C, K> {
    /// Creates a new city service.
    pub fn new(city_repository: Arc<C>, county_repository: Arc<K>) -> Self {
        Self {
            city_repository,
            county_repository,
        }
    }

    /// Lists all cities, each with its county and postal codes attached.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn list_cities(&self) -> Result<Vec<CityDetail>, AppError> {
        self.city_repository.list_detail().await
    }

    /// Retrieves one city with its county and postal codes.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the id does not resolve.
    pub async fn get_city(&self, id: i64) -> Result<CityDetail, AppError> {
        self.city_repository
            .find_detail(id)
            .await?
            .ok_or_else(|| AppError::not_found("City not found", json!({ "id": id })))
    }

    /// Creates a city under a county and returns it hydrated.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] keyed by `name` and/or `county_id`
    /// on bad input; both failures are reported together.
    pub async fn create_city(&self, name: String, county_id: i64) -> Result<CityDetail, AppError> {
        let name = name.trim().to_string();
        self.validate(&name, county_id).await?;

        let city = self.city_repository.create(&name, county_id).await?;

        self.city_repository
            .find_detail(city.id)
            .await?
            .ok_or_else(|| {
                AppError::internal("Created city could not be re-read", json!({ "id": city.id }))
            })
    }

    /// Updates a city's name and county.
    ///
    /// Resolves the id before validating, so a dead id reports NotFound
    /// rather than a validation failure.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the id does not resolve.
    /// Returns [`AppError::Validation`] on bad input.
    pub async fn update_city(
        &self,
        id: i64,
        name: String,
        county_id: i64,
    ) -> Result<CityDetail, AppError> {
        if self.city_repository.find_by_id(id).await?.is_none() {
            return Err(AppError::not_found("City not found", json!({ "id": id })));
        }

        let name = name.trim().to_string();
        self.validate(&name, county_id).await?;

        self.city_repository
            .update(id, &name, county_id)
            .await?
            .ok_or_else(|| AppError::not_found("City not found", json!({ "id": id })))?;

        self.city_repository.find_detail(id).await?.ok_or_else(|| {
            AppError::internal("Updated city could not be re-read", json!({ "id": id }))
        })
    }

    /// Deletes a city; its postal codes cascade with it.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the id does not resolve.
    pub async fn delete_city(&self, id: i64) -> Result<(), AppError> {
        let deleted = self.city_repository.delete(id).await?;

        if !deleted {
            return Err(AppError::not_found("City not found", json!({ "id": id })));
        }

        Ok(())
    }

    /// Validates a trimmed name and the referenced county in one pass, so
    /// a payload that fails both reports both fields.
    async fn validate(&self, name: &str, county_id: i64) -> Result<(), AppError> {
        let mut errors = FieldErrors::new();

        if name.is_empty() {
            errors.add("name", "Name must not be empty");
        }

        if !self.county_repository.exists(county_id).await? {
            errors.add("county_id", "Selected county does not exist");
        }

        errors.into_result()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{City, County};
    use crate::domain::repositories::{MockCityRepository, MockCountyRepository};
    use chrono::Utc;
    use mockall::predicate::eq;

    fn test_city(id: i64, name: &str, county_id: i64) -> City {
        City::new(id, name.to_string(), county_id, Utc::now(), Utc::now())
    }

    fn test_detail(id: i64, name: &str, county_id: i64) -> CityDetail {
        CityDetail {
            city: test_city(id, name, county_id),
            county: County::new(county_id, "Pest".to_string(), Utc::now(), Utc::now()),
            postal_codes: Vec::new(),
        }
    }

    fn validation_details(err: AppError) -> serde_json::Value {
        match err {
            AppError::Validation { details, .. } => details,
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_create_city_success() {
        let mut mock_cities = MockCityRepository::new();
        let mut mock_counties = MockCountyRepository::new();

        mock_counties
            .expect_exists()
            .with(eq(1))
            .times(1)
            .returning(|_| Ok(true));

        mock_cities
            .expect_create()
            .with(eq("Budapest"), eq(1))
            .times(1)
            .returning(|name, county_id| Ok(test_city(7, name, county_id)));

        mock_cities
            .expect_find_detail()
            .with(eq(7))
            .times(1)
            .returning(|id| Ok(Some(test_detail(id, "Budapest", 1))));

        let service = CityService::new(Arc::new(mock_cities), Arc::new(mock_counties));

        let detail = service
            .create_city("Budapest".to_string(), 1)
            .await
            .unwrap();
        assert_eq!(detail.city.name, "Budapest");
        assert_eq!(detail.county.id, 1);
    }

    #[tokio::test]
    async fn test_create_city_missing_county() {
        let mut mock_cities = MockCityRepository::new();
        let mut mock_counties = MockCountyRepository::new();

        mock_counties
            .expect_exists()
            .with(eq(42))
            .times(1)
            .returning(|_| Ok(false));

        mock_cities.expect_create().times(0);

        let service = CityService::new(Arc::new(mock_cities), Arc::new(mock_counties));

        let err = service
            .create_city("Budapest".to_string(), 42)
            .await
            .unwrap_err();
        let details = validation_details(err);
        assert_eq!(details["county_id"][0], "Selected county does not exist");
    }

    #[tokio::test]
    async fn test_create_city_collects_both_field_errors() {
        let mut mock_cities = MockCityRepository::new();
        let mut mock_counties = MockCountyRepository::new();

        mock_counties
            .expect_exists()
            .with(eq(42))
            .times(1)
            .returning(|_| Ok(false));

        mock_cities.expect_create().times(0);

        let service = CityService::new(Arc::new(mock_cities), Arc::new(mock_counties));

        let err = service.create_city("  ".to_string(), 42).await.unwrap_err();
        let details = validation_details(err);
        assert_eq!(details["name"][0], "Name must not be empty");
        assert_eq!(details["county_id"][0], "Selected county does not exist");
    }

    #[tokio::test]
    async fn test_update_city_success() {
        let mut mock_cities = MockCityRepository::new();
        let mut mock_counties = MockCountyRepository::new();

        mock_cities
            .expect_find_by_id()
            .with(eq(7))
            .times(1)
            .returning(|id| Ok(Some(test_city(id, "Budapest", 1))));

        mock_counties
            .expect_exists()
            .with(eq(2))
            .times(1)
            .returning(|_| Ok(true));

        mock_cities
            .expect_update()
            .with(eq(7), eq("Vác"), eq(2))
            .times(1)
            .returning(|id, name, county_id| Ok(Some(test_city(id, name, county_id))));

        mock_cities
            .expect_find_detail()
            .with(eq(7))
            .times(1)
            .returning(|id| Ok(Some(test_detail(id, "Vác", 2))));

        let service = CityService::new(Arc::new(mock_cities), Arc::new(mock_counties));

        let detail = service.update_city(7, "Vác".to_string(), 2).await.unwrap();
        assert_eq!(detail.city.name, "Vác");
    }

    #[tokio::test]
    async fn test_update_city_missing_reports_not_found_before_validation() {
        let mut mock_cities = MockCityRepository::new();
        let mut mock_counties = MockCountyRepository::new();

        mock_cities
            .expect_find_by_id()
            .with(eq(42))
            .times(1)
            .returning(|_| Ok(None));

        mock_counties.expect_exists().times(0);
        mock_cities.expect_update().times(0);

        let service = CityService::new(Arc::new(mock_cities), Arc::new(mock_counties));

        let err = service.update_city(42, "".to_string(), 1).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_get_city_not_found() {
        let mut mock_cities = MockCityRepository::new();
        let mock_counties = MockCountyRepository::new();

        mock_cities
            .expect_find_detail()
            .with(eq(42))
            .times(1)
            .returning(|_| Ok(None));

        let service = CityService::new(Arc::new(mock_cities), Arc::new(mock_counties));

        let err = service.get_city(42).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_delete_city_missing() {
        let mut mock_cities = MockCityRepository::new();
        let mock_counties = MockCountyRepository::new();

        mock_cities
            .expect_delete()
            .with(eq(42))
            .times(1)
            .returning(|_| Ok(false));

        let service = CityService::new(Arc::new(mock_cities), Arc::new(mock_counties));

        let err = service.delete_city(42).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound { .. }));
    }
}
