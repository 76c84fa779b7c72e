//! Repository trait for city data access.

use crate::domain::entities::{City, CityDetail};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for managing cities.
///
/// City reads are hydrated with the owning county and the city's postal
/// codes; writes rely on the store's foreign key to guarantee the county
/// reference stays live.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgCityRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_city.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CityRepository: Send + Sync {
    /// Creates a new city under the given county.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the county foreign key rejects
    /// the row. Returns [`AppError::Internal`] on other database errors.
    async fn create(&self, name: &str, county_id: i64) -> Result<City, AppError>;

    /// Updates a city's name and owning county, refreshing `updated_at`.
    ///
    /// Returns `Ok(None)` if the city no longer exists.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] on a foreign-key violation.
    /// Returns [`AppError::Internal`] on other database errors.
    async fn update(&self, id: i64, name: &str, county_id: i64) -> Result<Option<City>, AppError>;

    /// Finds a city by id, without relations.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_id(&self, id: i64) -> Result<Option<City>, AppError>;

    /// Returns whether a city with the given id exists.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn exists(&self, id: i64) -> Result<bool, AppError>;

    /// Lists all cities ordered by id, each with county and postal codes.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list_detail(&self) -> Result<Vec<CityDetail>, AppError>;

    /// Finds a city hydrated with its county and postal codes.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_detail(&self, id: i64) -> Result<Option<CityDetail>, AppError>;

    /// Deletes a city; owned postal codes go with it (`ON DELETE CASCADE`).
    ///
    /// Returns `Ok(true)` if a row was removed, `Ok(false)` if the id did
    /// not exist.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn delete(&self, id: i64) -> Result<bool, AppError>;

    /// Finds cities whose name contains `query` as a literal substring,
    /// ordered by id and capped at `limit`, hydrated like [`Self::list_detail`].
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn search(&self, query: &str, limit: i64) -> Result<Vec<CityDetail>, AppError>;
}
