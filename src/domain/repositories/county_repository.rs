//! Repository trait for county data access.

use crate::domain::entities::{County, CountyDetail, CountyWithCities};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for managing counties.
///
/// Provides CRUD operations plus the eager-hydrated finders used by the
/// listing, detail, and search flows.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgCountyRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_county.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CountyRepository: Send + Sync {
    /// Creates a new county.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the unique name constraint
    /// rejects the row (the store is the final arbiter for races).
    /// Returns [`AppError::Internal`] on other database errors.
    async fn create(&self, name: &str) -> Result<County, AppError>;

    /// Updates a county's name, refreshing `updated_at`.
    ///
    /// Returns `Ok(None)` if the county no longer exists.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] on a unique-name violation.
    /// Returns [`AppError::Internal`] on other database errors.
    async fn update(&self, id: i64, name: &str) -> Result<Option<County>, AppError>;

    /// Finds a county by id, without relations.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_id(&self, id: i64) -> Result<Option<County>, AppError>;

    /// Finds a county by exact name.
    ///
    /// Used by the advisory uniqueness pre-check.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_name(&self, name: &str) -> Result<Option<County>, AppError>;

    /// Returns whether a county with the given id exists.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn exists(&self, id: i64) -> Result<bool, AppError>;

    /// Lists all counties ordered by id, each with its cities attached.
    ///
    /// Unbounded by design; the directory is a small, finite data set.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list_with_cities(&self) -> Result<Vec<CountyWithCities>, AppError>;

    /// Finds a county hydrated two levels deep: cities and their postal codes.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_detail(&self, id: i64) -> Result<Option<CountyDetail>, AppError>;

    /// Deletes a county; owned cities and their postal codes go with it
    /// (`ON DELETE CASCADE`).
    ///
    /// Returns `Ok(true)` if a row was removed, `Ok(false)` if the id did
    /// not exist.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn delete(&self, id: i64) -> Result<bool, AppError>;

    /// Finds counties whose name contains `query` as a literal substring,
    /// ordered by id and capped at `limit`, each with its cities attached.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn search(&self, query: &str, limit: i64) -> Result<Vec<CountyWithCities>, AppError>;
}
