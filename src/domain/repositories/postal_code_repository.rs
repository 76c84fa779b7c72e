//! Repository trait for postal-code data access.

use crate::domain::entities::{PostalCode, PostalCodeDetail};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for managing postal codes.
///
/// Reads are hydrated two levels up (city, then county). The unique code
/// constraint and the city foreign key are enforced by the store.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgPostalCodeRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_postal_code.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PostalCodeRepository: Send + Sync {
    /// Creates a new postal code under the given city.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the unique code constraint, the
    /// 4-character check, or the city foreign key rejects the row.
    /// Returns [`AppError::Internal`] on other database errors.
    async fn create(&self, code: &str, city_id: i64) -> Result<PostalCode, AppError>;

    /// Updates a postal code's value and owning city, refreshing `updated_at`.
    ///
    /// Returns `Ok(None)` if the record no longer exists.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] on a constraint violation.
    /// Returns [`AppError::Internal`] on other database errors.
    async fn update(&self, id: i64, code: &str, city_id: i64)
    -> Result<Option<PostalCode>, AppError>;

    /// Finds a postal code by id, without relations.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_id(&self, id: i64) -> Result<Option<PostalCode>, AppError>;

    /// Finds a postal code by exact code value.
    ///
    /// Used by the advisory uniqueness pre-check.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_code(&self, code: &str) -> Result<Option<PostalCode>, AppError>;

    /// Lists all postal codes ordered by id, each with city and county.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list_detail(&self) -> Result<Vec<PostalCodeDetail>, AppError>;

    /// Finds a postal code hydrated with its city and county.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_detail(&self, id: i64) -> Result<Option<PostalCodeDetail>, AppError>;

    /// Deletes a postal code. No dependents exist at this level.
    ///
    /// Returns `Ok(true)` if a row was removed, `Ok(false)` if the id did
    /// not exist.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn delete(&self, id: i64) -> Result<bool, AppError>;

    /// Finds postal codes whose code contains `query` as a literal
    /// substring, ordered by id and capped at `limit`, hydrated like
    /// [`Self::list_detail`].
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn search(&self, query: &str, limit: i64) -> Result<Vec<PostalCodeDetail>, AppError>;
}
