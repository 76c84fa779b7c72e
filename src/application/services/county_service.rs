//! County management service.

use std::sync::Arc;

use serde_json::json;

use crate::domain::entities::{County, CountyDetail, CountyWithCities};
use crate::domain::repositories::CountyRepository;
use crate::error::{AppError, FieldErrors};

/// Service for county CRUD operations.
///
/// Owns the write-side validation rules: non-empty trimmed name and advisory
/// uniqueness. The store's unique index remains the final arbiter, so a
/// concurrent duplicate that slips past the pre-check surfaces as the same
/// field-keyed error.
pub struct CountyService<R: CountyRepository> {
    repository: Arc<R>,
}

impl<R: CountyRepository> CountyService<R> {
    /// Creates a new county service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Lists all counties, each with its cities attached.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn list_counties(&self) -> Result<Vec<CountyWithCities>, AppError> {
        self.repository.list_with_cities().await
    }

    /// Retrieves one county hydrated two levels deep: cities, and each
    /// city's postal codes.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the id does not resolve.
    pub async fn get_county(&self, id: i64) -> Result<CountyDetail, AppError> {
        self.repository
            .find_detail(id)
            .await?
            .ok_or_else(|| AppError::not_found("County not found", json!({ "id": id })))
    }

    /// Creates a county from a validated name.
    ///
    /// The name is trimmed before validation; the new county is returned
    /// flat, since it cannot own cities yet.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] keyed by `name` if the name is
    /// empty or already taken.
    pub async fn create_county(&self, name: String) -> Result<County, AppError> {
        let name = name.trim().to_string();
        self.validate_name(&name, None).await?;

        self.repository.create(&name).await
    }

    /// Updates a county's name.
    ///
    /// Resolves the id before validating, so a dead id reports NotFound
    /// rather than a validation failure. The uniqueness check excludes the
    /// county's own row, so re-submitting the current name succeeds.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the id does not resolve.
    /// Returns [`AppError::Validation`] keyed by `name` on bad input.
    pub async fn update_county(&self, id: i64, name: String) -> Result<County, AppError> {
        if self.repository.find_by_id(id).await?.is_none() {
            return Err(AppError::not_found("County not found", json!({ "id": id })));
        }

        let name = name.trim().to_string();
        self.validate_name(&name, Some(id)).await?;

        self.repository
            .update(id, &name)
            .await?
            .ok_or_else(|| AppError::not_found("County not found", json!({ "id": id })))
    }

    /// Deletes a county; its cities and their postal codes cascade with it.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the id does not resolve.
    pub async fn delete_county(&self, id: i64) -> Result<(), AppError> {
        let deleted = self.repository.delete(id).await?;

        if !deleted {
            return Err(AppError::not_found("County not found", json!({ "id": id })));
        }

        Ok(())
    }

    /// Validates a trimmed name: non-empty and not taken by another county.
    ///
    /// `exclude_id` skips the record's own row during updates, so an
    /// unchanged name is not flagged as a duplicate of itself.
    async fn validate_name(&self, name: &str, exclude_id: Option<i64>) -> Result<(), AppError> {
        let mut errors = FieldErrors::new();

        if name.is_empty() {
            errors.add("name", "Name must not be empty");
        } else if let Some(existing) = self.repository.find_by_name(name).await?
            && exclude_id != Some(existing.id)
        {
            errors.add("name", "Name has already been taken");
        }

        errors.into_result()
    }
}
