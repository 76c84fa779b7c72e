//! Postal code management service.

use std::sync::Arc;

use serde_json::json;

use crate::domain::entities::PostalCodeDetail;
use crate::domain::repositories::{CityRepository, PostalCodeRepository};
use crate::error::{AppError, FieldErrors};

/// Service for postal code CRUD operations.
///
/// Codes are exactly four characters and unique across the directory.
/// Length is counted in characters, matching the store's own length
/// constraint, so multi-byte input is not over-counted.
pub struct PostalCodeService<P: PostalCodeRepository, C: CityRepository> {
    postal_code_repository: Arc<P>,
    city_repository: Arc<C>,
}

impl<P: PostalCodeRepository, C: CityRepository> PostalCodeService<P, C> {
    /// Creates a new postal code service.
    pub fn new(postal_code_repository: Arc<P>, city_repository: Arc<C>) -> Self {
        Self {
            postal_code_repository,
            city_repository,
        }
    }

    /// Lists all postal codes, each with its city and county attached.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn list_postal_codes(&self) -> Result<Vec<PostalCodeDetail>, AppError> {
        self.postal_code_repository.list_detail().await
    }

    /// Retrieves one postal code with its city and county.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the id does not resolve.
    pub async fn get_postal_code(&self, id: i64) -> Result<PostalCodeDetail, AppError> {
        self.postal_code_repository
            .find_detail(id)
            .await?
            .ok_or_else(|| AppError::not_found("Postal code not found", json!({ "id": id })))
    }

    /// Creates a postal code under a city and returns it hydrated.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] keyed by `code` and/or `city_id`
    /// on bad input; both failures are reported together.
    pub async fn create_postal_code(
        &self,
        code: String,
        city_id: i64,
    ) -> Result<PostalCodeDetail, AppError> {
        let code = code.trim().to_string();
        self.validate(&code, city_id, None).await?;

        let postal_code = self.postal_code_repository.create(&code, city_id).await?;

        self.postal_code_repository
            .find_detail(postal_code.id)
            .await?
            .ok_or_else(|| {
                AppError::internal(
                    "Created postal code could not be re-read",
                    json!({ "id": postal_code.id }),
                )
            })
    }

    /// Updates a postal code's code and city.
    ///
    /// Resolves the id before validating, so a dead id reports NotFound
    /// rather than a validation failure. The uniqueness check excludes the
    /// record's own row, so re-submitting the current code succeeds.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the id does not resolve.
    /// Returns [`AppError::Validation`] on bad input.
    pub async fn update_postal_code(
        &self,
        id: i64,
        code: String,
        city_id: i64,
    ) -> Result<PostalCodeDetail, AppError> {
        if self.postal_code_repository.find_by_id(id).await?.is_none() {
            return Err(AppError::not_found(
                "Postal code not found",
                json!({ "id": id }),
            ));
        }

        let code = code.trim().to_string();
        self.validate(&code, city_id, Some(id)).await?;

        self.postal_code_repository
            .update(id, &code, city_id)
            .await?
            .ok_or_else(|| AppError::not_found("Postal code not found", json!({ "id": id })))?;

        self.postal_code_repository
            .find_detail(id)
            .await?
            .ok_or_else(|| {
                AppError::internal("Updated postal code could not be re-read", json!({ "id": id }))
            })
    }

    /// Deletes a postal code.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the id does not resolve.
    pub async fn delete_postal_code(&self, id: i64) -> Result<(), AppError> {
        let deleted = self.postal_code_repository.delete(id).await?;

        if !deleted {
            return Err(AppError::not_found(
                "Postal code not found",
                json!({ "id": id }),
            ));
        }

        Ok(())
    }

    /// Validates a trimmed code and the referenced city in one pass.
    ///
    /// The length gate runs before the uniqueness lookup; a code of the
    /// wrong shape is never compared against the store. `exclude_id` skips
    /// the record's own row during updates.
    async fn validate(
        &self,
        code: &str,
        city_id: i64,
        exclude_id: Option<i64>,
    ) -> Result<(), AppError> {
        let mut errors = FieldErrors::new();

        if code.chars().count() != 4 {
            errors.add("code", "Code must be exactly 4 characters");
        } else if let Some(existing) = self.postal_code_repository.find_by_code(code).await?
            && exclude_id != Some(existing.id)
        {
            errors.add("code", "Code has already been taken");
        }

        if !self.city_repository.exists(city_id).await? {
            errors.add("city_id", "Selected city does not exist");
        }

        errors.into_result()
    }
}
