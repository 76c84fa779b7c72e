//! PostgreSQL implementation of postal-code repository.

use std::collections::HashMap;

use async_trait::async_trait;
use serde_json::json;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{City, County, PostalCode, PostalCodeDetail};
use crate::domain::repositories::PostalCodeRepository;
use crate::error::AppError;
use crate::utils::like;

/// PostgreSQL repository for postal-code storage.
///
/// Detail shapes climb two levels: the owning city, then that city's
/// county, fetched in batched queries and joined in memory.
pub struct PgPostalCodeRepository {
    pool: Arc<PgPool>,
}

impl PgPostalCodeRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }

    /// Attaches city and county to the given postal codes, preserving
    /// input order.
    async fn hydrate(
        &self,
        postal_codes: Vec<PostalCode>,
    ) -> Result<Vec<PostalCodeDetail>, AppError> {
        if postal_codes.is_empty() {
            return Ok(Vec::new());
        }

        let mut city_ids: Vec<i64> = postal_codes.iter().map(|p| p.city_id).collect();
        city_ids.sort_unstable();
        city_ids.dedup();

        let cities = sqlx::query_as::<_, City>(
            r#"
            SELECT id, name, county_id, created_at, updated_at
            FROM cities
            WHERE id = ANY($1)
            "#,
        )
        .bind(&city_ids)
        .fetch_all(self.pool.as_ref())
        .await?;

        let mut county_ids: Vec<i64> = cities.iter().map(|c| c.county_id).collect();
        county_ids.sort_unstable();
        county_ids.dedup();

        let counties = sqlx::query_as::<_, County>(
            r#"
            SELECT id, name, created_at, updated_at
            FROM counties
            WHERE id = ANY($1)
            "#,
        )
        .bind(&county_ids)
        .fetch_all(self.pool.as_ref())
        .await?;

        let city_map: HashMap<i64, City> = cities.into_iter().map(|c| (c.id, c)).collect();
        let county_map: HashMap<i64, County> =
            counties.into_iter().map(|c| (c.id, c)).collect();

        let mut details = Vec::with_capacity(postal_codes.len());
        for postal_code in postal_codes {
            // Absent only if the owner was cascade-deleted between the reads.
            let city = city_map.get(&postal_code.city_id).cloned().ok_or_else(|| {
                AppError::internal(
                    "Postal code references a missing city",
                    json!({ "postal_code_id": postal_code.id, "city_id": postal_code.city_id }),
                )
            })?;
            let county = county_map.get(&city.county_id).cloned().ok_or_else(|| {
                AppError::internal(
                    "City references a missing county",
                    json!({ "city_id": city.id, "county_id": city.county_id }),
                )
            })?;
            details.push(PostalCodeDetail {
                postal_code,
                city,
                county,
            });
        }

        Ok(details)
    }
}

#[async_trait]
impl PostalCodeRepository for PgPostalCodeRepository {
    async fn create(&self, code: &str, city_id: i64) -> Result<PostalCode, AppError> {
        let postal_code = sqlx::query_as::<_, PostalCode>(
            r#"
            INSERT INTO postal_codes (code, city_id)
            VALUES ($1, $2)
            RETURNING id, code, city_id, created_at, updated_at
            "#,
        )
        .bind(code)
        .bind(city_id)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(postal_code)
    }

    async fn update(
        &self,
        id: i64,
        code: &str,
        city_id: i64,
    ) -> Result<Option<PostalCode>, AppError> {
        let postal_code = sqlx::query_as::<_, PostalCode>(
            r#"
            UPDATE postal_codes
            SET code = $2, city_id = $3, updated_at = NOW()
            WHERE id = $1
            RETURNING id, code, city_id, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(code)
        .bind(city_id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(postal_code)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<PostalCode>, AppError> {
        let postal_code = sqlx::query_as::<_, PostalCode>(
            r#"
            SELECT id, code, city_id, created_at, updated_at
            FROM postal_codes
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(postal_code)
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<PostalCode>, AppError> {
        let postal_code = sqlx::query_as::<_, PostalCode>(
            r#"
            SELECT id, code, city_id, created_at, updated_at
            FROM postal_codes
            WHERE code = $1
            "#,
        )
        .bind(code)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(postal_code)
    }

    async fn list_detail(&self) -> Result<Vec<PostalCodeDetail>, AppError> {
        let postal_codes = sqlx::query_as::<_, PostalCode>(
            r#"
            SELECT id, code, city_id, created_at, updated_at
            FROM postal_codes
            ORDER BY id
            "#,
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        self.hydrate(postal_codes).await
    }

    async fn find_detail(&self, id: i64) -> Result<Option<PostalCodeDetail>, AppError> {
        let Some(postal_code) = self.find_by_id(id).await? else {
            return Ok(None);
        };

        let mut details = self.hydrate(vec![postal_code]).await?;
        Ok(details.pop())
    }

    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM postal_codes WHERE id = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn search(&self, query: &str, limit: i64) -> Result<Vec<PostalCodeDetail>, AppError> {
        let postal_codes = sqlx::query_as::<_, PostalCode>(
            r#"
            SELECT id, code, city_id, created_at, updated_at
            FROM postal_codes
            WHERE code LIKE $1
            ORDER BY id
            LIMIT $2
            "#,
        )
        .bind(like::contains_pattern(query))
        .bind(limit)
        .fetch_all(self.pool.as_ref())
        .await?;

        self.hydrate(postal_codes).await
    }
}
