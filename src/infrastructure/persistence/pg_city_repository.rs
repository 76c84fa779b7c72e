//! PostgreSQL implementation of city repository.

use std::collections::HashMap;

use async_trait::async_trait;
use serde_json::json;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{City, CityDetail, County, PostalCode};
use crate::domain::repositories::CityRepository;
use crate::error::AppError;
use crate::utils::like;

/// PostgreSQL repository for city storage.
///
/// Detail shapes carry the owning county and the city's postal codes,
/// fetched in two batched queries and grouped in memory.
pub struct PgCityRepository {
    pool: Arc<PgPool>,
}

impl PgCityRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }

    /// Attaches county and postal codes to the given cities, preserving
    /// city order.
    async fn hydrate(&self, cities: Vec<City>) -> Result<Vec<CityDetail>, AppError> {
        if cities.is_empty() {
            return Ok(Vec::new());
        }

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

        let county_map: HashMap<i64, County> =
            counties.into_iter().map(|c| (c.id, c)).collect();

        let city_ids: Vec<i64> = cities.iter().map(|c| c.id).collect();

        let postal_codes = sqlx::query_as::<_, PostalCode>(
            r#"
            SELECT id, code, city_id, created_at, updated_at
            FROM postal_codes
            WHERE city_id = ANY($1)
            ORDER BY id
            "#,
        )
        .bind(&city_ids)
        .fetch_all(self.pool.as_ref())
        .await?;

        let mut codes_by_city: HashMap<i64, Vec<PostalCode>> = HashMap::new();
        for code in postal_codes {
            codes_by_city.entry(code.city_id).or_default().push(code);
        }

        let mut details = Vec::with_capacity(cities.len());
        for city in cities {
            // Absent only if the county was cascade-deleted between the reads.
            let county = county_map.get(&city.county_id).cloned().ok_or_else(|| {
                AppError::internal(
                    "City references a missing county",
                    json!({ "city_id": city.id, "county_id": city.county_id }),
                )
            })?;
            let postal_codes = codes_by_city.remove(&city.id).unwrap_or_default();
            details.push(CityDetail {
                city,
                county,
                postal_codes,
            });
        }

        Ok(details)
    }
}

#[async_trait]
impl CityRepository for PgCityRepository {
    async fn create(&self, name: &str, county_id: i64) -> Result<City, AppError> {
        let city = sqlx::query_as::<_, City>(
            r#"
            INSERT INTO cities (name, county_id)
            VALUES ($1, $2)
            RETURNING id, name, county_id, created_at, updated_at
            "#,
        )
        .bind(name)
        .bind(county_id)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(city)
    }

    async fn update(&self, id: i64, name: &str, county_id: i64) -> Result<Option<City>, AppError> {
        let city = sqlx::query_as::<_, City>(
            r#"
            UPDATE cities
            SET name = $2, county_id = $3, updated_at = NOW()
            WHERE id = $1
            RETURNING id, name, county_id, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(name)
        .bind(county_id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(city)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<City>, AppError> {
        let city = sqlx::query_as::<_, City>(
            r#"
            SELECT id, name, county_id, created_at, updated_at
            FROM cities
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(city)
    }

    async fn exists(&self, id: i64) -> Result<bool, AppError> {
        let exists =
            sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM cities WHERE id = $1)")
                .bind(id)
                .fetch_one(self.pool.as_ref())
                .await?;

        Ok(exists)
    }

    async fn list_detail(&self) -> Result<Vec<CityDetail>, AppError> {
        let cities = sqlx::query_as::<_, City>(
            r#"
            SELECT id, name, county_id, created_at, updated_at
            FROM cities
            ORDER BY id
            "#,
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        self.hydrate(cities).await
    }

    async fn find_detail(&self, id: i64) -> Result<Option<CityDetail>, AppError> {
        let Some(city) = self.find_by_id(id).await? else {
            return Ok(None);
        };

        let mut details = self.hydrate(vec![city]).await?;
        Ok(details.pop())
    }

    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        // Postal codes fall with the city (ON DELETE CASCADE).
        let result = sqlx::query("DELETE FROM cities WHERE id = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn search(&self, query: &str, limit: i64) -> Result<Vec<CityDetail>, AppError> {
        let cities = sqlx::query_as::<_, City>(
            r#"
            SELECT id, name, county_id, created_at, updated_at
            FROM cities
            WHERE name LIKE $1
            ORDER BY id
            LIMIT $2
            "#,
        )
        .bind(like::contains_pattern(query))
        .bind(limit)
        .fetch_all(self.pool.as_ref())
        .await?;

        self.hydrate(cities).await
    }
}
