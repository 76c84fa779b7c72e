//! PostgreSQL implementation of county repository.

use std::collections::HashMap;

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{
    City, CityWithPostalCodes, County, CountyDetail, CountyWithCities, PostalCode,
};
use crate::domain::repositories::CountyRepository;
use crate::error::AppError;
use crate::utils::like;

/// PostgreSQL repository for county storage.
///
/// Hydration is a batched step: cities (and postal codes for the detail
/// shape) are fetched with `= ANY($1)` and grouped in memory, so listing N
/// counties costs a fixed number of queries.
pub struct PgCountyRepository {
    pool: Arc<PgPool>,
}

impl PgCountyRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }

    /// Attaches cities to the given counties, preserving county order.
    async fn attach_cities(
        &self,
        counties: Vec<County>,
    ) -> Result<Vec<CountyWithCities>, AppError> {
        if counties.is_empty() {
            return Ok(Vec::new());
        }

        let county_ids: Vec<i64> = counties.iter().map(|c| c.id).collect();

        let cities = sqlx::query_as::<_, City>(
            r#"
            SELECT id, name, county_id, created_at, updated_at
            FROM cities
            WHERE county_id = ANY($1)
            ORDER BY id
            "#,
        )
        .bind(&county_ids)
        .fetch_all(self.pool.as_ref())
        .await?;

        let mut by_county: HashMap<i64, Vec<City>> = HashMap::new();
        for city in cities {
            by_county.entry(city.county_id).or_default().push(city);
        }

        Ok(counties
            .into_iter()
            .map(|county| {
                let cities = by_county.remove(&county.id).unwrap_or_default();
                CountyWithCities { county, cities }
            })
            .collect())
    }
}

#[async_trait]
impl CountyRepository for PgCountyRepository {
    async fn create(&self, name: &str) -> Result<County, AppError> {
        let county = sqlx::query_as::<_, County>(
            r#"
            INSERT INTO counties (name)
            VALUES ($1)
            RETURNING id, name, created_at, updated_at
            "#,
        )
        .bind(name)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(county)
    }

    async fn update(&self, id: i64, name: &str) -> Result<Option<County>, AppError> {
        let county = sqlx::query_as::<_, County>(
            r#"
            UPDATE counties
            SET name = $2, updated_at = NOW()
            WHERE id = $1
            RETURNING id, name, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(name)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(county)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<County>, AppError> {
        let county = sqlx::query_as::<_, County>(
            r#"
            SELECT id, name, created_at, updated_at
            FROM counties
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(county)
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<County>, AppError> {
        let county = sqlx::query_as::<_, County>(
            r#"
            SELECT id, name, created_at, updated_at
            FROM counties
            WHERE name = $1
            "#,
        )
        .bind(name)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(county)
    }

    async fn exists(&self, id: i64) -> Result<bool, AppError> {
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM counties WHERE id = $1)",
        )
        .bind(id)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(exists)
    }

    async fn list_with_cities(&self) -> Result<Vec<CountyWithCities>, AppError> {
        let counties = sqlx::query_as::<_, County>(
            r#"
            SELECT id, name, created_at, updated_at
            FROM counties
            ORDER BY id
            "#,
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        self.attach_cities(counties).await
    }

    async fn find_detail(&self, id: i64) -> Result<Option<CountyDetail>, AppError> {
        let Some(county) = self.find_by_id(id).await? else {
            return Ok(None);
        };

        let cities = sqlx::query_as::<_, City>(
            r#"
            SELECT id, name, county_id, created_at, updated_at
            FROM cities
            WHERE county_id = $1
            ORDER BY id
            "#,
        )
        .bind(id)
        .fetch_all(self.pool.as_ref())
        .await?;

        let city_ids: Vec<i64> = cities.iter().map(|c| c.id).collect();

        let postal_codes = if city_ids.is_empty() {
            Vec::new()
        } else {
            sqlx::query_as::<_, PostalCode>(
                r#"
                SELECT id, code, city_id, created_at, updated_at
                FROM postal_codes
                WHERE city_id = ANY($1)
                ORDER BY id
                "#,
            )
            .bind(&city_ids)
            .fetch_all(self.pool.as_ref())
            .await?
        };

        let mut by_city: HashMap<i64, Vec<PostalCode>> = HashMap::new();
        for code in postal_codes {
            by_city.entry(code.city_id).or_default().push(code);
        }

        let cities = cities
            .into_iter()
            .map(|city| {
                let postal_codes = by_city.remove(&city.id).unwrap_or_default();
                CityWithPostalCodes { city, postal_codes }
            })
            .collect();

        Ok(Some(CountyDetail { county, cities }))
    }

    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        // Cities and postal codes fall with the county (ON DELETE CASCADE).
        let result = sqlx::query("DELETE FROM counties WHERE id = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn search(&self, query: &str, limit: i64) -> Result<Vec<CountyWithCities>, AppError> {
        let counties = sqlx::query_as::<_, County>(
            r#"
            SELECT id, name, created_at, updated_at
            FROM counties
            WHERE name LIKE $1
            ORDER BY id
            LIMIT $2
            "#,
        )
        .bind(like::contains_pattern(query))
        .bind(limit)
        .fetch_all(self.pool.as_ref())
        .await?;

        self.attach_cities(counties).await
    }
}
