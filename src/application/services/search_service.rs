//! Free-text search across the directory.

use std::sync::Arc;

use crate::domain::entities::{CityDetail, CountyWithCities, PostalCodeDetail};
use crate::domain::repositories::{CityRepository, CountyRepository, PostalCodeRepository};
use crate::error::AppError;

/// Cap on matches returned per category.
pub const SEARCH_RESULT_LIMIT: i64 = 10;

/// Matches from one search, grouped per category. An empty category stays
/// an empty list; one category matching does not affect the others.
#[derive(Debug)]
pub struct SearchResults {
    pub postal_codes: Vec<PostalCodeDetail>,
    pub cities: Vec<CityDetail>,
    pub counties: Vec<CountyWithCities>,
}

/// Service running one substring query against all three categories.
pub struct SearchService<K: CountyRepository, C: CityRepository, P: PostalCodeRepository> {
    county_repository: Arc<K>,
    city_repository: Arc<C>,
    postal_code_repository: Arc<P>,
}

impl<K: CountyRepository, C: CityRepository, P: PostalCodeRepository> SearchService<K, C, P> {
    /// Creates a new search service.
    pub fn new(
        county_repository: Arc<K>,
        city_repository: Arc<C>,
        postal_code_repository: Arc<P>,
    ) -> Self {
        Self {
            county_repository,
            city_repository,
            postal_code_repository,
        }
    }

    /// Searches postal codes, cities and counties for a substring match,
    /// up to [`SEARCH_RESULT_LIMIT`] per category.
    ///
    /// The query is trimmed first; a blank query is rejected before any
    /// category is scanned.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::BadRequest`] if the query is empty.
    pub async fn search(&self, query: &str) -> Result<SearchResults, AppError> {
        let query = query.trim();

        if query.is_empty() {
            return Err(AppError::bad_request("Search query is required"));
        }

        let postal_codes = self
            .postal_code_repository
            .search(query, SEARCH_RESULT_LIMIT)
            .await?;
        let cities = self.city_repository.search(query, SEARCH_RESULT_LIMIT).await?;
        let counties = self
            .county_repository
            .search(query, SEARCH_RESULT_LIMIT)
            .await?;

        Ok(SearchResults {
            postal_codes,
            cities,
            counties,
        })
    }
}
