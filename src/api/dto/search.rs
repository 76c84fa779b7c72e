//! DTOs for the cross-category search endpoint.

use serde::{Deserialize, Serialize};

use crate::application::services::SearchResults;

use super::city::CityItem;
use super::county::CountyItem;
use super::postal_code::PostalCodeItem;

/// Query string for `GET /api/search`.
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    /// Substring to match; a missing parameter is treated as empty.
    pub q: Option<String>,
}

/// Response carrying matches from all three categories.
///
/// Categories are independent; an empty one serializes as an empty array.
#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub postal_codes: Vec<PostalCodeItem>,
    pub cities: Vec<CityItem>,
    pub counties: Vec<CountyItem>,
}

impl From<SearchResults> for SearchResponse {
    fn from(results: SearchResults) -> Self {
        Self {
            postal_codes: results
                .postal_codes
                .into_iter()
                .map(PostalCodeItem::from)
                .collect(),
            cities: results.cities.into_iter().map(CityItem::from).collect(),
            counties: results.counties.into_iter().map(CountyItem::from).collect(),
        }
    }
}
