//! DTOs for city endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::{City, CityDetail, CityWithPostalCodes};

use super::county::CountyItem;
use super::postal_code::PostalCodeItem;

/// Request body for creating or updating a city.
#[derive(Debug, Deserialize, Validate)]
pub struct CityPayload {
    #[validate(required(message = "Name is required"))]
    pub name: Option<String>,

    /// Owning county; must reference an existing record.
    #[validate(required(message = "County id is required"))]
    pub county_id: Option<i64>,
}

/// JSON representation of a city.
///
/// `county` and `postal_codes` are present only on endpoints that load
/// them; the keys are omitted otherwise.
#[derive(Debug, Serialize)]
pub struct CityItem {
    pub id: i64,
    pub name: String,
    pub county_id: i64,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub county: Option<CountyItem>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub postal_codes: Option<Vec<PostalCodeItem>>,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<City> for CityItem {
    fn from(city: City) -> Self {
        Self {
            id: city.id,
            name: city.name,
            county_id: city.county_id,
            county: None,
            postal_codes: None,
            created_at: city.created_at,
            updated_at: city.updated_at,
        }
    }
}

impl From<CityWithPostalCodes> for CityItem {
    fn from(aggregate: CityWithPostalCodes) -> Self {
        let mut item = Self::from(aggregate.city);
        item.postal_codes = Some(
            aggregate
                .postal_codes
                .into_iter()
                .map(PostalCodeItem::from)
                .collect(),
        );
        item
    }
}

impl From<CityDetail> for CityItem {
    fn from(aggregate: CityDetail) -> Self {
        let mut item = Self::from(aggregate.city);
        item.county = Some(CountyItem::from(aggregate.county));
        item.postal_codes = Some(
            aggregate
                .postal_codes
                .into_iter()
                .map(PostalCodeItem::from)
                .collect(),
        );
        item
    }
}
