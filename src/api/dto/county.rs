//! DTOs for county endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::{County, CountyDetail, CountyWithCities};

use super::city::CityItem;

/// Request body for creating or updating a county.
#[derive(Debug, Deserialize, Validate)]
pub struct CountyPayload {
    /// County name; content rules are enforced by the service.
    #[validate(required(message = "Name is required"))]
    pub name: Option<String>,
}

/// JSON representation of a county.
///
/// `cities` is present only on endpoints that load it; a flat county
/// omits the key entirely.
#[derive(Debug, Serialize)]
pub struct CountyItem {
    pub id: i64,
    pub name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub cities: Option<Vec<CityItem>>,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<County> for CountyItem {
    fn from(county: County) -> Self {
        Self {
            id: county.id,
            name: county.name,
            cities: None,
            created_at: county.created_at,
            updated_at: county.updated_at,
        }
    }
}

impl From<CountyWithCities> for CountyItem {
    fn from(aggregate: CountyWithCities) -> Self {
        let mut item = Self::from(aggregate.county);
        item.cities = Some(aggregate.cities.into_iter().map(CityItem::from).collect());
        item
    }
}

impl From<CountyDetail> for CountyItem {
    fn from(aggregate: CountyDetail) -> Self {
        let mut item = Self::from(aggregate.county);
        item.cities = Some(aggregate.cities.into_iter().map(CityItem::from).collect());
        item
    }
}
