//! DTOs for postal code endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::{PostalCode, PostalCodeDetail};

use super::city::CityItem;
use super::county::CountyItem;

/// Request body for creating or updating a postal code.
#[derive(Debug, Deserialize, Validate)]
pub struct PostalCodePayload {
    /// Four-character code; length and uniqueness are enforced by the service.
    #[validate(required(message = "Code is required"))]
    pub code: Option<String>,

    /// Owning city; must reference an existing record.
    #[validate(required(message = "City id is required"))]
    pub city_id: Option<i64>,
}

/// JSON representation of a postal code.
///
/// `city` is present only on endpoints that load it; when present it
/// carries its own county.
#[derive(Debug, Serialize)]
pub struct PostalCodeItem {
    pub id: i64,
    pub code: String,
    pub city_id: i64,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<CityItem>,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<PostalCode> for PostalCodeItem {
    fn from(postal_code: PostalCode) -> Self {
        Self {
            id: postal_code.id,
            code: postal_code.code,
            city_id: postal_code.city_id,
            city: None,
            created_at: postal_code.created_at,
            updated_at: postal_code.updated_at,
        }
    }
}

impl From<PostalCodeDetail> for PostalCodeItem {
    fn from(aggregate: PostalCodeDetail) -> Self {
        let mut city = CityItem::from(aggregate.city);
        city.county = Some(CountyItem::from(aggregate.county));

        let mut item = Self::from(aggregate.postal_code);
        item.city = Some(city);
        item
    }
}
