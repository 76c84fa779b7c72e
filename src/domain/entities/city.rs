//! City entity, the middle level of the geographic hierarchy.

use chrono::{DateTime, Utc};

use super::county::County;
use super::postal_code::PostalCode;

/// A city owned by exactly one county.
///
/// `county_id` always references a live county; the store's foreign key
/// enforces this at write time.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct City {
    pub id: i64,
    pub name: String,
    pub county_id: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl City {
    /// Creates a new City instance.
    pub fn new(
        id: i64,
        name: String,
        county_id: i64,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name,
            county_id,
            created_at,
            updated_at,
        }
    }
}

/// A city with its postal codes eagerly attached.
///
/// Used inside [`super::county::CountyDetail`], where the owning county is
/// already the root of the result.
#[derive(Debug, Clone)]
pub struct CityWithPostalCodes {
    pub city: City,
    pub postal_codes: Vec<PostalCode>,
}

/// A city hydrated with its county and its postal codes.
///
/// The standard listing and detail shape for city endpoints.
#[derive(Debug, Clone)]
pub struct CityDetail {
    pub city: City,
    pub county: County,
    pub postal_codes: Vec<PostalCode>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_city_creation() {
        let now = Utc::now();
        let city = City::new(7, "Budapest".to_string(), 1, now, now);

        assert_eq!(city.id, 7);
        assert_eq!(city.name, "Budapest");
        assert_eq!(city.county_id, 1);
    }

    #[test]
    fn test_city_detail_composition() {
        let now = Utc::now();
        let detail = CityDetail {
            city: City::new(7, "Budapest".to_string(), 1, now, now),
            county: County::new(1, "Pest".to_string(), now, now),
            postal_codes: Vec::new(),
        };

        assert_eq!(detail.city.county_id, detail.county.id);
        assert!(detail.postal_codes.is_empty());
    }
}
