//! County entity, the top level of the geographic hierarchy.

use chrono::{DateTime, Utc};

use super::city::{City, CityWithPostalCodes};

/// A top-level administrative region.
///
/// County names are unique across the system (exact match). A county owns
/// zero or more cities; deleting it removes the owned cities and their
/// postal codes.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct County {
    pub id: i64,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl County {
    /// Creates a new County instance.
    pub fn new(id: i64, name: String, created_at: DateTime<Utc>, updated_at: DateTime<Utc>) -> Self {
        Self {
            id,
            name,
            created_at,
            updated_at,
        }
    }
}

/// A county with its cities eagerly attached (one level deep).
///
/// Listing shape: cities carry no postal codes here.
#[derive(Debug, Clone)]
pub struct CountyWithCities {
    pub county: County,
    pub cities: Vec<City>,
}

/// A county hydrated two levels deep: cities, and each city's postal codes.
#[derive(Debug, Clone)]
pub struct CountyDetail {
    pub county: County,
    pub cities: Vec<CityWithPostalCodes>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_county_creation() {
        let now = Utc::now();
        let county = County::new(1, "Pest".to_string(), now, now);

        assert_eq!(county.id, 1);
        assert_eq!(county.name, "Pest");
        assert_eq!(county.created_at, now);
    }

    #[test]
    fn test_county_with_cities_can_be_empty() {
        let now = Utc::now();
        let aggregate = CountyWithCities {
            county: County::new(1, "Pest".to_string(), now, now),
            cities: Vec::new(),
        };

        assert!(aggregate.cities.is_empty());
    }
}
