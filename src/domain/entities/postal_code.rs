//! PostalCode entity, the leaf of the geographic hierarchy.

use chrono::{DateTime, Utc};

use super::city::City;
use super::county::County;

/// A postal code owned by exactly one city.
///
/// Codes are exactly 4 characters and unique across the system; both rules
/// are backed by store constraints.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct PostalCode {
    pub id: i64,
    pub code: String,
    pub city_id: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl PostalCode {
    /// Creates a new PostalCode instance.
    pub fn new(
        id: i64,
        code: String,
        city_id: i64,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            code,
            city_id,
            created_at,
            updated_at,
        }
    }
}

/// A postal code hydrated with its city and the city's county.
#[derive(Debug, Clone)]
pub struct PostalCodeDetail {
    pub postal_code: PostalCode,
    pub city: City,
    pub county: County,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_postal_code_detail_composition() {
        let now = Utc::now();
        let detail = PostalCodeDetail {
            postal_code: PostalCode::new(3, "1011".to_string(), 7, now, now),
            city: City::new(7, "Budapest".to_string(), 1, now, now),
            county: County::new(1, "Pest".to_string(), now, now),
        };

        assert_eq!(detail.postal_code.city_id, detail.city.id);
        assert_eq!(detail.city.county_id, detail.county.id);
        assert_eq!(detail.postal_code.code.len(), 4);
    }
}
