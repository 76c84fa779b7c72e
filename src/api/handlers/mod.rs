//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod cities;
pub mod counties;
pub mod health;
pub mod postal_codes;
pub mod search;

pub use cities::{
    city_create_handler, city_delete_handler, city_get_handler, city_list_handler,
    city_update_handler,
};
pub use counties::{
    county_create_handler, county_delete_handler, county_get_handler, county_list_handler,
    county_update_handler,
};
pub use health::health_handler;
pub use postal_codes::{
    postal_code_create_handler, postal_code_delete_handler, postal_code_get_handler,
    postal_code_list_handler, postal_code_update_handler,
};
pub use search::search_handler;
