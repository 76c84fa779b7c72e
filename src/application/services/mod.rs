//! Business logic services for the application layer.

pub mod auth_service;
pub mod city_service;
pub mod county_service;
pub mod postal_code_service;
pub mod search_service;

pub use auth_service::AuthService;
pub use city_service::CityService;
pub use county_service::CountyService;
pub use postal_code_service::PostalCodeService;
pub use search_service::{SEARCH_RESULT_LIMIT, SearchResults, SearchService};
