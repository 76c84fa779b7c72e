//! Application layer services implementing business logic.
//!
//! This layer orchestrates domain operations by coordinating repository calls,
//! validation, and business rules. Services consume repository traits and provide
//! a clean API for HTTP handlers.
//!
//! # Available Services
//!
//! - [`services::county_service::CountyService`] - County management
//! - [`services::city_service::CityService`] - City management
//! - [`services::postal_code_service::PostalCodeService`] - Postal code management
//! - [`services::search_service::SearchService`] - Cross-category substring search
//! - [`services::auth_service::AuthService`] - API token authentication

pub mod services;
