//! Repository trait definitions for the domain layer.
//!
//! This module defines the repository interfaces (traits) that abstract data access
//! operations following the Repository pattern. These traits are implemented by
//! concrete repositories in the infrastructure layer.
//!
//! # Architecture
//!
//! - Traits define the contract for data operations
//! - Implementations live in `crate::infrastructure::persistence`
//! - Mock implementations are auto-generated via `mockall` for testing
//!
//! # Available Repositories
//!
//! - [`CountyRepository`] - County CRUD and hydrated finders
//! - [`CityRepository`] - City CRUD and hydrated finders
//! - [`PostalCodeRepository`] - Postal-code CRUD and hydrated finders
//! - [`TokenRepository`] - API token authentication
//!
//! # Testing
//!
//! See integration tests in `tests/repository_*.rs` for usage examples.

pub mod city_repository;
pub mod county_repository;
pub mod postal_code_repository;
pub mod token_repository;

pub use city_repository::CityRepository;
pub use county_repository::CountyRepository;
pub use postal_code_repository::PostalCodeRepository;
pub use token_repository::{ApiToken, TokenRepository};

#[cfg(test)]
pub use city_repository::MockCityRepository;
#[cfg(test)]
pub use county_repository::MockCountyRepository;
#[cfg(test)]
pub use postal_code_repository::MockPostalCodeRepository;
#[cfg(test)]
pub use token_repository::MockTokenRepository;
