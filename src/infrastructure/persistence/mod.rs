//! PostgreSQL repository implementations.
//!
//! Concrete implementations of domain repository traits using SQLx
//! runtime-checked queries over a shared connection pool.
//!
//! # Repositories
//!
//! - [`PgCountyRepository`] - County storage and hydrated finders
//! - [`PgCityRepository`] - City storage and hydrated finders
//! - [`PgPostalCodeRepository`] - Postal-code storage and hydrated finders
//! - [`PgTokenRepository`] - API token storage and validation

pub mod pg_city_repository;
pub mod pg_county_repository;
pub mod pg_postal_code_repository;
pub mod pg_token_repository;

pub use pg_city_repository::PgCityRepository;
pub use pg_county_repository::PgCountyRepository;
pub use pg_postal_code_repository::PgPostalCodeRepository;
pub use pg_token_repository::PgTokenRepository;
