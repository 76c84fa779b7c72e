//! Core domain entities representing the geographic data model.
//!
//! This module contains the fundamental data structures of the postal-code
//! directory. Entities are plain data structures without business logic.
//!
//! # Entity Types
//!
//! - [`County`] - Top-level administrative region
//! - [`City`] - Mid-level region owned by a county
//! - [`PostalCode`] - 4-character code owned by a city
//!
//! # Aggregate Shapes
//!
//! Eager hydration is explicit: repository finders return aggregate structs
//! pairing an entity with its already-fetched relations
//! ([`CountyWithCities`], [`CountyDetail`], [`CityWithPostalCodes`],
//! [`CityDetail`], [`PostalCodeDetail`]) rather than traversing lazily.

pub mod city;
pub mod county;
pub mod postal_code;

pub use city::{City, CityDetail, CityWithPostalCodes};
pub use county::{County, CountyDetail, CountyWithCities};
pub use postal_code::{PostalCode, PostalCodeDetail};
