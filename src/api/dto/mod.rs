//! Data Transfer Objects for API requests and responses.
//!
//! All DTOs use Serde for JSON serialization/deserialization and validator
//! for input validation.

pub mod city;
pub mod county;
pub mod health;
pub mod message;
pub mod postal_code;
pub mod search;
