//! Utility functions shared across the application.
//!
//! This module provides helper functions used across the application:
//!
//! - [`like`] - LIKE pattern construction for literal substring search
//! - [`token`] - API token generation and hashing

pub mod like;
pub mod token;
