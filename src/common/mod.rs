//! Shared error and data types

pub mod errors;
pub mod types;
