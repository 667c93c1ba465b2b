//! Application configuration

pub mod loader;
pub mod types;
