//! Downloads yearly weather-station archives and extracts the files
//! belonging to a configured set of cities.

pub mod config;
pub mod errors;
pub mod facade;
pub mod factory;
pub mod models;
pub mod repository;
pub mod strategies;
pub mod template;

pub use errors::{ExtractionError, FactoryError, RunError, TemplateError};
