//! Core library for the `wsearch` client.
//!
//! This crate defines:
//! - Shared domain models (search requests, weather reports)
//! - The error taxonomy for a search cycle
//! - Icon selection for weather descriptions
//! - The HTTP client for the weather search endpoint
//! - Configuration handling
//!
//! It is used by `wsearch-cli`, but can also be reused by other binaries or services.

pub mod api;
pub mod config;
pub mod error;
pub mod icon;
pub mod model;

pub use api::{HttpWeatherApi, WeatherBackend};
pub use config::Config;
pub use error::SearchError;
pub use icon::WeatherIcon;
pub use model::{SearchRequest, Unit, WeatherReport};
