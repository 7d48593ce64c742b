//! Core library for the `smhi` CLI.
//!
//! This crate defines:
//! - The wire shape of SMHI's point forecast response
//! - A mapper into a typed, per-timestamp domain model
//! - Swedish/English descriptions for weather symbols and precipitation categories
//! - An HTTP client and on-disk configuration
//!
//! It is used by `smhi-cli`, but can also be reused by other binaries or services.

pub mod codes;
pub mod config;
pub mod error;
pub mod mapper;
pub mod model;
pub mod provider;
pub mod wire;

pub use codes::{Descriptions, Locale, PrecipitationCategory, WeatherSymbol};
pub use config::Config;
pub use error::ForecastError;
pub use model::{Coordinates, Forecast, Geometry, PointForecast};
pub use provider::{ClientSettings, ForecastProvider, get_point_forecast, smhi::SmhiClient};
