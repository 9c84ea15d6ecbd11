//! Core library for the `skycast` city weather lookup.
//!
//! This crate defines:
//! - Configuration & credentials handling
//! - Abstractions over the geocoding and weather providers
//! - The lookup workflow (query → candidates → weather) and its states
//! - Condition code lookup tables (labels, display colors)
//!
//! It is used by `skycast-cli`, but can also be reused by other binaries or services.

pub mod conditions;
pub mod config;
pub mod error;
pub mod model;
pub mod provider;
pub mod workflow;

pub use conditions::{ConditionGroup, condition_color, condition_label};
pub use config::Config;
pub use error::{LookupError, ProviderError};
pub use model::{Candidate, CurrentConditions, WeatherObservation};
pub use provider::{GeocodingProvider, WeatherProvider, providers_from_config};
pub use workflow::{LookupState, WeatherLookup};
