use crate::{
    Config,
    error::ProviderError,
    model::{Candidate, CurrentConditions},
    provider::{opencage::OpenCageGeocoder, openmeteo::OpenMeteoProvider},
};
use async_trait::async_trait;
use std::fmt::Debug;

pub mod opencage;
pub mod openmeteo;

/// Resolves a free-text place query to candidate locations.
///
/// No matches is a successful empty result, not an error.
#[async_trait]
pub trait GeocodingProvider: Send + Sync + Debug {
    async fn resolve(&self, query: &str) -> Result<Vec<Candidate>, ProviderError>;
}

/// Fetches the current weather reading for a coordinate pair.
#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    async fn fetch(&self, lat: f64, lng: f64) -> Result<CurrentConditions, ProviderError>;
}

/// Construct the provider pair the lookup workflow runs against.
///
/// A missing geocoding API key is not rejected here: the geocoder fails
/// at call time instead, so the application still starts and the user
/// sees the failure on first search.
pub fn providers_from_config(
    config: &Config,
) -> (Box<dyn GeocodingProvider>, Box<dyn WeatherProvider>) {
    let geocoder = OpenCageGeocoder::new(config.geocoding_api_key());
    (Box::new(geocoder), Box::new(OpenMeteoProvider::new()))
}

pub(crate) fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.len() > MAX {
        format!("{}...", &body[..MAX])
    } else {
        body.to_string()
    }
}
