use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use crate::{error::ProviderError, model::Candidate, provider::truncate_body};

use super::GeocodingProvider;

const DEFAULT_ENDPOINT: &str = "https://api.opencagedata.com/geocode/v1/json";

/// Forward geocoder backed by the OpenCage Data API.
#[derive(Debug, Clone)]
pub struct OpenCageGeocoder {
    api_key: Option<String>,
    endpoint: String,
    http: Client,
}

impl OpenCageGeocoder {
    /// The key is optional so the application can start without one;
    /// `resolve` fails with [`ProviderError::MissingCredentials`] instead.
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            api_key,
            endpoint: DEFAULT_ENDPOINT.to_string(),
            http: Client::new(),
        }
    }

    /// Point the geocoder at a different endpoint, e.g. a test server.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }
}

#[derive(Debug, Deserialize)]
struct OcGeometry {
    lat: f64,
    lng: f64,
}

#[derive(Debug, Deserialize)]
struct OcResult {
    formatted: String,
    geometry: OcGeometry,
}

#[derive(Debug, Deserialize)]
struct OcResponse {
    // The API omits `results` entirely for some degenerate queries;
    // treat that the same as an empty match list.
    #[serde(default)]
    results: Vec<OcResult>,
}

#[async_trait]
impl GeocodingProvider for OpenCageGeocoder {
    async fn resolve(&self, query: &str) -> Result<Vec<Candidate>, ProviderError> {
        let key = self.api_key.as_deref().ok_or(ProviderError::MissingCredentials)?;

        let res = self
            .http
            .get(&self.endpoint)
            .query(&[("q", query), ("key", key)])
            .send()
            .await?;

        let status = res.status();
        let body = res.text().await?;

        if !status.is_success() {
            return Err(ProviderError::Status { status, body: truncate_body(&body) });
        }

        let parsed: OcResponse = serde_json::from_str(&body)?;

        tracing::debug!(query, matches = parsed.results.len(), "geocoding query resolved");

        Ok(parsed
            .results
            .into_iter()
            .map(|r| Candidate {
                label: r.formatted,
                lat: r.geometry.lat,
                lng: r.geometry.lng,
            })
            .collect())
    }
}
