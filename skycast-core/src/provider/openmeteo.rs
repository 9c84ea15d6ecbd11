use async_trait::async_trait;
use chrono::{DateTime, NaiveDateTime, Utc};
use reqwest::Client;
use serde::Deserialize;

use crate::{error::ProviderError, model::CurrentConditions, provider::truncate_body};

use super::WeatherProvider;

const DEFAULT_ENDPOINT: &str = "https://api.open-meteo.com/v1/forecast";

/// Current-weather source backed by the Open-Meteo forecast API.
/// Requires no credentials.
#[derive(Debug, Clone)]
pub struct OpenMeteoProvider {
    endpoint: String,
    http: Client,
}

impl OpenMeteoProvider {
    pub fn new() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            http: Client::new(),
        }
    }

    /// Point the provider at a different endpoint, e.g. a test server.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }
}

impl Default for OpenMeteoProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Deserialize)]
struct OmCurrentWeather {
    temperature: f64,
    windspeed: f64,
    weathercode: u32,
    // Local time of the reading, e.g. "2026-08-06T14:00".
    time: Option<String>,
}

#[derive(Debug, Deserialize)]
struct OmResponse {
    current_weather: OmCurrentWeather,
}

#[async_trait]
impl WeatherProvider for OpenMeteoProvider {
    async fn fetch(&self, lat: f64, lng: f64) -> Result<CurrentConditions, ProviderError> {
        let res = self
            .http
            .get(&self.endpoint)
            .query(&[
                ("latitude", lat.to_string().as_str()),
                ("longitude", lng.to_string().as_str()),
                ("current_weather", "true"),
            ])
            .send()
            .await?;

        let status = res.status();
        let body = res.text().await?;

        if !status.is_success() {
            return Err(ProviderError::Status { status, body: truncate_body(&body) });
        }

        let parsed: OmResponse = serde_json::from_str(&body)?;
        let current = parsed.current_weather;

        tracing::debug!(lat, lng, code = current.weathercode, "weather reading fetched");

        Ok(CurrentConditions {
            temperature_c: current.temperature,
            wind_speed_kmh: current.windspeed,
            condition_code: current.weathercode,
            observation_time: current.time.as_deref().and_then(parse_observation_time),
        })
    }
}

fn parse_observation_time(raw: &str) -> Option<DateTime<Utc>> {
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M")
        .ok()
        .map(|ndt| ndt.and_utc())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn provider_for(server: &MockServer) -> OpenMeteoProvider {
        OpenMeteoProvider::new().with_endpoint(format!("{}/v1/forecast", server.uri()))
    }

    #[tokio::test]
    async fn fetch_parses_current_weather() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/forecast"))
            .and(query_param("latitude", "48.8566"))
            .and(query_param("longitude", "2.3522"))
            .and(query_param("current_weather", "true"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "current_weather": {
                    "temperature": 18.5,
                    "windspeed": 10.2,
                    "weathercode": 1,
                    "time": "2026-08-06T14:00"
                }
            })))
            .mount(&server)
            .await;

        let conditions = provider_for(&server).fetch(48.8566, 2.3522).await.unwrap();

        assert_eq!(conditions.temperature_c, 18.5);
        assert_eq!(conditions.wind_speed_kmh, 10.2);
        assert_eq!(conditions.condition_code, 1);
        assert!(conditions.observation_time.is_some());
    }

    #[tokio::test]
    async fn fetch_tolerates_missing_time_field() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/forecast"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "current_weather": {
                    "temperature": -3.0,
                    "windspeed": 22.0,
                    "weathercode": 73
                }
            })))
            .mount(&server)
            .await;

        let conditions = provider_for(&server).fetch(60.17, 24.94).await.unwrap();
        assert_eq!(conditions.condition_code, 73);
        assert!(conditions.observation_time.is_none());
    }

    #[tokio::test]
    async fn fetch_rejects_payload_without_current_weather() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/forecast"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"hourly": {}})))
            .mount(&server)
            .await;

        let err = provider_for(&server).fetch(0.0, 0.0).await.unwrap_err();
        assert!(matches!(err, ProviderError::Malformed(_)));
    }

    #[tokio::test]
    async fn fetch_rejects_non_success_status() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/forecast"))
            .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
            .mount(&server)
            .await;

        let err = provider_for(&server).fetch(0.0, 0.0).await.unwrap_err();
        assert!(matches!(err, ProviderError::Status { status, .. } if status.as_u16() == 500));
    }

    #[test]
    fn observation_time_parses_open_meteo_format() {
        let parsed = parse_observation_time("2026-08-06T14:00").unwrap();
        assert_eq!(parsed.to_rfc3339(), "2026-08-06T14:00:00+00:00");

        assert!(parse_observation_time("not a time").is_none());
    }
}
