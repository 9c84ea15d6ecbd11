use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::conditions::{condition_color, condition_label};

/// One geocoding match for a user query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    /// Human-readable place label, e.g. "Paris, France".
    pub label: String,
    pub lat: f64,
    pub lng: f64,
}

/// Raw current-weather reading as returned by a weather provider,
/// before any display derivation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentConditions {
    pub temperature_c: f64,
    pub wind_speed_kmh: f64,
    pub condition_code: u32,
    pub observation_time: Option<DateTime<Utc>>,
}

/// A complete, renderable weather result for one chosen place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherObservation {
    pub city: String,
    pub temperature_c: f64,
    pub wind_speed_kmh: f64,
    pub condition_code: u32,
    /// Derived from `condition_code`; "Unknown" for unrecognized codes.
    pub condition: String,
    /// Hex display color derived from `condition_code`.
    pub color: String,
    pub observation_time: Option<DateTime<Utc>>,
}

impl WeatherObservation {
    /// Combine a chosen candidate's label with a provider reading,
    /// deriving the condition label and display color.
    pub fn derive(city: String, conditions: CurrentConditions) -> Self {
        Self {
            city,
            temperature_c: conditions.temperature_c,
            wind_speed_kmh: conditions.wind_speed_kmh,
            condition_code: conditions.condition_code,
            condition: condition_label(conditions.condition_code).to_string(),
            color: condition_color(conditions.condition_code).to_string(),
            observation_time: conditions.observation_time,
        }
    }
}
