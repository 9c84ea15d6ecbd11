use reqwest::StatusCode;
use thiserror::Error;

/// Failure of a network provider call. Internal detail: callers convert
/// these into a fixed [`LookupError`] message before showing anything
/// to the user.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("request failed with status {status}: {body}")]
    Status { status: StatusCode, body: String },

    #[error("malformed response: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("no geocoding API key configured")]
    MissingCredentials,
}

/// User-visible lookup failures. The `Display` text is exactly what the
/// presentation layer shows; it is never re-thrown past the workflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LookupError {
    #[error("Please enter a city name.")]
    EmptyInput,

    #[error("No matching cities found.")]
    NoMatches,

    #[error("Error fetching city data.")]
    Geocoding,

    #[error("Error fetching weather data.")]
    Weather,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_errors_render_fixed_messages() {
        assert_eq!(LookupError::EmptyInput.to_string(), "Please enter a city name.");
        assert_eq!(LookupError::NoMatches.to_string(), "No matching cities found.");
        assert_eq!(LookupError::Geocoding.to_string(), "Error fetching city data.");
        assert_eq!(LookupError::Weather.to_string(), "Error fetching weather data.");
    }
}
