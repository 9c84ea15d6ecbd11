//! The city → candidates → weather lookup sequence.
//!
//! [`WeatherLookup`] owns all mutable state of the sequence and exposes one
//! async operation per user action. Every transition is published on a
//! watch channel so a presentation layer can re-render without polling.

use tokio::sync::watch;

use crate::{
    error::LookupError,
    model::{Candidate, WeatherObservation},
    provider::{GeocodingProvider, WeatherProvider},
};

/// Where the lookup currently stands.
///
/// Candidates, the finished observation, and the error live inside
/// mutually exclusive variants, so at most one of them can ever be
/// active.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum LookupState {
    #[default]
    Idle,
    /// Geocoding request in flight.
    AwaitingCandidates,
    /// Matches found; waiting for the user to pick one.
    CandidatesReady(Vec<Candidate>),
    /// Weather request in flight; render a loading indicator.
    FetchingWeather,
    WeatherReady(WeatherObservation),
    Errored(LookupError),
}

impl LookupState {
    pub fn candidates(&self) -> Option<&[Candidate]> {
        match self {
            LookupState::CandidatesReady(candidates) => Some(candidates),
            _ => None,
        }
    }

    pub fn observation(&self) -> Option<&WeatherObservation> {
        match self {
            LookupState::WeatherReady(observation) => Some(observation),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<LookupError> {
        match self {
            LookupState::Errored(err) => Some(*err),
            _ => None,
        }
    }

    pub fn is_fetching(&self) -> bool {
        matches!(self, LookupState::FetchingWeather)
    }
}

/// Drives the two-step lookup against a geocoder and a weather source.
///
/// Each operation runs its provider call to completion before returning,
/// and both take `&mut self`, so a second trigger cannot start while a
/// request is outstanding.
#[derive(Debug)]
pub struct WeatherLookup {
    query: String,
    state: LookupState,
    geocoder: Box<dyn GeocodingProvider>,
    weather: Box<dyn WeatherProvider>,
    events: watch::Sender<LookupState>,
}

impl WeatherLookup {
    pub fn new(geocoder: Box<dyn GeocodingProvider>, weather: Box<dyn WeatherProvider>) -> Self {
        let (events, _) = watch::channel(LookupState::Idle);
        Self {
            query: String::new(),
            state: LookupState::Idle,
            geocoder,
            weather,
            events,
        }
    }

    /// Observe every state transition. Receivers get a snapshot of the
    /// latest state; they never mutate the lookup.
    pub fn subscribe(&self) -> watch::Receiver<LookupState> {
        self.events.subscribe()
    }

    pub fn state(&self) -> &LookupState {
        &self.state
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    /// Replace the query text. Editing is not a transition: the current
    /// candidates, observation, or error stay visible until a submit.
    pub fn set_query(&mut self, text: impl Into<String>) {
        self.query = text.into();
    }

    /// Submit the current query for geocoding.
    ///
    /// An empty query never reaches the geocoder. Any prior candidates,
    /// observation, or error are dropped by the transition out of the
    /// current state.
    pub async fn submit(&mut self) -> &LookupState {
        if self.query.is_empty() {
            self.transition(LookupState::Errored(LookupError::EmptyInput));
            return &self.state;
        }

        self.transition(LookupState::AwaitingCandidates);

        let query = self.query.clone();
        let next = match self.geocoder.resolve(&query).await {
            Ok(candidates) if candidates.is_empty() => {
                LookupState::Errored(LookupError::NoMatches)
            }
            Ok(candidates) => LookupState::CandidatesReady(candidates),
            Err(err) => {
                tracing::warn!(query, error = %err, "geocoding lookup failed");
                LookupState::Errored(LookupError::Geocoding)
            }
        };

        self.transition(next);
        &self.state
    }

    /// Fetch the weather for the candidate at `index`.
    ///
    /// A no-op unless candidates are on display and the index is in
    /// range. The transition into `FetchingWeather` clears the candidate
    /// list; the outcome transition clears the loading indicator.
    pub async fn choose(&mut self, index: usize) -> &LookupState {
        let candidate: Candidate = match self.state.candidates().and_then(|c| c.get(index)) {
            Some(candidate) => candidate.clone(),
            None => return &self.state,
        };

        self.transition(LookupState::FetchingWeather);

        let next = match self.weather.fetch(candidate.lat, candidate.lng).await {
            Ok(conditions) => {
                LookupState::WeatherReady(WeatherObservation::derive(candidate.label, conditions))
            }
            Err(err) => {
                tracing::warn!(city = %candidate.label, error = %err, "weather fetch failed");
                LookupState::Errored(LookupError::Weather)
            }
        };

        self.transition(next);
        &self.state
    }

    fn transition(&mut self, next: LookupState) {
        tracing::debug!(state = ?next, "lookup transition");
        self.state = next.clone();
        self.events.send_replace(next);
    }
}
