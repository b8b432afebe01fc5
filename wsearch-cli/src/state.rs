//! Explicit UI mode for the search session.
//!
//! The session is always in exactly one mode; panel visibility follows the
//! mode, so a result and an error can never be shown together.

use wsearch_core::WeatherReport;

/// Exclusive mode of the search session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiState {
    Idle,
    Loading,
    Result(WeatherReport),
    Error(String),
}

/// Something that happened in a search cycle.
#[derive(Debug, Clone)]
pub enum SearchEvent {
    Started,
    Succeeded(WeatherReport),
    Failed(String),
}

impl UiState {
    /// Apply one event. This is the only place the mode changes.
    pub fn apply(&mut self, event: SearchEvent) {
        *self = match event {
            SearchEvent::Started => UiState::Loading,
            SearchEvent::Succeeded(report) => UiState::Result(report),
            SearchEvent::Failed(message) => UiState::Error(message),
        };
    }

    /// The search trigger accepts input in every mode except Loading.
    pub fn trigger_enabled(&self) -> bool {
        !matches!(self, UiState::Loading)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report() -> WeatherReport {
        WeatherReport {
            city: "Paris".to_string(),
            temperature: Some("18°C".to_string()),
            description: Some("Partly cloudy".to_string()),
            humidity: Some("60%".to_string()),
            wind_speed: Some("10 km/h".to_string()),
        }
    }

    #[test]
    fn idle_accepts_input() {
        assert!(UiState::Idle.trigger_enabled());
    }

    #[test]
    fn starting_a_search_disables_the_trigger() {
        let mut state = UiState::Idle;
        state.apply(SearchEvent::Started);

        assert_eq!(state, UiState::Loading);
        assert!(!state.trigger_enabled());
    }

    #[test]
    fn success_reenables_the_trigger() {
        let mut state = UiState::Loading;
        state.apply(SearchEvent::Succeeded(report()));

        assert_eq!(state, UiState::Result(report()));
        assert!(state.trigger_enabled());
    }

    #[test]
    fn failure_reenables_the_trigger() {
        let mut state = UiState::Loading;
        state.apply(SearchEvent::Failed("City not found".to_string()));

        assert_eq!(state, UiState::Error("City not found".to_string()));
        assert!(state.trigger_enabled());
    }

    #[test]
    fn modes_are_exclusive() {
        let mut state = UiState::Result(report());
        state.apply(SearchEvent::Failed("boom".to_string()));

        // The previous result is gone; only the error is visible.
        assert_eq!(state, UiState::Error("boom".to_string()));
    }
}
