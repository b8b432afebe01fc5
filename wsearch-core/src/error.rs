pub use reqwest::StatusCode;

/// Shown when the endpoint rejects a lookup without giving a reason.
const REJECTED_FALLBACK: &str = "Unable to fetch weather data";

/// Shown for any transport-level failure. The kinds are not distinguished
/// further for the user.
const CONNECTIVITY_MESSAGE: &str =
    "Failed to fetch weather data. Please check your connection and try again.";

/// What went wrong during one search cycle.
///
/// Every variant is terminal for the current search; the controller returns
/// to a responsive state and the user may re-trigger.
#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    /// City input was empty after trimming. No request is issued.
    #[error("city input is empty")]
    EmptyCity,

    /// The endpoint answered with a non-success HTTP status.
    #[error("weather endpoint returned status {0}")]
    Status(StatusCode),

    /// The request could not be sent or the response body could not be read.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The response body was not the expected JSON shape.
    #[error("malformed response body: {0}")]
    Parse(#[from] serde_json::Error),

    /// The endpoint answered with a success status but flagged the lookup as
    /// failed.
    #[error("search rejected: {0}")]
    Rejected(String),
}

impl SearchError {
    /// Wrap a rejection message from the endpoint, substituting the fallback
    /// text when the body carried none.
    pub fn rejected(message: Option<String>) -> Self {
        SearchError::Rejected(message.unwrap_or_else(|| REJECTED_FALLBACK.to_string()))
    }

    /// Message shown to the user for this error.
    ///
    /// Rejection messages from the endpoint are shown verbatim; everything
    /// transport-level collapses into one generic connectivity message.
    pub fn user_message(&self) -> &str {
        match self {
            SearchError::EmptyCity => "Please enter a city name",
            SearchError::Status(_) | SearchError::Network(_) | SearchError::Parse(_) => {
                CONNECTIVITY_MESSAGE
            }
            SearchError::Rejected(message) => message,
        }
    }

    /// True for failures worth logging for diagnostics (transport class).
    pub fn is_connectivity(&self) -> bool {
        matches!(
            self,
            SearchError::Status(_) | SearchError::Network(_) | SearchError::Parse(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_city_message() {
        assert_eq!(SearchError::EmptyCity.user_message(), "Please enter a city name");
    }

    #[test]
    fn rejection_message_is_verbatim() {
        let err = SearchError::rejected(Some("City not found".to_string()));
        assert_eq!(err.user_message(), "City not found");
    }

    #[test]
    fn rejection_without_message_uses_fallback() {
        let err = SearchError::rejected(None);
        assert_eq!(err.user_message(), "Unable to fetch weather data");
    }

    #[test]
    fn status_uses_connectivity_message() {
        let err = SearchError::Status(StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.user_message(), CONNECTIVITY_MESSAGE);
        assert!(err.is_connectivity());
    }

    #[test]
    fn validation_and_rejection_are_not_connectivity() {
        assert!(!SearchError::EmptyCity.is_connectivity());
        assert!(!SearchError::rejected(None).is_connectivity());
    }
}
