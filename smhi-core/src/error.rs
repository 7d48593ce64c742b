use reqwest::StatusCode;
use thiserror::Error;

/// Everything that can go wrong while fetching and mapping a point forecast.
///
/// All variants are terminal for the current call; nothing is retried.
#[derive(Debug, Error)]
pub enum ForecastError {
    #[error("Network error while talking to SMHI: {0}")]
    Network(#[from] reqwest::Error),

    #[error("SMHI request failed with status {status}: {body}")]
    Http { status: StatusCode, body: String },

    #[error("Failed to decode SMHI forecast JSON: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Invalid {field} timestamp '{value}': {source}")]
    Timestamp {
        field: &'static str,
        value: String,
        source: chrono::ParseError,
    },
}
