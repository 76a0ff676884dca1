use crate::history::HistoryError;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PredictionError {
    #[error("Invalid request: {message}")]
    InvalidRequest { message: String },

    #[error("Data unavailable: {0}")]
    DataUnavailable(#[from] HistoryError),
}

impl PredictionError {
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::InvalidRequest {
            message: message.into(),
        }
    }
}
