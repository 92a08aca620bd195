//! Errors for query translation.

use query_engine_request::request::RequestError;
use thiserror::Error;

/// A type for translation errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
    #[error("No table found in the request.")]
    MissingTable,
    #[error("Predicate groups are nested deeper than the allowed {max_depth} levels.")]
    PredicateTooDeep { max_depth: usize },
}

impl From<RequestError> for Error {
    fn from(error: RequestError) -> Self {
        match error {
            RequestError::Absent => Error::InvalidRequest("no request defined".to_string()),
            RequestError::Malformed(message) => Error::InvalidRequest(message),
        }
    }
}
