//! Errors raised while reading a request payload.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RequestError {
    #[error("no request defined")]
    Absent,
    #[error("malformed request: {0}")]
    Malformed(String),
}
