//! Reject requests that cannot be turned into a query.

use query_engine_request::request::QueryRequest;

use crate::translation::error::Error;

/// Check the request before any query is built and return the table to read from.
pub fn validate_request(query_request: &QueryRequest) -> Result<&str, Error> {
    match query_request.table.as_deref() {
        Some(table) if !table.is_empty() => Ok(table),
        _ => Err(Error::MissingTable),
    }
}
