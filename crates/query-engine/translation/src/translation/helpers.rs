//! Helpers for processing the QueryRequest and building SQL.

use jsonql_configuration::configuration::DEFAULT_MAX_PREDICATE_DEPTH;
use jsonql_configuration::Configuration;

/// Static information that shapes every translation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Env {
    /// How many predicate groups may be nested inside each other.
    pub max_predicate_depth: usize,
    /// Whether LIKE wildcards in pattern values are escaped before wrapping.
    pub escape_like_wildcards: bool,
}

impl Env {
    /// Create a new Env from the translator configuration.
    pub fn new(configuration: &Configuration) -> Env {
        Env {
            max_predicate_depth: configuration.max_predicate_depth,
            escape_like_wildcards: configuration.escape_like_wildcards,
        }
    }
}

impl Default for Env {
    fn default() -> Self {
        Env {
            max_predicate_depth: DEFAULT_MAX_PREDICATE_DEPTH,
            escape_like_wildcards: false,
        }
    }
}
