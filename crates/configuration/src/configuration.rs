//! Configuration for the translator.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// The default bound on how deeply predicate groups may nest.
pub const DEFAULT_MAX_PREDICATE_DEPTH: usize = 32;

/// The 'Configuration' type collects the settings that shape how requests are
/// translated. It is read from `configuration.json`; every field has a default.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Configuration {
    /// Which version of the configuration format are we using
    pub version: u32,
    /// How many predicate groups may be nested inside each other before a
    /// request is rejected.
    #[serde(default = "default_max_predicate_depth")]
    pub max_predicate_depth: usize,
    /// Escape `%`, `_` and `\` in values of `startswith`, `endswith` and
    /// `substring` conditions so they match literally.
    #[serde(default)]
    pub escape_like_wildcards: bool,
}

fn default_max_predicate_depth() -> usize {
    DEFAULT_MAX_PREDICATE_DEPTH
}

impl Configuration {
    pub fn empty() -> Self {
        Configuration {
            version: crate::version1::CURRENT_VERSION,
            max_predicate_depth: DEFAULT_MAX_PREDICATE_DEPTH,
            escape_like_wildcards: false,
        }
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Self::empty()
    }
}
