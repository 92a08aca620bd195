//! Tokens naming aggregates, boolean links, sort directions and comparisons.

use std::fmt;

use enum_iterator::Sequence;
use schemars::gen::SchemaGenerator;
use schemars::schema::{InstanceType, Metadata, Schema, SchemaObject};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// The aggregate functions a projection may apply.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Sequence, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum AggregateFunction {
    Count,
    Min,
    Max,
    Sum,
    Avg,
}

impl AggregateFunction {
    /// The request token, also used as the suffix of synthesized aliases.
    pub fn as_str(&self) -> &'static str {
        match self {
            AggregateFunction::Count => "count",
            AggregateFunction::Min => "min",
            AggregateFunction::Max => "max",
            AggregateFunction::Sum => "sum",
            AggregateFunction::Avg => "avg",
        }
    }
}

impl fmt::Display for AggregateFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How the direct children of a predicate group are combined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Sequence, Serialize, Deserialize, JsonSchema)]
pub enum LogicalOperator {
    #[serde(rename = "and", alias = "AND")]
    And,
    #[serde(rename = "or", alias = "OR")]
    Or,
}

/// A direction for a single ORDER BY entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Sequence, Serialize, Deserialize, JsonSchema)]
pub enum OrderDirection {
    #[serde(rename = "ASC", alias = "asc")]
    Asc,
    #[serde(rename = "DESC", alias = "desc")]
    Desc,
}

/// A comparison token as written in a request.
///
/// Unknown tokens are kept verbatim rather than rejected; the translator
/// treats them as equality.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum OperatorToken {
    Like,
    GreaterThan,
    LessThan,
    Equals,
    Not,
    StartsWith,
    EndsWith,
    Substring,
    Other(String),
}

impl OperatorToken {
    pub fn as_str(&self) -> &str {
        match self {
            OperatorToken::Like => "LIKE",
            OperatorToken::GreaterThan => ">",
            OperatorToken::LessThan => "<",
            OperatorToken::Equals => "=",
            OperatorToken::Not => "not",
            OperatorToken::StartsWith => "startswith",
            OperatorToken::EndsWith => "endswith",
            OperatorToken::Substring => "substring",
            OperatorToken::Other(token) => token,
        }
    }
}

impl From<String> for OperatorToken {
    fn from(token: String) -> Self {
        match token.as_str() {
            "LIKE" => OperatorToken::Like,
            ">" => OperatorToken::GreaterThan,
            "<" => OperatorToken::LessThan,
            "=" => OperatorToken::Equals,
            "not" => OperatorToken::Not,
            "startswith" => OperatorToken::StartsWith,
            "endswith" => OperatorToken::EndsWith,
            "substring" => OperatorToken::Substring,
            _ => OperatorToken::Other(token),
        }
    }
}

impl From<&str> for OperatorToken {
    fn from(token: &str) -> Self {
        OperatorToken::from(token.to_string())
    }
}

impl From<OperatorToken> for String {
    fn from(token: OperatorToken) -> Self {
        match token {
            OperatorToken::Other(token) => token,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for OperatorToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl JsonSchema for OperatorToken {
    fn schema_name() -> String {
        "OperatorToken".to_string()
    }

    fn json_schema(_gen: &mut SchemaGenerator) -> Schema {
        SchemaObject {
            instance_type: Some(InstanceType::String.into()),
            metadata: Some(Box::new(Metadata {
                description: Some(
                    "One of LIKE, >, <, =, not, startswith, endswith, substring. \
                     Any other token compares for equality."
                        .to_string(),
                ),
                ..Default::default()
            })),
            ..Default::default()
        }
        .into()
    }
}
