//! The declarative query request accepted by the translator.

pub mod error;
pub mod operators;
pub mod predicate;

// re-export without modules
pub use error::RequestError;
pub use operators::*;
pub use predicate::*;

use schemars::JsonSchema;
use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};

/// A query described as data: which table, which columns, how to filter,
/// group, order and page the result.
#[derive(Clone, PartialEq, Debug, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct QueryRequest {
    /// The table to query. Required, but kept optional here so that the
    /// translator can report a missing table itself.
    #[serde(default)]
    pub table: Option<String>,
    #[serde(default)]
    pub select: Option<Vec<Projection>>,
    #[serde(default, rename = "where")]
    pub where_: Option<PredicateGroup>,
    #[serde(default)]
    pub having: Option<Vec<HavingClause>>,
    #[serde(default)]
    pub order_by: Option<Vec<OrderSpec>>,
    /// Zero or negative means no limit.
    #[serde(default, deserialize_with = "deserialize_page_bound")]
    #[schemars(with = "Option<i64>")]
    pub limit: Option<i64>,
    /// Zero or negative means no offset.
    #[serde(default, deserialize_with = "deserialize_page_bound")]
    #[schemars(with = "Option<i64>")]
    pub offset: Option<i64>,
}

/// A single output column, optionally aggregated and aliased.
#[derive(Clone, PartialEq, Eq, Debug, Default, Serialize, Deserialize, JsonSchema)]
pub struct Projection {
    #[serde(default)]
    pub field: Option<String>,
    #[serde(default, rename = "as")]
    pub alias: Option<String>,
    #[serde(default)]
    pub aggregate: Option<AggregateFunction>,
}

/// A filter applied on the grouped result.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize, JsonSchema)]
pub struct HavingClause {
    #[serde(alias = "column")]
    pub colonne: String,
    #[serde(default)]
    pub operation: Option<OperatorToken>,
    #[serde(default)]
    pub value: serde_json::Value,
}

/// A single ORDER BY entry.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize, JsonSchema)]
pub struct OrderSpec {
    pub column: String,
    #[serde(default)]
    pub sort: Option<OrderDirection>,
}

/// Parse a raw JSON payload into a `QueryRequest`.
pub fn parse_request(value: serde_json::Value) -> Result<QueryRequest, RequestError> {
    match value {
        serde_json::Value::Null => Err(RequestError::Absent),
        serde_json::Value::Object(_) => {
            serde_json::from_value(value).map_err(|err| RequestError::Malformed(err.to_string()))
        }
        other => Err(RequestError::Malformed(format!(
            "expected a JSON object, found {}",
            json_kind(&other)
        ))),
    }
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}

/// Accept any JSON integer. Values above `i64::MAX` saturate.
fn deserialize_page_bound<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<serde_json::Number>::deserialize(deserializer)?
        .map(|number| {
            number
                .as_i64()
                .or_else(|| number.as_u64().map(|_| i64::MAX))
                .ok_or_else(|| de::Error::custom(format!("expected an integer, found {number}")))
        })
        .transpose()
}
