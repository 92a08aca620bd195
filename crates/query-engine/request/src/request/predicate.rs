//! The recursive filter tree.

use schemars::JsonSchema;
use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};

use super::operators::{LogicalOperator, OperatorToken};

/// A group of conditions combined with a single boolean link.
///
/// A group without a link contributes nothing to the query.
#[derive(Clone, PartialEq, Debug, Default, Serialize, Deserialize, JsonSchema)]
pub struct PredicateGroup {
    #[serde(default)]
    pub link: Option<LogicalOperator>,
    #[serde(default)]
    pub conditions: Vec<PredicateNode>,
}

/// A single `field operation value` comparison.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize, JsonSchema)]
pub struct PredicateLeaf {
    pub field: String,
    #[serde(default)]
    pub operation: Option<OperatorToken>,
    #[serde(default)]
    pub value: serde_json::Value,
}

/// A child of a predicate group.
///
/// Decided when the request is parsed: an object with a `field` key is a
/// leaf, an object with `link` or `conditions` is a nested group. Anything
/// else is rejected.
#[derive(Clone, PartialEq, Debug, Serialize, JsonSchema)]
#[serde(untagged)]
pub enum PredicateNode {
    Leaf(PredicateLeaf),
    Group(PredicateGroup),
}

impl<'de> Deserialize<'de> for PredicateNode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let object = serde_json::Map::<String, serde_json::Value>::deserialize(deserializer)?;
        if object.contains_key("field") {
            serde_json::from_value(serde_json::Value::Object(object))
                .map(PredicateNode::Leaf)
                .map_err(de::Error::custom)
        } else if object.contains_key("link") || object.contains_key("conditions") {
            serde_json::from_value(serde_json::Value::Object(object))
                .map(PredicateNode::Group)
                .map_err(de::Error::custom)
        } else {
            let keys: Vec<&str> = object.keys().map(String::as_str).collect();
            Err(de::Error::custom(format!(
                "filter node is neither a condition (no `field`) nor a group (no `link` or `conditions`); found keys {keys:?}"
            )))
        }
    }
}
