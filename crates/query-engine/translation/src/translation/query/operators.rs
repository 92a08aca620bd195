//! Map request operator tokens onto SQL comparison operators.

use query_engine_request::request::OperatorToken;
use query_engine_sql::sql;

use super::values;
use crate::translation::helpers::Env;

/// A comparison ready to be attached to a query: `field operator value`.
#[derive(Debug, Clone, PartialEq)]
pub struct Clause {
    pub field: String,
    pub operator: sql::ast::BinaryOperator,
    pub value: sql::ast::Value,
}

/// Where a pattern operator puts its `%` wildcards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Pattern {
    Prefix,
    Suffix,
    Contains,
}

/// Turn `(field, operation, value)` into a concrete clause.
///
/// Total: an absent or unrecognized operation compares for equality.
/// `startswith`, `endswith` and `substring` become LIKE with the value wrapped
/// in `%` wildcards.
pub fn format_clause(
    env: &Env,
    field: &str,
    operation: Option<&OperatorToken>,
    value: &serde_json::Value,
) -> Clause {
    let (operator, pattern) = match operation {
        Some(OperatorToken::Like) => (sql::ast::BinaryOperator::Like, None),
        Some(OperatorToken::GreaterThan) => (sql::ast::BinaryOperator::GreaterThan, None),
        Some(OperatorToken::LessThan) => (sql::ast::BinaryOperator::LessThan, None),
        Some(OperatorToken::Not) => (sql::ast::BinaryOperator::NotEquals, None),
        Some(OperatorToken::StartsWith) => (sql::ast::BinaryOperator::Like, Some(Pattern::Prefix)),
        Some(OperatorToken::EndsWith) => (sql::ast::BinaryOperator::Like, Some(Pattern::Suffix)),
        Some(OperatorToken::Substring) => (sql::ast::BinaryOperator::Like, Some(Pattern::Contains)),
        Some(OperatorToken::Equals | OperatorToken::Other(_)) | None => {
            (sql::ast::BinaryOperator::Equals, None)
        }
    };

    let value = match pattern {
        None => values::translate_json_value(value),
        Some(pattern) => {
            let text = values::json_value_to_pattern_text(value);
            let text = if env.escape_like_wildcards {
                escape_like_wildcards(&text)
            } else {
                text
            };
            sql::ast::Value::String(wrap_pattern(pattern, &text))
        }
    };

    Clause {
        field: field.to_string(),
        operator,
        value,
    }
}

fn wrap_pattern(pattern: Pattern, text: &str) -> String {
    match pattern {
        Pattern::Prefix => format!("{text}%"),
        Pattern::Suffix => format!("%{text}"),
        Pattern::Contains => format!("%{text}%"),
    }
}

/// Backslash-escape the characters LIKE treats specially.
pub fn escape_like_wildcards(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}
