//! Helpers for building sql::ast types in certain shapes and patterns.

use super::ast::*;

// Empty clauses //

/// An empty `WHERE` clause.
pub fn empty_where() -> Expression {
    Expression::Value(Value::Bool(true))
}

/// An empty `GROUP BY` clause.
pub fn empty_group_by() -> GroupBy {
    GroupBy { elements: vec![] }
}

/// An empty `HAVING` clause.
pub fn empty_having() -> Expression {
    Expression::Value(Value::Bool(true))
}

/// An empty `ORDER BY` clause.
pub fn empty_order_by() -> OrderBy {
    OrderBy { elements: vec![] }
}

/// Empty `LIMIT` and `OFFSET` clauses.
pub fn empty_limit() -> Limit {
    Limit {
        limit: None,
        offset: None,
    }
}

/// A `true` expression.
pub fn true_expr() -> Expression {
    Expression::Value(Value::Bool(true))
}

// Aliasing //

/// Create column aliases using this function so we build everything in one place.
pub fn make_column_alias(name: String) -> ColumnAlias {
    ColumnAlias { name }
}

/// Generate a column reference expression.
pub fn make_column(name: String) -> Expression {
    Expression::ColumnReference(ColumnName(name))
}

// SELECTs //

/// Build a simple select * from a table, the rest are empty.
pub fn star_select(from: From) -> Select {
    Select {
        select_list: SelectList::SelectStar,
        from,
        where_: Where(empty_where()),
        group_by: empty_group_by(),
        having: Having(empty_having()),
        order_by: empty_order_by(),
        limit: empty_limit(),
    }
}
