//! A fluent builder over the SQL AST.
//!
//! Every method consumes the builder and returns it, so a query is built by
//! rebinding one value step by step:
//!
//! ```
//! use query_engine_sql::sql::ast::{BinaryOperator, Value};
//! use query_engine_sql::sql::builder::QueryBuilder;
//!
//! let select = QueryBuilder::new("users")
//!     .select("name")
//!     .where_("age", BinaryOperator::GreaterThan, Value::Int8(18))
//!     .limit(10)
//!     .build();
//! ```

use indexmap::IndexSet;

use super::ast::*;
use super::helpers;

/// Accumulates a boolean predicate, clause by clause.
///
/// Used for the top-level WHERE scope and for every nested sub-scope handed
/// to a `where_nested`/`or_where_nested` callback.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PredicateBuilder {
    expression: Option<Expression>,
}

impl PredicateBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// The accumulated predicate, or `None` for an empty scope.
    pub fn into_expression(self) -> Option<Expression> {
        self.expression
    }

    /// `AND column operator value`.
    pub fn where_(self, column: impl Into<String>, operator: BinaryOperator, value: Value) -> Self {
        self.and(comparison(column.into(), operator, value))
    }

    /// `OR column operator value`.
    pub fn or_where(self, column: impl Into<String>, operator: BinaryOperator, value: Value) -> Self {
        self.or(comparison(column.into(), operator, value))
    }

    /// `AND ( ... )`, where the parenthesized part is built by `build_scope`.
    /// A scope left empty by the callback adds nothing.
    pub fn where_nested<F, E>(self, build_scope: F) -> Result<Self, E>
    where
        F: FnOnce(PredicateBuilder) -> Result<PredicateBuilder, E>,
    {
        match build_scope(PredicateBuilder::new())?.into_expression() {
            None => Ok(self),
            Some(inner) => Ok(self.and(Expression::Nested(Box::new(inner)))),
        }
    }

    /// `OR ( ... )`, where the parenthesized part is built by `build_scope`.
    /// A scope left empty by the callback adds nothing.
    pub fn or_where_nested<F, E>(self, build_scope: F) -> Result<Self, E>
    where
        F: FnOnce(PredicateBuilder) -> Result<PredicateBuilder, E>,
    {
        match build_scope(PredicateBuilder::new())?.into_expression() {
            None => Ok(self),
            Some(inner) => Ok(self.or(Expression::Nested(Box::new(inner)))),
        }
    }

    // The first clause of a scope ignores its link.
    fn and(self, right: Expression) -> Self {
        let expression = match self.expression {
            None => right,
            Some(left) => Expression::And {
                left: Box::new(left),
                right: Box::new(right),
            },
        };
        Self {
            expression: Some(expression),
        }
    }

    fn or(self, right: Expression) -> Self {
        let expression = match self.expression {
            None => right,
            Some(left) => Expression::Or {
                left: Box::new(left),
                right: Box::new(right),
            },
        };
        Self {
            expression: Some(expression),
        }
    }
}

fn comparison(column: String, operator: BinaryOperator, value: Value) -> Expression {
    Expression::BinaryOperation {
        left: Box::new(helpers::make_column(column)),
        operator,
        right: Box::new(Expression::Value(value)),
    }
}

/// Builds a single SELECT statement against one table.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryBuilder {
    table: TableName,
    /// SELECT items (empty means SELECT *)
    select_list: Vec<SelectItem>,
    where_: PredicateBuilder,
    /// GROUP BY columns, in insertion order and without repeats
    group_by: IndexSet<String>,
    having: PredicateBuilder,
    order_by: Vec<OrderByElement>,
    limit: Limit,
}

impl QueryBuilder {
    /// Start a new query against `table`.
    pub fn new(table: impl Into<String>) -> Self {
        QueryBuilder {
            table: TableName(table.into()),
            select_list: vec![],
            where_: PredicateBuilder::new(),
            group_by: IndexSet::new(),
            having: PredicateBuilder::new(),
            order_by: vec![],
            limit: helpers::empty_limit(),
        }
    }

    /// Select every column.
    pub fn select_all(self) -> Self {
        self.select("*")
    }

    /// Select a column as-is.
    pub fn select(mut self, column: impl Into<String>) -> Self {
        self.select_list.push(SelectItem {
            expression: helpers::make_column(column.into()),
            alias: None,
        });
        self
    }

    /// Select a column under another name.
    pub fn select_as(mut self, column: impl Into<String>, alias: impl Into<String>) -> Self {
        self.select_list.push(SelectItem {
            expression: helpers::make_column(column.into()),
            alias: Some(helpers::make_column_alias(alias.into())),
        });
        self
    }

    /// Select an aggregate over a column, optionally aliased.
    pub fn aggregate(
        mut self,
        function: Function,
        column: impl Into<String>,
        alias: Option<String>,
    ) -> Self {
        self.select_list.push(SelectItem {
            expression: Expression::FunctionCall {
                function,
                args: vec![helpers::make_column(column.into())],
            },
            alias: alias.map(helpers::make_column_alias),
        });
        self
    }

    pub fn count(self, column: impl Into<String>, alias: Option<String>) -> Self {
        self.aggregate(Function::Count, column, alias)
    }

    pub fn min(self, column: impl Into<String>, alias: Option<String>) -> Self {
        self.aggregate(Function::Min, column, alias)
    }

    pub fn max(self, column: impl Into<String>, alias: Option<String>) -> Self {
        self.aggregate(Function::Max, column, alias)
    }

    pub fn sum(self, column: impl Into<String>, alias: Option<String>) -> Self {
        self.aggregate(Function::Sum, column, alias)
    }

    pub fn avg(self, column: impl Into<String>, alias: Option<String>) -> Self {
        self.aggregate(Function::Avg, column, alias)
    }

    /// Add a grouping key. Adding the same column twice keeps a single entry.
    pub fn group_by(mut self, column: impl Into<String>) -> Self {
        self.group_by.insert(column.into());
        self
    }

    pub fn where_(mut self, column: impl Into<String>, operator: BinaryOperator, value: Value) -> Self {
        self.where_ = self.where_.where_(column, operator, value);
        self
    }

    pub fn or_where(mut self, column: impl Into<String>, operator: BinaryOperator, value: Value) -> Self {
        self.where_ = self.where_.or_where(column, operator, value);
        self
    }

    pub fn where_nested<F, E>(mut self, build_scope: F) -> Result<Self, E>
    where
        F: FnOnce(PredicateBuilder) -> Result<PredicateBuilder, E>,
    {
        self.where_ = self.where_.where_nested(build_scope)?;
        Ok(self)
    }

    pub fn or_where_nested<F, E>(mut self, build_scope: F) -> Result<Self, E>
    where
        F: FnOnce(PredicateBuilder) -> Result<PredicateBuilder, E>,
    {
        self.where_ = self.where_.or_where_nested(build_scope)?;
        Ok(self)
    }

    /// Replace the whole WHERE scope, typically with one built by a filter
    /// interpreter.
    pub fn with_where(mut self, scope: PredicateBuilder) -> Self {
        self.where_ = scope;
        self
    }

    /// Add a HAVING condition. Conditions are combined with AND.
    pub fn having(mut self, column: impl Into<String>, operator: BinaryOperator, value: Value) -> Self {
        self.having = self.having.where_(column, operator, value);
        self
    }

    /// Append an ORDER BY element after any existing ones.
    pub fn order_by(mut self, column: impl Into<String>, direction: OrderByDirection) -> Self {
        self.order_by.push(OrderByElement {
            target: helpers::make_column(column.into()),
            direction,
        });
        self
    }

    pub fn limit(mut self, limit: u64) -> Self {
        self.limit.limit = Some(limit);
        self
    }

    pub fn offset(mut self, offset: u64) -> Self {
        self.limit.offset = Some(offset);
        self
    }

    /// Produce the SELECT AST.
    pub fn build(self) -> Select {
        let mut select = helpers::star_select(From::Table(self.table));
        if !self.select_list.is_empty() {
            select.select_list = SelectList::SelectList(self.select_list);
        }
        if let Some(expression) = self.where_.into_expression() {
            select.where_ = Where(expression);
        }
        select.group_by = GroupBy {
            elements: self.group_by.into_iter().map(ColumnName).collect(),
        };
        if let Some(expression) = self.having.into_expression() {
            select.having = Having(expression);
        }
        select.order_by = OrderBy {
            elements: self.order_by,
        };
        select.limit = self.limit;
        select
    }
}
