//! Describe the execution plan handed back to callers.

use super::ast;
use super::string;

/// A translated query that has not been run yet.
#[derive(Debug, Clone, PartialEq)]
pub struct ExecutionPlan {
    /// The table the query reads from.
    pub root_table: String,
    /// The query.
    pub query: ast::Select,
}

impl ExecutionPlan {
    /// Render the query as a parameterized SQL string.
    pub fn query_sql(&self) -> string::SQL {
        select_to_sql(&self.query)
    }

    /// Render an EXPLAIN of the query.
    pub fn explain_query_sql(&self) -> string::SQL {
        explain_to_sql(&ast::Explain::Select(&self.query))
    }
}

/// Build an execution plan for a single query.
pub fn simple_exec_plan(root_table: String, query: ast::Select) -> ExecutionPlan {
    ExecutionPlan { root_table, query }
}

/// Convert a SELECT AST to a SQL string.
pub fn select_to_sql(select: &ast::Select) -> string::SQL {
    let mut sql = string::SQL::new();
    select.to_sql(&mut sql);
    sql
}

/// Convert an EXPLAIN AST to a SQL string.
pub fn explain_to_sql(explain: &ast::Explain) -> string::SQL {
    let mut sql = string::SQL::new();
    explain.to_sql(&mut sql);
    sql
}
