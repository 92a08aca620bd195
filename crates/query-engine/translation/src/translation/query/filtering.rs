//! Handle filtering/where clauses translation.

use query_engine_request::request::{
    HavingClause, LogicalOperator, PredicateGroup, PredicateLeaf, PredicateNode,
};
use query_engine_sql::sql;
use query_engine_sql::sql::builder::PredicateBuilder;

use super::operators;
use crate::translation::error::Error;
use crate::translation::helpers::Env;

/// Translate the root filter group into the query's WHERE clause.
pub fn translate_where(
    env: &Env,
    builder: sql::builder::QueryBuilder,
    where_: Option<&PredicateGroup>,
) -> Result<sql::builder::QueryBuilder, Error> {
    match where_ {
        None => Ok(builder),
        Some(group) => {
            let scope = translate_group(env, PredicateBuilder::new(), group, 1)?;
            Ok(builder.with_where(scope))
        }
    }
}

/// Translate a filter group into `scope`.
///
/// The group's link decides how each direct child is attached; nested groups
/// are built in their own parenthesized scope. A group without a link
/// contributes nothing.
pub fn translate_group(
    env: &Env,
    scope: PredicateBuilder,
    group: &PredicateGroup,
    depth: usize,
) -> Result<PredicateBuilder, Error> {
    if depth > env.max_predicate_depth {
        return Err(Error::PredicateTooDeep {
            max_depth: env.max_predicate_depth,
        });
    }

    let Some(link) = group.link else {
        tracing::debug!(depth, "skipping predicate group without a link");
        return Ok(scope);
    };

    group.conditions.iter().try_fold(scope, |scope, node| match node {
        PredicateNode::Leaf(leaf) => Ok(translate_leaf(env, scope, link, leaf)),
        PredicateNode::Group(group) => {
            let build_scope = |inner: PredicateBuilder| translate_group(env, inner, group, depth + 1);
            match link {
                LogicalOperator::And => scope.where_nested(build_scope),
                LogicalOperator::Or => scope.or_where_nested(build_scope),
            }
        }
    })
}

fn translate_leaf(
    env: &Env,
    scope: PredicateBuilder,
    link: LogicalOperator,
    leaf: &PredicateLeaf,
) -> PredicateBuilder {
    let operators::Clause {
        field,
        operator,
        value,
    } = operators::format_clause(env, &leaf.field, leaf.operation.as_ref(), &leaf.value);
    match link {
        LogicalOperator::And => scope.where_(field, operator, value),
        LogicalOperator::Or => scope.or_where(field, operator, value),
    }
}

/// Translate having clauses. Clauses without an operation are skipped.
pub fn translate_having(
    env: &Env,
    builder: sql::builder::QueryBuilder,
    having: Option<&[HavingClause]>,
) -> sql::builder::QueryBuilder {
    having
        .unwrap_or_default()
        .iter()
        .fold(builder, |builder, clause| match &clause.operation {
            None => {
                tracing::debug!(column = %clause.colonne, "skipping having clause without an operation");
                builder
            }
            Some(operation) => {
                let operators::Clause {
                    field,
                    operator,
                    value,
                } = operators::format_clause(env, &clause.colonne, Some(operation), &clause.value);
                builder.having(field, operator, value)
            }
        })
}
