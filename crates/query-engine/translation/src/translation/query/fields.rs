//! Handle the translation of the projection list.
//!
//! If any projection aggregates, the whole query is a grouped aggregate query:
//! every plain column becomes a grouping key and unaliased aggregates get a
//! `<field>_<aggregate>` alias.

use query_engine_request::request::{AggregateFunction, Projection};
use query_engine_sql::sql;

/// The decisions taken for a whole projection list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectionPlan {
    /// Whether at least one projection aggregates.
    pub grouped: bool,
    /// One entry per projection that names a field, in request order.
    pub columns: Vec<PlannedColumn>,
}

/// How a single projection ends up in the query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedColumn {
    /// The source column.
    pub field: String,
    /// The output alias, requested or synthesized.
    pub alias: Option<String>,
    pub aggregate: Option<AggregateFunction>,
    /// The GROUP BY key: the source column, never the alias.
    pub group_key: Option<String>,
}

/// Decide, for every projection, what to select and what to group by.
pub fn plan_projections(projections: &[Projection]) -> ProjectionPlan {
    let grouped = projections
        .iter()
        .any(|projection| projection.aggregate.is_some());

    let columns = projections
        .iter()
        .filter_map(|projection| {
            let Some(field) = &projection.field else {
                tracing::debug!(?projection, "skipping projection without a field");
                return None;
            };

            let alias = match (&projection.alias, projection.aggregate) {
                (Some(alias), _) => Some(alias.clone()),
                (None, Some(aggregate)) if grouped => Some(format!("{field}_{aggregate}")),
                (None, _) => None,
            };

            let group_key = match projection.aggregate {
                None if grouped => Some(field.clone()),
                _ => None,
            };

            Some(PlannedColumn {
                field: field.clone(),
                alias,
                aggregate: projection.aggregate,
                group_key,
            })
        })
        .collect();

    ProjectionPlan { grouped, columns }
}

/// Apply the projection list to the query. An absent or empty list selects every column.
pub fn translate_projections(
    builder: sql::builder::QueryBuilder,
    projections: Option<&[Projection]>,
) -> sql::builder::QueryBuilder {
    let projections = match projections {
        None | Some([]) => return builder.select_all(),
        Some(projections) => projections,
    };

    let plan = plan_projections(projections);

    plan.columns
        .into_iter()
        .fold(builder, |builder, column| match column.aggregate {
            Some(aggregate) => {
                builder.aggregate(translate_aggregate(aggregate), column.field, column.alias)
            }
            None => {
                let builder = match column.alias {
                    Some(alias) => builder.select_as(column.field, alias),
                    None => builder.select(column.field),
                };
                match column.group_key {
                    Some(key) => builder.group_by(key),
                    None => builder,
                }
            }
        })
}

/// Translate an aggregate function token to its SQL function.
pub fn translate_aggregate(aggregate: AggregateFunction) -> sql::ast::Function {
    match aggregate {
        AggregateFunction::Count => sql::ast::Function::Count,
        AggregateFunction::Min => sql::ast::Function::Min,
        AggregateFunction::Max => sql::ast::Function::Max,
        AggregateFunction::Sum => sql::ast::Function::Sum,
        AggregateFunction::Avg => sql::ast::Function::Avg,
    }
}
