//! Handle ordering, limit and offset.

use query_engine_request::request::{OrderDirection, OrderSpec};
use query_engine_sql::sql;

/// Append every ORDER BY entry, in request order. An absent sort is ascending.
pub fn translate_order_by(
    builder: sql::builder::QueryBuilder,
    order_by: Option<&[OrderSpec]>,
) -> sql::builder::QueryBuilder {
    order_by
        .unwrap_or_default()
        .iter()
        .fold(builder, |builder, order_spec| {
            let direction = match order_spec.sort {
                None | Some(OrderDirection::Asc) => sql::ast::OrderByDirection::Asc,
                Some(OrderDirection::Desc) => sql::ast::OrderByDirection::Desc,
            };
            builder.order_by(order_spec.column.clone(), direction)
        })
}

/// Apply limit and offset. Zero and negative values count as absent.
pub fn translate_limit_offset(
    builder: sql::builder::QueryBuilder,
    limit: Option<i64>,
    offset: Option<i64>,
) -> sql::builder::QueryBuilder {
    let builder = match positive(limit) {
        Some(limit) => builder.limit(limit),
        None => builder,
    };
    match positive(offset) {
        Some(offset) => builder.offset(offset),
        None => builder,
    }
}

fn positive(value: Option<i64>) -> Option<u64> {
    value
        .and_then(|value| u64::try_from(value).ok())
        .filter(|value| *value > 0)
}
