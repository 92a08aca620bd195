//! Translate an incoming `QueryRequest`.

pub mod fields;
pub mod filtering;
pub mod operators;
pub mod sorting;
pub mod validation;
pub mod values;

use query_engine_request::request::{self, QueryRequest};
use query_engine_sql::sql;

use crate::translation::error::Error;
use crate::translation::helpers::Env;

/// Translate the incoming QueryRequest to an ExecutionPlan (SQL) to be run against the database.
pub fn translate(
    env: &Env,
    query_request: &QueryRequest,
) -> Result<sql::execution_plan::ExecutionPlan, Error> {
    let table = validation::validate_request(query_request)?;

    let builder = sql::builder::QueryBuilder::new(table);

    // projection, then filtering
    let builder = fields::translate_projections(builder, query_request.select.as_deref());
    let builder = filtering::translate_where(env, builder, query_request.where_.as_ref())?;

    // having, ordering and paging, in that order
    let builder = filtering::translate_having(env, builder, query_request.having.as_deref());
    let builder = sorting::translate_order_by(builder, query_request.order_by.as_deref());
    let builder = sorting::translate_limit_offset(builder, query_request.limit, query_request.offset);

    let select = builder.build();

    // log and return
    tracing::info!("SQL AST: {:?}", select);
    Ok(sql::execution_plan::simple_exec_plan(
        table.to_string(),
        select,
    ))
}

/// Translate a raw JSON payload. A `null` or malformed payload is an invalid request.
pub fn translate_json(
    env: &Env,
    payload: serde_json::Value,
) -> Result<sql::execution_plan::ExecutionPlan, Error> {
    let query_request = request::parse_request(payload)?;
    translate(env, &query_request)
}
