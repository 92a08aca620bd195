use query_engine_sql::sql::ast::{BinaryOperator, Function, OrderByDirection, Value};
use query_engine_sql::sql::builder::{PredicateBuilder, QueryBuilder};
use query_engine_sql::sql::execution_plan::{select_to_sql, simple_exec_plan};
use query_engine_sql::sql::string::Param;

fn render(builder: QueryBuilder) -> (String, Vec<Param>) {
    let sql = select_to_sql(&builder.build());
    (sql.sql, sql.params)
}

#[test]
fn it_converts_simple_select() {
    let (sql, params) = render(QueryBuilder::new("bamba"));
    assert_eq!(sql, "SELECT * FROM \"bamba\"");
    assert!(params.is_empty());
}

#[test]
fn it_converts_select_all_explicitly() {
    let (sql, _) = render(QueryBuilder::new("bamba").select_all());
    assert_eq!(sql, "SELECT * FROM \"bamba\"");
}

#[test]
fn it_converts_columns_and_aliases() {
    let (sql, _) = render(
        QueryBuilder::new("public.users")
            .select("id")
            .select_as("name", "user_name"),
    );
    assert_eq!(
        sql,
        "SELECT \"id\", \"name\" AS \"user_name\" FROM \"public\".\"users\""
    );
}

#[test]
fn it_converts_aggregates_with_grouping() {
    let (sql, _) = render(
        QueryBuilder::new("orders")
            .select("customer")
            .group_by("customer")
            .sum("price", Some("price_sum".to_string()))
            .count("*", None)
            .group_by("customer"),
    );
    assert_eq!(
        sql,
        "SELECT \"customer\", SUM(\"price\") AS \"price_sum\", COUNT(*) FROM \"orders\" GROUP BY \"customer\""
    );
}

#[test]
fn it_converts_every_aggregate_function() {
    let (sql, _) = render(
        QueryBuilder::new("t")
            .min("a", None)
            .max("a", None)
            .avg("a", None)
            .aggregate(Function::Count, "a", None),
    );
    assert_eq!(sql, "SELECT MIN(\"a\"), MAX(\"a\"), AVG(\"a\"), COUNT(\"a\") FROM \"t\"");
}

#[test]
fn it_joins_where_clauses_with_and() {
    let (sql, params) = render(
        QueryBuilder::new("users")
            .where_("a", BinaryOperator::Equals, Value::Int8(1))
            .where_("b", BinaryOperator::Equals, Value::Int8(2)),
    );
    assert_eq!(sql, "SELECT * FROM \"users\" WHERE \"a\" = 1 AND \"b\" = 2");
    assert!(params.is_empty());
}

#[test]
fn first_clause_ignores_its_link() {
    let (sql, _) = render(
        QueryBuilder::new("users")
            .or_where("a", BinaryOperator::Equals, Value::Int8(1))
            .or_where("b", BinaryOperator::LessThan, Value::Int8(2)),
    );
    assert_eq!(sql, "SELECT * FROM \"users\" WHERE \"a\" = 1 OR \"b\" < 2");
}

#[test]
fn nested_scopes_are_parenthesized() {
    let (sql, params) = render(
        QueryBuilder::new("users")
            .where_("name", BinaryOperator::Like, Value::String("jo%".to_string()))
            .or_where_nested(|scope| {
                Ok::<_, ()>(
                    scope
                        .where_("age", BinaryOperator::GreaterThan, Value::Int8(18))
                        .where_("active", BinaryOperator::Equals, Value::Bool(true)),
                )
            })
            .unwrap(),
    );
    assert_eq!(
        sql,
        "SELECT * FROM \"users\" WHERE \"name\" LIKE $1 OR (\"age\" > 18 AND \"active\" = true)"
    );
    assert_eq!(params, vec![Param::String("jo%".to_string())]);
}

#[test]
fn empty_nested_scope_adds_nothing() {
    let (sql, _) = render(
        QueryBuilder::new("users")
            .where_nested(Ok::<_, ()>)
            .unwrap()
            .where_("id", BinaryOperator::NotEquals, Value::Null),
    );
    assert_eq!(sql, "SELECT * FROM \"users\" WHERE \"id\" <> NULL");
}

#[test]
fn nested_callback_errors_propagate() {
    let result = QueryBuilder::new("users").where_nested(|_scope| Err::<PredicateBuilder, _>("boom"));
    assert_eq!(result.unwrap_err(), "boom");
}

#[test]
fn or_operand_of_and_is_parenthesized() {
    let (sql, _) = render(
        QueryBuilder::new("users")
            .where_("a", BinaryOperator::Equals, Value::Int8(1))
            .or_where("b", BinaryOperator::Equals, Value::Int8(2))
            .where_("c", BinaryOperator::Equals, Value::Int8(3)),
    );
    assert_eq!(
        sql,
        "SELECT * FROM \"users\" WHERE (\"a\" = 1 OR \"b\" = 2) AND \"c\" = 3"
    );
}

#[test]
fn having_order_limit_offset_render_in_order() {
    let (sql, params) = render(
        QueryBuilder::new("orders")
            .select("customer")
            .count("id", Some("orders".to_string()))
            .group_by("customer")
            .having("orders", BinaryOperator::GreaterThan, Value::Int8(5))
            .having("customer", BinaryOperator::Like, Value::String("%x%".to_string()))
            .order_by("customer", OrderByDirection::Asc)
            .order_by("orders", OrderByDirection::Desc)
            .limit(10)
            .offset(20),
    );
    assert_eq!(
        sql,
        "SELECT \"customer\", COUNT(\"id\") AS \"orders\" FROM \"orders\" GROUP BY \"customer\" HAVING \"orders\" > 5 AND \"customer\" LIKE $1 ORDER BY \"customer\" ASC, \"orders\" DESC LIMIT 10 OFFSET 20"
    );
    assert_eq!(params, vec![Param::String("%x%".to_string())]);
}

#[test]
fn json_values_become_parameters() {
    let (sql, params) = render(QueryBuilder::new("docs").where_(
        "tags",
        BinaryOperator::Equals,
        Value::JsonValue(serde_json::json!(["a", "b"])),
    ));
    assert_eq!(sql, "SELECT * FROM \"docs\" WHERE \"tags\" = $1");
    assert_eq!(params, vec![Param::Json(serde_json::json!(["a", "b"]))]);
}

#[test]
fn floats_render_inline() {
    let (sql, _) = render(QueryBuilder::new("items").where_(
        "price",
        BinaryOperator::LessThan,
        Value::Float8(9.5),
    ));
    assert_eq!(sql, "SELECT * FROM \"items\" WHERE \"price\" < 9.5");
}

#[test]
fn unsigned_integers_render_inline() {
    let (sql, params) = render(QueryBuilder::new("items").where_(
        "id",
        BinaryOperator::Equals,
        Value::UInt8(u64::MAX),
    ));
    assert_eq!(sql, "SELECT * FROM \"items\" WHERE \"id\" = 18446744073709551615");
    assert!(params.is_empty());
}

#[test]
fn explain_prefixes_the_query() {
    let plan = simple_exec_plan("users".to_string(), QueryBuilder::new("users").limit(1).build());
    assert_eq!(plan.explain_query_sql().sql, "EXPLAIN SELECT * FROM \"users\" LIMIT 1");
    assert_eq!(plan.query_sql().sql, "SELECT * FROM \"users\" LIMIT 1");
}
