use std::fs;
use std::path::PathBuf;

use query_engine_sql::sql;
use query_engine_translation::translation;

/// Translate the request stored under `tests/goldenfiles/<testname>` and render the
/// resulting SQL together with its numbered parameters.
pub fn test_translation(testname: &str) -> Result<String, translation::error::Error> {
    let directory = PathBuf::from("tests/goldenfiles").join(testname);

    let request =
        serde_json::from_str(&fs::read_to_string(directory.join("request.json")).unwrap()).unwrap();

    let plan = translation::query::translate_json(&translation::helpers::Env::default(), request)?;
    let query = plan.query_sql();
    let params: Vec<(usize, &sql::string::Param)> = query
        .params
        .iter()
        .enumerate()
        .map(|(i, p)| (i + 1, p))
        .collect();

    Ok(format!("{}\n\n{:?}", query.sql, params))
}
