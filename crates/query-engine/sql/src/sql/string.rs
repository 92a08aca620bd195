//! Type definitions of a low-level SQL string representation.

use serde::Serialize;

/// A SQL query string together with its positional parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SQL {
    pub sql: String,
    pub params: Vec<Param>,
    /// for internal use and tests only
    #[serde(skip)]
    pub param_index: u64,
}

impl Default for SQL {
    fn default() -> Self {
        Self::new()
    }
}

/// A parameter for a parameterized query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Param {
    /// A literal string
    String(String),
    /// A JSON document passed through as-is.
    Json(serde_json::Value),
}

impl SQL {
    pub fn new() -> SQL {
        SQL {
            sql: String::new(),
            params: vec![],
            param_index: 0,
        }
    }

    pub fn append_syntax(&mut self, sql: &str) {
        self.sql.push_str(sql);
    }

    /// Append a quoted identifier. Each part of a dotted name is quoted on its own
    /// and `*` is left bare.
    pub fn append_identifier(&mut self, name: &str) {
        for (index, part) in name.split('.').enumerate() {
            if index > 0 {
                self.sql.push('.');
            }
            if part == "*" {
                self.sql.push('*');
            } else {
                self.sql.push('"');
                self.sql.push_str(&part.replace('"', "\"\""));
                self.sql.push('"');
            }
        }
    }

    /// Append a quoted alias. Unlike identifiers, dots are kept as part of the name.
    pub fn append_alias(&mut self, name: &str) {
        self.sql.push('"');
        self.sql.push_str(&name.replace('"', "\"\""));
        self.sql.push('"');
    }

    pub fn append_param(&mut self, param: Param) {
        self.param_index += 1;
        self.sql.push_str(format!("${}", self.param_index).as_str());
        self.params.push(param);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn identifier(name: &str) -> String {
        let mut sql = SQL::new();
        sql.append_identifier(name);
        sql.sql
    }

    #[test]
    fn quotes_plain_identifiers() {
        assert_eq!(identifier("age"), "\"age\"");
    }

    #[test]
    fn quotes_each_part_of_a_qualified_name() {
        assert_eq!(identifier("public.users"), "\"public\".\"users\"");
        assert_eq!(identifier("users.*"), "\"users\".*");
    }

    #[test]
    fn leaves_star_bare() {
        assert_eq!(identifier("*"), "*");
    }

    #[test]
    fn doubles_embedded_quotes() {
        assert_eq!(identifier("we\"ird"), "\"we\"\"ird\"");
    }

    #[test]
    fn aliases_keep_their_dots() {
        let mut sql = SQL::new();
        sql.append_alias("price.total");
        assert_eq!(sql.sql, "\"price.total\"");
    }

    #[test]
    fn numbers_params_in_order() {
        let mut sql = SQL::new();
        sql.append_param(Param::String("a".to_string()));
        sql.append_syntax(", ");
        sql.append_param(Param::String("b".to_string()));
        assert_eq!(sql.sql, "$1, $2");
        assert_eq!(sql.param_index, 2);
    }
}
