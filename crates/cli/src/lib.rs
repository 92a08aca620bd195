//! The command line front end: translate request files, print schemas and
//! initialize a configuration directory.

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Subcommand;
use serde::Serialize;
use tokio::io::AsyncReadExt;

use jsonql_configuration::Configuration;
use query_engine_request::request::QueryRequest;
use query_engine_sql::sql;
use query_engine_translation::translation;

/// The name of the environment variable holding the configuration directory.
pub const CONFIGURATION_DIR_ENV_VAR: &str = "JSONQL_CONFIGURATION_DIR";

/// The commands understood by the CLI.
#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Translate a JSON query request into SQL.
    Translate {
        /// The request file, or `-` to read from standard input.
        #[arg(long, value_name = "FILE")]
        request: PathBuf,
        /// The directory holding `configuration.json`. Defaults are used when absent.
        #[arg(long, value_name = "DIR", env = CONFIGURATION_DIR_ENV_VAR)]
        configuration: Option<PathBuf>,
        /// Print the EXPLAIN variant of the query.
        #[arg(long)]
        explain: bool,
        /// Format the generated SQL for reading.
        #[arg(long)]
        pretty: bool,
    },
    /// Print the JSON Schema of a query request.
    PrintSchema {
        /// Print the schema of the configuration file instead.
        #[arg(long)]
        configuration: bool,
    },
    /// Write a default configuration and its schema into a directory.
    Initialize {
        #[arg(long, value_name = "DIR")]
        out_dir: PathBuf,
    },
}

/// What `translate` prints: the SQL text and its positional parameters.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TranslatedQuery {
    pub sql: String,
    pub params: Vec<sql::string::Param>,
}

/// Run a command, returning what should be written to standard output.
pub async fn run(command: Command) -> anyhow::Result<String> {
    match command {
        Command::Translate {
            request,
            configuration,
            explain,
            pretty,
        } => {
            let translated =
                translate(&request, configuration.as_deref(), explain, pretty).await?;
            Ok(serde_json::to_string_pretty(&translated)?)
        }
        Command::PrintSchema { configuration } => print_schema(configuration),
        Command::Initialize { out_dir } => {
            initialize(&out_dir).await?;
            Ok(format!(
                "Wrote configuration to {}",
                out_dir.join(jsonql_configuration::CONFIGURATION_FILENAME).display()
            ))
        }
    }
}

/// Read, parse and translate a request file.
pub async fn translate(
    request_path: &Path,
    configuration_dir: Option<&Path>,
    explain: bool,
    pretty: bool,
) -> anyhow::Result<TranslatedQuery> {
    let configuration = match configuration_dir {
        None => Configuration::default(),
        Some(dir) => jsonql_configuration::parse_configuration(dir)
            .await
            .with_context(|| format!("reading configuration from {}", dir.display()))?,
    };
    let env = translation::helpers::Env::new(&configuration);

    let contents = read_request(request_path).await?;
    let payload: serde_json::Value = serde_json::from_str(&contents)
        .with_context(|| format!("parsing {} as JSON", request_path.display()))?;

    let plan = translation::query::translate_json(&env, payload)?;
    tracing::debug!(table = %plan.root_table, "translated request");

    let query = if explain {
        plan.explain_query_sql()
    } else {
        plan.query_sql()
    };
    let sql = if pretty {
        sqlformat::format(
            &query.sql,
            &sqlformat::QueryParams::None,
            sqlformat::FormatOptions::default(),
        )
    } else {
        query.sql
    };

    Ok(TranslatedQuery {
        sql,
        params: query.params,
    })
}

async fn read_request(request_path: &Path) -> anyhow::Result<String> {
    if request_path == Path::new("-") {
        let mut contents = String::new();
        tokio::io::stdin()
            .read_to_string(&mut contents)
            .await
            .context("reading request from standard input")?;
        Ok(contents)
    } else {
        tokio::fs::read_to_string(request_path)
            .await
            .with_context(|| format!("reading request from {}", request_path.display()))
    }
}

/// Render the JSON Schema of the request, or of the configuration file.
pub fn print_schema(configuration: bool) -> anyhow::Result<String> {
    let schema = if configuration {
        schemars::schema_for!(Configuration)
    } else {
        schemars::schema_for!(QueryRequest)
    };
    Ok(serde_json::to_string_pretty(&schema)?)
}

/// Write a default configuration into `out_dir`.
pub async fn initialize(out_dir: &Path) -> anyhow::Result<()> {
    jsonql_configuration::write_configuration(&Configuration::default(), out_dir)
        .await
        .with_context(|| format!("writing configuration to {}", out_dir.display()))
}
