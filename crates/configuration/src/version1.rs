//! Reading and writing version 1 of the configuration directory.

use std::path::Path;

use tokio::fs;

use crate::configuration::Configuration;
use crate::error::{ParseConfigurationError, WriteConfigurationError};

pub const CURRENT_VERSION: u32 = 1;
pub const CONFIGURATION_FILENAME: &str = "configuration.json";
pub const CONFIGURATION_JSONSCHEMA_FILENAME: &str = "schema.json";

/// Parse the configuration file found in `configuration_dir`.
pub async fn parse_configuration(
    configuration_dir: impl AsRef<Path>,
) -> Result<Configuration, ParseConfigurationError> {
    let configuration_file = configuration_dir.as_ref().join(CONFIGURATION_FILENAME);

    let configuration_file_contents =
        fs::read_to_string(&configuration_file)
            .await
            .map_err(|err| {
                ParseConfigurationError::IoErrorButStringified(format!(
                    "{}: {}",
                    &configuration_file.display(),
                    err
                ))
            })?;

    let configuration: Configuration = serde_json::from_str(&configuration_file_contents)
        .map_err(|error| ParseConfigurationError::ParseError {
            file_path: configuration_file.clone(),
            line: error.line(),
            column: error.column(),
            message: error.to_string(),
        })?;

    if configuration.version != CURRENT_VERSION {
        return Err(ParseConfigurationError::UnsupportedVersion {
            found: configuration.version,
            expected: CURRENT_VERSION,
        });
    }
    if configuration.max_predicate_depth == 0 {
        return Err(ParseConfigurationError::ZeroPredicateDepth);
    }

    tracing::debug!(
        file = %configuration_file.display(),
        max_predicate_depth = configuration.max_predicate_depth,
        escape_like_wildcards = configuration.escape_like_wildcards,
        "parsed configuration"
    );
    Ok(configuration)
}

/// Write the configuration and its JSON schema into a directory on disk.
pub async fn write_configuration(
    configuration: &Configuration,
    out_dir: impl AsRef<Path>,
) -> Result<(), WriteConfigurationError> {
    let configuration_file = out_dir.as_ref().to_owned().join(CONFIGURATION_FILENAME);
    let schema_file = out_dir
        .as_ref()
        .to_owned()
        .join(CONFIGURATION_JSONSCHEMA_FILENAME);
    fs::create_dir_all(out_dir.as_ref()).await?;

    // create the configuration file
    fs::write(
        configuration_file,
        serde_json::to_string_pretty(configuration)
            .map_err(|e| WriteConfigurationError::IoError(e.into()))?
            + "\n",
    )
    .await?;

    // create the jsonschema file
    let schema = schemars::schema_for!(Configuration);
    fs::write(
        schema_file,
        serde_json::to_string_pretty(&schema)
            .map_err(|e| WriteConfigurationError::IoError(e.into()))?
            + "\n",
    )
    .await?;

    Ok(())
}
