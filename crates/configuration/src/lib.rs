pub mod configuration;
pub mod error;
pub mod version1;

pub use configuration::Configuration;
pub use version1::{
    parse_configuration, write_configuration, CONFIGURATION_FILENAME,
    CONFIGURATION_JSONSCHEMA_FILENAME, CURRENT_VERSION,
};
