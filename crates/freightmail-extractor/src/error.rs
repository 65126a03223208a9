//! Error types for the Extractor
//!
//! Extraction itself is total; only configuration can fail.

use thiserror::Error;

/// Errors that can occur while configuring the extractor
#[derive(Error, Debug)]
pub enum ExtractorError {
    /// Configuration is structurally valid TOML but semantically wrong
    #[error("Configuration error: {0}")]
    Config(String),

    /// Configuration could not be parsed
    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// Configuration could not be serialized
    #[error("TOML serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}
