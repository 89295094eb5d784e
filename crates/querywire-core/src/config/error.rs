//! # Querywire Configuration Errors
//!
//! Errors raised while locating, reading or parsing a kernel configuration file.
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("I/O error reading configuration '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Unsupported configuration format: {0}")]
    UnsupportedFormat(PathBuf),

    #[error("Deserialization from '{format}' failed: {source}")]
    Deserialization {
        format: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync + 'static>,
    },

    #[error("Serialization to '{format}' failed: {source}")]
    Serialization {
        format: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync + 'static>,
    },
}

impl ConfigError {
    pub fn deserialization(format: impl Into<String>, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        ConfigError::Deserialization {
            format: format.into(),
            source: Box::new(source),
        }
    }

    pub fn serialization(format: impl Into<String>, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        ConfigError::Serialization {
            format: format.into(),
            source: Box::new(source),
        }
    }
}
