//! # Querywire Container Errors
//!
//! Defines error types specific to the service container.
//!
//! [`ContainerError`] covers definition lookups and registration, dangling
//! references found while compiling, and failures raised by compiler passes.
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ContainerError {
    #[error("Service definition '{id}' does not exist")]
    MissingDefinition { id: String },

    #[error("Service definition '{id}' is already registered")]
    DuplicateDefinition { id: String },

    #[error("Service '{from}' references unknown service '{to}'")]
    InvalidReference { from: String, to: String },

    #[error("Compiler pass '{pass}' failed: {source}")]
    CompilerPass {
        pass: String,
        #[source]
        source: Box<ContainerError>,
    },
}

impl ContainerError {
    pub fn missing(id: impl Into<String>) -> Self {
        ContainerError::MissingDefinition { id: id.into() }
    }
}

/// Shorthand for Result with the container error type
pub type Result<T> = std::result::Result<T, ContainerError>;
