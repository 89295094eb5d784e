//! # Querywire Kernel Errors
//!
//! Defines error types specific to the Querywire kernel.
//!
//! [`Error`] wraps the container and configuration errors and adds the
//! failures of the kernel itself: bundle registration and the
//! boot/shutdown lifecycle.
use std::result::Result as StdResult;

use thiserror::Error as ThisError;

use crate::config::ConfigError;
use crate::container::ContainerError;

#[derive(Debug, ThisError)]
pub enum Error {
    /// Container build or compile failure
    #[error("Container error: {0}")]
    Container(#[from] ContainerError),

    /// Configuration file failure
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Bundle '{name}' is already registered")]
    BundleAlreadyRegistered { name: String },

    /// Error occurring during a specific kernel lifecycle phase.
    #[error("Kernel lifecycle error during {phase:?}: {message}")]
    KernelLifecycleError {
        phase: KernelLifecyclePhase,
        bundle_name: Option<String>,
        message: String,
        #[source]
        source: Option<Box<Error>>,
    },

    /// Generic error with message
    #[error("Error: {0}")]
    Other(String),
}

/// Represents a specific phase in the kernel's lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ThisError)]
pub enum KernelLifecyclePhase {
    #[error("Build")]
    Build,
    #[error("Boot")]
    Boot,
    #[error("Shutdown")]
    Shutdown,
}

/// Shorthand for Result with our Error type
pub type Result<T> = StdResult<T, Error>;

impl From<&str> for Error {
    fn from(msg: &str) -> Self {
        Error::Other(msg.to_string())
    }
}

impl From<String> for Error {
    fn from(msg: String) -> Self {
        Error::Other(msg)
    }
}

impl Error {
    pub fn lifecycle(phase: KernelLifecyclePhase, message: impl Into<String>) -> Self {
        Error::KernelLifecycleError {
            phase,
            bundle_name: None,
            message: message.into(),
            source: None,
        }
    }
}
