//! # Querywire Kernel
//!
//! The kernel turns a list of [`Bundle`]s and a [`KernelConfig`](crate::config::KernelConfig)
//! into a compiled [`Container`](crate::container::Container).
//!
//! ## Lifecycle
//!
//! - **Build**: each bundle registers definitions and compiler passes, then
//!   the configuration's service table is applied and the container compiled.
//! - **Boot**: bundles are booted in registration order against the
//!   compiled container.
//! - **Shutdown**: bundles are stopped in reverse order.
pub mod bootstrap;
pub mod bundle;
pub mod constants;
pub mod error;

pub use bootstrap::Kernel;
pub use bundle::Bundle;
pub use error::{Error, KernelLifecyclePhase, Result};
