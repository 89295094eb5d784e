pub mod bundles;
pub mod compiler;
pub mod config;
pub mod container;
pub mod kernel;

// Re-export key public types for the binary and for embedding applications
pub use compiler::{CompilerPass, DataDriver, QueryExtensionPass, find_sorted_services};
pub use config::KernelConfig;
pub use container::{Container, ContainerBuilder, Definition, Reference};
pub use kernel::error::Error as KernelError;
pub use kernel::{Bundle, Kernel};

#[cfg(test)]
mod tests;
