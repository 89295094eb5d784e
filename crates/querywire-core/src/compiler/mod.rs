//! # Querywire Compiler Passes
//!
//! Compiler passes run once over a [`ContainerBuilder`] before it is frozen.
//! They are ordered with the same priority buckets used for tagged
//! services (see [`priority`]): higher priority first, insertion order
//! among equals.
//!
//! Built-in passes:
//! - [`QueryExtensionPass`](query_extension::QueryExtensionPass): injects the
//!   priority-ordered query extensions into the active driver's data providers.
//! - [`CheckReferencesPass`](check_references::CheckReferencesPass): always
//!   runs last during compile and rejects dangling references.
use std::fmt;

use crate::container::{ContainerBuilder, Result};

pub mod check_references;
pub mod priority;
pub mod query_extension;

pub use check_references::CheckReferencesPass;
pub use priority::{PriorityBuckets, find_sorted_services};
pub use query_extension::{DataDriver, QueryExtensionPass};

/// A single rewrite step over the container under construction.
pub trait CompilerPass: Send + Sync {
    fn name(&self) -> &'static str;
    fn process(&self, container: &mut ContainerBuilder) -> Result<()>;
}

/// Priority-ordered queue of compiler passes.
#[derive(Default)]
pub struct PassConfig {
    passes: PriorityBuckets<Box<dyn CompilerPass>>,
}

impl fmt::Debug for PassConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PassConfig")
            .field("passes", &self.names())
            .finish()
    }
}

impl PassConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_pass(&mut self, pass: Box<dyn CompilerPass>, priority: i32) {
        self.passes.push(priority, pass);
    }

    pub fn len(&self) -> usize {
        self.passes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.passes.is_empty()
    }

    /// Pass names in execution order
    pub fn names(&self) -> Vec<&'static str> {
        self.passes.iter().map(|p| p.name()).collect()
    }

    pub fn into_ordered(self) -> Vec<Box<dyn CompilerPass>> {
        self.passes.into_vec()
    }
}
