//! # Built-in Bundles
//!
//! - [`ApiBundle`]: queues the query extension pass.
//! - [`OrmBundle`] / [`DocumentBundle`]: when enabled in the configuration,
//!   register the metadata factory, the driver's data providers and its
//!   default query extensions.
//!
//! Default extension priorities:
//!
//! | extension             | category   | ORM | document |
//! |-----------------------|------------|-----|----------|
//! | eager loading         | collection, item | 64 | - |
//! | filter                | collection | 32  | 32       |
//! | filter eager loading  | collection | -17 | -        |
//! | order                 | collection | -32 | -32      |
//! | pagination            | collection | -64 | -64      |
use crate::container::{Argument, ContainerBuilder, Definition, Reference, Result, TagAttributes};
use crate::compiler::query_extension::{COLLECTION_EXTENSIONS_ARG, ITEM_EXTENSIONS_ARG, METADATA_FACTORY};

pub mod api;
pub mod document;
pub mod orm;

pub use api::ApiBundle;
pub use document::DocumentBundle;
pub use orm::OrmBundle;

/// Registers the metadata factory unless another bundle already did.
fn ensure_metadata_factory(container: &mut ContainerBuilder) {
    if !container.has_definition(METADATA_FACTORY) {
        container.set_definition(METADATA_FACTORY, Definition::new("MetadataFactory"));
    }
}

/// A data provider with an empty extension chain for each named argument.
fn data_provider(class: &str, registry: &str, extension_args: &[&str]) -> Definition {
    extension_args.iter().fold(
        Definition::new(class)
            .with_argument("manager_registry", Argument::Reference(Reference::new(registry))),
        |definition, arg| definition.with_argument(*arg, Argument::ReferenceList(Vec::new())),
    )
}

/// Registers an extension tagged once per `(tag, priority)` pair.
fn register_extension(
    container: &mut ContainerBuilder,
    id: &str,
    class: &str,
    tags: &[(&str, i32)],
) -> Result<()> {
    let definition = tags.iter().fold(Definition::new(class), |definition, (tag, priority)| {
        definition.with_tag(*tag, TagAttributes::with_priority(*priority))
    });
    container.register(id, definition)?;
    Ok(())
}

const BOTH_EXTENSION_ARGS: &[&str] = &[COLLECTION_EXTENSIONS_ARG, ITEM_EXTENSIONS_ARG];
