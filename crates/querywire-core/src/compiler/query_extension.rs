//! Injection of priority-ordered query extensions into data providers.
//!
//! Query extensions are services tagged with a driver-specific collection or
//! item category. The pass resolves both categories with
//! [`find_sorted_services`] and hands the lists to the active driver's data
//! providers under named arguments. Without the metadata factory, or without
//! any driver, the pass leaves the container untouched.
use std::fmt;

use crate::compiler::CompilerPass;
use crate::compiler::priority::find_sorted_services;
use crate::container::{Argument, ContainerBuilder, Result};

/// Marker registered whenever a data layer is configured.
pub const METADATA_FACTORY: &str = "api.data.metadata_factory";

pub const ORM_COLLECTION_DATA_PROVIDER: &str = "api.orm.collection_data_provider";
pub const ORM_ITEM_DATA_PROVIDER: &str = "api.orm.item_data_provider";
pub const ORM_SUBRESOURCE_DATA_PROVIDER: &str = "api.orm.subresource_data_provider";
pub const ORM_COLLECTION_EXTENSION_TAG: &str = "api.orm.query_extension.collection";
pub const ORM_ITEM_EXTENSION_TAG: &str = "api.orm.query_extension.item";

pub const DOCUMENT_COLLECTION_DATA_PROVIDER: &str = "api.document.collection_data_provider";
pub const DOCUMENT_ITEM_DATA_PROVIDER: &str = "api.document.item_data_provider";
pub const DOCUMENT_COLLECTION_EXTENSION_TAG: &str = "api.document.query_extension.collection";
pub const DOCUMENT_ITEM_EXTENSION_TAG: &str = "api.document.query_extension.item";

/// Argument receiving the collection extension chain
pub const COLLECTION_EXTENSIONS_ARG: &str = "collection_extensions";
/// Argument receiving the item extension chain
pub const ITEM_EXTENSIONS_ARG: &str = "item_extensions";

/// Which of the two extension categories a binding receives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtensionKind {
    Collection,
    Item,
}

/// One consumer argument fed by an extension list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExtensionBinding {
    pub consumer: &'static str,
    pub argument: &'static str,
    pub kind: ExtensionKind,
}

const fn binding(consumer: &'static str, argument: &'static str, kind: ExtensionKind) -> ExtensionBinding {
    ExtensionBinding { consumer, argument, kind }
}

// A subresource read is a collection fetch composed with an item fetch,
// so its provider takes both chains.
const ORM_BINDINGS: &[ExtensionBinding] = &[
    binding(ORM_COLLECTION_DATA_PROVIDER, COLLECTION_EXTENSIONS_ARG, ExtensionKind::Collection),
    binding(ORM_ITEM_DATA_PROVIDER, ITEM_EXTENSIONS_ARG, ExtensionKind::Item),
    binding(ORM_SUBRESOURCE_DATA_PROVIDER, COLLECTION_EXTENSIONS_ARG, ExtensionKind::Collection),
    binding(ORM_SUBRESOURCE_DATA_PROVIDER, ITEM_EXTENSIONS_ARG, ExtensionKind::Item),
];

const DOCUMENT_BINDINGS: &[ExtensionBinding] = &[
    binding(DOCUMENT_COLLECTION_DATA_PROVIDER, COLLECTION_EXTENSIONS_ARG, ExtensionKind::Collection),
    binding(DOCUMENT_ITEM_DATA_PROVIDER, ITEM_EXTENSIONS_ARG, ExtensionKind::Item),
];

/// Backing data-access implementation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataDriver {
    /// Relational mapping
    Orm,
    /// Document store mapping
    Document,
}

impl DataDriver {
    /// Detects the active driver from the definitions present.
    ///
    /// `None` when the metadata factory is missing or no driver's collection
    /// provider is registered. The ORM is checked first and wins if both are.
    pub fn detect(container: &ContainerBuilder) -> Option<Self> {
        Self::detect_with(|id| container.has_definition(id))
    }

    /// Same decision as [`detect`](DataDriver::detect) over any id lookup,
    /// e.g. a compiled [`Container`](crate::container::Container).
    pub fn detect_with(has: impl Fn(&str) -> bool) -> Option<Self> {
        if !has(METADATA_FACTORY) {
            return None;
        }
        if has(ORM_COLLECTION_DATA_PROVIDER) {
            Some(DataDriver::Orm)
        } else if has(DOCUMENT_COLLECTION_DATA_PROVIDER) {
            Some(DataDriver::Document)
        } else {
            None
        }
    }

    pub fn collection_tag(&self) -> &'static str {
        match self {
            DataDriver::Orm => ORM_COLLECTION_EXTENSION_TAG,
            DataDriver::Document => DOCUMENT_COLLECTION_EXTENSION_TAG,
        }
    }

    pub fn item_tag(&self) -> &'static str {
        match self {
            DataDriver::Orm => ORM_ITEM_EXTENSION_TAG,
            DataDriver::Document => DOCUMENT_ITEM_EXTENSION_TAG,
        }
    }

    pub fn tag(&self, kind: ExtensionKind) -> &'static str {
        match kind {
            ExtensionKind::Collection => self.collection_tag(),
            ExtensionKind::Item => self.item_tag(),
        }
    }

    /// Consumer arguments wired for this driver
    pub fn bindings(&self) -> &'static [ExtensionBinding] {
        match self {
            DataDriver::Orm => ORM_BINDINGS,
            DataDriver::Document => DOCUMENT_BINDINGS,
        }
    }
}

impl fmt::Display for DataDriver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataDriver::Orm => write!(f, "orm"),
            DataDriver::Document => write!(f, "document"),
        }
    }
}

/// Wires query extensions into the active driver's data providers.
#[derive(Debug, Default, Clone, Copy)]
pub struct QueryExtensionPass;

impl QueryExtensionPass {
    pub fn new() -> Self {
        Self
    }
}

impl CompilerPass for QueryExtensionPass {
    fn name(&self) -> &'static str {
        "query_extension"
    }

    fn process(&self, container: &mut ContainerBuilder) -> Result<()> {
        let Some(driver) = DataDriver::detect(container) else {
            log::debug!("No data driver configured, skipping query extension wiring");
            return Ok(());
        };

        let bindings = driver.bindings();
        // Every consumer must exist before anything is replaced
        for b in bindings {
            container.get_definition(b.consumer)?;
        }

        let collection = find_sorted_services(container, driver.collection_tag());
        let item = find_sorted_services(container, driver.item_tag());
        log::debug!(
            "Resolved {} collection and {} item extensions for the {} driver",
            collection.len(),
            item.len(),
            driver
        );

        for b in bindings {
            let extensions = match b.kind {
                ExtensionKind::Collection => &collection,
                ExtensionKind::Item => &item,
            };
            container
                .get_definition_mut(b.consumer)?
                .replace_argument(b.argument, Argument::ReferenceList(extensions.clone()));
            log::debug!("Injected {} extensions into {}.{}", extensions.len(), b.consumer, b.argument);
        }
        Ok(())
    }
}
