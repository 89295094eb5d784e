use crate::bundles::{data_provider, ensure_metadata_factory, register_extension};
use crate::compiler::query_extension::{
    COLLECTION_EXTENSIONS_ARG, DOCUMENT_COLLECTION_DATA_PROVIDER, DOCUMENT_COLLECTION_EXTENSION_TAG,
    DOCUMENT_ITEM_DATA_PROVIDER, ITEM_EXTENSIONS_ARG,
};
use crate::config::KernelConfig;
use crate::container::{ContainerBuilder, Definition};
use crate::kernel::{Bundle, Result};

pub const DOCUMENT_MANAGER_REGISTRY: &str = "api.document.manager_registry";

/// Document store data layer. Has no subresource provider.
#[derive(Debug, Default)]
pub struct DocumentBundle;

impl Bundle for DocumentBundle {
    fn name(&self) -> &'static str {
        "document"
    }

    fn build(&self, container: &mut ContainerBuilder, config: &KernelConfig) -> Result<()> {
        if !config.document.enabled {
            log::debug!("Document store disabled, no services registered");
            return Ok(());
        }

        ensure_metadata_factory(container);
        container.register(DOCUMENT_MANAGER_REGISTRY, Definition::new("DocumentManagerRegistry"))?;
        container.register(
            DOCUMENT_COLLECTION_DATA_PROVIDER,
            data_provider("DocumentCollectionDataProvider", DOCUMENT_MANAGER_REGISTRY, &[COLLECTION_EXTENSIONS_ARG]),
        )?;
        container.register(
            DOCUMENT_ITEM_DATA_PROVIDER,
            data_provider("DocumentItemDataProvider", DOCUMENT_MANAGER_REGISTRY, &[ITEM_EXTENSIONS_ARG]),
        )?;

        register_extension(
            container,
            "api.document.query_extension.filter",
            "DocumentFilterExtension",
            &[(DOCUMENT_COLLECTION_EXTENSION_TAG, 32)],
        )?;
        register_extension(
            container,
            "api.document.query_extension.order",
            "DocumentOrderExtension",
            &[(DOCUMENT_COLLECTION_EXTENSION_TAG, -32)],
        )?;
        register_extension(
            container,
            "api.document.query_extension.pagination",
            "DocumentPaginationExtension",
            &[(DOCUMENT_COLLECTION_EXTENSION_TAG, -64)],
        )?;
        Ok(())
    }
}
