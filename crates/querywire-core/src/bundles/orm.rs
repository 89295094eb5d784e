use crate::bundles::{BOTH_EXTENSION_ARGS, data_provider, ensure_metadata_factory, register_extension};
use crate::compiler::query_extension::{
    COLLECTION_EXTENSIONS_ARG, ITEM_EXTENSIONS_ARG, ORM_COLLECTION_DATA_PROVIDER, ORM_COLLECTION_EXTENSION_TAG,
    ORM_ITEM_DATA_PROVIDER, ORM_ITEM_EXTENSION_TAG, ORM_SUBRESOURCE_DATA_PROVIDER,
};
use crate::config::KernelConfig;
use crate::container::{ContainerBuilder, Definition};
use crate::kernel::{Bundle, Result};

pub const ORM_MANAGER_REGISTRY: &str = "api.orm.manager_registry";

/// Relational data layer.
#[derive(Debug, Default)]
pub struct OrmBundle;

impl Bundle for OrmBundle {
    fn name(&self) -> &'static str {
        "orm"
    }

    fn build(&self, container: &mut ContainerBuilder, config: &KernelConfig) -> Result<()> {
        if !config.orm.enabled {
            log::debug!("ORM disabled, no services registered");
            return Ok(());
        }

        ensure_metadata_factory(container);
        container.register(ORM_MANAGER_REGISTRY, Definition::new("OrmManagerRegistry"))?;
        container.register(
            ORM_COLLECTION_DATA_PROVIDER,
            data_provider("OrmCollectionDataProvider", ORM_MANAGER_REGISTRY, &[COLLECTION_EXTENSIONS_ARG]),
        )?;
        container.register(
            ORM_ITEM_DATA_PROVIDER,
            data_provider("OrmItemDataProvider", ORM_MANAGER_REGISTRY, &[ITEM_EXTENSIONS_ARG]),
        )?;
        container.register(
            ORM_SUBRESOURCE_DATA_PROVIDER,
            data_provider("OrmSubresourceDataProvider", ORM_MANAGER_REGISTRY, BOTH_EXTENSION_ARGS),
        )?;

        register_extension(
            container,
            "api.orm.query_extension.eager_loading",
            "OrmEagerLoadingExtension",
            &[(ORM_COLLECTION_EXTENSION_TAG, 64), (ORM_ITEM_EXTENSION_TAG, 64)],
        )?;
        register_extension(
            container,
            "api.orm.query_extension.filter",
            "OrmFilterExtension",
            &[(ORM_COLLECTION_EXTENSION_TAG, 32)],
        )?;
        register_extension(
            container,
            "api.orm.query_extension.filter_eager_loading",
            "OrmFilterEagerLoadingExtension",
            &[(ORM_COLLECTION_EXTENSION_TAG, -17)],
        )?;
        register_extension(
            container,
            "api.orm.query_extension.order",
            "OrmOrderExtension",
            &[(ORM_COLLECTION_EXTENSION_TAG, -32)],
        )?;
        register_extension(
            container,
            "api.orm.query_extension.pagination",
            "OrmPaginationExtension",
            &[(ORM_COLLECTION_EXTENSION_TAG, -64)],
        )?;
        Ok(())
    }
}
