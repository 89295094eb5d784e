#![cfg(test)]

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;

use crate::bundles::{ApiBundle, DocumentBundle, OrmBundle};
use crate::compiler::query_extension::{
    DOCUMENT_COLLECTION_EXTENSION_TAG, ORM_COLLECTION_EXTENSION_TAG, ORM_ITEM_EXTENSION_TAG,
};
use crate::config::KernelConfig;
use crate::container::{Container, ContainerBuilder, Definition, TagAttributes};
use crate::kernel::error::Result as KernelResult;
use crate::kernel::{Bundle, Kernel};

pub const DUMMY_ITEM_EXTENSION: &str = "app.test.query_extension.dummy_item";
pub const DUMMY_COLLECTION_EXTENSION: &str = "app.test.query_extension.dummy_collection";
pub const DUMMY_DOCUMENT_EXTENSION: &str = "app.test.query_extension.dummy_document";

// ===== TEST BUNDLE =====

/// Application bundle of the fixture kernel: contributes its own query
/// extensions next to the built-in ones.
pub struct TestBundle {
    pub booted: Arc<AtomicBool>,
}

impl TestBundle {
    pub fn new() -> Self {
        Self {
            booted: Arc::new(AtomicBool::new(false)),
        }
    }
}

#[async_trait]
impl Bundle for TestBundle {
    fn name(&self) -> &'static str {
        "test"
    }

    fn build(&self, container: &mut ContainerBuilder, _config: &KernelConfig) -> KernelResult<()> {
        // Runs between filter (32) and filter eager loading (-17)
        container.register(
            DUMMY_COLLECTION_EXTENSION,
            Definition::new("DummyCollectionExtension")
                .with_tag(ORM_COLLECTION_EXTENSION_TAG, TagAttributes::with_priority(0)),
        )?;
        // Ahead of eager loading on items, and a second, late collection hook
        container.register(
            DUMMY_ITEM_EXTENSION,
            Definition::new("DummyItemExtension")
                .with_tag(ORM_ITEM_EXTENSION_TAG, TagAttributes::with_priority(100))
                .with_tag(ORM_COLLECTION_EXTENSION_TAG, TagAttributes::with_priority(-100)),
        )?;
        container.register(
            DUMMY_DOCUMENT_EXTENSION,
            Definition::new("DummyDocumentExtension")
                .with_tag(DOCUMENT_COLLECTION_EXTENSION_TAG, TagAttributes::default()),
        )?;
        Ok(())
    }

    async fn boot(&self, _container: &Container) -> KernelResult<()> {
        self.booted.store(true, Ordering::SeqCst);
        Ok(())
    }
}

/// Fixture kernel with the same bundle list the application ships with,
/// plus the test bundle. Also returns the test bundle's boot flag.
pub fn test_kernel(config: KernelConfig) -> (Kernel, Arc<AtomicBool>) {
    let test_bundle = TestBundle::new();
    let booted = test_bundle.booted.clone();
    let mut kernel = Kernel::new(config);
    kernel
        .register_bundles([
            Box::new(ApiBundle) as Box<dyn Bundle>,
            Box::new(OrmBundle),
            Box::new(test_bundle),
            Box::new(DocumentBundle),
        ])
        .expect("Fixture bundles have unique names");
    (kernel, booted)
}

pub fn driver_config(orm: bool, document: bool) -> KernelConfig {
    let mut config = KernelConfig::default();
    config.environment = "test".to_string();
    config.orm.enabled = orm;
    config.document.enabled = document;
    config
}
