#![cfg(test)]

use std::io::Write;
use std::sync::atomic::Ordering;

use tempfile::Builder;

use crate::compiler::query_extension::*;
use crate::config::KernelConfig;
use crate::container::Reference;
use crate::kernel::Kernel;
use crate::tests::integration::common::{
    DUMMY_COLLECTION_EXTENSION, DUMMY_DOCUMENT_EXTENSION, DUMMY_ITEM_EXTENSION, driver_config, test_kernel,
};

fn ids(refs: &[Reference]) -> Vec<&str> {
    refs.iter().map(Reference::id).collect()
}

#[tokio::test]
async fn test_fixture_kernel_boots_with_orm() {
    let (mut kernel, booted) = test_kernel(driver_config(true, false));
    assert_eq!(kernel.bundle_names(), vec!["api", "orm", "test", "document"]);

    kernel.boot().await.expect("Kernel should boot");
    assert!(booted.load(Ordering::SeqCst));

    let container = kernel.container().expect("Container after boot");
    let collection = container
        .extensions(ORM_COLLECTION_DATA_PROVIDER, COLLECTION_EXTENSIONS_ARG)
        .expect("Collection chain injected");
    assert_eq!(
        ids(collection),
        vec![
            "api.orm.query_extension.eager_loading",
            "api.orm.query_extension.filter",
            DUMMY_COLLECTION_EXTENSION,
            "api.orm.query_extension.filter_eager_loading",
            "api.orm.query_extension.order",
            "api.orm.query_extension.pagination",
            DUMMY_ITEM_EXTENSION,
        ]
    );
    assert_eq!(
        container.extensions(ORM_SUBRESOURCE_DATA_PROVIDER, COLLECTION_EXTENSIONS_ARG),
        Some(collection)
    );

    let item = container
        .extensions(ORM_ITEM_DATA_PROVIDER, ITEM_EXTENSIONS_ARG)
        .expect("Item chain injected");
    assert_eq!(ids(item), vec![DUMMY_ITEM_EXTENSION, "api.orm.query_extension.eager_loading"]);
    assert_eq!(container.extensions(ORM_SUBRESOURCE_DATA_PROVIDER, ITEM_EXTENSIONS_ARG), Some(item));

    kernel.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_fixture_kernel_boots_with_document_store() {
    let (mut kernel, _) = test_kernel(driver_config(false, true));
    kernel.boot().await.unwrap();
    let container = kernel.container().unwrap();

    assert_eq!(
        ids(container
            .extensions(DOCUMENT_COLLECTION_DATA_PROVIDER, COLLECTION_EXTENSIONS_ARG)
            .unwrap()),
        vec![
            "api.document.query_extension.filter",
            DUMMY_DOCUMENT_EXTENSION,
            "api.document.query_extension.order",
            "api.document.query_extension.pagination",
        ]
    );
    assert_eq!(
        container.extensions(DOCUMENT_ITEM_DATA_PROVIDER, ITEM_EXTENSIONS_ARG),
        Some(&[][..])
    );
    assert!(!container.has(ORM_COLLECTION_DATA_PROVIDER));
}

#[tokio::test]
async fn test_fixture_kernel_without_data_layer() {
    let (mut kernel, booted) = test_kernel(driver_config(false, false));
    kernel.boot().await.unwrap();
    assert!(booted.load(Ordering::SeqCst));

    let container = kernel.container().unwrap();
    assert!(!container.has(METADATA_FACTORY));
    // Test extensions are registered but nothing consumes them
    assert!(container.has(DUMMY_ITEM_EXTENSION));
    assert_eq!(container.service_ids().len(), 3);
}

#[tokio::test]
async fn test_both_drivers_wire_orm_only() {
    let (mut kernel, _) = test_kernel(driver_config(true, true));
    kernel.boot().await.unwrap();
    let container = kernel.container().unwrap();

    assert!(container.extensions(ORM_COLLECTION_DATA_PROVIDER, COLLECTION_EXTENSIONS_ARG).is_some());
    // Document providers keep the empty chains their bundle registered
    assert_eq!(
        container.extensions(DOCUMENT_COLLECTION_DATA_PROVIDER, COLLECTION_EXTENSIONS_ARG),
        Some(&[][..])
    );
}

#[tokio::test]
async fn test_default_kernel_from_config_file() {
    let toml = r#"
environment = "test"

[orm]
enabled = true

[[services]]
id = "app.extension.owner"
class = "OwnerExtension"
tags = [
    { name = "api.orm.query_extension.collection", priority = 40 },
    { name = "api.orm.query_extension.collection", priority = -70 },
]
"#;
    let mut file = Builder::new().suffix(".toml").tempfile().unwrap();
    file.write_all(toml.as_bytes()).unwrap();

    let config = KernelConfig::load(file.path()).unwrap();
    let mut kernel = Kernel::with_default_bundles(config).unwrap();
    kernel.boot().await.unwrap();
    let container = kernel.container().unwrap();

    assert_eq!(
        ids(container
            .extensions(ORM_COLLECTION_DATA_PROVIDER, COLLECTION_EXTENSIONS_ARG)
            .unwrap()),
        vec![
            "api.orm.query_extension.eager_loading",
            "app.extension.owner",
            "api.orm.query_extension.filter",
            "api.orm.query_extension.filter_eager_loading",
            "api.orm.query_extension.order",
            "api.orm.query_extension.pagination",
            "app.extension.owner",
        ]
    );
}
