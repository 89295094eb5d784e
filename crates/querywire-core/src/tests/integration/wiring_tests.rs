#![cfg(test)]

use crate::compiler::CompilerPass;
use crate::compiler::query_extension::*;
use crate::container::{Argument, ContainerBuilder, ContainerError, Definition, Reference, TagAttributes};
use crate::kernel::Error;
use crate::tests::integration::common::{driver_config, test_kernel};

#[test]
fn test_orm_scenario_through_compile() {
    let mut builder = ContainerBuilder::new();
    builder.register(METADATA_FACTORY, Definition::new("MetadataFactory")).unwrap();
    for id in [ORM_COLLECTION_DATA_PROVIDER, ORM_ITEM_DATA_PROVIDER, ORM_SUBRESOURCE_DATA_PROVIDER] {
        builder.register(id, Definition::new("Provider")).unwrap();
    }
    for (id, tag) in [
        ("A", ORM_COLLECTION_EXTENSION_TAG),
        ("B", ORM_COLLECTION_EXTENSION_TAG),
        ("C", ORM_ITEM_EXTENSION_TAG),
    ] {
        builder
            .register(id, Definition::new("Extension").with_tag(tag, TagAttributes::default()))
            .unwrap();
    }
    builder.add_compiler_pass(Box::new(QueryExtensionPass), 0);

    let container = builder.compile().unwrap();
    let ab = [Reference::new("A"), Reference::new("B")];
    let c = [Reference::new("C")];
    assert_eq!(container.extensions(ORM_COLLECTION_DATA_PROVIDER, COLLECTION_EXTENSIONS_ARG), Some(&ab[..]));
    assert_eq!(container.extensions(ORM_ITEM_DATA_PROVIDER, ITEM_EXTENSIONS_ARG), Some(&c[..]));
    assert_eq!(container.extensions(ORM_SUBRESOURCE_DATA_PROVIDER, COLLECTION_EXTENSIONS_ARG), Some(&ab[..]));
    assert_eq!(container.extensions(ORM_SUBRESOURCE_DATA_PROVIDER, ITEM_EXTENSIONS_ARG), Some(&c[..]));
}

#[test]
fn test_missing_consumer_aborts_compile() {
    // Item and subresource providers are missing
    let mut builder = ContainerBuilder::new();
    builder.register(METADATA_FACTORY, Definition::new("MetadataFactory")).unwrap();
    builder.register(ORM_COLLECTION_DATA_PROVIDER, Definition::new("Provider")).unwrap();
    builder.add_compiler_pass(Box::new(QueryExtensionPass), 0);

    match builder.compile() {
        Err(ContainerError::CompilerPass { pass, source }) => {
            assert_eq!(pass, "query_extension");
            assert!(matches!(
                *source,
                ContainerError::MissingDefinition { ref id } if id == ORM_ITEM_DATA_PROVIDER
            ));
        }
        other => panic!("Expected missing definition, got {:?}", other),
    }
}

#[test]
fn test_dangling_extension_reference_fails_kernel_build() {
    let (mut kernel, _) = test_kernel(driver_config(true, false));

    struct Dangling;
    impl crate::kernel::Bundle for Dangling {
        fn name(&self) -> &'static str {
            "dangling"
        }
        fn build(&self, container: &mut ContainerBuilder, _config: &crate::config::KernelConfig) -> crate::kernel::Result<()> {
            container.register(
                "app.consumer",
                Definition::new("Consumer")
                    .with_argument("dependency", Argument::Reference(Reference::new("app.nowhere"))),
            )?;
            Ok(())
        }
    }
    kernel.register_bundle(Box::new(Dangling)).unwrap();

    match kernel.build_container() {
        Err(Error::Container(ContainerError::CompilerPass { pass, .. })) => assert_eq!(pass, "check_references"),
        other => panic!("Expected reference check failure, got {:?}", other.map(|_| ())),
    }
}

#[test]
fn test_pass_rerun_after_new_registration() {
    let mut builder = ContainerBuilder::new();
    builder.register(METADATA_FACTORY, Definition::new("MetadataFactory")).unwrap();
    builder.register(DOCUMENT_COLLECTION_DATA_PROVIDER, Definition::new("Provider")).unwrap();
    builder.register(DOCUMENT_ITEM_DATA_PROVIDER, Definition::new("Provider")).unwrap();

    QueryExtensionPass.process(&mut builder).unwrap();
    builder
        .register(
            "late",
            Definition::new("Extension").with_tag(DOCUMENT_ITEM_EXTENSION_TAG, TagAttributes::with_priority(1)),
        )
        .unwrap();
    QueryExtensionPass.process(&mut builder).unwrap();

    let item = builder
        .get_definition(DOCUMENT_ITEM_DATA_PROVIDER)
        .unwrap()
        .argument(ITEM_EXTENSIONS_ARG)
        .and_then(Argument::as_reference_list)
        .unwrap();
    assert_eq!(item, &[Reference::new("late")][..]);
}
