use std::collections::HashMap;

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::container::definition::{Definition, Reference};

/// Frozen container produced by [`ContainerBuilder::compile`](crate::container::ContainerBuilder::compile).
#[derive(Debug, Clone)]
pub struct Container {
    definitions: HashMap<String, Definition>,
    order: Vec<String>,
}

impl Container {
    pub(crate) fn new(definitions: HashMap<String, Definition>, order: Vec<String>) -> Self {
        Self { definitions, order }
    }

    pub fn has(&self, id: &str) -> bool {
        self.definitions.contains_key(id)
    }

    pub fn definition(&self, id: &str) -> Option<&Definition> {
        self.definitions.get(id)
    }

    pub fn service_ids(&self) -> &[String] {
        &self.order
    }

    /// The extension chain injected into `consumer` under `argument`, if any.
    pub fn extensions(&self, consumer: &str, argument: &str) -> Option<&[Reference]> {
        self.definitions
            .get(consumer)?
            .argument(argument)?
            .as_reference_list()
    }
}

// Serialized in discovery order so dumps are reproducible.
impl Serialize for Container {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.order.len()))?;
        for id in &self.order {
            if let Some(definition) = self.definitions.get(id) {
                map.serialize_entry(id, definition)?;
            }
        }
        map.end()
    }
}
