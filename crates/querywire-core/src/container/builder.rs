use std::collections::HashMap;

use crate::compiler::check_references::CheckReferencesPass;
use crate::compiler::{CompilerPass, PassConfig};
use crate::container::compiled::Container;
use crate::container::definition::{Definition, TagAttributes};
use crate::container::error::{ContainerError, Result};

/// Mutable container under construction.
///
/// Definitions keep the position at which their id was first registered;
/// that position is the discovery order seen by
/// [`find_tagged_service_ids`](ContainerBuilder::find_tagged_service_ids).
#[derive(Debug, Default)]
pub struct ContainerBuilder {
    definitions: HashMap<String, Definition>,
    // Discovery order of service ids
    order: Vec<String>,
    passes: PassConfig,
}

impl ContainerBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new definition. Fails if the id is already taken.
    pub fn register(&mut self, id: impl Into<String>, definition: Definition) -> Result<&mut Definition> {
        let id = id.into();
        if self.definitions.contains_key(&id) {
            return Err(ContainerError::DuplicateDefinition { id });
        }
        self.order.push(id.clone());
        Ok(self.definitions.entry(id).or_insert(definition))
    }

    /// Insert or replace a definition. A replaced definition keeps its discovery position.
    pub fn set_definition(&mut self, id: impl Into<String>, definition: Definition) -> &mut Definition {
        let id = id.into();
        if !self.definitions.contains_key(&id) {
            self.order.push(id.clone());
        }
        self.definitions.entry(id).insert_entry(definition).into_mut()
    }

    pub fn has_definition(&self, id: &str) -> bool {
        self.definitions.contains_key(id)
    }

    pub fn get_definition(&self, id: &str) -> Result<&Definition> {
        self.definitions.get(id).ok_or_else(|| ContainerError::missing(id))
    }

    pub fn get_definition_mut(&mut self, id: &str) -> Result<&mut Definition> {
        self.definitions.get_mut(id).ok_or_else(|| ContainerError::missing(id))
    }

    pub fn remove_definition(&mut self, id: &str) -> Option<Definition> {
        let removed = self.definitions.remove(id)?;
        self.order.retain(|existing| existing != id);
        Some(removed)
    }

    /// Service ids in discovery order
    pub fn service_ids(&self) -> &[String] {
        &self.order
    }

    /// Every service carrying `tag`, in discovery order, with the attributes
    /// of each tag instance in the order they were added.
    pub fn find_tagged_service_ids(&self, tag: &str) -> Vec<(String, Vec<TagAttributes>)> {
        self.order
            .iter()
            .filter_map(|id| {
                let definition = self.definitions.get(id)?;
                let instances = definition.tags(tag);
                if instances.is_empty() {
                    None
                } else {
                    Some((id.clone(), instances))
                }
            })
            .collect()
    }

    /// Queue a compiler pass. Higher priorities run first; equal priorities run in insertion order.
    pub fn add_compiler_pass(&mut self, pass: Box<dyn CompilerPass>, priority: i32) {
        log::debug!("Adding compiler pass '{}' with priority {}", pass.name(), priority);
        self.passes.add_pass(pass, priority);
    }

    /// Names of the queued compiler passes in execution order
    pub fn compiler_pass_names(&self) -> Vec<&'static str> {
        self.passes.names()
    }

    /// Run every queued pass, check references and freeze the result.
    pub fn compile(mut self) -> Result<Container> {
        let passes = std::mem::take(&mut self.passes).into_ordered();
        for pass in passes
            .iter()
            .map(|p| p.as_ref())
            .chain(std::iter::once(&CheckReferencesPass as &dyn CompilerPass))
        {
            log::debug!("Running compiler pass '{}'", pass.name());
            pass.process(&mut self).map_err(|e| ContainerError::CompilerPass {
                pass: pass.name().to_string(),
                source: Box::new(e),
            })?;
        }
        log::info!("Container compiled with {} service definitions", self.order.len());
        Ok(Container::new(self.definitions, self.order))
    }
}
