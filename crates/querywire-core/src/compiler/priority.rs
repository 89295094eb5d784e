//! Priority buckets: the ordering shared by tagged services and compiler passes.
use std::collections::BTreeMap;

use crate::container::{ContainerBuilder, Reference};

/// Items grouped by integer priority.
///
/// Flattening walks the buckets from the highest priority down; inside a
/// bucket items keep the order they were pushed in. Nothing is deduplicated.
#[derive(Debug, Clone)]
pub struct PriorityBuckets<T> {
    buckets: BTreeMap<i32, Vec<T>>,
}

impl<T> Default for PriorityBuckets<T> {
    fn default() -> Self {
        Self {
            buckets: BTreeMap::new(),
        }
    }
}

impl<T> PriorityBuckets<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, priority: i32, item: T) {
        self.buckets.entry(priority).or_default().push(item);
    }

    pub fn len(&self) -> usize {
        self.buckets.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Items in flattened order
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.buckets.values().rev().flatten()
    }

    pub fn into_vec(self) -> Vec<T> {
        self.buckets.into_values().rev().flatten().collect()
    }
}

impl<T> FromIterator<(i32, T)> for PriorityBuckets<T> {
    fn from_iter<I: IntoIterator<Item = (i32, T)>>(iter: I) -> Self {
        let mut buckets = Self::new();
        for (priority, item) in iter {
            buckets.push(priority, item);
        }
        buckets
    }
}

/// References to every service tagged `tag`, highest priority first.
///
/// Each tag instance yields its own entry, so a service tagged twice appears
/// twice. Ties keep discovery order. An unknown tag gives an empty list.
pub fn find_sorted_services(container: &ContainerBuilder, tag: &str) -> Vec<Reference> {
    container
        .find_tagged_service_ids(tag)
        .into_iter()
        .flat_map(|(service_id, instances)| {
            instances
                .into_iter()
                .map(move |attributes| (attributes.priority_or_default(), Reference::new(service_id.clone())))
        })
        .collect::<PriorityBuckets<_>>()
        .into_vec()
}
