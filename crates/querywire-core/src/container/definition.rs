use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Indirect reference to another service in the container.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Reference(String);

impl Reference {
    pub fn new(id: impl Into<String>) -> Self {
        Reference(id.into())
    }

    /// The referenced service id
    pub fn id(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Reference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "@{}", self.0)
    }
}

impl From<&str> for Reference {
    fn from(id: &str) -> Self {
        Reference::new(id)
    }
}

/// A named construction argument of a service definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum Argument {
    /// Single service reference
    Reference(Reference),
    /// Ordered list of service references (e.g. an extension chain)
    ReferenceList(Vec<Reference>),
    /// Inline value
    Value(serde_json::Value),
}

impl Argument {
    /// Iterate every reference held by this argument
    pub fn references(&self) -> impl Iterator<Item = &Reference> {
        let refs: &[Reference] = match self {
            Argument::Reference(r) => std::slice::from_ref(r),
            Argument::ReferenceList(list) => list.as_slice(),
            Argument::Value(_) => &[],
        };
        refs.iter()
    }

    pub fn as_reference_list(&self) -> Option<&[Reference]> {
        match self {
            Argument::ReferenceList(list) => Some(list),
            _ => None,
        }
    }
}

/// Attributes attached to one tag instance.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TagAttributes {
    /// Ordering weight, higher runs first. Absent means 0.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<i32>,
    /// Any other attribute, kept verbatim
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

impl TagAttributes {
    pub fn with_priority(priority: i32) -> Self {
        Self {
            priority: Some(priority),
            extra: BTreeMap::new(),
        }
    }

    /// Priority with the default applied
    pub fn priority_or_default(&self) -> i32 {
        self.priority.unwrap_or(0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tag {
    pub name: String,
    #[serde(flatten)]
    pub attributes: TagAttributes,
}

/// Blueprint of a service: its class, named arguments and tags.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Definition {
    pub class: String,
    #[serde(default)]
    arguments: BTreeMap<String, Argument>,
    #[serde(default)]
    tags: Vec<Tag>,
}

impl Definition {
    pub fn new(class: impl Into<String>) -> Self {
        Self {
            class: class.into(),
            arguments: BTreeMap::new(),
            tags: Vec::new(),
        }
    }

    pub fn with_argument(mut self, name: impl Into<String>, value: Argument) -> Self {
        self.arguments.insert(name.into(), value);
        self
    }

    pub fn with_tag(mut self, name: impl Into<String>, attributes: TagAttributes) -> Self {
        self.add_tag(name, attributes);
        self
    }

    /// Adds a tag instance. The same tag may be added more than once.
    pub fn add_tag(&mut self, name: impl Into<String>, attributes: TagAttributes) -> &mut Self {
        self.tags.push(Tag {
            name: name.into(),
            attributes,
        });
        self
    }

    /// Sets (or overwrites) a named argument.
    pub fn replace_argument(&mut self, name: impl Into<String>, value: Argument) -> &mut Self {
        self.arguments.insert(name.into(), value);
        self
    }

    pub fn argument(&self, name: &str) -> Option<&Argument> {
        self.arguments.get(name)
    }

    pub fn arguments(&self) -> impl Iterator<Item = (&String, &Argument)> {
        self.arguments.iter()
    }

    pub fn has_tag(&self, name: &str) -> bool {
        self.tags.iter().any(|t| t.name == name)
    }

    /// Attributes of every instance of `name`, in the order they were added
    pub fn tags(&self, name: &str) -> Vec<TagAttributes> {
        self.tags
            .iter()
            .filter(|t| t.name == name)
            .map(|t| t.attributes.clone())
            .collect()
    }

    pub fn all_tags(&self) -> &[Tag] {
        &self.tags
    }
}
