//! Catalog Document Value Objects
//!
//! Typed shapes of the two documents published by the remote catalog:
//! the index document and the per-component specification document.

use serde::{Deserialize, Serialize};

/// Value Object: Catalog Index Entry
///
/// One entry of the index document. The `name` is unique within the
/// index and doubles as the key for fetching the full specification.
///
/// ## Business Rules
///
/// - Index order is display order; consumers must not re-sort
/// - `tags` may be absent in the document and defaults to empty
///
/// ## Example
///
/// ```rust
/// use mcc_domain::value_objects::ComponentSummary;
///
/// let summary = ComponentSummary {
///     name: "ChipsView".to_string(),
///     description: "Filter chips".to_string(),
///     tags: vec!["chip".to_string()],
/// };
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ComponentSummary {
    /// Component name, unique within the index
    pub name: String,
    /// Short human-readable description
    pub description: String,
    /// Free-form tags attached to the component
    #[serde(default)]
    pub tags: Vec<String>,
}

/// Value Object: Catalog Index Document
///
/// The top-level JSON document listing all catalog entries. Fetched as a
/// single document; insertion order is preserved.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ComponentIndex {
    /// Ordered catalog entries
    pub components: Vec<ComponentSummary>,
}

impl ComponentIndex {
    /// Whether the index lists a component with the given name
    pub fn contains(&self, name: &str) -> bool {
        self.components.iter().any(|c| c.name == name)
    }

    /// Number of entries in the index
    pub fn len(&self) -> usize {
        self.components.len()
    }

    /// Whether the index is empty
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }
}

/// Value Object: Component Specification Document
///
/// Full document for one component. A superset of [`ComponentSummary`]:
/// the remote publishes arbitrary additional fields (properties, usage
/// examples), preserved verbatim under `extra` so callers see the whole
/// document.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ComponentSpec {
    /// Component name; matches the name the document was fetched by
    pub name: String,
    /// Short human-readable description
    #[serde(default)]
    pub description: String,
    /// Free-form tags attached to the component
    #[serde(default)]
    pub tags: Vec<String>,
    /// Any additional document fields (properties, examples, ...)
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl ComponentSpec {
    /// Project the specification down to its index summary
    pub fn summary(&self) -> ComponentSummary {
        ComponentSummary {
            name: self.name.clone(),
            description: self.description.clone(),
            tags: self.tags.clone(),
        }
    }
}
