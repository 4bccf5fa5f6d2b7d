//! Node registry mapping element names to constructors.

use std::collections::{HashMap, HashSet};

use super::types::Constructor;
use crate::scalar::ScalarKind;

/// Registry mapping element local names to their role.
///
/// An element is either composite (it has a constructor), a scalar leaf
/// (its text is coerced and set on the parent), the designated rich-text
/// element, or skipped along with its subtree.
#[derive(Debug)]
pub struct ElementRegistry {
    constructors: HashMap<String, Constructor>,
    scalars: HashMap<String, ScalarKind>,
    skip_tags: HashSet<String>,
    rich_text: Option<String>,
}

impl ElementRegistry {
    /// Create a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            constructors: HashMap::new(),
            scalars: HashMap::new(),
            skip_tags: HashSet::new(),
            rich_text: None,
        }
    }

    /// Register a constructor for a composite element.
    pub fn register(&mut self, tag_name: impl Into<String>, constructor: Constructor) {
        self.constructors.insert(tag_name.into(), constructor);
    }

    /// Register scalar leaf elements of one kind.
    pub fn scalars(&mut self, kind: ScalarKind, tag_names: impl IntoIterator<Item = impl Into<String>>) {
        for tag in tag_names {
            self.scalars.insert(tag.into(), kind);
        }
    }

    /// Mark tags as skip (ignored with their subtree in every mode).
    pub fn skip(&mut self, tag_names: impl IntoIterator<Item = impl Into<String>>) {
        for tag in tag_names {
            self.skip_tags.insert(tag.into());
        }
    }

    /// Designate the element whose body is captured verbatim.
    pub fn rich_text(&mut self, tag_name: impl Into<String>) {
        self.rich_text = Some(tag_name.into());
    }

    /// Constructor for a composite element.
    #[must_use]
    pub fn constructor(&self, tag_name: &str) -> Option<Constructor> {
        self.constructors.get(tag_name).copied()
    }

    /// Scalar kind for a leaf element.
    #[must_use]
    pub fn scalar_kind(&self, tag_name: &str) -> Option<ScalarKind> {
        self.scalars.get(tag_name).copied()
    }

    /// Check if a tag should be skipped.
    #[must_use]
    pub fn should_skip(&self, tag_name: &str) -> bool {
        self.skip_tags.contains(tag_name)
    }

    /// Check if a tag is the rich-text element.
    #[must_use]
    pub fn is_rich_text(&self, tag_name: &str) -> bool {
        self.rich_text.as_deref() == Some(tag_name)
    }

    /// Check if a constructor is registered for a tag.
    #[must_use]
    pub fn has_constructor(&self, tag_name: &str) -> bool {
        self.constructors.contains_key(tag_name)
    }

    /// Return set of all composite tag names.
    #[must_use]
    pub fn registered_tags(&self) -> HashSet<&str> {
        self.constructors.keys().map(|s| s.as_str()).collect()
    }

    /// Return set of all scalar tag names.
    #[must_use]
    pub fn scalar_tags(&self) -> HashSet<&str> {
        self.scalars.keys().map(|s| s.as_str()).collect()
    }
}

impl Default for ElementRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Folder, Feature, Node};
    use crate::registry::Attributes;

    fn folder(_attrs: &Attributes) -> crate::Result<Node> {
        Ok(Node::Feature(Feature::Folder(Folder::default())))
    }

    #[test]
    fn test_registry_register_and_get() {
        let mut registry = ElementRegistry::new();
        registry.register("Folder", folder);

        let constructor = registry.constructor("Folder").unwrap();
        let node = constructor(&Attributes::new()).unwrap();
        assert!(matches!(node, Node::Feature(Feature::Folder(_))));
        assert!(registry.constructor("Document").is_none());
    }

    #[test]
    fn test_registry_scalars() {
        let mut registry = ElementRegistry::new();
        registry.scalars(ScalarKind::Bool, ["visibility", "open"]);

        assert_eq!(registry.scalar_kind("open"), Some(ScalarKind::Bool));
        assert_eq!(registry.scalar_kind("name"), None);
        assert_eq!(registry.scalar_tags().len(), 2);
    }

    #[test]
    fn test_registry_skip() {
        let mut registry = ElementRegistry::new();
        registry.skip(["Metadata"]);

        assert!(registry.should_skip("Metadata"));
        assert!(!registry.should_skip("Folder"));
    }

    #[test]
    fn test_registry_rich_text() {
        let mut registry = ElementRegistry::new();
        registry.rich_text("description");

        assert!(registry.is_rich_text("description"));
        assert!(!registry.is_rich_text("name"));
    }

    #[test]
    fn test_registry_debug_output() {
        let mut registry = ElementRegistry::new();
        registry.skip(["Metadata"]);

        let debug = format!("{registry:?}");
        assert!(debug.starts_with("ElementRegistry"));
        assert!(debug.contains("Metadata"));
    }
}
