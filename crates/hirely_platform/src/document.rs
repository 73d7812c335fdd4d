//! The document-host seam.
//!
//! The preference core never touches a real DOM directly; it drives
//! whatever implements [`DocumentHost`]. A browser adapter forwards these
//! calls to `document.documentElement`; the [`HeadlessDocument`] keeps the
//! same observable state in memory for tests and server-side rendering.

use std::collections::{BTreeMap, BTreeSet};

/// Mutation surface of a document-like environment.
///
/// All operations are synchronous: when a call returns, the change is
/// observable to any subsequent read of the host.
pub trait DocumentHost: Send {
    /// Set a CSS custom property on the root scope.
    fn set_custom_property(&mut self, name: &str, value: &str);

    /// Remove a CSS custom property from the root scope.
    fn remove_custom_property(&mut self, name: &str);

    /// Add a class to the document-level scope.
    fn add_class(&mut self, class: &str);

    /// Remove a class from the document-level scope.
    fn remove_class(&mut self, class: &str);

    /// Set a document-level attribute.
    fn set_attribute(&mut self, name: &str, value: &str);

    /// Remove a document-level attribute.
    fn remove_attribute(&mut self, name: &str);
}

/// In-memory document state, observable for assertions.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct HeadlessDocument {
    properties: BTreeMap<String, String>,
    classes: BTreeSet<String>,
    attributes: BTreeMap<String, String>,
}

impl HeadlessDocument {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn custom_property(&self, name: &str) -> Option<&str> {
        self.properties.get(name).map(String::as_str)
    }

    pub fn property_count(&self) -> usize {
        self.properties.len()
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.contains(class)
    }

    pub fn classes(&self) -> impl Iterator<Item = &str> {
        self.classes.iter().map(String::as_str)
    }

    pub fn class_count(&self) -> usize {
        self.classes.len()
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }
}

impl DocumentHost for HeadlessDocument {
    fn set_custom_property(&mut self, name: &str, value: &str) {
        self.properties.insert(name.to_string(), value.to_string());
    }

    fn remove_custom_property(&mut self, name: &str) {
        self.properties.remove(name);
    }

    fn add_class(&mut self, class: &str) {
        self.classes.insert(class.to_string());
    }

    fn remove_class(&mut self, class: &str) {
        self.classes.remove(class);
    }

    fn set_attribute(&mut self, name: &str, value: &str) {
        self.attributes.insert(name.to_string(), value.to_string());
    }

    fn remove_attribute(&mut self, name: &str) {
        self.attributes.remove(name);
    }
}
