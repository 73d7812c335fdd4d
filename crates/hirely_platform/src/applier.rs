//! Clear-then-apply side effects.
//!
//! The applier owns the record of what it last wrote. Every `apply` removes
//! its previously-applied markers before writing the new set, so interrupted
//! or repeated renders can not accumulate classes or leak custom properties.

use hirely_theme::{CssVariableMap, ResolvedTheme};
use tracing::debug;

use crate::document::DocumentHost;

/// Applies a resolved theme and the active language to a document host.
///
/// Idempotent: applying identical arguments twice leaves the host in the
/// same observable state as applying them once. Synchronous: everything is
/// settled when `apply` returns.
pub struct StyleApplier<D: DocumentHost> {
    document: D,
    applied_classes: Vec<String>,
    applied_properties: Vec<String>,
}

impl<D: DocumentHost> StyleApplier<D> {
    pub fn new(document: D) -> Self {
        Self {
            document,
            applied_classes: Vec::new(),
            applied_properties: Vec::new(),
        }
    }

    pub fn document(&self) -> &D {
        &self.document
    }

    /// Replace all previously-applied effects with the given theme state.
    pub fn apply(&mut self, vars: &CssVariableMap, theme: &ResolvedTheme, language: &str) {
        // Clear our own previous marker set. Never assume the document is
        // otherwise clean.
        for class in self.applied_classes.drain(..) {
            self.document.remove_class(&class);
        }
        for name in &self.applied_properties {
            if !vars.contains(name) {
                self.document.remove_custom_property(name);
            }
        }

        for (name, value) in vars.iter() {
            self.document.set_custom_property(name, value);
        }
        self.applied_properties = vars.names().map(String::from).collect();

        // Exactly one marker per axis.
        let markers = [
            format!("brand-{}", theme.variant.id()),
            format!("theme-{}", theme.scheme.id()),
            format!("scheme-{}", theme.profile.id()),
        ];
        for class in &markers {
            self.document.add_class(class);
        }
        self.applied_classes = markers.to_vec();

        self.document.set_attribute("lang", language);

        debug!(
            variant = %theme.variant,
            scheme = %theme.scheme,
            profile = %theme.profile,
            %language,
            "applied theme side effects"
        );
    }
}
