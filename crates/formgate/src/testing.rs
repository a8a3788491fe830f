//! In-memory reference implementation of [`HostForm`].

use std::collections::{HashMap, HashSet};

use crate::foundation::{HostForm, ViewValue};

/// A minimal [`HostForm`] that stores values and flags verbatim.
///
/// Built-in error kinds are raised and cleared by hand — this type
/// implements none of the host's own rules (required, pattern, …); it
/// exists so the engine can be exercised without a UI framework behind it.
#[derive(Debug, Clone, Default)]
pub struct MemoryForm {
    fields: HashMap<String, FieldState>,
    computed_valid: Option<bool>,
}

#[derive(Debug, Clone, Default)]
struct FieldState {
    value: Option<ViewValue>,
    /// Built-in error kinds currently failing.
    errors: HashSet<String>,
    rule_failed: bool,
}

impl MemoryForm {
    /// Creates an empty form.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares a control with no value yet.
    pub fn add_field(&mut self, field: &str) {
        self.fields.entry(field.to_owned()).or_default();
    }

    /// Declares `field` if needed and sets its view value.
    pub fn set_value(&mut self, field: &str, value: impl Into<ViewValue>) {
        self.fields.entry(field.to_owned()).or_default().value = Some(value.into());
    }

    /// Raises a built-in error kind for `field`.
    pub fn set_error(&mut self, field: &str, kind: &str) {
        self.fields
            .entry(field.to_owned())
            .or_default()
            .errors
            .insert(kind.to_owned());
    }

    /// Clears a built-in error kind for `field`.
    pub fn clear_error(&mut self, field: &str, kind: &str) {
        if let Some(state) = self.fields.get_mut(field) {
            state.errors.remove(kind);
        }
    }

    /// The engine-computed whole-form flag, if one has been written.
    #[must_use]
    pub fn computed_valid(&self) -> Option<bool> {
        self.computed_valid
    }
}

impl HostForm for MemoryForm {
    fn contains(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    fn view_value(&self, field: &str) -> Option<ViewValue> {
        self.fields.get(field).and_then(|state| state.value.clone())
    }

    fn error_active(&self, field: &str, kind: &str) -> bool {
        self.fields
            .get(field)
            .is_some_and(|state| state.errors.contains(kind))
    }

    fn field_invalid(&self, field: &str) -> bool {
        self.fields
            .get(field)
            .is_some_and(|state| !state.errors.is_empty())
    }

    fn is_valid(&self) -> bool {
        self.fields.values().all(|state| state.errors.is_empty())
    }

    fn rule_failed(&self, field: &str) -> bool {
        self.fields.get(field).is_some_and(|state| state.rule_failed)
    }

    fn set_rule_failed(&mut self, field: &str, failed: bool) {
        if let Some(state) = self.fields.get_mut(field) {
            state.rule_failed = failed;
        }
    }

    fn set_computed_valid(&mut self, valid: bool) {
        self.computed_valid = Some(valid);
    }
}
