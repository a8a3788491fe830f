//! Field/rule pairings owned by the engine.

use std::fmt;

use crate::foundation::HostForm;

/// A custom validity predicate over the host form.
///
/// A rule answers one question — "is this constraint satisfied right
/// now?" — by reading whatever fields it needs through the form. Rules are
/// expected to be fast and side-effect-free; the engine performs the only
/// writes.
pub type Rule<F> = Box<dyn Fn(&F) -> bool + Send + Sync>;

/// Pairs a field identifier with the rule guarding it.
///
/// Bindings are created when a field declares a custom validator and live
/// for the engine's whole lifetime; they are replaced (never stacked) when
/// the same field binds again.
pub struct Binding<F> {
    field: String,
    rule: Rule<F>,
}

impl<F: HostForm> Binding<F> {
    /// Creates a binding for `field`.
    pub fn new(field: impl Into<String>, rule: Rule<F>) -> Self {
        Self {
            field: field.into(),
            rule,
        }
    }

    /// The field this binding guards.
    pub fn field(&self) -> &str {
        &self.field
    }

    /// Runs the rule against the form's current state.
    pub fn check(&self, form: &F) -> bool {
        (self.rule)(form)
    }
}

impl<F> fmt::Debug for Binding<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Binding")
            .field("field", &self.field)
            .field("rule", &"<function>")
            .finish()
    }
}
