//! The validation orchestration engine.
//!
//! One [`Engine`] serves one host form. It owns the attempted flag, the
//! ordered list of field/rule bindings, and the decisions this crate
//! revolves around: when a field counts as invalid, when the whole form
//! counts as invalid, and when an error may be *shown*.
//!
//! The engine holds no reference to the form — every operation borrows the
//! form for the duration of the call, which also confines the engine's
//! mutable state to a single caller at a time.

use tracing::{debug, warn};

use crate::binding::{Binding, Rule};
use crate::foundation::{BindError, HostForm, RULE_KIND};
use crate::registry::Registry;

/// How [`Engine::bind`] treats a field the host form does not recognise.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FieldPolicy {
    /// Drop the binding, keep going. Tolerates declaration-order races
    /// between field mounting and validator mounting; the drop is logged.
    #[default]
    Lenient,
    /// Fail with [`BindError::UnknownField`].
    Strict,
}

/// Orchestrates custom rules, attempted state, and error visibility for one
/// host form.
///
/// # States
///
/// The engine is a two-state machine: **pristine** (`attempted == false`,
/// the initial state) and **attempted**. A submission or a forced
/// validation moves it to attempted; a reset moves it back. Error
/// visibility is a pure function of the current state plus current
/// validity — nothing about visibility is cached, so a corrected value can
/// never leave a stale error behind.
pub struct Engine<F> {
    attempted: bool,
    bindings: Vec<Binding<F>>,
    policy: FieldPolicy,
    invalid_hook: Option<Box<dyn FnMut(&F) + Send>>,
}

impl<F: HostForm> Engine<F> {
    /// Creates a pristine engine with the lenient field policy and no
    /// invalid hook.
    #[must_use]
    pub fn new() -> Self {
        Self {
            attempted: false,
            bindings: Vec::new(),
            policy: FieldPolicy::default(),
            invalid_hook: None,
        }
    }

    /// Sets the unknown-field policy.
    #[must_use]
    pub fn with_policy(mut self, policy: FieldPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Installs the hook fired when a submission attempt fails validation.
    ///
    /// The hook receives the form so callers can react to the failure —
    /// scroll to the first error, move focus, and so on.
    #[must_use]
    pub fn with_invalid_hook(mut self, hook: impl FnMut(&F) + Send + 'static) -> Self {
        self.invalid_hook = Some(Box::new(hook));
        self
    }

    /// Replaces the invalid hook after construction.
    pub fn on_invalid(&mut self, hook: impl FnMut(&F) + Send + 'static) {
        self.invalid_hook = Some(Box::new(hook));
    }

    /// Whether a submission has been attempted (or a validation forced)
    /// since the last reset.
    #[must_use]
    pub fn attempted(&self) -> bool {
        self.attempted
    }

    /// Unconditionally sets the attempted flag.
    pub fn set_attempted(&mut self, attempted: bool) {
        debug!(attempted, "attempted state set");
        self.attempted = attempted;
    }

    /// Inbound reset signal: back to pristine. Errors stop showing
    /// immediately, whatever the underlying validity.
    pub fn reset(&mut self) {
        self.set_attempted(false);
    }

    /// The bindings currently held, in registration order.
    #[must_use]
    pub fn bindings(&self) -> &[Binding<F>] {
        &self.bindings
    }

    /// Binds a custom rule to `field`.
    ///
    /// A field carries at most one rule: re-binding replaces the previous
    /// rule in place, keeping its position in registration order. Binding
    /// clears the field's custom-rule flag on the form.
    ///
    /// # Errors
    ///
    /// Under [`FieldPolicy::Strict`], [`BindError::UnknownField`] when the
    /// form does not recognise `field`. The lenient default instead drops
    /// the binding and returns `Ok`.
    pub fn bind(
        &mut self,
        form: &mut F,
        field: &str,
        rule: impl Fn(&F) -> bool + Send + Sync + 'static,
    ) -> Result<(), BindError> {
        self.bind_boxed(form, field, Box::new(rule))
    }

    /// [`bind`](Self::bind) for an already-boxed rule, e.g. one resolved
    /// through a [`Registry`].
    pub fn bind_boxed(&mut self, form: &mut F, field: &str, rule: Rule<F>) -> Result<(), BindError> {
        if !form.contains(field) {
            return match self.policy {
                FieldPolicy::Lenient => {
                    warn!(field, "dropping rule bound to unknown field");
                    Ok(())
                }
                FieldPolicy::Strict => Err(BindError::UnknownField {
                    field: field.to_owned(),
                }),
            };
        }

        form.set_rule_failed(field, false);
        if let Some(existing) = self.bindings.iter_mut().find(|b| b.field() == field) {
            *existing = Binding::new(field, rule);
        } else {
            self.bindings.push(Binding::new(field, rule));
        }
        debug!(field, "custom rule bound");
        Ok(())
    }

    /// Declarative binding surface: resolves `name` over `fields` through
    /// the registry, then binds the result to `field`.
    ///
    /// # Errors
    ///
    /// [`BindError::UnknownValidator`] when `name` does not resolve;
    /// otherwise as [`bind`](Self::bind).
    pub fn bind_named(
        &mut self,
        form: &mut F,
        registry: &Registry<F>,
        field: &str,
        name: &str,
        fields: &[&str],
    ) -> Result<(), BindError> {
        let rule = registry.resolve(name, fields)?;
        self.bind_boxed(form, field, rule)
    }

    /// Runs every rule in registration order and writes each verdict onto
    /// the form's custom-rule flag. Returns true iff all rules passed.
    ///
    /// No short-circuit: every flag is brought up to date even after a
    /// failure.
    pub fn validate_fields(&self, form: &mut F) -> bool {
        let mut all_passed = true;
        for binding in &self.bindings {
            let passed = binding.check(form);
            form.set_rule_failed(binding.field(), !passed);
            all_passed &= passed;
        }
        all_passed
    }

    /// The authoritative "is the form submittable right now".
    ///
    /// Computes the conjunction of [`validate_fields`](Self::validate_fields)
    /// and the form's own validity, writes it onto the form's
    /// computed-validity flag, and returns it.
    pub fn validate_form(&self, form: &mut F) -> bool {
        let fields_ok = self.validate_fields(form);
        let result = fields_ok && form.is_valid();
        form.set_computed_valid(result);
        debug!(valid = result, "form validated");
        result
    }

    /// Inbound force-validate signal: moves the engine to attempted and
    /// re-runs the full computation, without a real submission behind it.
    pub fn force_validate(&mut self, form: &mut F) -> bool {
        self.set_attempted(true);
        self.validate_form(form)
    }

    /// Re-runs the rule bound to `field` (if any) and writes the fresh
    /// verdict onto the form. Returns true when the rule currently fails.
    ///
    /// This is the mutation half of the visibility check: hosts call it on
    /// each change cycle, then read [`field_shows_error`](Self::field_shows_error)
    /// as often as they like. A field with no binding has its flag cleared.
    pub fn refresh_field(&self, form: &mut F, field: &str) -> bool {
        match self.bindings.iter().find(|b| b.field() == field) {
            Some(binding) => {
                let passed = binding.check(form);
                form.set_rule_failed(field, !passed);
                !passed
            }
            None => {
                form.set_rule_failed(field, false);
                false
            }
        }
    }

    /// Whether an error for `field` should currently be visible. Pure —
    /// reads flags, never writes them.
    ///
    /// 1. Before a submission attempt (or forced validation), never.
    /// 2. With an error `kind` given, only when the form reports that
    ///    specific kind for the field ([`RULE_KIND`] queries the
    ///    custom-rule flag).
    /// 3. Otherwise, when the custom rule failed or the form's own rules
    ///    reject the field.
    #[must_use]
    pub fn field_shows_error(&self, form: &F, field: &str, kind: Option<&str>) -> bool {
        if !self.attempted {
            return false;
        }

        if let Some(kind) = kind {
            let active = if kind == RULE_KIND {
                form.rule_failed(field)
            } else {
                form.error_active(field, kind)
            };
            if !active {
                return false;
            }
        }

        form.rule_failed(field) || form.field_invalid(field)
    }

    /// Drives a submission attempt: marks the form attempted, validates,
    /// and fires the invalid notification when validation fails. Returns
    /// the verdict; the caller decides what "proceed" means.
    pub fn submit(&mut self, form: &mut F) -> bool {
        self.set_attempted(true);
        let valid = self.validate_form(form);
        if !valid {
            self.notify_invalid(form);
        }
        valid
    }

    /// Fires the invalid notification with the form, if a hook is
    /// installed. No state change.
    pub fn notify_invalid(&mut self, form: &F) {
        if let Some(hook) = self.invalid_hook.as_mut() {
            hook(form);
        }
    }
}

impl<F: HostForm> Default for Engine<F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F> std::fmt::Debug for Engine<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Engine")
            .field("attempted", &self.attempted)
            .field("bindings", &self.bindings.len())
            .field("policy", &self.policy)
            .field("invalid_hook", &self.invalid_hook.is_some())
            .finish()
    }
}

// ============================================================================
// TESTS
// ============================================================================
