//! Boundary contract with the host form.
//!
//! The engine never owns field values, touched state, or the host's own
//! validity rules (required, pattern, type). All of that lives behind the
//! [`HostForm`] trait: the engine reads values and built-in verdicts through
//! it, and writes two things back — a per-field custom-rule flag and the
//! whole-form computed-validity flag.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

/// Error kind under which a field's custom-rule failure is reported.
///
/// A field bound to a custom rule is queried with this kind, the same way
/// the host's own kinds (`"required"`, `"pattern"`, …) are queried.
pub const RULE_KIND: &str = "validator";

/// A field's current user-facing value.
///
/// Equality is structural within a variant; ordering is defined only within
/// a variant. Comparing across variants never coerces — `Int(1)` is neither
/// equal to nor ordered against `Str("1")` or `Float(1.0)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ViewValue {
    /// Free-text input.
    Str(String),
    /// Integral input.
    Int(i64),
    /// Fractional input.
    Float(f64),
    /// Checkbox-style input.
    Bool(bool),
}

impl PartialOrd for ViewValue {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Self::Str(a), Self::Str(b)) => a.partial_cmp(b),
            (Self::Int(a), Self::Int(b)) => a.partial_cmp(b),
            (Self::Float(a), Self::Float(b)) => a.partial_cmp(b),
            (Self::Bool(a), Self::Bool(b)) => a.partial_cmp(b),
            _ => None,
        }
    }
}

impl From<&str> for ViewValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_owned())
    }
}

impl From<String> for ViewValue {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<i64> for ViewValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<i32> for ViewValue {
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<f64> for ViewValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<bool> for ViewValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

/// The external host form the engine orchestrates.
///
/// Implementations are expected to be cheap to query — every method is
/// called on the hot path of a validation pass or a per-render visibility
/// check.
///
/// # Contract
///
/// * `field_invalid` and `is_valid` reflect the host's **own** rules only.
///   The custom-rule flag written through [`set_rule_failed`] is stored
///   separately and read back through [`rule_failed`]; it must not feed
///   into the host's built-in verdicts.
/// * Writes for fields the form does not recognise are ignored.
///
/// [`set_rule_failed`]: HostForm::set_rule_failed
/// [`rule_failed`]: HostForm::rule_failed
pub trait HostForm {
    /// Does the form currently know this control?
    fn contains(&self, field: &str) -> bool;

    /// Current user-facing value of `field`; `None` for unknown fields.
    fn view_value(&self, field: &str) -> Option<ViewValue>;

    /// True when the named built-in error kind (`"required"`, `"pattern"`,
    /// …) is currently active for `field`.
    fn error_active(&self, field: &str, kind: &str) -> bool;

    /// True when the form's own rules currently reject `field`.
    fn field_invalid(&self, field: &str) -> bool;

    /// Whole-form validity under the form's own rules.
    fn is_valid(&self) -> bool;

    /// Custom-rule verdict most recently written by the engine.
    fn rule_failed(&self, field: &str) -> bool;

    /// Records whether the custom rule for `field` currently fails.
    fn set_rule_failed(&mut self, field: &str, failed: bool);

    /// Records the engine's computed whole-form validity.
    fn set_computed_valid(&mut self, valid: bool);
}
