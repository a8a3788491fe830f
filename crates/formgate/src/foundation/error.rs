//! Configuration-time errors.
//!
//! A rule returning `false` during a validation run is never an error —
//! negative verdicts travel as booleans through the validation entry
//! points. Errors here mean the *wiring* is wrong, and they surface at
//! bind time, not at validation time.

use thiserror::Error;

/// Errors surfaced while wiring validators to a form.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BindError {
    /// A declarative binding names a validator the registry does not know.
    #[error("unknown validator `{name}`")]
    UnknownValidator {
        /// The name that failed to resolve.
        name: String,
    },

    /// A binding targets a field the host form does not recognise.
    ///
    /// Only returned under [`FieldPolicy::Strict`](crate::engine::FieldPolicy);
    /// the lenient default drops the binding instead.
    #[error("unknown field `{field}`")]
    UnknownField {
        /// The field identifier the form did not recognise.
        field: String,
    },
}
