//! Boundary types shared across the crate.
//!
//! This module holds the two contracts everything else is written against:
//!
//! - **Form boundary**: [`HostForm`] and [`ViewValue`] — what the engine
//!   may read from and write onto the external host form.
//! - **Errors**: [`BindError`] — the configuration-time failures. Rule
//!   verdicts during a validation run are booleans, never errors.

pub mod error;
pub mod form;

pub use error::BindError;
pub use form::{HostForm, RULE_KIND, ViewValue};
