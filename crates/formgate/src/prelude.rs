//! Prelude module for convenient imports.
//!
//! Provides a single `use formgate::prelude::*;` import that brings in the
//! engine, the registry, the boundary types, and the built-in rule
//! factories.

pub use crate::binding::{Binding, Rule};
pub use crate::engine::{Engine, FieldPolicy};
pub use crate::foundation::{BindError, HostForm, RULE_KIND, ViewValue};
pub use crate::registry::{
    BuiltIn, Registry, RuleFactory, strictly_increasing, values_equal,
};
