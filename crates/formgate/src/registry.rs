//! Named validator resolution.
//!
//! Declarative binding sites refer to validators by string name. The
//! [`Registry`] turns a name plus an ordered field group into a ready
//! [`Rule`], failing with a typed error at bind time when the name is
//! unknown. Built-in kinds are a closed enum ([`BuiltIn`]); custom
//! factories layer on top.
//!
//! The registry is a plain value, injected wherever it is needed —
//! independent forms can share one registry or keep isolated ones.

use std::collections::HashMap;
use std::fmt;

use smallvec::SmallVec;

use crate::binding::Rule;
use crate::foundation::{BindError, HostForm};

/// Ordered field group captured by a built-in rule. Groups are almost
/// always 2–3 fields.
type FieldGroup = SmallVec<[String; 4]>;

/// Factory producing a rule over an ordered field group.
pub type RuleFactory<F> = Box<dyn Fn(&[&str]) -> Rule<F> + Send + Sync>;

// ============================================================================
// BUILT-IN KINDS
// ============================================================================

/// Built-in validator kinds, resolved by exact, case-sensitive name match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BuiltIn {
    /// Every field in the group carries the same view value as the first.
    ValuesEqual,
    /// Each adjacent pair of fields compares strictly increasing.
    StrictlyIncreasing,
}

impl BuiltIn {
    /// All built-in kinds, in registry order.
    pub const ALL: [Self; 2] = [Self::ValuesEqual, Self::StrictlyIncreasing];

    /// The registry name of this kind.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::ValuesEqual => "values-equal",
            Self::StrictlyIncreasing => "strictly-increasing",
        }
    }

    /// Exact-match lookup; `None` for unknown names.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.name() == name)
    }

    /// Builds the rule for this kind over an ordered field group.
    #[must_use]
    pub fn build<F: HostForm>(self, fields: &[&str]) -> Rule<F> {
        match self {
            Self::ValuesEqual => values_equal(fields),
            Self::StrictlyIncreasing => strictly_increasing(fields),
        }
    }
}

// ============================================================================
// BUILT-IN RULE FACTORIES
// ============================================================================

/// Rule: every field's view value equals the first field's view value.
///
/// Equality is by value under [`ViewValue`](crate::foundation::ViewValue)
/// semantics — same variant, same content, no coercion. Groups of fewer
/// than two fields pass trivially. A field the form cannot read counts as
/// a failure.
#[must_use]
pub fn values_equal<F: HostForm>(fields: &[&str]) -> Rule<F> {
    let fields: FieldGroup = fields.iter().map(|&f| f.to_owned()).collect();
    Box::new(move |form| {
        if fields.len() < 2 {
            return true;
        }
        let Some(reference) = form.view_value(&fields[0]) else {
            return false;
        };
        fields[1..]
            .iter()
            .all(|field| form.view_value(field).is_some_and(|value| value == reference))
    })
}

/// Rule: each adjacent pair of fields compares strictly increasing, under
/// the ordering natural to the value variant (numeric for numbers,
/// lexicographic for strings).
///
/// Groups of fewer than two fields pass trivially. Unreadable fields and
/// cross-variant pairs (which have no ordering) count as failures.
#[must_use]
pub fn strictly_increasing<F: HostForm>(fields: &[&str]) -> Rule<F> {
    let fields: FieldGroup = fields.iter().map(|&f| f.to_owned()).collect();
    Box::new(move |form| {
        fields.windows(2).all(|pair| {
            match (form.view_value(&pair[0]), form.view_value(&pair[1])) {
                (Some(earlier), Some(later)) => earlier < later,
                _ => false,
            }
        })
    })
}

// ============================================================================
// REGISTRY
// ============================================================================

/// Name→factory lookup for validator rules.
///
/// Built-in kinds are always present. Custom factories registered under the
/// same name shadow them.
pub struct Registry<F> {
    custom: HashMap<String, RuleFactory<F>>,
}

impl<F: HostForm> Registry<F> {
    /// Creates a registry holding only the built-in kinds.
    #[must_use]
    pub fn new() -> Self {
        Self {
            custom: HashMap::new(),
        }
    }

    /// True iff `name` is one of the built-in kinds. Exact, case-sensitive.
    #[must_use]
    pub fn is_built_in(name: &str) -> bool {
        BuiltIn::from_name(name).is_some()
    }

    /// True iff [`resolve`](Self::resolve) would succeed for `name`.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.custom.contains_key(name) || Self::is_built_in(name)
    }

    /// Registers a custom factory under `name`, shadowing any previous
    /// registration and any built-in of the same name.
    pub fn register(&mut self, name: impl Into<String>, factory: RuleFactory<F>) {
        self.custom.insert(name.into(), factory);
    }

    /// Resolves `name` into a rule over an ordered field group.
    ///
    /// # Errors
    ///
    /// [`BindError::UnknownValidator`] when no factory answers to `name`.
    pub fn resolve(&self, name: &str, fields: &[&str]) -> Result<Rule<F>, BindError> {
        if let Some(factory) = self.custom.get(name) {
            return Ok(factory(fields));
        }
        BuiltIn::from_name(name)
            .map(|kind| kind.build(fields))
            .ok_or_else(|| BindError::UnknownValidator {
                name: name.to_owned(),
            })
    }
}

impl<F: HostForm> Default for Registry<F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F> fmt::Debug for Registry<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<&str> = self.custom.keys().map(String::as_str).collect();
        names.sort_unstable();
        f.debug_struct("Registry").field("custom", &names).finish()
    }
}

// ============================================================================
// TESTS
// ============================================================================
