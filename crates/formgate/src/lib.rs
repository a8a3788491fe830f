//! # formgate
//!
//! Submission-gated form validation orchestration.
//!
//! formgate decides two things for a form: whether it is valid, and — just
//! as important for a UI — *when* invalidity may be shown. Errors never
//! surface before the user has tried to submit, and a reset hides them
//! again, whatever the underlying state.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use formgate::prelude::*;
//!
//! let mut engine = Engine::new();
//! let registry = Registry::new();
//!
//! engine.bind_named(
//!     &mut form,
//!     &registry,
//!     "confirmPassword",
//!     "values-equal",
//!     &["password", "confirmPassword"],
//! )?;
//!
//! if engine.submit(&mut form) {
//!     // proceed — every rule and every host-form check passed
//! } else {
//!     // engine.field_shows_error(&form, "confirmPassword", Some(RULE_KIND))
//! }
//! ```
//!
//! ## Pieces
//!
//! - [`engine::Engine`] — attempted state, bindings, validity, visibility
//! - [`registry::Registry`] — name→rule resolution ([`registry::BuiltIn`]
//!   kinds plus custom factories)
//! - [`foundation::HostForm`] — the boundary trait the host form implements
//! - [`testing::MemoryForm`] — an in-memory form for tests and examples

pub mod binding;
pub mod engine;
pub mod foundation;
pub mod prelude;
pub mod registry;
pub mod testing;
