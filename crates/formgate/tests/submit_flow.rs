//! Scenario tests for the submit / visibility flow.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use formgate::prelude::*;
use formgate::testing::MemoryForm;
use pretty_assertions::assert_eq;
use rstest::rstest;

fn password_form(password: &str, confirm: &str) -> MemoryForm {
    let mut form = MemoryForm::new();
    form.set_value("password", password);
    form.set_value("confirmPassword", confirm);
    form
}

/// Binds `values-equal` over the password pair to `confirmPassword`.
fn bound_engine(form: &mut MemoryForm) -> Engine<MemoryForm> {
    let mut engine = Engine::new();
    let registry = Registry::new();
    engine
        .bind_named(
            form,
            &registry,
            "confirmPassword",
            "values-equal",
            &["password", "confirmPassword"],
        )
        .unwrap();
    engine
}

#[rstest]
#[case::bare(None)]
#[case::required(Some("required"))]
#[case::rule(Some(RULE_KIND))]
fn nothing_shows_before_an_attempt(#[case] kind: Option<&str>) {
    let mut form = password_form("x1", "x2");
    let engine = bound_engine(&mut form);
    // Even with a failing rule and an active built-in error.
    form.set_error("password", "required");

    for field in ["password", "confirmPassword", "ghost"] {
        assert!(!engine.field_shows_error(&form, field, kind));
    }
}

#[test]
fn attempt_surfaces_current_failures() {
    let mut form = password_form("x1", "x2");
    let mut engine = bound_engine(&mut form);

    assert!(!engine.submit(&mut form));
    assert!(engine.field_shows_error(&form, "confirmPassword", None));
    assert!(engine.field_shows_error(&form, "confirmPassword", Some(RULE_KIND)));
    // No rule bound there, built-in validity passes.
    assert!(!engine.field_shows_error(&form, "password", None));
}

#[test]
fn error_kind_filter_distinguishes_kinds() {
    let mut form = MemoryForm::new();
    form.set_value("email", "");
    form.set_error("email", "required");

    let mut engine: Engine<MemoryForm> = Engine::new();
    engine.set_attempted(true);

    assert!(engine.field_shows_error(&form, "email", None));
    assert!(engine.field_shows_error(&form, "email", Some("required")));
    assert!(!engine.field_shows_error(&form, "email", Some("pattern")));
    assert!(!engine.field_shows_error(&form, "email", Some(RULE_KIND)));
}

#[test]
fn validate_form_is_a_conjunction() {
    // Rule fails, host form happy.
    let mut form = password_form("x1", "x2");
    let engine = bound_engine(&mut form);
    assert!(!engine.validate_form(&mut form));

    // Rule passes, host form rejects.
    let mut form = password_form("x1", "x1");
    let engine = bound_engine(&mut form);
    form.set_error("password", "required");
    assert!(!engine.validate_form(&mut form));

    // Both sides happy.
    let mut form = password_form("x1", "x1");
    let engine = bound_engine(&mut form);
    assert!(engine.validate_form(&mut form));
    assert_eq!(form.computed_valid(), Some(true));
}

#[test]
fn every_rule_runs_even_after_a_failure() {
    let mut form = MemoryForm::new();
    form.set_value("a", 1);
    form.set_value("b", 2);

    let mut engine = Engine::new();
    engine.bind(&mut form, "a", |_| false).unwrap();
    engine.bind(&mut form, "b", |_| true).unwrap();

    // A stale failure on `b` must be cleared by the pass that follows
    // `a`'s failure.
    form.set_rule_failed("b", true);
    assert!(!engine.validate_fields(&mut form));
    assert!(form.rule_failed("a"));
    assert!(!form.rule_failed("b"));
}

#[test]
fn repeated_validation_is_idempotent() {
    let mut form = password_form("x1", "x2");
    let engine = bound_engine(&mut form);

    let first = engine.validate_form(&mut form);
    let computed = form.computed_valid();
    let rule_flag = form.rule_failed("confirmPassword");

    let second = engine.validate_form(&mut form);
    assert_eq!(first, second);
    assert_eq!(form.computed_valid(), computed);
    assert_eq!(form.rule_failed("confirmPassword"), rule_flag);
    assert_eq!(form.computed_valid(), Some(false));
}

#[test]
fn reset_hides_errors_immediately() {
    let mut form = password_form("x1", "x2");
    let mut engine = bound_engine(&mut form);
    form.set_error("password", "required");

    assert!(!engine.submit(&mut form));
    assert!(engine.field_shows_error(&form, "password", None));
    assert!(engine.field_shows_error(&form, "confirmPassword", None));

    engine.reset();
    for field in ["password", "confirmPassword"] {
        assert!(!engine.field_shows_error(&form, field, None));
    }
}

#[test]
fn unknown_validator_name_fails_at_bind_time() {
    let mut form = password_form("x1", "x2");
    let mut engine = Engine::new();
    let registry = Registry::new();

    let err = engine
        .bind_named(
            &mut form,
            &registry,
            "confirmPassword",
            "values-equl",
            &["password", "confirmPassword"],
        )
        .unwrap_err();
    assert_eq!(
        err,
        BindError::UnknownValidator {
            name: "values-equl".to_owned()
        }
    );
    assert!(engine.bindings().is_empty());
}

#[test]
fn unknown_field_is_dropped_or_rejected_by_policy() {
    let mut form = password_form("x1", "x2");
    let registry = Registry::new();

    // Lenient: no error, no binding, no effect on later runs.
    let mut engine = Engine::new();
    engine
        .bind_named(&mut form, &registry, "nickname", "values-equal", &["a", "b"])
        .unwrap();
    assert!(engine.bindings().is_empty());
    assert!(engine.validate_fields(&mut form));

    // Strict: typed failure.
    let mut engine = Engine::new().with_policy(FieldPolicy::Strict);
    let err = engine
        .bind_named(&mut form, &registry, "nickname", "values-equal", &["a", "b"])
        .unwrap_err();
    assert_eq!(
        err,
        BindError::UnknownField {
            field: "nickname".to_owned()
        }
    );
}

#[test]
fn submit_fires_the_invalid_hook_only_on_failure() {
    let fired = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&fired);

    let mut form = password_form("x1", "x2");
    let mut engine = Engine::new().with_invalid_hook(move |_form: &MemoryForm| {
        counter.fetch_add(1, Ordering::SeqCst);
    });
    let registry = Registry::new();
    engine
        .bind_named(
            &mut form,
            &registry,
            "confirmPassword",
            "values-equal",
            &["password", "confirmPassword"],
        )
        .unwrap();

    assert!(!engine.submit(&mut form));
    assert_eq!(fired.load(Ordering::SeqCst), 1);

    form.set_value("confirmPassword", "x1");
    assert!(engine.submit(&mut form));
    assert_eq!(fired.load(Ordering::SeqCst), 1);
}

#[test]
fn password_confirmation_end_to_end() {
    let mut form = password_form("x1", "x2");
    let mut engine = bound_engine(&mut form);

    // Submission attempt fails and surfaces the mismatch.
    assert!(!engine.submit(&mut form));
    assert_eq!(form.computed_valid(), Some(false));
    assert!(engine.field_shows_error(&form, "confirmPassword", Some(RULE_KIND)));
    assert!(!engine.field_shows_error(&form, "password", None));

    // The user corrects the confirmation; the host refreshes on change and
    // the error clears without another submission.
    form.set_value("confirmPassword", "x1");
    assert!(!engine.refresh_field(&mut form, "confirmPassword"));
    assert!(!engine.field_shows_error(&form, "confirmPassword", Some(RULE_KIND)));

    assert!(engine.submit(&mut form));
    assert_eq!(form.computed_valid(), Some(true));
}
