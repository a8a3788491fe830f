//! A signup form with password confirmation, driven end to end.
//!
//! Run with: `cargo run --example signup`

use formgate::prelude::*;
use formgate::testing::MemoryForm;

fn main() -> Result<(), BindError> {
    let mut form = MemoryForm::new();
    form.set_value("password", "hunter2");
    form.set_value("confirmPassword", "hunter3");

    let registry = Registry::new();
    let mut engine = Engine::new().with_invalid_hook(|_form: &MemoryForm| {
        println!("(hook) submission rejected — focus the first error");
    });

    engine.bind_named(
        &mut form,
        &registry,
        "confirmPassword",
        "values-equal",
        &["password", "confirmPassword"],
    )?;

    // Nothing shows before the user tries to submit.
    assert!(!engine.field_shows_error(&form, "confirmPassword", Some(RULE_KIND)));

    if !engine.submit(&mut form) {
        println!(
            "confirmPassword shows its error: {}",
            engine.field_shows_error(&form, "confirmPassword", Some(RULE_KIND))
        );
    }

    // The user fixes the field; the host refreshes on change and the
    // error disappears without another submission.
    form.set_value("confirmPassword", "hunter2");
    engine.refresh_field(&mut form, "confirmPassword");
    println!(
        "after correction the error is gone: {}",
        !engine.field_shows_error(&form, "confirmPassword", Some(RULE_KIND))
    );

    println!("second submit passes: {}", engine.submit(&mut form));
    Ok(())
}
