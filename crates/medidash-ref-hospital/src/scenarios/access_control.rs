//! Scenario 4: Access control.
//!
//! Signed out, every page bounces to `/login`. The login form checks its
//! fields before the gate ever sees them, wrong credentials are refused
//! with one banner message, and the demo doctor gets in. Signed in,
//! `/login` bounces back to the dashboard and unknown paths land there too.

use medidash_auth::{password_strength, AuthConfig, AuthGate, Route};
use medidash_contracts::{error::MedidashResult, user::User, validate::ValidationReport};
use medidash_validate::LoginForm;

/// Banner shown when the gate refuses a well-formed login.
pub const INVALID_CREDENTIALS: &str = "Invalid email or password. Please try again.";

/// What submitting the login form did.
#[derive(Debug, Clone, PartialEq)]
pub enum LoginAttempt {
    /// A field failed; the gate was not asked.
    Invalid(ValidationReport),
    /// The form was fine but the credentials did not match.
    Refused,
    SignedIn(User),
}

/// Validate `form`, then ask `gate` to sign in.
pub fn submit_login(gate: &mut AuthGate, form: &LoginForm) -> MedidashResult<LoginAttempt> {
    let report = form.validate()?;
    if !report.passed {
        return Ok(LoginAttempt::Invalid(report));
    }
    if !gate.login(&form.email, &form.password) {
        return Ok(LoginAttempt::Refused);
    }
    Ok(gate
        .current_user()
        .cloned()
        .map_or(LoginAttempt::Refused, LoginAttempt::SignedIn))
}

fn print_routes(gate: &AuthGate, paths: &[&str]) {
    for path in paths {
        println!("    {:<14} -> {}", path, gate.resolve(path));
    }
}

fn print_attempt(label: &str, attempt: &LoginAttempt) {
    match attempt {
        LoginAttempt::Invalid(report) => {
            println!("  {label}: held back by the form");
            for failure in &report.failures {
                println!("    - {}: {}", failure.field, failure.message);
            }
        }
        LoginAttempt::Refused => println!("  {label}: {INVALID_CREDENTIALS}"),
        LoginAttempt::SignedIn(user) => {
            println!("  {label}: signed in as {} ({})", user.name, user.role)
        }
    }
}

pub fn run_scenario() -> MedidashResult<()> {
    println!("=== Scenario 4: Access Control ===");
    println!();

    let config = AuthConfig::default();
    let mut gate = AuthGate::new(config.clone());
    let paths = ["/", "/patients", "/login", "/reports"];

    println!("  Signed out:");
    print_routes(&gate, &paths);
    println!();

    for password in ["", "abc", "secret1", config.password.as_str(), "correct-horse-battery"] {
        let strength = password_strength(password);
        println!("  Strength {:<24} {} ({}/4)", format!("{password:?}"), strength.label(), strength.score());
    }
    println!();

    let attempts = [
        ("Malformed email", LoginForm::new("doctor", "pass")),
        ("Wrong password", LoginForm::new(config.email.as_str(), "password124")),
        ("Demo doctor", LoginForm::new(config.email.as_str(), config.password.as_str())),
    ];
    for (label, form) in &attempts {
        let attempt = submit_login(&mut gate, form)?;
        print_attempt(label, &attempt);
    }
    println!();

    println!("  Signed in:");
    print_routes(&gate, &paths);
    println!();

    gate.logout();
    println!(
        "  Logged out; {} now resolves to {}",
        Route::Settings,
        gate.resolve(Route::Settings.path())
    );
    println!();
    println!("Scenario 4 complete.");
    println!();
    Ok(())
}
