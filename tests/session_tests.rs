//! Integration tests for the login gate.

use mailflow::session::{LoginField, LoginForm};
use mailflow::{LoginError, Session, SessionGate};

fn submit(email: &str, password: &str) -> (SessionGate, Option<String>) {
    let mut gate = SessionGate::new();
    let form = gate.login_form_mut();
    form.email = email.to_string();
    form.password = password.to_string();
    let result = gate.submit_login().map(str::to_string);
    (gate, result)
}

#[test]
fn test_empty_email_reports_missing_email() {
    let (gate, result) = submit("", "secret");
    assert_eq!(result, None);
    assert_eq!(gate.session(), &Session::LoggedOut);
    assert_eq!(gate.login_form().error, Some(LoginError::MissingEmail));
    assert_eq!(
        gate.login_form().error.map(|e| e.to_string()).as_deref(),
        Some("Por favor ingresa tu correo electrónico")
    );
}

#[test]
fn test_empty_password_reports_missing_password() {
    let (gate, result) = submit("ana@example.com", "");
    assert_eq!(result, None);
    assert!(!gate.is_logged_in());
    assert_eq!(gate.login_form().error, Some(LoginError::MissingPassword));
}

#[test]
fn test_email_without_at_is_invalid() {
    let (gate, _) = submit("ana.example.com", "secret");
    assert!(!gate.is_logged_in());
    assert_eq!(gate.login_form().error, Some(LoginError::InvalidEmail));
    assert_eq!(
        LoginError::InvalidEmail.to_string(),
        "Por favor ingresa un correo electrónico válido"
    );
}

#[test]
fn test_any_password_logs_in_with_verbatim_email() {
    for (email, password) in [("a@b", "x"), ("  Mixed@Case.ORG ", "anything at all"), ("@", "1")] {
        let (gate, result) = submit(email, password);
        assert_eq!(result.as_deref(), Some(email));
        assert_eq!(
            gate.session(),
            &Session::LoggedIn {
                email: email.to_string()
            }
        );
    }
}

#[test]
fn test_retry_after_failure() {
    let mut gate = SessionGate::new();
    gate.login_form_mut().email = "ana".to_string();
    gate.login_form_mut().password = "pw".to_string();
    assert!(gate.submit_login().is_none());

    gate.login_form_mut().email.push_str("@example.com");
    assert_eq!(gate.submit_login(), Some("ana@example.com"));
    assert_eq!(gate.login_form(), &LoginForm::default());
}

#[test]
fn test_logout_then_login_again() {
    let (mut gate, _) = submit("ana@example.com", "pw");
    gate.logout();
    assert_eq!(gate.user_email(), None);
    assert_eq!(gate.login_form().focus, LoginField::Email);

    let form = gate.login_form_mut();
    form.email = "luis@example.com".to_string();
    form.password = "pw".to_string();
    assert_eq!(gate.submit_login(), Some("luis@example.com"));
}
