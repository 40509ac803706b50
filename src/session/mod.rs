//! Session gate and login form.
//!
//! The gate holds either [`Session::LoggedOut`] or [`Session::LoggedIn`] and
//! decides which screen is shown. No credential is verified anywhere; the
//! form only checks that both fields are present and the email has an `@`.

mod login;

pub use login::{validate_credentials, LoginError, LoginField, LoginForm};

/// Authentication state of the single local user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Session {
    #[default]
    LoggedOut,
    LoggedIn {
        email: String,
    },
}

/// Owns the session state and the login form shown while logged out.
#[derive(Debug, Default)]
pub struct SessionGate {
    session: Session,
    form: LoginForm,
}

impl SessionGate {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn session(&self) -> &Session {
        &self.session
    }

    #[must_use]
    pub const fn is_logged_in(&self) -> bool {
        matches!(self.session, Session::LoggedIn { .. })
    }

    #[must_use]
    pub fn user_email(&self) -> Option<&str> {
        match &self.session {
            Session::LoggedIn { email } => Some(email),
            Session::LoggedOut => None,
        }
    }

    #[must_use]
    pub const fn login_form(&self) -> &LoginForm {
        &self.form
    }

    pub fn login_form_mut(&mut self) -> &mut LoginForm {
        &mut self.form
    }

    /// Submit the login form.
    ///
    /// On success the gate moves to `LoggedIn` with the email exactly as
    /// typed, the form is reset, and the email is returned. On failure the
    /// form keeps its input and carries the error; the state stays
    /// `LoggedOut`.
    pub fn submit_login(&mut self) -> Option<&str> {
        if self.is_logged_in() {
            return None;
        }
        let email = self.form.submit()?;
        tracing::info!(email = %email, "logged in");
        self.form = LoginForm::default();
        self.session = Session::LoggedIn { email };
        self.user_email()
    }

    /// Leave the session and clear the stored email.
    pub fn logout(&mut self) {
        if let Session::LoggedIn { email } = &self.session {
            tracing::info!(email = %email, "logged out");
        }
        self.session = Session::LoggedOut;
        self.form = LoginForm::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fill(gate: &mut SessionGate, email: &str, password: &str) {
        let form = gate.login_form_mut();
        form.email = email.to_string();
        form.password = password.to_string();
    }

    #[test]
    fn test_starts_logged_out() {
        let gate = SessionGate::new();
        assert_eq!(gate.session(), &Session::LoggedOut);
        assert_eq!(gate.user_email(), None);
    }

    #[test]
    fn test_successful_login_keeps_email_verbatim() {
        let mut gate = SessionGate::new();
        fill(&mut gate, " Ana@Example.com", "x");
        assert_eq!(gate.submit_login(), Some(" Ana@Example.com"));
        assert!(gate.is_logged_in());
        assert_eq!(gate.user_email(), Some(" Ana@Example.com"));
        assert!(gate.login_form().email.is_empty());
    }

    #[test]
    fn test_failed_login_stays_logged_out() {
        let mut gate = SessionGate::new();
        fill(&mut gate, "ana", "secret");
        assert_eq!(gate.submit_login(), None);
        assert!(!gate.is_logged_in());
        assert_eq!(gate.login_form().error, Some(LoginError::InvalidEmail));
        assert_eq!(gate.login_form().email, "ana");
    }

    #[test]
    fn test_logout_clears_email() {
        let mut gate = SessionGate::new();
        fill(&mut gate, "ana@example.com", "secret");
        gate.submit_login();
        gate.logout();
        assert_eq!(gate.session(), &Session::LoggedOut);
        assert_eq!(gate.user_email(), None);
    }
}
