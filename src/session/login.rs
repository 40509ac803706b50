//! Login form state and its presence checks.

use thiserror::Error;

/// Why a login submission was rejected.
///
/// The display strings are the inline messages shown under the form.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginError {
    #[error("Por favor ingresa tu correo electrónico")]
    MissingEmail,

    #[error("Por favor ingresa tu contraseña")]
    MissingPassword,

    #[error("Por favor ingresa un correo electrónico válido")]
    InvalidEmail,
}

/// Check the login inputs in the order the form reports them.
pub fn validate_credentials(email: &str, password: &str) -> Result<(), LoginError> {
    if email.is_empty() {
        return Err(LoginError::MissingEmail);
    }
    if password.is_empty() {
        return Err(LoginError::MissingPassword);
    }
    if !email.contains('@') {
        return Err(LoginError::InvalidEmail);
    }
    Ok(())
}

/// Input focus on the login screen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LoginField {
    #[default]
    Email,
    Password,
}

impl LoginField {
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Email => Self::Password,
            Self::Password => Self::Email,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
    pub show_password: bool,
    pub focus: LoginField,
    pub error: Option<LoginError>,
}

impl LoginForm {
    /// Validate the current input.
    ///
    /// Returns the email on success. A failed submission keeps the input
    /// and records the error; any previous error is cleared first.
    pub fn submit(&mut self) -> Option<String> {
        self.error = None;
        match validate_credentials(&self.email, &self.password) {
            Ok(()) => Some(self.email.clone()),
            Err(err) => {
                tracing::debug!(error = ?err, "login rejected");
                self.error = Some(err);
                None
            }
        }
    }

    pub fn toggle_password_visibility(&mut self) {
        self.show_password = !self.show_password;
    }

    /// Text of the focused input.
    pub fn focused_mut(&mut self) -> &mut String {
        match self.focus {
            LoginField::Email => &mut self.email,
            LoginField::Password => &mut self.password,
        }
    }

    pub fn push_char(&mut self, c: char) {
        self.focused_mut().push(c);
    }

    pub fn pop_char(&mut self) {
        self.focused_mut().pop();
    }

    /// Password as displayed: bullets unless visibility is toggled on.
    #[must_use]
    pub fn masked_password(&self) -> String {
        if self.show_password {
            self.password.clone()
        } else {
            "•".repeat(self.password.chars().count())
        }
    }
}
