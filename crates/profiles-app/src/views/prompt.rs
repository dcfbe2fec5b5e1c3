//! Password prompt session for profile creation.
//!
//! Transient view state only: opened when the user asks to create a
//! profile, reset when creation succeeds or the user cancels.

use profiles_core::ProfileError;
use std::fmt;

/// Name of the password field for generic field binding.
pub const PASSWORD_FIELD: &str = "password";

/// Transient password prompt state.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct PasswordPrompt {
    is_open: bool,
    processing: bool,
    password: String,
    error: Option<String>,
}

impl fmt::Debug for PasswordPrompt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PasswordPrompt")
            .field("is_open", &self.is_open)
            .field("processing", &self.processing)
            .field("password", &"<redacted>")
            .field("error", &self.error)
            .finish()
    }
}

impl PasswordPrompt {
    /// Create a closed prompt.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the prompt is showing.
    pub fn is_open(&self) -> bool {
        self.is_open
    }

    /// Whether a creation request is in flight.
    pub fn is_processing(&self) -> bool {
        self.processing
    }

    /// Entered password.
    pub fn password(&self) -> &str {
        &self.password
    }

    /// Error from the last creation attempt.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Open with a clean slate: no error, not processing.
    pub fn open(&mut self) {
        self.processing = false;
        self.error = None;
        self.is_open = true;
    }

    /// Close and discard the entered password.
    pub fn close(&mut self) {
        self.is_open = false;
        self.password.clear();
    }

    /// Bind a named field value.
    pub fn set_field(&mut self, name: &str, value: impl Into<String>) -> Result<(), ProfileError> {
        match name {
            PASSWORD_FIELD => {
                self.password = value.into();
                Ok(())
            }
            other => Err(ProfileError::UnknownField(other.to_string())),
        }
    }

    pub(crate) fn begin_processing(&mut self) {
        self.processing = true;
    }

    /// Record a failure; the user must resubmit.
    pub(crate) fn fail(&mut self, message: impl Into<String>) {
        self.processing = false;
        self.error = Some(message.into());
    }

    pub(crate) fn clear_error(&mut self) {
        self.error = None;
    }

    /// Creation succeeded: clear the session and close.
    pub(crate) fn complete(&mut self) {
        self.processing = false;
        self.password.clear();
        self.close();
    }
}
