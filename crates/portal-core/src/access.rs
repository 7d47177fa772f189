//! Access gate - validates the client code against the configured secret.
//!
//! The secret is injected as an [`AccessCode`] so each deployment (and each
//! test) can carry its own value. Validation is an exact comparison against the
//! trimmed input: no partial matching, no case folding.

use std::fmt;

use crate::error::{PortalError, PortalResult};

/// Inline message shown under the field while the entered code is wrong.
pub const WRONG_CODE_MESSAGE: &str = "Wrong code. Please try again.";

/// The secret a client must enter to reach the gallery.
#[derive(Clone, PartialEq, Eq)]
pub struct AccessCode(String);

impl AccessCode {
    /// Create a secret, rejecting values no trimmed input could ever equal.
    pub fn new(secret: impl Into<String>) -> PortalResult<Self> {
        let secret = secret.into();
        if secret.is_empty() {
            return Err(PortalError::Config("access code must not be empty".to_string()));
        }
        if secret.trim() != secret {
            return Err(PortalError::Config(
                "access code must not start or end with whitespace".to_string(),
            ));
        }
        Ok(Self(secret))
    }

    /// Exact comparison against the trimmed candidate.
    pub fn matches(&self, candidate: &str) -> bool {
        candidate.trim() == self.0
    }
}

// Never print the secret into logs.
impl fmt::Debug for AccessCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AccessCode(***)")
    }
}

/// Validation rules for the access form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessGate {
    secret: AccessCode,
}

impl AccessGate {
    pub fn new(secret: AccessCode) -> Self {
        Self { secret }
    }

    /// `trim(code) == SECRET`
    pub fn is_valid(&self, code: &str) -> bool {
        self.secret.matches(code)
    }

    /// Whether the submit button is enabled.
    pub fn can_submit(&self, code: &str, submitting: bool) -> bool {
        !submitting && self.is_valid(code)
    }

    /// Whether the inline error is visible. An empty field shows nothing.
    pub fn shows_error(&self, code: &str) -> bool {
        !code.is_empty() && !self.is_valid(code)
    }

    /// Validate a submission and return the trimmed code to echo.
    pub fn check(&self, code: &str) -> PortalResult<String> {
        if self.is_valid(code) {
            Ok(code.trim().to_string())
        } else {
            Err(PortalError::InvalidAccessCode)
        }
    }
}
