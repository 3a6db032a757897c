use secrecy::{ExposeSecret, Secret};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PasswordError {
    #[error("password must not be empty")]
    Empty,
}

/// A password as typed by the user. Wrapped in [`Secret`] so it is redacted
/// from `Debug` output and never ends up in logs or spans.
#[derive(Debug, Clone)]
pub struct Password(Secret<String>);

impl TryFrom<Secret<String>> for Password {
    type Error = PasswordError;

    fn try_from(raw: Secret<String>) -> Result<Self, Self::Error> {
        if raw.expose_secret().is_empty() {
            return Err(PasswordError::Empty);
        }
        Ok(Self(raw))
    }
}

impl AsRef<Secret<String>> for Password {
    fn as_ref(&self) -> &Secret<String> {
        &self.0
    }
}
