use secrecy::Secret;
use thiserror::Error;

use crate::domain::password::{Password, PasswordError};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CredentialError {
    #[error("email must not be empty")]
    EmptyEmail,
    #[error(transparent)]
    Password(#[from] PasswordError),
}

/// Raw credential pair as collected by the presentation layer.
///
/// Ephemeral: created at submission time, consumed by one login attempt and
/// then discarded. The email is kept raw here; it only becomes an
/// [`Email`](crate::Email) once it passes the domain gate.
pub struct Credential {
    email: String,
    password: Password,
}

impl Credential {
    pub fn new(email: String, password: Secret<String>) -> Result<Self, CredentialError> {
        if email.is_empty() {
            return Err(CredentialError::EmptyEmail);
        }
        let password = Password::try_from(password)?;
        Ok(Self { email, password })
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password(&self) -> &Password {
        &self.password
    }
}
