use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{email::Email, password::Password, user::AuthenticatedUser};

// IdentityProvider port trait and errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum IdentityProviderError {
    #[error("credentials rejected: {0}")]
    CredentialsRejected(String),
    #[error("verification email dispatch failed: {0}")]
    DispatchFailed(String),
}

impl IdentityProviderError {
    /// The provider-supplied message, passed through verbatim for display.
    pub fn message(&self) -> &str {
        match self {
            Self::CredentialsRejected(message) | Self::DispatchFailed(message) => message,
        }
    }
}

#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Verify a credential pair against the provider.
    ///
    /// Failures are undifferentiated: unknown account, wrong password and
    /// transient provider errors all surface as
    /// [`IdentityProviderError::CredentialsRejected`] carrying the
    /// provider's message.
    async fn authenticate(
        &self,
        email: &Email,
        password: &Password,
    ) -> Result<AuthenticatedUser, IdentityProviderError>;

    /// Dispatch a verification email for the given account.
    async fn send_verification_email(
        &self,
        user: &AuthenticatedUser,
    ) -> Result<(), IdentityProviderError>;
}
