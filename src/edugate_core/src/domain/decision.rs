use crate::domain::email::Email;
use crate::domain::user::AuthenticatedUser;

/// Outcome of one login attempt. Produced exactly once per attempt; every
/// variant is terminal for that attempt.
#[derive(Debug, PartialEq, Eq)]
pub enum Decision {
    /// Credentials accepted and email verified; navigation to home has
    /// already been triggered.
    Proceed(AuthenticatedUser),
    /// The email failed the institutional domain policy. The identity
    /// provider was never contacted.
    RejectedInvalidDomain,
    /// The identity provider rejected the credential pair (unknown account,
    /// wrong password or provider unavailable - undifferentiated). Carries
    /// the provider's message verbatim.
    RejectedCredentials(String),
    /// Credentials accepted but the account's email is unverified. Carries
    /// the user so the resend sub-flow can be offered.
    RejectedUnverified(AuthenticatedUser),
}

/// The presentation layer's answer to the resend-verification prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResendChoice {
    OptIn,
    OptOut,
}

/// Outcome of the resend sub-flow. Only produced when the user opted in.
#[derive(Debug, PartialEq, Eq)]
pub enum ResendOutcome {
    /// The verification email was dispatched to this address.
    Sent(Email),
    /// Dispatch failed; carries the provider's message verbatim.
    Failed(String),
}
