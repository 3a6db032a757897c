use crate::domain::email::Email;

/// User record as reported by the identity provider after a successful
/// credential check. Read-only for the lifetime of one decision.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedUser {
    email: Email,
    email_verified: bool,
}

impl AuthenticatedUser {
    pub fn new(email: Email, email_verified: bool) -> Self {
        Self {
            email,
            email_verified,
        }
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    pub fn is_verified(&self) -> bool {
        self.email_verified
    }
}
