pub mod domain;
pub mod ports;

// Re-export commonly used types for convenience
pub use domain::{
    credential::{Credential, CredentialError},
    decision::{Decision, ResendChoice, ResendOutcome},
    email::{Email, EmailError},
    password::{Password, PasswordError},
    user::AuthenticatedUser,
};

pub use ports::{
    identity_provider::{IdentityProvider, IdentityProviderError},
    navigator::{Navigator, Route},
};
