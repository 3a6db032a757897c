use edugate_core::{
    AuthenticatedUser, Credential, Decision, IdentityProvider, Navigator, ResendChoice,
    ResendOutcome,
};

use crate::use_cases::{
    attempt_login::LoginUseCase, resend_verification::ResendVerificationUseCase,
};

/// Authentication session controller - the entry point the presentation
/// layer wires its event handlers to.
///
/// Exposes exactly two operations: [`attempt_login`](Self::attempt_login)
/// for the submit handler and
/// [`resend_verification`](Self::resend_verification) for the resend prompt.
/// Stateless across attempts: no attempt counter, no lockout, no shared
/// mutable state. Single-attempt-at-a-time usage is the caller's contract
/// (the presentation layer disables re-submission while an attempt is
/// outstanding).
pub struct SessionController<P, N>
where
    P: IdentityProvider,
    N: Navigator,
{
    identity_provider: P,
    navigator: N,
}

impl<P, N> SessionController<P, N>
where
    P: IdentityProvider,
    N: Navigator,
{
    pub fn new(identity_provider: P, navigator: N) -> Self {
        Self {
            identity_provider,
            navigator,
        }
    }

    /// Run one login attempt through the domain, credential and verification
    /// gates. Always resolves to a [`Decision`]; never fails out.
    pub async fn attempt_login(&self, credential: Credential) -> Decision {
        LoginUseCase::new(&self.identity_provider, &self.navigator)
            .execute(credential)
            .await
    }

    /// Run the resend sub-flow for a user rejected as unverified.
    pub async fn resend_verification(
        &self,
        user: &AuthenticatedUser,
        choice: ResendChoice,
    ) -> Option<ResendOutcome> {
        ResendVerificationUseCase::new(&self.identity_provider)
            .execute(user, choice)
            .await
    }
}
