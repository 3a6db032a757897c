use edugate_core::{AuthenticatedUser, IdentityProvider, ResendChoice, ResendOutcome};

/// Resend-verification use case - the recovery path offered after an
/// unverified-login rejection.
pub struct ResendVerificationUseCase<'a, P>
where
    P: IdentityProvider,
{
    identity_provider: &'a P,
}

impl<'a, P> ResendVerificationUseCase<'a, P>
where
    P: IdentityProvider,
{
    pub fn new(identity_provider: &'a P) -> Self {
        Self { identity_provider }
    }

    /// Execute the resend sub-flow for an unverified user.
    ///
    /// # Arguments
    /// * `user` - The user from the `RejectedUnverified` decision
    /// * `choice` - The presentation layer's answer to the resend prompt
    ///
    /// # Returns
    /// `None` on opt-out (no provider call, no observable effect), otherwise
    /// the dispatch outcome. No retry is attempted on failure, and this
    /// never re-attempts login or re-evaluates the domain gate.
    #[tracing::instrument(name = "ResendVerificationUseCase::execute", skip(self, user))]
    pub async fn execute(
        &self,
        user: &AuthenticatedUser,
        choice: ResendChoice,
    ) -> Option<ResendOutcome> {
        if choice == ResendChoice::OptOut {
            return None;
        }

        match self.identity_provider.send_verification_email(user).await {
            Ok(()) => {
                tracing::info!(email = %user.email(), "verification email dispatched");
                Some(ResendOutcome::Sent(user.email().clone()))
            }
            Err(error) => {
                tracing::warn!(email = %user.email(), "verification email dispatch failed");
                Some(ResendOutcome::Failed(error.message().to_owned()))
            }
        }
    }
}
