use edugate_core::{Credential, Decision, Email, IdentityProvider, Navigator, Route};

/// Login use case - turns one raw credential pair into a [`Decision`].
///
/// The pipeline is: domain gate, credential check, verification gate. Each
/// gate is terminal on failure, and every provider failure is converted at
/// the call site; this never returns an error to the presentation layer.
pub struct LoginUseCase<'a, P, N>
where
    P: IdentityProvider,
    N: Navigator,
{
    identity_provider: &'a P,
    navigator: &'a N,
}

impl<'a, P, N> LoginUseCase<'a, P, N>
where
    P: IdentityProvider,
    N: Navigator,
{
    pub fn new(identity_provider: &'a P, navigator: &'a N) -> Self {
        Self {
            identity_provider,
            navigator,
        }
    }

    /// Execute one login attempt.
    ///
    /// # Arguments
    /// * `credential` - Raw credential pair, consumed by this attempt
    ///
    /// # Returns
    /// Exactly one [`Decision`]; `Proceed` is the only variant that triggers
    /// a navigator transition (to home, exactly once).
    #[tracing::instrument(name = "LoginUseCase::execute", skip(self, credential))]
    pub async fn execute(&self, credential: Credential) -> Decision {
        // Domain gate: evaluated before any network call. Invalid-domain
        // attempts never reach the provider.
        let Ok(email) = Email::parse(credential.email()) else {
            tracing::info!("login rejected by domain policy");
            return Decision::RejectedInvalidDomain;
        };

        // Credential check: the provider is contacted exactly once, no retry.
        let user = match self
            .identity_provider
            .authenticate(&email, credential.password())
            .await
        {
            Ok(user) => user,
            Err(error) => {
                tracing::info!(%email, "login rejected by identity provider");
                return Decision::RejectedCredentials(error.message().to_owned());
            }
        };

        // Verification gate: unverified accounts stop here, no navigation.
        if !user.is_verified() {
            tracing::info!(%email, "login rejected: email not verified");
            return Decision::RejectedUnverified(user);
        }

        self.navigator.navigate_to(Route::Home {
            email: user.email().clone(),
        });
        Decision::Proceed(user)
    }
}
