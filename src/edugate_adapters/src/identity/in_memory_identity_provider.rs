use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use secrecy::{ExposeSecret, Secret};

use edugate_core::{AuthenticatedUser, Email, IdentityProvider, IdentityProviderError, Password};

struct Account {
    password: Secret<String>,
    email_verified: bool,
}

/// In-memory identity provider for local development and tests.
///
/// Clone shares the underlying account map. Dispatched verification emails
/// are recorded instead of sent.
#[derive(Default, Clone)]
pub struct InMemoryIdentityProvider {
    accounts: Arc<RwLock<HashMap<Email, Account>>>,
    dispatched: Arc<RwLock<Vec<Email>>>,
}

impl InMemoryIdentityProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn register_account(&self, email: Email, password: Secret<String>, email_verified: bool) {
        let mut accounts = self.accounts.write().await;
        accounts.insert(
            email,
            Account {
                password,
                email_verified,
            },
        );
    }

    /// Flip an account to verified, as the real provider would after the
    /// user clicks the emailed link. Returns false if the account is unknown.
    pub async fn mark_verified(&self, email: &Email) -> bool {
        let mut accounts = self.accounts.write().await;
        match accounts.get_mut(email) {
            Some(account) => {
                account.email_verified = true;
                true
            }
            None => false,
        }
    }

    /// Addresses a verification email was dispatched to, in order.
    pub async fn dispatched_verifications(&self) -> Vec<Email> {
        self.dispatched.read().await.clone()
    }
}

#[async_trait::async_trait]
impl IdentityProvider for InMemoryIdentityProvider {
    async fn authenticate(
        &self,
        email: &Email,
        password: &Password,
    ) -> Result<AuthenticatedUser, IdentityProviderError> {
        let accounts = self.accounts.read().await;
        let account = accounts.get(email).ok_or_else(|| {
            IdentityProviderError::CredentialsRejected("unknown-account".to_string())
        })?;

        if password.as_ref().expose_secret() != account.password.expose_secret() {
            return Err(IdentityProviderError::CredentialsRejected(
                "invalid-password".to_string(),
            ));
        }

        Ok(AuthenticatedUser::new(email.clone(), account.email_verified))
    }

    async fn send_verification_email(
        &self,
        user: &AuthenticatedUser,
    ) -> Result<(), IdentityProviderError> {
        let accounts = self.accounts.read().await;
        if !accounts.contains_key(user.email()) {
            return Err(IdentityProviderError::DispatchFailed(
                "unknown-account".to_string(),
            ));
        }
        drop(accounts);

        self.dispatched.write().await.push(user.email().clone());
        Ok(())
    }
}
