use reqwest::{Client, Response, Url};
use secrecy::{ExposeSecret, Secret};

use edugate_core::{AuthenticatedUser, Email, IdentityProvider, IdentityProviderError, Password};

use crate::config::settings::IdentitySetting;

/// Identity provider backed by an Identity-Toolkit style REST API.
///
/// Failures are folded into the port's opaque message contract: the
/// provider's own error message is surfaced verbatim when it sends one,
/// transport errors are stringified. The caller never sees a subtype.
pub struct RestIdentityProvider {
    http_client: Client,
    base_url: String,
    api_key: Secret<String>,
}

impl RestIdentityProvider {
    pub fn new(base_url: String, api_key: Secret<String>, http_client: Client) -> Self {
        Self {
            http_client,
            base_url,
            api_key,
        }
    }

    /// Build a provider from loaded settings, with the configured request
    /// timeout applied to the HTTP client.
    pub fn from_setting(setting: &IdentitySetting) -> Result<Self, reqwest::Error> {
        let http_client = Client::builder().timeout(setting.timeout()).build()?;
        Ok(Self::new(
            setting.base_url.clone(),
            setting.api_key.clone(),
            http_client,
        ))
    }

    fn endpoint(&self, path: &str) -> Result<Url, String> {
        let base = Url::parse(&self.base_url).map_err(|e| e.to_string())?;
        base.join(path).map_err(|e| e.to_string())
    }
}

#[async_trait::async_trait]
impl IdentityProvider for RestIdentityProvider {
    #[tracing::instrument(name = "Authenticating against identity provider", skip_all)]
    async fn authenticate(
        &self,
        email: &Email,
        password: &Password,
    ) -> Result<AuthenticatedUser, IdentityProviderError> {
        let url = self
            .endpoint(SIGN_IN_PATH)
            .map_err(IdentityProviderError::CredentialsRejected)?;

        let request_body = SignInRequest {
            email: email.as_ref(),
            password: password.as_ref().expose_secret(),
            return_secure_token: true,
        };

        let response = self
            .http_client
            .post(url)
            .query(&[(API_KEY_PARAM, self.api_key.expose_secret())])
            .json(&request_body)
            .send()
            .await
            .map_err(|e| IdentityProviderError::CredentialsRejected(e.to_string()))?;

        if !response.status().is_success() {
            return Err(IdentityProviderError::CredentialsRejected(
                provider_message(response).await,
            ));
        }

        let body: SignInResponse = response
            .json()
            .await
            .map_err(|e| IdentityProviderError::CredentialsRejected(e.to_string()))?;

        // The provider echoes the account email back, possibly canonicalized.
        // Fall back to the submitted address if the echo is unparseable.
        let account_email = Email::parse(&body.email).unwrap_or_else(|_| email.clone());
        Ok(AuthenticatedUser::new(account_email, body.email_verified))
    }

    #[tracing::instrument(name = "Requesting verification email dispatch", skip_all)]
    async fn send_verification_email(
        &self,
        user: &AuthenticatedUser,
    ) -> Result<(), IdentityProviderError> {
        let url = self
            .endpoint(SEND_OOB_PATH)
            .map_err(IdentityProviderError::DispatchFailed)?;

        let request_body = SendOobCodeRequest {
            request_type: VERIFY_EMAIL_REQUEST_TYPE,
            email: user.email().as_ref(),
        };

        let response = self
            .http_client
            .post(url)
            .query(&[(API_KEY_PARAM, self.api_key.expose_secret())])
            .json(&request_body)
            .send()
            .await
            .map_err(|e| IdentityProviderError::DispatchFailed(e.to_string()))?;

        if !response.status().is_success() {
            return Err(IdentityProviderError::DispatchFailed(
                provider_message(response).await,
            ));
        }

        Ok(())
    }
}

async fn provider_message(response: Response) -> String {
    let status = response.status();
    match response.json::<ApiErrorEnvelope>().await {
        Ok(envelope) => envelope.error.message,
        Err(_) => format!("provider returned status {status}"),
    }
}

const SIGN_IN_PATH: &str = "/v1/accounts:signInWithPassword";
const SEND_OOB_PATH: &str = "/v1/accounts:sendOobCode";
const API_KEY_PARAM: &str = "key";
const VERIFY_EMAIL_REQUEST_TYPE: &str = "VERIFY_EMAIL";

#[derive(serde::Serialize, Debug)]
#[serde(rename_all = "camelCase")]
struct SignInRequest<'a> {
    email: &'a str,
    password: &'a str,
    return_secure_token: bool,
}

#[derive(serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct SignInResponse {
    email: String,
    #[serde(default)]
    email_verified: bool,
}

#[derive(serde::Serialize, Debug)]
#[serde(rename_all = "camelCase")]
struct SendOobCodeRequest<'a> {
    request_type: &'a str,
    email: &'a str,
}

#[derive(serde::Deserialize)]
struct ApiErrorEnvelope {
    error: ApiError,
}

#[derive(serde::Deserialize)]
struct ApiError {
    message: String,
}
