//! Login and refresh exchanges over HTTP.

use async_trait::async_trait;
use tracing::{debug, instrument};

use apigate_core::error::AuthError;
use apigate_core::{
    AccessToken, AuthEndpoints, CredentialPair, Credentials, Error, RefreshToken, Result,
    TokenExchange,
};

use crate::client::HttpClient;
use crate::endpoints::{LoginRequest, RefreshRequest, TokenResponse};

/// [`TokenExchange`] against the upstream's JSON auth endpoints.
#[derive(Debug, Clone)]
pub struct HttpTokenExchange {
    client: HttpClient,
    endpoints: AuthEndpoints,
}

impl HttpTokenExchange {
    pub fn new(client: HttpClient, endpoints: AuthEndpoints) -> Self {
        Self { client, endpoints }
    }
}

#[async_trait]
impl TokenExchange for HttpTokenExchange {
    #[instrument(skip(self, credentials), fields(username = %credentials.username()))]
    async fn login(&self, credentials: &Credentials) -> Result<CredentialPair> {
        let request = LoginRequest {
            username: credentials.username(),
            password: credentials.password(),
        };

        let response: TokenResponse = self
            .client
            .post_json(&self.endpoints.login_path, &request)
            .await
            .map_err(|e| match e {
                Error::Upstream(e) => AuthError::LoginRejected { status: e.status }.into(),
                other => other,
            })?;

        debug!("login exchange succeeded");
        Ok(into_pair(response))
    }

    #[instrument(skip(self, refresh_token))]
    async fn refresh(&self, refresh_token: &RefreshToken) -> Result<CredentialPair> {
        let request = RefreshRequest {
            refresh: refresh_token.as_str(),
        };

        let response: TokenResponse = self
            .client
            .post_json(&self.endpoints.refresh_path, &request)
            .await
            .map_err(|e| match e {
                Error::Upstream(e) => AuthError::RefreshRejected { status: e.status }.into(),
                other => other,
            })?;

        debug!("refresh exchange succeeded");
        Ok(into_pair(response))
    }
}

fn into_pair(response: TokenResponse) -> CredentialPair {
    CredentialPair::new(
        AccessToken::new(response.access),
        RefreshToken::new(response.refresh),
    )
}
