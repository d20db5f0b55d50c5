//! Authenticated request execution with one renewal-and-retry cycle.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;
use tracing::{debug, instrument, warn};

use apigate_core::error::AuthError;
use apigate_core::{
    ApiRequest, RequestExecutor, Result, SessionToken, TokenExchange, UpstreamUrl,
};

use crate::client::{HttpClient, Reply};
use crate::exchange::HttpTokenExchange;
use crate::session::SessionManager;

/// Which of the two allowed sends is in progress.
#[derive(Debug, Clone, Copy)]
enum Attempt {
    Initial,
    Retry,
}

/// Sends requests with the session's bearer token attached.
///
/// A request is sent at most twice: once with the current token and, if
/// that draws a 401, once more with the token the session manager hands
/// back after renewal. Any other failure is returned as-is.
pub struct AuthenticatedExecutor<E = HttpTokenExchange> {
    client: HttpClient,
    session: Arc<SessionManager<E>>,
}

impl<E: TokenExchange> AuthenticatedExecutor<E> {
    pub fn new(client: HttpClient, session: Arc<SessionManager<E>>) -> Self {
        Self { client, session }
    }

    pub fn session(&self) -> &Arc<SessionManager<E>> {
        &self.session
    }

    pub fn base_url(&self) -> &UpstreamUrl {
        self.client.base()
    }

    /// Perform one logical call and return the decoded response body.
    #[instrument(skip(self, request), fields(method = %request.method(), path = request.path()))]
    pub async fn execute(&self, request: &ApiRequest) -> Result<Value> {
        let token = self.session.ensure_authenticated().await?;

        let token = match self.send(Attempt::Initial, request, &token).await? {
            Reply::Success(body) => return Ok(body),
            Reply::Unauthorized => self.session.refresh_access_token(&token).await?,
        };

        match self.send(Attempt::Retry, request, &token).await? {
            Reply::Success(body) => Ok(body),
            Reply::Unauthorized => {
                warn!("still unauthorized after renewing the session");
                self.session.invalidate(&token).await;
                Err(AuthError::RetryRejected.into())
            }
        }
    }

    async fn send(
        &self,
        attempt: Attempt,
        request: &ApiRequest,
        token: &SessionToken,
    ) -> Result<Reply> {
        debug!(?attempt, generation = token.generation(), "sending");
        self.client.send_authed(request, token.access()).await
    }
}

#[async_trait]
impl<E: TokenExchange> RequestExecutor for AuthenticatedExecutor<E> {
    async fn execute(&self, request: &ApiRequest) -> Result<Value> {
        AuthenticatedExecutor::execute(self, request).await
    }
}

impl<E> std::fmt::Debug for AuthenticatedExecutor<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthenticatedExecutor")
            .field("base", self.client.base())
            .finish_non_exhaustive()
    }
}
