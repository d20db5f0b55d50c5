//! Ready-wired gateway: client, exchange, session, and executor.

use std::sync::Arc;

use serde_json::Value;
use tracing::info;

use apigate_core::{ApiRequest, GatewayConfig, Result, SessionToken, UpstreamUrl};

use crate::client::HttpClient;
use crate::exchange::HttpTokenExchange;
use crate::executor::AuthenticatedExecutor;
use crate::session::SessionManager;

/// The entry point an operation dispatcher holds on to.
///
/// Cheap to clone; clones share one session and one connection pool, so
/// concurrent calls from any clone coalesce their renewals.
#[derive(Debug, Clone)]
pub struct Gateway {
    executor: Arc<AuthenticatedExecutor>,
}

impl Gateway {
    /// Wire up a gateway from start-up configuration. No network traffic.
    pub fn new(config: GatewayConfig) -> Result<Self> {
        let client = HttpClient::new(config.base_url, config.timeout)?;
        let exchange = HttpTokenExchange::new(client.clone(), config.endpoints);
        let session = Arc::new(SessionManager::new(exchange, config.credentials));

        Ok(Self {
            executor: Arc::new(AuthenticatedExecutor::new(client, session)),
        })
    }

    /// Authenticate eagerly so the first real call does not pay for login.
    pub async fn initialize(&self) -> Result<SessionToken> {
        let token = self.session().ensure_authenticated().await?;
        info!(upstream = %self.base_url(), "Gateway authenticated");
        Ok(token)
    }

    pub fn session(&self) -> &Arc<SessionManager> {
        self.executor.session()
    }

    pub fn executor(&self) -> &AuthenticatedExecutor {
        &self.executor
    }

    pub fn base_url(&self) -> &UpstreamUrl {
        self.executor.base_url()
    }

    pub async fn execute(&self, request: &ApiRequest) -> Result<Value> {
        self.executor.execute(request).await
    }

    pub async fn get(&self, path: &str) -> Result<Value> {
        self.execute(&ApiRequest::get(path)).await
    }

    /// GET with query parameters, e.g. filters and pagination.
    pub async fn get_with_query(&self, path: &str, query: &[(&str, &str)]) -> Result<Value> {
        let request = query
            .iter()
            .fold(ApiRequest::get(path), |req, (k, v)| req.with_query(*k, *v));
        self.execute(&request).await
    }

    pub async fn post(&self, path: &str, body: Value) -> Result<Value> {
        self.execute(&ApiRequest::post(path).with_body(body)).await
    }

    pub async fn put(&self, path: &str, body: Value) -> Result<Value> {
        self.execute(&ApiRequest::put(path).with_body(body)).await
    }

    pub async fn patch(&self, path: &str, body: Value) -> Result<Value> {
        self.execute(&ApiRequest::patch(path).with_body(body)).await
    }

    pub async fn delete(&self, path: &str) -> Result<()> {
        self.execute(&ApiRequest::delete(path)).await.map(|_| ())
    }
}
