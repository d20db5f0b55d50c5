//! HTTP client for the upstream API.

use std::time::Duration;

use reqwest::StatusCode;
use reqwest::header::{AUTHORIZATION, HeaderValue};
use serde::{Serialize, de::DeserializeOwned};
use serde_json::Value;
use tracing::{debug, instrument, trace};

use apigate_core::error::{InvalidInputError, TransportError, UpstreamError};
use apigate_core::{AccessToken, ApiRequest, Error, Method, Result, UpstreamUrl};

/// Outcome of an authenticated call that did not fail outright.
#[derive(Debug)]
pub(crate) enum Reply {
    /// 2xx with its decoded body (`null` when the body is empty).
    Success(Value),
    /// 401; the caller decides whether to renew and retry.
    Unauthorized,
}

/// HTTP client bound to one upstream base URL.
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: reqwest::Client,
    base: UpstreamUrl,
}

impl HttpClient {
    /// Create a client whose every request is bounded by `timeout`.
    pub fn new(base: UpstreamUrl, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("apigate/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()
            .map_err(transport_error)?;

        Ok(Self { client, base })
    }

    /// Returns the upstream base URL this client is configured for.
    pub fn base(&self) -> &UpstreamUrl {
        &self.base
    }

    /// Unauthenticated JSON POST, used by the session exchanges.
    #[instrument(skip(self, body), fields(base = %self.base))]
    pub(crate) async fn post_json<B, R>(&self, path: &str, body: &B) -> Result<R>
    where
        B: Serialize,
        R: DeserializeOwned,
    {
        let url = self.base.endpoint(path);
        debug!(%url, "exchange request");

        let response = self
            .client
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        trace!(%status, "exchange response");

        if status.is_success() {
            let bytes = response.bytes().await.map_err(transport_error)?;
            serde_json::from_slice(&bytes).map_err(|e| {
                TransportError::Decode {
                    message: e.to_string(),
                }
                .into()
            })
        } else {
            Err(Error::Upstream(parse_error_response(response).await))
        }
    }

    /// Send `request` with `token` as its bearer credential.
    ///
    /// 401 comes back as [`Reply::Unauthorized`]; every other non-2xx status
    /// is an [`UpstreamError`].
    #[instrument(skip(self, request, token), fields(method = %request.method(), path = request.path()))]
    pub(crate) async fn send_authed(
        &self,
        request: &ApiRequest,
        token: &AccessToken,
    ) -> Result<Reply> {
        let url = self.base.endpoint(request.path());

        let auth_value = HeaderValue::from_str(&token.bearer()).map_err(|_| {
            InvalidInputError::Other {
                message: "access token contains characters not allowed in a header".to_string(),
            }
        })?;

        let mut builder = self
            .client
            .request(reqwest_method(request.method()), &url)
            .header(AUTHORIZATION, auth_value);

        if !request.query().is_empty() {
            builder = builder.query(request.query());
        }
        if let Some(body) = request.body() {
            builder = builder.json(body);
        }

        let response = builder.send().await.map_err(transport_error)?;
        let status = response.status();
        trace!(%status, "upstream response");

        if status == StatusCode::UNAUTHORIZED {
            return Ok(Reply::Unauthorized);
        }

        if !status.is_success() {
            return Err(Error::Upstream(parse_error_response(response).await));
        }

        let bytes = response.bytes().await.map_err(transport_error)?;
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Reply::Success(Value::Null));
        }

        let body = serde_json::from_slice(&bytes).map_err(|e| TransportError::Decode {
            message: e.to_string(),
        })?;
        Ok(Reply::Success(body))
    }
}

fn reqwest_method(method: Method) -> reqwest::Method {
    match method {
        Method::Get => reqwest::Method::GET,
        Method::Post => reqwest::Method::POST,
        Method::Put => reqwest::Method::PUT,
        Method::Patch => reqwest::Method::PATCH,
        Method::Delete => reqwest::Method::DELETE,
    }
}

/// Classify a reqwest failure.
pub(crate) fn transport_error(err: reqwest::Error) -> Error {
    let message = err.to_string();
    let err = if err.is_timeout() {
        TransportError::Timeout { message }
    } else if err.is_connect() {
        TransportError::Connection { message }
    } else if err.is_decode() {
        TransportError::Decode { message }
    } else {
        TransportError::Http { message }
    };
    Error::Transport(err)
}

/// Build an [`UpstreamError`], lifting `detail` out of a JSON body if present.
async fn parse_error_response(response: reqwest::Response) -> UpstreamError {
    let status = response.status().as_u16();
    let body = response.text().await.unwrap_or_default();

    let detail = serde_json::from_str::<Value>(&body)
        .ok()
        .and_then(|v| v.get("detail").cloned())
        .map(|detail| match detail {
            Value::String(s) => s,
            other => other.to_string(),
        });

    UpstreamError::new(status, detail, body)
}
