//! Error types for apigate.
//!
//! One error type with explicit variants for authentication, upstream,
//! transport, and input validation failures.

use std::fmt;
use thiserror::Error;

/// The unified error type for apigate operations.
#[derive(Debug, Error)]
pub enum Error {
    /// The session could not be established or renewed, or the upstream kept
    /// rejecting a request after renewal.
    #[error("authentication error: {0}")]
    Auth(#[from] AuthError),

    /// The upstream answered with a non-2xx status other than 401.
    #[error("upstream error: {0}")]
    Upstream(#[from] UpstreamError),

    /// Network transport errors (connection, timeout, malformed response).
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    /// Input validation errors (bad URL, method, or body).
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InvalidInputError),
}

impl Error {
    /// Returns true for failures a dispatcher should report as authentication errors.
    pub fn is_auth_failure(&self) -> bool {
        matches!(self, Error::Auth(_))
    }

    /// Returns the upstream HTTP status, if this error carries one.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Upstream(e) => Some(e.status),
            Error::Auth(AuthError::LoginRejected { status })
            | Error::Auth(AuthError::RefreshRejected { status }) => Some(*status),
            Error::Auth(AuthError::RetryRejected) => Some(401),
            _ => None,
        }
    }
}

/// Authentication failures.
#[derive(Debug, Error)]
pub enum AuthError {
    /// The login exchange was refused (bad static credentials).
    #[error("login rejected with HTTP {status}")]
    LoginRejected { status: u16 },

    /// The refresh exchange was refused.
    #[error("refresh rejected with HTTP {status}")]
    RefreshRejected { status: u16 },

    /// The request was still unauthorized after renewing the session.
    #[error("request still unauthorized after session renewal")]
    RetryRejected,

    /// The session was cleared by a failed renewal.
    #[error("not authenticated")]
    NotAuthenticated,
}

/// A non-2xx, non-401 response from the upstream API.
#[derive(Debug, Clone)]
pub struct UpstreamError {
    /// HTTP status code.
    pub status: u16,
    /// The `detail` field of a JSON error body, if present.
    pub detail: Option<String>,
    /// Raw response body.
    pub body: String,
}

impl UpstreamError {
    /// Create a new upstream error.
    pub fn new(status: u16, detail: Option<String>, body: impl Into<String>) -> Self {
        Self {
            status,
            detail,
            body: body.into(),
        }
    }
}

impl fmt::Display for UpstreamError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HTTP {}", self.status)?;
        if let Some(ref detail) = self.detail {
            write!(f, ": {}", detail)?;
        } else if !self.body.is_empty() {
            write!(f, ": {}", self.body)?;
        }
        Ok(())
    }
}

impl std::error::Error for UpstreamError {}

/// Transport-level errors.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Network connection failed.
    #[error("connection failed: {message}")]
    Connection { message: String },

    /// Request timed out.
    #[error("request timed out: {message}")]
    Timeout { message: String },

    /// Generic HTTP error.
    #[error("HTTP error: {message}")]
    Http { message: String },

    /// A response body could not be decoded.
    #[error("malformed response: {message}")]
    Decode { message: String },
}

/// Input validation errors.
#[derive(Debug, Error)]
pub enum InvalidInputError {
    /// Invalid upstream base URL.
    #[error("invalid upstream URL '{value}': {reason}")]
    UpstreamUrl { value: String, reason: String },

    /// Unsupported HTTP method.
    #[error("unsupported HTTP method '{value}'")]
    Method { value: String },

    /// Generic invalid input.
    #[error("invalid input: {message}")]
    Other { message: String },
}
