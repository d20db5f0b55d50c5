//! apigate-core - Core types and traits for the apigate session gateway.
//!
//! This crate holds everything that does not depend on an HTTP stack: the
//! static [`Credentials`], the [`CredentialPair`] held by a session, the
//! [`ApiRequest`] description of one outbound call, the error taxonomy, and
//! the [`TokenExchange`] / [`RequestExecutor`] seams implemented by
//! `apigate-http`.

pub mod config;
pub mod credentials;
pub mod error;
pub mod request;
pub mod tokens;
pub mod traits;
pub mod types;

pub use config::{AuthEndpoints, GatewayConfig};
pub use credentials::Credentials;
pub use error::Error;
pub use request::{ApiRequest, Method};
pub use tokens::{AccessToken, CredentialPair, RefreshToken, SessionToken};
pub use traits::{RequestExecutor, TokenExchange};
pub use types::UpstreamUrl;

/// Result type alias using the crate's Error type.
pub type Result<T> = std::result::Result<T, Error>;
