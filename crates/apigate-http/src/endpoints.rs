//! Wire types for the login and refresh exchanges.

use serde::{Deserialize, Serialize};

/// Request body for the login exchange.
#[derive(Serialize)]
pub(crate) struct LoginRequest<'a> {
    pub username: &'a str,
    pub password: &'a str,
}

/// Request body for the refresh exchange.
#[derive(Serialize)]
pub(crate) struct RefreshRequest<'a> {
    pub refresh: &'a str,
}

/// Success body of both exchanges.
///
/// The login response also carries a `user` object; it is not needed here
/// and is ignored.
#[derive(Deserialize)]
pub(crate) struct TokenResponse {
    pub access: String,
    pub refresh: String,
}
