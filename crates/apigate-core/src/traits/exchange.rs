//! Login and refresh exchange trait.

use async_trait::async_trait;

use crate::{CredentialPair, Credentials, RefreshToken, Result};

/// The two network exchanges that mint a [`CredentialPair`].
///
/// Implementations perform exactly one upstream round trip per call and do
/// no retrying or state keeping of their own; the session manager decides
/// when to call them.
#[async_trait]
pub trait TokenExchange: Send + Sync {
    /// Exchange static credentials for a new pair.
    async fn login(&self, credentials: &Credentials) -> Result<CredentialPair>;

    /// Exchange a refresh token for a new pair.
    async fn refresh(&self, refresh_token: &RefreshToken) -> Result<CredentialPair>;
}
