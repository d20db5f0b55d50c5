//! Token types and the credential pair held by a session.

use std::fmt;

/// A short-lived access token attached to every authenticated call.
///
/// # Security
///
/// - Never logged or displayed in Debug output
/// - Treat as opaque; do not parse or inspect
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken(String);

impl AccessToken {
    /// Create a new access token.
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Returns the token value for use in authorization headers.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the `Authorization` header value for this token.
    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.0)
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("AccessToken").field(&"[REDACTED]").finish()
    }
}

/// A longer-lived token used only to mint a new [`CredentialPair`].
///
/// # Security
///
/// - Never logged or displayed in Debug output
/// - Treat as opaque; do not parse or inspect
#[derive(Clone, PartialEq, Eq)]
pub struct RefreshToken(String);

impl RefreshToken {
    /// Create a new refresh token.
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Returns the token value for use in refresh requests.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for RefreshToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("RefreshToken").field(&"[REDACTED]").finish()
    }
}

/// One authenticated session: an access token and the refresh token that
/// can replace it.
///
/// Both halves are always present. A pair is replaced wholesale, never
/// patched field by field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CredentialPair {
    access: AccessToken,
    refresh: RefreshToken,
}

impl CredentialPair {
    pub fn new(access: AccessToken, refresh: RefreshToken) -> Self {
        Self { access, refresh }
    }

    pub fn access(&self) -> &AccessToken {
        &self.access
    }

    pub fn refresh(&self) -> &RefreshToken {
        &self.refresh
    }
}

/// An access token together with the generation of the pair it was read from.
///
/// The generation increases every time the stored pair is set, replaced or
/// cleared. A caller that got a 401 hands its `SessionToken` back to the
/// session manager, which uses the generation to tell whether someone else
/// already renewed the session in the meantime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionToken {
    access: AccessToken,
    generation: u64,
}

impl SessionToken {
    pub fn new(access: AccessToken, generation: u64) -> Self {
        Self { access, generation }
    }

    pub fn access(&self) -> &AccessToken {
        &self.access
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn access_token_hides_value_in_debug() {
        let token = AccessToken::new("eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...");
        let debug = format!("{:?}", token);
        assert!(!debug.contains("eyJ"));
        assert!(debug.contains("[REDACTED]"));
    }

    #[test]
    fn refresh_token_hides_value_in_debug() {
        let token = RefreshToken::new("refresh_token_value_here");
        let debug = format!("{:?}", token);
        assert!(!debug.contains("refresh_token"));
        assert!(debug.contains("[REDACTED]"));
    }

    #[test]
    fn credential_pair_debug_redacts_both_tokens() {
        let pair = CredentialPair::new(AccessToken::new("acc-123"), RefreshToken::new("ref-456"));
        let debug = format!("{:?}", pair);
        assert!(!debug.contains("acc-123"));
        assert!(!debug.contains("ref-456"));
    }

    #[test]
    fn bearer_header_value() {
        let token = AccessToken::new("abc");
        assert_eq!(token.bearer(), "Bearer abc");
    }
}
