//! Static upstream credentials.

use std::fmt;

/// Username and password used to log in to the upstream API.
///
/// Supplied once at process start and never mutated afterwards. A session
/// manager reads them for the initial login and for the fallback login that
/// follows a rejected refresh.
///
/// # Security
///
/// The password is never exposed in Debug output to prevent accidental logging.
///
/// # Example
///
/// ```
/// use apigate_core::Credentials;
///
/// let creds = Credentials::new("demo", "demo123");
/// assert_eq!(creds.username(), "demo");
/// ```
#[derive(Clone)]
pub struct Credentials {
    username: String,
    password: String,
}

impl Credentials {
    /// Create new credentials.
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Returns the username.
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Returns the password.
    ///
    /// Public only so the HTTP exchange in `apigate-http` can build the
    /// login request body. Never log or display this value.
    #[doc(hidden)]
    pub fn password(&self) -> &str {
        &self.password
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn credentials_hides_password_in_debug() {
        let creds = Credentials::new("demo", "demo123");
        let debug = format!("{:?}", creds);
        assert!(debug.contains("demo"));
        assert!(!debug.contains("demo123"));
        assert!(debug.contains("[REDACTED]"));
    }

    #[test]
    fn clone_keeps_both_fields() {
        let creds = Credentials::new("demo", "demo123");
        let copy = creds.clone();
        assert_eq!(copy.username(), "demo");
        assert_eq!(copy.password(), "demo123");
    }
}
