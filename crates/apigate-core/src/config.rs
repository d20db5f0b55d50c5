//! Process-wide gateway configuration.

use std::time::Duration;

use crate::credentials::Credentials;
use crate::types::UpstreamUrl;

/// Default login exchange path.
pub const DEFAULT_LOGIN_PATH: &str = "/classic-models/api/auth/login/";

/// Default refresh exchange path.
pub const DEFAULT_REFRESH_PATH: &str = "/classic-models/api/auth/refresh/";

/// Default per-exchange timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Paths of the two session exchanges, relative to the upstream base.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthEndpoints {
    pub login_path: String,
    pub refresh_path: String,
}

impl Default for AuthEndpoints {
    fn default() -> Self {
        Self {
            login_path: DEFAULT_LOGIN_PATH.to_string(),
            refresh_path: DEFAULT_REFRESH_PATH.to_string(),
        }
    }
}

/// Everything the gateway reads at start-up. Never re-read at runtime.
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    pub base_url: UpstreamUrl,
    pub credentials: Credentials,
    pub timeout: Duration,
    pub endpoints: AuthEndpoints,
}

impl GatewayConfig {
    /// Config with default timeout and endpoint paths.
    pub fn new(base_url: UpstreamUrl, credentials: Credentials) -> Self {
        Self {
            base_url,
            credentials,
            timeout: DEFAULT_TIMEOUT,
            endpoints: AuthEndpoints::default(),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_endpoints(mut self, endpoints: AuthEndpoints) -> Self {
        self.endpoints = endpoints;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_upstream_auth_routes() {
        let config = GatewayConfig::new(
            UpstreamUrl::new("http://localhost:8000").unwrap(),
            Credentials::new("demo", "demo123"),
        );
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert_eq!(config.endpoints.login_path, "/classic-models/api/auth/login/");
        assert_eq!(config.endpoints.refresh_path, "/classic-models/api/auth/refresh/");
    }

    #[test]
    fn debug_does_not_leak_password() {
        let config = GatewayConfig::new(
            UpstreamUrl::new("http://localhost:8000").unwrap(),
            Credentials::new("demo", "hunter2"),
        );
        assert!(!format!("{:?}", config).contains("hunter2"));
    }
}
