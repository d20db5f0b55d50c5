//! Upstream configuration from flags and environment.

use std::fmt;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Args;

use apigate_core::config::{DEFAULT_LOGIN_PATH, DEFAULT_REFRESH_PATH};
use apigate_core::{AuthEndpoints, Credentials, GatewayConfig, UpstreamUrl};

/// Upstream connection settings. Every flag falls back to an environment
/// variable so the binary can run unattended.
#[derive(Args)]
pub struct UpstreamArgs {
    /// Upstream API base URL
    #[arg(
        long,
        env = "APIGATE_API_URL",
        default_value = "http://localhost:8000",
        global = true
    )]
    pub api_url: String,

    /// Username for the login exchange
    #[arg(long, env = "APIGATE_USERNAME", global = true)]
    pub username: Option<String>,

    /// Password for the login exchange
    #[arg(long, env = "APIGATE_PASSWORD", hide_env_values = true, global = true)]
    pub password: Option<String>,

    /// Per-request timeout in seconds
    #[arg(long, env = "APIGATE_TIMEOUT_SECS", default_value_t = 30, global = true)]
    pub timeout_secs: u64,

    /// Login exchange path
    #[arg(long, env = "APIGATE_LOGIN_PATH", default_value = DEFAULT_LOGIN_PATH, global = true)]
    pub login_path: String,

    /// Refresh exchange path
    #[arg(long, env = "APIGATE_REFRESH_PATH", default_value = DEFAULT_REFRESH_PATH, global = true)]
    pub refresh_path: String,
}

impl UpstreamArgs {
    /// Build the immutable gateway configuration.
    pub fn to_config(&self) -> Result<GatewayConfig> {
        let base_url = UpstreamUrl::new(&self.api_url).context("Invalid upstream URL")?;
        let username = self
            .username
            .as_deref()
            .context("No username. Pass --username or set APIGATE_USERNAME.")?;
        let password = self
            .password
            .as_deref()
            .context("No password. Pass --password or set APIGATE_PASSWORD.")?;

        if self.timeout_secs == 0 {
            anyhow::bail!("--timeout-secs must be at least 1");
        }

        Ok(
            GatewayConfig::new(base_url, Credentials::new(username, password))
                .with_timeout(Duration::from_secs(self.timeout_secs))
                .with_endpoints(AuthEndpoints {
                    login_path: self.login_path.clone(),
                    refresh_path: self.refresh_path.clone(),
                }),
        )
    }
}

impl fmt::Debug for UpstreamArgs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UpstreamArgs")
            .field("api_url", &self.api_url)
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| "[REDACTED]"))
            .field("timeout_secs", &self.timeout_secs)
            .field("login_path", &self.login_path)
            .field("refresh_path", &self.refresh_path)
            .finish()
    }
}
