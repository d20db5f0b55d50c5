//! Login command implementation.

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;

use apigate_http::Gateway;

use crate::config::UpstreamArgs;
use crate::output;

#[derive(Args, Debug)]
pub struct LoginArgs {}

pub async fn run(upstream: &UpstreamArgs, _args: LoginArgs) -> Result<()> {
    let config = upstream.to_config()?;
    let username = config.credentials.username().to_string();
    let gateway = Gateway::new(config).context("Failed to set up gateway")?;

    eprintln!("{}", "Logging in...".dimmed());

    gateway.session().login().await.context("Failed to login")?;

    output::logged_in(gateway.base_url(), &username);

    Ok(())
}
