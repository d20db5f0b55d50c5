//! CLI argument definitions.

use clap::{Parser, Subcommand};

use crate::commands::{login::LoginArgs, request::RequestArgs};
use crate::config::UpstreamArgs;

/// Send authenticated requests to an upstream HTTP API.
#[derive(Parser, Debug)]
#[command(name = "apigate")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Output logs as JSON
    #[arg(long, global = true)]
    pub json_logs: bool,

    #[command(flatten)]
    pub upstream: UpstreamArgs,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Log in with the configured credentials
    Login(LoginArgs),

    /// Send one authenticated request and print the response body
    Request(RequestArgs),
}
