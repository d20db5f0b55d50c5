//! Terminal rendering for command results.
//!
//! Response bodies go to stdout so they can be piped; status lines and
//! failures go to stderr.

use anyhow::Result;
use colored::Colorize;
use serde_json::Value;

use apigate_core::{Error, UpstreamUrl};

/// Report an established session.
pub fn logged_in(upstream: &UpstreamUrl, username: &str) {
    println!("{} Logged in as {}", "✓".green(), username.bold());
    println!("{}: {}", "Upstream".dimmed(), upstream);
}

/// Print an upstream response body. An empty body prints a status line.
pub fn response(body: &Value, compact: bool) -> Result<()> {
    match render_body(body, compact)? {
        Some(text) => println!("{text}"),
        None => println!("{} No content", "✓".green()),
    }
    Ok(())
}

/// Report a failed command, with a hint when the session could not be
/// established.
pub fn failure(err: &anyhow::Error) {
    eprintln!("{} {:#}", "✗".red(), err);
    if let Some(hint) = hint_for(err) {
        eprintln!("  {}", hint.dimmed());
    }
}

fn render_body(body: &Value, compact: bool) -> Result<Option<String>> {
    if body.is_null() {
        return Ok(None);
    }
    let text = if compact {
        serde_json::to_string(body)?
    } else {
        serde_json::to_string_pretty(body)?
    };
    Ok(Some(text))
}

fn hint_for(err: &anyhow::Error) -> Option<&'static str> {
    let gateway_err = err.chain().find_map(|e| e.downcast_ref::<Error>())?;
    match gateway_err {
        Error::Auth(_) => Some("check --username/--password or APIGATE_USERNAME/APIGATE_PASSWORD"),
        Error::Transport(_) => Some("check that --api-url points at a reachable upstream"),
        _ => None,
    }
}
