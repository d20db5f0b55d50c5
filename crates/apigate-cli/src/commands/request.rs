//! Request command implementation.

use anyhow::{Context, Result};
use clap::Args;

use apigate_core::{ApiRequest, Method};
use apigate_http::Gateway;

use crate::config::UpstreamArgs;
use crate::output;

#[derive(Args, Debug)]
pub struct RequestArgs {
    /// HTTP method (GET, POST, PUT, PATCH, DELETE)
    pub method: String,

    /// Path relative to the upstream base (e.g., /classic-models/api/v1/products/)
    pub path: String,

    /// Query parameter as key=value (repeatable)
    #[arg(short, long = "query", value_name = "KEY=VALUE")]
    pub query: Vec<String>,

    /// JSON request body
    #[arg(short, long)]
    pub data: Option<String>,

    /// Print compact JSON instead of pretty-printed
    #[arg(long)]
    pub compact: bool,
}

pub async fn run(upstream: &UpstreamArgs, args: RequestArgs) -> Result<()> {
    let request = build_request(&args)?;
    let gateway = Gateway::new(upstream.to_config()?).context("Failed to set up gateway")?;
    tracing::debug!(method = %request.method(), path = request.path(), "sending request");

    let body = gateway
        .execute(&request)
        .await
        .with_context(|| format!("{} {} failed", request.method(), request.path()))?;

    output::response(&body, args.compact)
}

fn build_request(args: &RequestArgs) -> Result<ApiRequest> {
    let method: Method = args.method.parse().context("Invalid method")?;
    let mut request = ApiRequest::new(method, &args.path);

    for pair in &args.query {
        let (key, value) = pair
            .split_once('=')
            .with_context(|| format!("Query parameter '{pair}' is not key=value"))?;
        request = request.with_query(key, value);
    }

    if let Some(data) = &args.data {
        let body = serde_json::from_str(data).context("--data is not valid JSON")?;
        request = request.with_body(body);
    }

    Ok(request)
}
