//! apigate-http - reqwest-backed upstream session handling.
//!
//! All outbound calls go through an [`AuthenticatedExecutor`], which asks
//! the shared [`SessionManager`] for an access token, attaches it, and on a
//! 401 drives exactly one renewal-and-retry cycle.
//!
//! # Example
//!
//! ```no_run
//! use apigate_core::{Credentials, GatewayConfig, UpstreamUrl};
//! use apigate_http::Gateway;
//!
//! # async fn example() -> Result<(), apigate_core::Error> {
//! let base = UpstreamUrl::new("http://localhost:8000")?;
//! let gateway = Gateway::new(GatewayConfig::new(base, Credentials::new("demo", "demo123")))?;
//!
//! let products = gateway.get("/classic-models/api/v1/products/").await?;
//! println!("{products}");
//! # Ok(())
//! # }
//! ```

mod client;
mod endpoints;
mod exchange;
mod executor;
mod gateway;
mod session;

pub use client::HttpClient;
pub use exchange::HttpTokenExchange;
pub use executor::AuthenticatedExecutor;
pub use gateway::Gateway;
pub use session::SessionManager;
