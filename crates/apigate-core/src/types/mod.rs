//! Validated value types.

mod upstream_url;

pub use upstream_url::UpstreamUrl;
