//! The call contract exposed to operation dispatchers.

use async_trait::async_trait;
use serde_json::Value;

use crate::{ApiRequest, Result};

/// Performs one authenticated upstream call and returns its JSON body.
#[async_trait]
pub trait RequestExecutor: Send + Sync {
    async fn execute(&self, request: &ApiRequest) -> Result<Value>;
}
