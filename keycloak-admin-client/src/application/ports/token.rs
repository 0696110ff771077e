use crate::domain::errors::AdminResult;
use async_trait::async_trait;

/// Source of the bearer token presented on every request.
///
/// Transports call `access_token` once per request, so a rotated token is
/// picked up by the next call without rebuilding anything.
#[async_trait]
pub trait TokenStore: Send + Sync {
    async fn access_token(&self) -> AdminResult<String>;
}
