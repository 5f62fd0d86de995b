use crate::domain::model::{RenderTarget, WireRequest, WireResponse};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Issues one HTTP request and delivers the response or a network-level
/// failure. HTTP error statuses are not transport errors: the response is
/// returned with its status intact and the caller decides what it means.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn execute(&self, request: WireRequest) -> Result<WireResponse>;
}

/// Replaces the content of an output region. Every action writes exactly
/// one region and fully overwrites it; implementations never append.
pub trait OutputSink: Send + Sync {
    fn replace(&self, target: RenderTarget, content: &str);
}
