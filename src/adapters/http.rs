use crate::domain::model::{WireRequest, WireResponse};
use crate::domain::ports::Transport;
use crate::utils::error::{ClientError, Result};
use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;

const JSON_CONTENT_TYPE: &str = "application/json; charset=UTF-8";

async fn send_over(client: &Client, request: WireRequest) -> Result<WireResponse> {
    tracing::debug!("{} {}", request.method, request.url);

    let mut builder = client.request(request.method, &request.url);
    if let Some(body) = &request.body {
        builder = builder
            .header(CONTENT_TYPE, JSON_CONTENT_TYPE)
            .body(serde_json::to_vec(body)?);
    }

    let response = builder
        .send()
        .await
        .map_err(|e| ClientError::NetworkFailure {
            message: e.to_string(),
        })?;

    let status = response.status().as_u16();
    tracing::debug!("response status: {}", status);

    let body = response
        .text()
        .await
        .map_err(|e| ClientError::NetworkFailure {
            message: e.to_string(),
        })?;

    Ok(WireResponse { status, body })
}

/// Transport backed by one shared reqwest client, so consecutive requests
/// reuse its connection pool.
#[derive(Debug, Clone, Default)]
pub struct PooledTransport {
    client: Client,
}

impl PooledTransport {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }
}

#[async_trait]
impl Transport for PooledTransport {
    async fn execute(&self, request: WireRequest) -> Result<WireResponse> {
        send_over(&self.client, request).await
    }
}

/// Transport that builds a fresh reqwest client for every request, the way
/// the alternate request mechanism stands up a new request object per call.
#[derive(Debug, Clone, Copy, Default)]
pub struct OneShotTransport;

#[async_trait]
impl Transport for OneShotTransport {
    async fn execute(&self, request: WireRequest) -> Result<WireResponse> {
        send_over(&Client::new(), request).await
    }
}
