use crate::adapters::http::{OneShotTransport, PooledTransport};
use crate::core::render;
use crate::core::{OutputSink, Post, RenderTarget, RequestDraft, Transport, WireRequest};
use crate::utils::error::{ClientError, Result};
use crate::utils::validation;
use serde_json::json;

const FETCH_FAILURE_MESSAGE: &str = "Something went wrong. Try again.";
const ALT_NETWORK_MESSAGE: &str = "Network error. Please try again.";
const UPDATE_NETWORK_MESSAGE: &str = "Network error during update.";

/// Issues the four fixed operations against the remote posts collection and
/// renders each outcome into an output region. Every operation produces
/// exactly one render (success or error), fully replacing the content of a
/// single region; errors never propagate past the operation that hit them.
pub struct RemoteResourceClient<O: OutputSink> {
    primary: Box<dyn Transport>,
    alternate: Box<dyn Transport>,
    sink: O,
    base_url: String,
}

impl<O: OutputSink> RemoteResourceClient<O> {
    pub fn new(sink: O, base_url: String) -> Self {
        Self::with_transports(
            Box::new(PooledTransport::new()),
            Box::new(OneShotTransport),
            sink,
            base_url,
        )
    }

    pub fn with_transports(
        primary: Box<dyn Transport>,
        alternate: Box<dyn Transport>,
        sink: O,
        base_url: String,
    ) -> Self {
        Self {
            primary,
            alternate,
            sink,
            base_url,
        }
    }

    /// GET `/posts/1` over the pooled transport. This path collapses every
    /// failure (bad status, network, unreadable body) into one fixed message.
    pub async fn fetch_item(&self) -> String {
        let accepted = |status: u16| (200..300).contains(&status);
        let rendered = match self.get_post(self.primary.as_ref(), 1, accepted).await {
            Ok(post) => render::post_detail(&post),
            Err(e) => {
                tracing::warn!("fetch failed: {}", e);
                render::error_message(&format!("Error: {}", FETCH_FAILURE_MESSAGE))
            }
        };
        self.sink.replace(RenderTarget::Primary, &rendered);
        rendered
    }

    /// GET `/posts/2` over the one-shot transport. Unlike `fetch_item`, this
    /// path surfaces the status code on API errors and distinguishes a
    /// transport failure (no response at all) with its own message. Only an
    /// exact 200 counts as success here; any other status, 2xx included,
    /// renders the status message.
    pub async fn fetch_item_alt(&self) -> String {
        let accepted = |status: u16| status == 200;
        let rendered = match self.get_post(self.alternate.as_ref(), 2, accepted).await {
            Ok(post) => render::post_detail(&post),
            Err(ClientError::NetworkFailure { message }) => {
                tracing::warn!("alternate fetch got no response: {}", message);
                render::error_message(ALT_NETWORK_MESSAGE)
            }
            Err(ClientError::ApiError { status }) => {
                render::error_message(&format!("Request failed: {}", status))
            }
            Err(e) => render::error_message(&e.to_string()),
        };
        self.sink.replace(RenderTarget::Primary, &rendered);
        rendered
    }

    /// POST `{title, body}` to `/posts` and pretty-print whatever the server
    /// echoes back. The status is deliberately not checked on this path: any
    /// body that parses as JSON is treated as the outcome.
    pub async fn create_item(&self, draft: &RequestDraft) -> String {
        let payload = json!({ "title": draft.title, "body": draft.body });
        let request = WireRequest::post(format!("{}/posts", self.base_url), payload);

        let rendered = match self.echo_body(self.primary.as_ref(), request).await {
            Ok(pretty) => render::mutation_result("New Post Created:", &pretty),
            Err(e) => {
                tracing::warn!("create failed: {}", e);
                render::error_message(&format!("Create failed: {}", e))
            }
        };
        self.sink.replace(RenderTarget::Mutation, &rendered);
        rendered
    }

    /// PUT `{title, body}` to `/posts/{id}`. Requires a non-empty id; when it
    /// is missing the validation message is rendered and no request goes out.
    pub async fn update_item(&self, draft: &RequestDraft) -> String {
        let rendered = match validation::require_post_id(draft) {
            Ok(id) => self.put_update(id, draft).await,
            Err(ClientError::ValidationError { message }) => render::error_message(&message),
            Err(e) => render::error_message(&e.to_string()),
        };
        self.sink.replace(RenderTarget::Mutation, &rendered);
        rendered
    }

    async fn put_update(&self, id: &str, draft: &RequestDraft) -> String {
        let payload = json!({ "title": draft.title, "body": draft.body });
        let request = WireRequest::put(format!("{}/posts/{}", self.base_url, id), payload);

        match self.alternate.execute(request).await {
            Ok(response) if response.status == 200 || response.status == 201 => {
                match render::pretty_json(&response.body) {
                    Ok(pretty) => render::mutation_result("Post Updated:", &pretty),
                    Err(e) => render::error_message(&e.to_string()),
                }
            }
            Ok(response) => {
                render::error_message(&format!("Update failed: {}", response.status))
            }
            Err(ClientError::NetworkFailure { message }) => {
                tracing::warn!("update got no response: {}", message);
                render::error_message(UPDATE_NETWORK_MESSAGE)
            }
            Err(e) => render::error_message(&e.to_string()),
        }
    }

    async fn get_post(
        &self,
        transport: &dyn Transport,
        id: u32,
        accepted: fn(u16) -> bool,
    ) -> Result<Post> {
        let request = WireRequest::get(format!("{}/posts/{}", self.base_url, id));
        let response = transport.execute(request).await?;

        if !accepted(response.status) {
            return Err(ClientError::ApiError {
                status: response.status,
            });
        }
        Ok(serde_json::from_str(&response.body)?)
    }

    async fn echo_body(&self, transport: &dyn Transport, request: WireRequest) -> Result<String> {
        let response = transport.execute(request).await?;
        render::pretty_json(&response.body)
    }
}
