use reqwest::Method;
use serde::{Deserialize, Serialize};

/// A post as served by the remote collection resource. The remote API owns
/// the full lifecycle; this crate only passes it through.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    pub id: i64,
    pub title: String,
    pub body: String,
    #[serde(rename = "userId", default)]
    pub user_id: i64,
}

/// User-supplied field values read at the moment an action is triggered.
/// Not retained after the action completes.
#[derive(Debug, Clone, Default)]
pub struct RequestDraft {
    pub id: Option<String>,
    pub title: String,
    pub body: String,
}

/// Names one of the two output regions. Last write wins; no other invariant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RenderTarget {
    Primary,
    Mutation,
}

impl std::fmt::Display for RenderTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RenderTarget::Primary => write!(f, "primary"),
            RenderTarget::Mutation => write!(f, "mutation"),
        }
    }
}

/// One wire-level request. The body, when present, is serialized as JSON
/// with an explicit `application/json; charset=UTF-8` content type.
#[derive(Debug, Clone)]
pub struct WireRequest {
    pub method: Method,
    pub url: String,
    pub body: Option<serde_json::Value>,
}

impl WireRequest {
    pub fn get(url: String) -> Self {
        Self {
            method: Method::GET,
            url,
            body: None,
        }
    }

    pub fn post(url: String, body: serde_json::Value) -> Self {
        Self {
            method: Method::POST,
            url,
            body: Some(body),
        }
    }

    pub fn put(url: String, body: serde_json::Value) -> Self {
        Self {
            method: Method::PUT,
            url,
            body: Some(body),
        }
    }
}

/// A received response. The status is always carried here, even for error
/// statuses; a transport only fails when no response arrived at all.
#[derive(Debug, Clone)]
pub struct WireResponse {
    pub status: u16,
    pub body: String,
}

impl WireResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}
