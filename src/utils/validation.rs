use crate::domain::model::RequestDraft;
use crate::utils::error::{ClientError, Result};
use url::Url;

pub const MISSING_POST_ID_MESSAGE: &str = "Please enter a Post ID to update.";

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(ClientError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(ClientError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(ClientError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

/// The single local precondition in the system: an update must name the post
/// it targets. Returns the trimmed id, or a validation error carrying the
/// exact user-facing message.
pub fn require_post_id(draft: &RequestDraft) -> Result<&str> {
    match draft.id.as_deref().map(str::trim) {
        Some(id) if !id.is_empty() => Ok(id),
        _ => Err(ClientError::ValidationError {
            message: MISSING_POST_ID_MESSAGE.to_string(),
        }),
    }
}
