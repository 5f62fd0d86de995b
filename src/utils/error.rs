use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Network failure: {message}")]
    NetworkFailure { message: String },

    #[error("API error: status {status}")]
    ApiError { status: u16 },

    #[error("Malformed response body: {0}")]
    ParseError(#[from] serde_json::Error),

    #[error("Validation error: {message}")]
    ValidationError { message: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

pub type Result<T> = std::result::Result<T, ClientError>;
