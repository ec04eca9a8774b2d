use thiserror::Error;

use crate::transport::TransportError;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Malformed URL: {0}")]
    MalformedUrl(String),

    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),

    #[error("Invalid JSON: {0}")]
    InvalidJson(String),

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("Error creating Pipedrive {resource}: {body}")]
    CreationFailed {
        resource: &'static str,
        /// Raw body of the create response.
        body: String,
    },
}

pub type ClientResult<T> = Result<T, ClientError>;

impl From<url::ParseError> for ClientError {
    fn from(err: url::ParseError) -> Self {
        ClientError::MalformedUrl(err.to_string())
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(err: serde_json::Error) -> Self {
        match err.classify() {
            serde_json::error::Category::Data => ClientError::MalformedResponse(err.to_string()),
            _ => ClientError::InvalidJson(err.to_string()),
        }
    }
}
