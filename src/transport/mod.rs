//! Narrow GET/POST port through which the client performs all network I/O.
//!
//! The upsert logic only ever sees response bodies; status codes, timeouts
//! and TLS belong to the implementation plugged in here.

use std::io::Read;

use thiserror::Error;

#[cfg(feature = "http")]
pub mod http;
#[cfg(any(test, feature = "test-mocks"))]
pub mod mock;

pub const JSON_CONTENT_TYPE: &str = "application/json";

/// Response body handed back by a [`Transport`].
pub type ResponseBody = Box<dyn Read + Send>;

#[derive(Debug, Error)]
pub enum TransportError {
    #[error("Request failed: {0}")]
    Request(String),

    #[error("Failed to read response body: {0}")]
    Body(#[from] std::io::Error),
}

pub type TransportResult<T> = Result<T, TransportError>;

pub trait Transport: Send + Sync {
    fn get(&self, url: &str) -> TransportResult<ResponseBody>;
    fn post(&self, url: &str, content_type: &str, body: &[u8]) -> TransportResult<ResponseBody>;
}

impl<T> Transport for &T
where
    T: Transport + ?Sized,
{
    fn get(&self, url: &str) -> TransportResult<ResponseBody> {
        (**self).get(url)
    }

    fn post(&self, url: &str, content_type: &str, body: &[u8]) -> TransportResult<ResponseBody> {
        (**self).post(url, content_type, body)
    }
}

/// Drains a response body into memory.
pub fn read_body(mut body: ResponseBody) -> TransportResult<Vec<u8>> {
    let mut buf = Vec::new();
    body.read_to_end(&mut buf)?;
    Ok(buf)
}
