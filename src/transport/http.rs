//! Blocking reqwest transport used by [`crate::client::PipedriveClient::new`].

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;

use crate::transport::{ResponseBody, Transport, TransportError, TransportResult};

pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 5;

#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    /// Builds a transport with the default request and connect timeouts.
    pub fn new() -> TransportResult<Self> {
        Self::with_timeouts(
            Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS),
        )
    }

    pub fn with_timeouts(timeout: Duration, connect_timeout: Duration) -> TransportResult<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .connect_timeout(connect_timeout)
            .build()?;
        Ok(Self { client })
    }

    /// Wraps an already configured reqwest client.
    pub fn from_client(client: Client) -> Self {
        Self { client }
    }

    fn into_body(response: reqwest::blocking::Response) -> ResponseBody {
        let status = response.status();
        if !status.is_success() {
            log::warn!("Pipedrive responded with HTTP {status}");
        }
        Box::new(response)
    }
}

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        TransportError::Request(err.to_string())
    }
}

impl Transport for HttpTransport {
    fn get(&self, url: &str) -> TransportResult<ResponseBody> {
        let response = self.client.get(url).send()?;
        Ok(Self::into_body(response))
    }

    fn post(&self, url: &str, content_type: &str, body: &[u8]) -> TransportResult<ResponseBody> {
        let response = self
            .client
            .post(url)
            .header(CONTENT_TYPE, content_type)
            .body(body.to_vec())
            .send()?;
        Ok(Self::into_body(response))
    }
}
