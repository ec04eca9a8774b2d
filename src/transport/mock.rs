//! Mock transport for isolating the upsert services in tests.

use mockall::mock;

use crate::transport::{ResponseBody, Transport, TransportResult};

mock! {
    pub Transport {}

    impl Transport for Transport {
        fn get(&self, url: &str) -> TransportResult<ResponseBody>;
        fn post(&self, url: &str, content_type: &str, body: &[u8]) -> TransportResult<ResponseBody>;
    }
}

/// Wraps a static JSON string as a response body.
pub fn json_body(body: &str) -> TransportResult<ResponseBody> {
    Ok(Box::new(std::io::Cursor::new(body.as_bytes().to_vec())))
}
