//! Wire-level models: response envelopes, creation payloads and settings.

pub mod config;
pub mod envelope;
pub mod payload;
