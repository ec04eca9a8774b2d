//! Find-or-create client for the Pipedrive CRM REST API.
//!
//! Organizations are matched by name, people by their first email address,
//! and deals are always created. Network I/O goes through the
//! [`transport::Transport`] port so callers can plug in their own HTTP stack;
//! the `http` feature provides a blocking reqwest implementation.

pub mod client;
pub mod domain;
pub mod error_conversions;
pub mod errors;
pub mod models;
pub mod request;
pub mod services;
pub mod transport;

pub use client::{ClientOptions, PipedriveClient};
pub use errors::{ClientError, ClientResult};
pub use models::config::ClientConfig;

/// Production API root.
pub const DEFAULT_BASE_URL: &str = "https://api.pipedrive.com/v1";
