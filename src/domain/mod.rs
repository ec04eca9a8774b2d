//! Local mirrors of the Pipedrive resources handled by the client.

pub mod deal;
pub mod organization;
pub mod person;
pub mod types;

/// Caller-defined custom fields sent verbatim alongside an entity.
pub type ExtraFields = serde_json::Map<String, serde_json::Value>;
