//! Search-then-create protocol shared by every resource kind.

use crate::services::{ClientError, ClientResult};
use crate::models::config::ClientConfig;
use crate::models::envelope::{Attributes, EnvelopeData, decode_envelope, extract_id};
use crate::models::payload::encode_entity;
use crate::request::{authenticated_url, search_path};
use crate::transport::{JSON_CONTENT_TYPE, Transport, read_body};

/// Remote collection addressed by the upsert calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resource {
    /// Singular name used in logs and errors.
    pub name: &'static str,
    pub path: &'static str,
}

pub const ORGANIZATIONS: Resource = Resource {
    name: "organization",
    path: "/organizations",
};

pub const PERSONS: Resource = Resource {
    name: "person",
    path: "/persons",
};

pub const DEALS: Resource = Resource {
    name: "deal",
    path: "/deals",
};

impl Resource {
    fn find_path(&self) -> String {
        format!("{}/find", self.path)
    }
}

/// Looks the resource up by `search_params`; returns the first hit's id.
///
/// The first result is trusted as the match. An empty result list counts as
/// not found.
pub fn search_entity<T>(
    transport: &T,
    config: &ClientConfig,
    resource: Resource,
    search_params: &[(&str, &str)],
) -> ClientResult<Option<i64>>
where
    T: Transport + ?Sized,
{
    let path = search_path(&resource.find_path(), search_params);
    let url = authenticated_url(&config.base_url, &config.api_token, &path)?;

    log::debug!("Searching Pipedrive {} at {}", resource.name, url.path());
    let body = read_body(transport.get(url.as_str())?)?;
    let envelope = decode_envelope(&body)?;

    match envelope.data {
        EnvelopeData::Absent => Ok(None),
        EnvelopeData::List(items) => match items.first() {
            Some(first) => extract_id(first).map(Some),
            None => Ok(None),
        },
        EnvelopeData::Object(_) => Err(ClientError::MalformedResponse(format!(
            "{} search returned a single object instead of a list",
            resource.name
        ))),
    }
}

/// Posts `fields` to the resource collection and returns the new id.
pub fn create_entity<T>(
    transport: &T,
    config: &ClientConfig,
    resource: Resource,
    fields: &Attributes,
) -> ClientResult<i64>
where
    T: Transport + ?Sized,
{
    let payload = encode_entity(fields)?;
    let url = authenticated_url(&config.base_url, &config.api_token, resource.path)?;

    log::debug!("Creating Pipedrive {} at {}", resource.name, url.path());
    let body = read_body(transport.post(url.as_str(), JSON_CONTENT_TYPE, &payload)?)?;
    let envelope = decode_envelope(&body)?;

    match envelope.data {
        EnvelopeData::Object(attributes) => extract_id(&attributes),
        EnvelopeData::Absent => {
            let body = String::from_utf8_lossy(&body).into_owned();
            log::error!("Pipedrive refused to create {}: {body}", resource.name);
            Err(ClientError::CreationFailed {
                resource: resource.name,
                body,
            })
        }
        EnvelopeData::List(_) => Err(ClientError::MalformedResponse(format!(
            "{} create returned a list instead of an object",
            resource.name
        ))),
    }
}

/// Resolves the resource id, creating the record only when the search is
/// empty. `build_fields` is not called when a match exists.
pub fn find_or_create<T, F>(
    transport: &T,
    config: &ClientConfig,
    resource: Resource,
    search_params: &[(&str, &str)],
    build_fields: F,
) -> ClientResult<i64>
where
    T: Transport + ?Sized,
    F: FnOnce() -> Attributes,
{
    if let Some(id) = search_entity(transport, config, resource, search_params)? {
        log::info!("Found existing Pipedrive {} #{id}", resource.name);
        return Ok(id);
    }

    let id = create_entity(transport, config, resource, &build_fields())?;
    log::info!("Created Pipedrive {} #{id}", resource.name);
    Ok(id)
}
