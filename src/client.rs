//! Pipedrive client exposing the find-or-create operations.

use url::Url;

use crate::domain::deal::Deal;
use crate::domain::organization::Organization;
use crate::domain::person::Person;
use crate::domain::types::{DealId, OrganizationId, PersonId, UserId};
use crate::models::config::ClientConfig;
use crate::models::payload::{deal_payload, organization_payload, person_payload};
use crate::request::authenticated_url;
use crate::services::{ClientError, ClientResult};
use crate::services::upsert::{DEALS, ORGANIZATIONS, PERSONS, create_entity, find_or_create};
use crate::transport::Transport;
#[cfg(feature = "http")]
use crate::transport::http::HttpTransport;

/// Options accepted by [`PipedriveClient::new`].
#[derive(Debug, Clone, Default)]
pub struct ClientOptions {
    /// Owner applied to created records that do not name one.
    pub default_user_id: Option<UserId>,
}

/// Client bound to one Pipedrive account.
///
/// Each operation performs at most one search and one create call and
/// writes the resolved id into the entity it was given.
#[derive(Debug, Clone)]
pub struct PipedriveClient<T> {
    config: ClientConfig,
    transport: T,
}

#[cfg(feature = "http")]
pub type HttpPipedriveClient = PipedriveClient<HttpTransport>;

#[cfg(feature = "http")]
impl PipedriveClient<HttpTransport> {
    /// Builds a client backed by the default HTTP transport.
    pub fn new(
        base_url: impl Into<String>,
        api_token: impl Into<String>,
        options: ClientOptions,
    ) -> ClientResult<Self> {
        let mut config = ClientConfig::new(base_url, api_token);
        config.default_owner_id = options.default_user_id;
        Ok(Self::with_transport(config, HttpTransport::new()?))
    }
}

impl<T> PipedriveClient<T>
where
    T: Transport,
{
    pub fn with_transport(config: ClientConfig, transport: T) -> Self {
        Self { config, transport }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Returns `base_url + path` with the API token merged into the query.
    pub fn authenticated_url(&self, path: &str) -> ClientResult<Url> {
        authenticated_url(&self.config.base_url, &self.config.api_token, path)
    }

    /// Searches the organization by name and creates it when missing.
    pub fn find_or_create_organization(&self, org: &mut Organization) -> ClientResult<()> {
        let default_owner = self.config.default_owner_id;
        let id = find_or_create(
            &self.transport,
            &self.config,
            ORGANIZATIONS,
            &[("term", org.name.as_str())],
            || organization_payload(org, default_owner),
        )?;
        org.id = Some(OrganizationId::new(id)?);
        Ok(())
    }

    /// Searches the person by their first email and creates them when missing.
    pub fn find_or_create_person(&self, person: &mut Person) -> ClientResult<()> {
        let email = person
            .search_email()
            .ok_or_else(|| ClientError::InvalidArgument("Must have at least one email".into()))?;

        let default_owner = self.config.default_owner_id;
        let id = find_or_create(
            &self.transport,
            &self.config,
            PERSONS,
            &[("search_by_email", "1"), ("term", email)],
            || person_payload(person, default_owner),
        )?;
        person.id = Some(PersonId::new(id)?);
        Ok(())
    }

    /// Creates the deal; the client's default owner fills an unset `user_id`.
    pub fn create_deal(&self, deal: &mut Deal) -> ClientResult<()> {
        if deal.user_id.is_none() {
            deal.user_id = self.config.default_owner_id;
        }
        let id = create_entity(&self.transport, &self.config, DEALS, &deal_payload(deal))?;
        deal.id = Some(DealId::new(id)?);
        Ok(())
    }
}
