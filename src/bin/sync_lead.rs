//! Pushes a single lead read from stdin into Pipedrive.
//!
//! The lead is upserted as organization, then person, then an optional deal,
//! with each resolved id linked into the next record.

use std::env;
use std::io::Read;
use std::path::Path;
use std::time::Duration;

use dotenvy::dotenv;
use serde::Deserialize;
use thiserror::Error;

use pushkind_pipedrive::domain::deal::Deal;
use pushkind_pipedrive::domain::organization::Organization;
use pushkind_pipedrive::domain::person::Person;
use pushkind_pipedrive::models::config::{PipedriveSettings, load_settings};
use pushkind_pipedrive::transport::Transport;
use pushkind_pipedrive::transport::http::HttpTransport;
use pushkind_pipedrive::{ClientConfig, ClientResult, PipedriveClient};

/// Errors raised while reading the lead from stdin.
#[derive(Debug, Error)]
enum LeadError {
    #[error("Cannot read stdin: {0}")]
    Stdin(#[from] std::io::Error),
    #[error("Invalid lead: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Lead as posted by the signup form.
#[derive(Debug, Deserialize)]
struct Lead {
    organization: Option<String>,
    name: String,
    email: String,
    phone: Option<String>,
    deal_title: Option<String>,
    #[serde(default)]
    deal_value: i64,
}

fn sync_lead<T>(client: &PipedriveClient<T>, lead: Lead) -> ClientResult<()>
where
    T: Transport,
{
    let mut person = Person::new(lead.name, [lead.email], lead.phone);

    let organization_id = match lead.organization.filter(|name| !name.trim().is_empty()) {
        Some(name) => {
            let mut org = Organization::new(name);
            client.find_or_create_organization(&mut org)?;
            log::info!("Organization {} resolved to #{:?}", org.name, org.id);
            org.id
        }
        None => None,
    };
    person.organization_id = organization_id;

    client.find_or_create_person(&mut person)?;
    log::info!("Person {:?} resolved to #{:?}", person.search_email(), person.id);

    if let Some(title) = lead.deal_title {
        let mut deal = Deal::new(title, lead.deal_value);
        deal.person_id = person.id;
        deal.organization_id = organization_id;
        client.create_deal(&mut deal)?;
        log::info!("Deal {} created as #{:?}", deal.title, deal.id);
    }

    Ok(())
}

fn build_client(settings: &PipedriveSettings) -> ClientResult<PipedriveClient<HttpTransport>> {
    let config = ClientConfig::try_from(settings)?;
    let transport = HttpTransport::with_timeouts(
        Duration::from_secs(settings.timeout_secs),
        Duration::from_secs(settings.connect_timeout_secs),
    )?;
    Ok(PipedriveClient::with_transport(config, transport))
}

fn parse_lead(input: &str) -> Result<Lead, LeadError> {
    Ok(serde_json::from_str(input)?)
}

fn read_lead() -> Result<Lead, LeadError> {
    let mut input = String::new();
    std::io::stdin().read_to_string(&mut input)?;
    parse_lead(&input)
}

fn main() {
    dotenv().ok(); // Load .env file
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    // Select config profile (defaults to `local`).
    let app_env = env::var("APP_ENV").unwrap_or_else(|_| "local".into());

    let settings = match load_settings(Path::new("config"), &app_env) {
        Ok(settings) => settings,
        Err(err) => {
            log::error!("Error loading settings: {}", err);
            std::process::exit(1);
        }
    };

    let client = match build_client(&settings) {
        Ok(client) => client,
        Err(err) => {
            log::error!("Error building Pipedrive client: {}", err);
            std::process::exit(1);
        }
    };

    let lead = match read_lead() {
        Ok(lead) => lead,
        Err(err) => {
            log::error!("{}", err);
            std::process::exit(1);
        }
    };

    if let Err(err) = sync_lead(&client, lead) {
        log::error!("Error syncing lead: {}", err);
        std::process::exit(1);
    }
}

#[cfg(test)]
mod lead_tests {
    use super::*;

    #[test]
    fn parses_lead_with_defaults() {
        let lead = parse_lead(r#"{"name": "Tester McTest", "email": "test@videofruit.com"}"#)
            .unwrap();
        assert_eq!(lead.name, "Tester McTest");
        assert_eq!(lead.deal_value, 0);
        assert!(lead.organization.is_none());
    }

    #[test]
    fn malformed_lead_is_a_parse_error() {
        let err = parse_lead(r#"{"name": "Tester McTest"}"#).unwrap_err();
        assert!(matches!(err, LeadError::Parse(_)));

        let err = parse_lead("{not json").unwrap_err();
        assert!(matches!(err, LeadError::Parse(_)));
        assert!(err.to_string().starts_with("Invalid lead: "));
    }
}
