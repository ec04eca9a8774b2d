//! Configuration model loaded from external sources.

use serde::Deserialize;

use crate::domain::types::{TypeConstraintError, UserId, optional_user_id};

/// Connection settings owned by [`crate::client::PipedriveClient`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
    pub api_token: String,
    pub default_owner_id: Option<UserId>,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>, api_token: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_token: api_token.into(),
            default_owner_id: None,
        }
    }

    #[must_use]
    pub fn default_owner(mut self, owner_id: UserId) -> Self {
        self.default_owner_id = Some(owner_id);
        self
    }
}

fn default_base_url() -> String {
    crate::DEFAULT_BASE_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

fn default_connect_timeout_secs() -> u64 {
    5
}

#[derive(Clone, Debug, Deserialize)]
/// Settings as read from `config/*.yaml` and `APP_*` variables.
pub struct PipedriveSettings {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    pub api_token: String,
    /// `0` leaves records without a default owner.
    #[serde(default)]
    pub default_owner_id: i64,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,
}

impl TryFrom<&PipedriveSettings> for ClientConfig {
    type Error = TypeConstraintError;

    fn try_from(settings: &PipedriveSettings) -> Result<Self, Self::Error> {
        Ok(Self {
            base_url: settings.base_url.clone(),
            api_token: settings.api_token.clone(),
            default_owner_id: optional_user_id(settings.default_owner_id)?,
        })
    }
}

/// Loads settings from `<dir>/default.yaml`, the optional `<dir>/<app_env>.yaml`
/// override and `APP_`-prefixed environment variables, in that order.
#[cfg(feature = "settings")]
pub fn load_settings(
    config_dir: &std::path::Path,
    app_env: &str,
) -> Result<PipedriveSettings, config::ConfigError> {
    use config::{Config, Environment, File};

    let default_file = config_dir.join("default");
    let profile_file = config_dir.join(app_env);

    Config::builder()
        .add_source(File::with_name(&default_file.to_string_lossy()))
        .add_source(File::with_name(&profile_file.to_string_lossy()).required(false))
        .add_source(Environment::with_prefix("APP"))
        .build()?
        .try_deserialize::<PipedriveSettings>()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings(default_owner_id: i64) -> PipedriveSettings {
        PipedriveSettings {
            base_url: "https://api.pipedrive.com/v1".to_string(),
            api_token: "abc123".to_string(),
            default_owner_id,
            timeout_secs: 10,
            connect_timeout_secs: 5,
        }
    }

    #[test]
    fn zero_owner_means_no_default() {
        let config = ClientConfig::try_from(&settings(0)).unwrap();
        assert_eq!(config.default_owner_id, None);
        assert_eq!(config.api_token, "abc123");
    }

    #[test]
    fn positive_owner_is_kept_and_negative_rejected() {
        let config = ClientConfig::try_from(&settings(3219426)).unwrap();
        assert_eq!(config.default_owner_id.map(UserId::get), Some(3219426));

        assert_eq!(
            ClientConfig::try_from(&settings(-1)),
            Err(TypeConstraintError::NonPositiveId)
        );
    }
}
