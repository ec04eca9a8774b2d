use serde::{Deserialize, Serialize};

use crate::domain::types::{OrganizationId, PersonId, UserId, normalize_list};

/// Person looked up by their first email address and created when missing.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
pub struct Person {
    /// Filled once the person is resolved remotely.
    pub id: Option<PersonId>,
    pub owner_id: Option<UserId>,
    pub organization_id: Option<OrganizationId>,
    pub name: String,
    /// The first entry is the search key.
    pub emails: Vec<String>,
    #[serde(default)]
    pub phones: Vec<String>,
}

impl Person {
    #[must_use]
    pub fn new<E, P>(name: impl Into<String>, emails: E, phones: P) -> Self
    where
        E: IntoIterator,
        E::Item: Into<String>,
        P: IntoIterator,
        P::Item: Into<String>,
    {
        Self {
            name: name.into().trim().to_string(),
            emails: normalize_list(emails),
            phones: normalize_list(phones),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_organization(mut self, organization_id: OrganizationId) -> Self {
        self.organization_id = Some(organization_id);
        self
    }

    #[must_use]
    pub fn with_owner(mut self, owner_id: UserId) -> Self {
        self.owner_id = Some(owner_id);
        self
    }

    /// Email used to look the person up remotely.
    pub fn search_email(&self) -> Option<&str> {
        self.emails.first().map(String::as_str)
    }
}
