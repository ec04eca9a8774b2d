use serde::{Deserialize, Serialize};

use crate::domain::ExtraFields;
use crate::domain::types::{DealId, OrganizationId, PersonId, UserId};

/// Deal submitted once through a direct create.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
pub struct Deal {
    pub id: Option<DealId>,
    pub title: String,
    pub value: i64,
    /// Falls back to the client's default owner when unset.
    pub user_id: Option<UserId>,
    pub person_id: Option<PersonId>,
    pub organization_id: Option<OrganizationId>,
    /// Optional set of custom fields.
    #[serde(default)]
    pub extra_fields: ExtraFields,
}

impl Deal {
    #[must_use]
    pub fn new(title: impl Into<String>, value: i64) -> Self {
        Self {
            title: title.into().trim().to_string(),
            value,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_person(mut self, person_id: PersonId) -> Self {
        self.person_id = Some(person_id);
        self
    }

    #[must_use]
    pub fn with_organization(mut self, organization_id: OrganizationId) -> Self {
        self.organization_id = Some(organization_id);
        self
    }

    #[must_use]
    pub fn with_user(mut self, user_id: UserId) -> Self {
        self.user_id = Some(user_id);
        self
    }

    #[must_use]
    pub fn with_extra_fields(mut self, extra_fields: ExtraFields) -> Self {
        self.extra_fields = extra_fields;
        self
    }
}
