use serde::{Deserialize, Serialize};

use crate::domain::ExtraFields;
use crate::domain::types::{OrganizationId, UserId};

/// Organization looked up by name and created when missing.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
pub struct Organization {
    /// Filled once the organization is resolved remotely.
    pub id: Option<OrganizationId>,
    pub name: String,
    pub owner_id: Option<UserId>,
    /// Optional set of custom fields.
    #[serde(default)]
    pub extra_fields: ExtraFields,
}

impl Organization {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into().trim().to_string(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_owner(mut self, owner_id: UserId) -> Self {
        self.owner_id = Some(owner_id);
        self
    }

    #[must_use]
    pub fn with_extra_fields(mut self, extra_fields: ExtraFields) -> Self {
        self.extra_fields = extra_fields;
        self
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn new_trims_name_and_starts_unresolved() {
        let org = Organization::new("  Videofruit ");
        assert_eq!(org.name, "Videofruit");
        assert!(org.id.is_none());
        assert!(org.extra_fields.is_empty());
    }

    #[test]
    fn builder_sets_owner_and_fields() {
        let mut fields = ExtraFields::new();
        fields.insert("visible_to".into(), json!("3"));
        let org = Organization::new("Videofruit")
            .with_owner(UserId::new(9).unwrap())
            .with_extra_fields(fields);

        assert_eq!(org.owner_id.map(UserId::get), Some(9));
        assert_eq!(org.extra_fields["visible_to"], json!("3"));
    }
}
