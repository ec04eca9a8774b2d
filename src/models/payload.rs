//! Creation payloads sent to the Pipedrive create endpoints.

use serde_json::{Value, json};

use crate::domain::deal::Deal;
use crate::domain::organization::Organization;
use crate::domain::person::Person;
use crate::domain::types::UserId;
use crate::errors::ClientResult;
use crate::models::envelope::Attributes;

/// Serializes a field mapping into a compact JSON body.
pub fn encode_entity(fields: &Attributes) -> ClientResult<Vec<u8>> {
    Ok(serde_json::to_vec(fields)?)
}

/// `name`, then the caller's extra fields, then the owner.
///
/// The entity's own owner wins over everything. `default_owner` only fills
/// the gap when neither the entity nor its extra fields name an owner.
pub fn organization_payload(org: &Organization, default_owner: Option<UserId>) -> Attributes {
    let mut fields = Attributes::new();
    fields.insert("name".into(), json!(org.name));
    for (name, value) in &org.extra_fields {
        fields.insert(name.clone(), value.clone());
    }
    match (org.owner_id, default_owner) {
        (Some(owner), _) => {
            fields.insert("owner_id".into(), json!(owner));
        }
        (None, Some(owner)) if !fields.contains_key("owner_id") => {
            fields.insert("owner_id".into(), json!(owner));
        }
        _ => {}
    }
    fields
}

pub fn person_payload(person: &Person, default_owner: Option<UserId>) -> Attributes {
    let mut fields = Attributes::new();
    fields.insert("name".into(), json!(person.name));
    fields.insert("email".into(), json!(person.emails));
    if !person.phones.is_empty() {
        fields.insert("phone".into(), json!(person.phones));
    }
    if let Some(org_id) = person.organization_id {
        fields.insert("org_id".into(), json!(org_id));
    }
    if let Some(owner) = person.owner_id.or(default_owner) {
        fields.insert("owner_id".into(), json!(owner));
    }
    fields
}

/// Fixed deal fields followed by the caller's extra fields, which may
/// override them. `user_id` must already carry any default substitution.
pub fn deal_payload(deal: &Deal) -> Attributes {
    let mut fields = Attributes::new();
    fields.insert("title".into(), json!(deal.title));
    fields.insert("value".into(), json!(deal.value));
    insert_id(&mut fields, "user_id", deal.user_id.map(i64::from));
    insert_id(&mut fields, "person_id", deal.person_id.map(i64::from));
    insert_id(&mut fields, "org_id", deal.organization_id.map(i64::from));
    for (name, value) in &deal.extra_fields {
        fields.insert(name.clone(), value.clone());
    }
    fields
}

fn insert_id(fields: &mut Attributes, key: &str, id: Option<i64>) {
    if let Some(id) = id {
        fields.insert(key.to_string(), Value::from(id));
    }
}
