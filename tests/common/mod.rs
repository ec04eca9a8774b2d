//! URL-keyed fake transport shared by the integration tests.

use std::collections::HashMap;
use std::io::Cursor;
use std::sync::Mutex;

use pushkind_pipedrive::transport::{ResponseBody, Transport, TransportError, TransportResult};

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Get(String),
    Post {
        url: String,
        content_type: String,
        body: Vec<u8>,
    },
}

/// Answers each mocked URL with a canned body and records every call.
#[derive(Default)]
pub struct FakeTransport {
    responses: HashMap<String, String>,
    calls: Mutex<Vec<Call>>,
}

impl FakeTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(mut self, url: &str, body: impl Into<String>) -> Self {
        self.responses.insert(url.to_string(), body.into());
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().expect("lock poisoned").clone()
    }

    pub fn posts(&self) -> Vec<(String, serde_json::Value)> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                Call::Post { url, body, .. } => Some((
                    url,
                    serde_json::from_slice(&body).expect("post body is JSON"),
                )),
                Call::Get(_) => None,
            })
            .collect()
    }

    fn answer(&self, url: &str) -> TransportResult<ResponseBody> {
        match self.responses.get(url) {
            Some(body) => Ok(Box::new(Cursor::new(body.clone().into_bytes()))),
            None => Err(TransportError::Request(format!("URL not mocked out: {url}"))),
        }
    }
}

impl Transport for FakeTransport {
    fn get(&self, url: &str) -> TransportResult<ResponseBody> {
        self.calls
            .lock()
            .expect("lock poisoned")
            .push(Call::Get(url.to_string()));
        self.answer(url)
    }

    fn post(&self, url: &str, content_type: &str, body: &[u8]) -> TransportResult<ResponseBody> {
        self.calls.lock().expect("lock poisoned").push(Call::Post {
            url: url.to_string(),
            content_type: content_type.to_string(),
            body: body.to_vec(),
        });
        self.answer(url)
    }
}

pub fn org_find_resp(id: i64, name: &str) -> String {
    format!(
        r#"{{
    "success": true,
    "data": [{{ "id": {id}, "name": "{name}", "visible_to": "3" }}],
    "additional_data": {{
        "pagination": {{ "start": 0, "limit": 100, "more_items_in_collection": false }}
    }}
}}"#
    )
}

pub fn org_create_resp(id: i64, name: &str) -> String {
    format!(
        r#"{{
    "success": true,
    "data": {{
        "id": {id},
        "company_id": 2178381,
        "owner_id": {{ "id": 3219426, "name": "Chris Marshall", "value": 3219426 }},
        "name": "{name}",
        "open_deals_count": 0,
        "active_flag": true,
        "category_id": null,
        "visible_to": "3",
        "cc_email": "videofruitdev@pipedrivemail.com"
    }},
    "related_objects": {{ "user": {{ "3219426": {{ "id": 3219426 }} }} }}
}}"#
    )
}

pub fn person_find_resp(id: i64, email: &str) -> String {
    format!(
        r#"{{
    "success": true,
    "data": [{{
        "id": {id},
        "name": "Some Name",
        "email": "{email}",
        "phone": null,
        "org_id": null,
        "org_name": "",
        "visible_to": "3"
    }}],
    "additional_data": {{ "search_method": "search_by_email" }}
}}"#
    )
}

pub const PERSON_NO_FIND_RESP: &str = r#"{
    "success": true,
    "data": null,
    "additional_data": {
        "search_method": "search_by_email",
        "pagination": { "start": 0, "limit": 100, "more_items_in_collection": false }
    }
}"#;

pub fn person_create_resp(id: i64, email: &str) -> String {
    format!(
        r#"{{
    "success": true,
    "data": {{
        "id": {id},
        "org_id": {{ "name": "Videofruit", "value": 1 }},
        "name": "Tester McTest",
        "phone": [{{ "value": "", "primary": true }}],
        "email": [{{ "label": "", "value": "{email}", "primary": true }}]
    }}
}}"#
    )
}
