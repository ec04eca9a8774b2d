//! Construction of token-authenticated Pipedrive URLs.

use std::collections::BTreeMap;

use url::Url;
use url::form_urlencoded;

use crate::errors::ClientResult;

pub const API_TOKEN_PARAM: &str = "api_token";

/// Parses `base_url + path` and appends the API token to its query.
///
/// Existing parameters are kept, `api_token` replaces any previous value and
/// the query is re-encoded with keys in alphabetical order so the output is
/// stable for a given input.
pub fn authenticated_url(base_url: &str, api_token: &str, path: &str) -> ClientResult<Url> {
    let mut url = Url::parse(&format!("{base_url}{path}"))?;

    let mut params: BTreeMap<String, Vec<String>> = BTreeMap::new();
    for (key, value) in url.query_pairs() {
        params
            .entry(key.into_owned())
            .or_default()
            .push(value.into_owned());
    }
    params.insert(API_TOKEN_PARAM.to_string(), vec![api_token.to_string()]);

    url.query_pairs_mut().clear().extend_pairs(
        params
            .iter()
            .flat_map(|(key, values)| values.iter().map(move |value| (key, value))),
    );

    Ok(url)
}

/// Appends form-encoded query parameters to a relative resource path.
pub fn search_path(resource_path: &str, params: &[(&str, &str)]) -> String {
    let query = form_urlencoded::Serializer::new(String::new())
        .extend_pairs(params)
        .finish();
    format!("{resource_path}?{query}")
}
