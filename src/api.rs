use std::time::Duration;

use serde::Deserialize;
use serde_json::{Map, Value};
use thiserror::Error;

pub const COUNTRIES_URL: &str = "https://restcountries.com/v3.1/all?fields=name";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);
const USER_AGENT: &str = concat!("country-picker/", env!("CARGO_PKG_VERSION"));

/// Terminal result of one country fetch, handed from the worker to the UI thread.
pub type FetchOutcome = Result<Vec<String>, FetchError>;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("Failed to parse country data: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Deserialize)]
struct RawRecord {
    #[serde(default)]
    name: Option<RawName>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawName {
    Plain(String),
    Structured(Map<String, Value>),
}

pub fn fetch_countries() -> FetchOutcome {
    fetch_countries_from(COUNTRIES_URL)
}

pub fn fetch_countries_from(url: &str) -> FetchOutcome {
    let client = reqwest::blocking::Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .user_agent(USER_AGENT)
        .build()
        .map_err(|e| FetchError::Network(format!("failed to build HTTP client: {}", e)))?;

    let response = client
        .get(url)
        .send()
        .map_err(|e| FetchError::Network(format!("failed to fetch countries: {}", e)))?;

    let response = response
        .error_for_status()
        .map_err(|e| FetchError::Network(format!("country service returned an error: {}", e)))?;

    let body = response
        .bytes()
        .map_err(|e| FetchError::Network(format!("failed to read response body: {}", e)))?;

    parse_country_names(&body)
}

/// Decodes a response body into sorted country names.
///
/// Only a body that is not JSON at all is an error. A JSON document that is not an
/// array yields no names.
pub fn parse_country_names(body: &[u8]) -> FetchOutcome {
    let document: Value = serde_json::from_slice(body)?;

    match document {
        Value::Array(records) => Ok(extract_names(&records)),
        other => {
            tracing::warn!(kind = json_kind(&other), "country payload is not an array");
            Ok(Vec::new())
        }
    }
}

/// Pulls a display name out of each record and returns them sorted.
///
/// `name` may be a plain string or an object with a `common` string. Records of any
/// other shape are skipped.
pub fn extract_names(records: &[Value]) -> Vec<String> {
    let mut names = records
        .iter()
        .filter_map(|record| match RawRecord::deserialize(record).ok()?.name? {
            RawName::Plain(name) => Some(name),
            RawName::Structured(fields) => fields.get("common")?.as_str().map(str::to_string),
        })
        .collect::<Vec<_>>();

    let skipped = records.len() - names.len();
    if skipped > 0 {
        tracing::debug!(skipped, "ignored country records without a usable name");
    }

    names.sort();
    names
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
