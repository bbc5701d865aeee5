//! Configuration schema definitions.
//!
//! These are the raw records as they appear in the config file. They are
//! turned into [`Endpoint`](crate::health::endpoint::Endpoint)s by
//! [`validation`](crate::config::validation).

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};

/// Root of a TOML configuration file.
///
/// ```toml
/// [[endpoints]]
/// name = "index"
/// url = "https://example.com/"
/// ```
///
/// YAML files skip this wrapper and hold the endpoint list directly.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct MonitorConfig {
    /// Endpoints to probe, in report order.
    pub endpoints: Vec<EndpointConfig>,
}

/// A single endpoint entry.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct EndpointConfig {
    /// Display name. Required; an absent field is caught by validation.
    #[serde(default)]
    pub name: String,

    /// Absolute URL to probe. Required.
    #[serde(default)]
    pub url: String,

    /// HTTP method token.
    #[serde(default = "default_method")]
    pub method: String,

    /// Extra request headers. An explicit `null` reads as empty.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub headers: BTreeMap<String, String>,

    /// Raw request payload, sent as-is.
    #[serde(default)]
    pub body: Option<String>,
}

fn default_method() -> String {
    "GET".to_string()
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<BTreeMap<String, String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::deserialize(deserializer)?.unwrap_or_default())
}

impl EndpointConfig {
    /// Minimal `GET` entry with no headers or body.
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
            method: default_method(),
            headers: BTreeMap::new(),
            body: None,
        }
    }
}
