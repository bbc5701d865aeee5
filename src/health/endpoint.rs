//! Monitored endpoint.
//!
//! # Responsibilities
//! - Hold the parsed request (method, url, headers, body)
//! - Derive the domain once, at construction
//! - Carry the cumulative success/check counters
//!
//! Counters only move forward and only through [`Endpoint::record`], which
//! the checker calls exactly once per probe.

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::Method;
use url::Url;

use crate::config::schema::EndpointConfig;
use crate::health::availability::availability_percent;

/// Why a config record could not become an [`Endpoint`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidEndpoint {
    #[error("missing or empty `name`")]
    MissingName,

    #[error("missing or empty `url`")]
    MissingUrl,

    #[error("invalid url `{url}`: {reason}")]
    InvalidUrl { url: String, reason: url::ParseError },

    #[error("url `{url}` has no host")]
    MissingHost { url: String },

    #[error("unsupported scheme `{scheme}` (expected http or https)")]
    UnsupportedScheme { scheme: String },

    #[error("invalid HTTP method `{method}`")]
    InvalidMethod { method: String },

    #[error("invalid header `{name}`")]
    InvalidHeader { name: String },
}

/// One configured HTTP target and its run history.
#[derive(Debug, Clone)]
pub struct Endpoint {
    name: String,
    url: Url,
    method: Method,
    headers: HeaderMap,
    body: Option<String>,
    domain: String,
    success_count: u64,
    check_count: u64,
}

impl Endpoint {
    /// Build an endpoint from a config record.
    pub fn new(config: EndpointConfig) -> Result<Self, InvalidEndpoint> {
        let EndpointConfig { name, url, method, headers, body } = config;

        if name.trim().is_empty() {
            return Err(InvalidEndpoint::MissingName);
        }
        if url.trim().is_empty() {
            return Err(InvalidEndpoint::MissingUrl);
        }

        let parsed = Url::parse(url.trim())
            .map_err(|reason| InvalidEndpoint::InvalidUrl { url: url.clone(), reason })?;
        match parsed.scheme() {
            "http" | "https" => {}
            other => return Err(InvalidEndpoint::UnsupportedScheme { scheme: other.to_string() }),
        }
        // host_str never includes the port
        let domain = match parsed.host_str() {
            Some(host) if !host.is_empty() => host.to_string(),
            _ => return Err(InvalidEndpoint::MissingHost { url }),
        };

        let method = if method.trim().is_empty() {
            Method::GET
        } else {
            Method::from_bytes(method.trim().as_bytes())
                .map_err(|_| InvalidEndpoint::InvalidMethod { method: method.clone() })?
        };

        let mut header_map = HeaderMap::with_capacity(headers.len());
        for (key, value) in headers {
            let header_name = HeaderName::from_bytes(key.as_bytes())
                .map_err(|_| InvalidEndpoint::InvalidHeader { name: key.clone() })?;
            let header_value = HeaderValue::from_str(&value)
                .map_err(|_| InvalidEndpoint::InvalidHeader { name: key.clone() })?;
            header_map.append(header_name, header_value);
        }

        Ok(Self {
            name,
            url: parsed,
            method,
            headers: header_map,
            body,
            domain,
            success_count: 0,
            check_count: 0,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    pub fn body(&self) -> Option<&str> {
        self.body.as_deref()
    }

    /// Host part of the url, port stripped.
    pub fn domain(&self) -> &str {
        &self.domain
    }

    pub fn success_count(&self) -> u64 {
        self.success_count
    }

    pub fn check_count(&self) -> u64 {
        self.check_count
    }

    /// Cumulative availability of this endpoint alone, truncated.
    pub fn availability(&self) -> u8 {
        availability_percent(self.success_count, self.check_count)
    }

    /// Count one finished probe.
    pub(crate) fn record(&mut self, available: bool) {
        self.check_count += 1;
        if available {
            self.success_count += 1;
        }
    }
}
