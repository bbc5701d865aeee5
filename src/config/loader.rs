//! Configuration loading from disk.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::schema::{EndpointConfig, MonitorConfig};
use crate::config::validation::{build_endpoints, ValidationError};
use crate::health::endpoint::Endpoint;

/// Anything that stops the monitor from starting.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("invalid TOML: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("validation failed: {}", join(.0))]
    Validation(Vec<ValidationError>),

    #[error("no endpoints to monitor")]
    NoEndpoints,
}

fn join(errors: &[ValidationError]) -> String {
    errors.iter().map(ToString::to_string).collect::<Vec<_>>().join(", ")
}

/// Parse endpoint records from file contents.
///
/// `.toml` files use an `[[endpoints]]` table array; everything else is read
/// as YAML holding a list of records.
pub fn parse_endpoints(content: &str, path: &Path) -> Result<Vec<EndpointConfig>, ConfigError> {
    let is_toml = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"));

    if is_toml {
        let config: MonitorConfig = toml::from_str(content)?;
        Ok(config.endpoints)
    } else if content.trim().is_empty() {
        Ok(Vec::new())
    } else {
        // a document holding only `~` is an empty list too
        let endpoints: Option<Vec<EndpointConfig>> = serde_yaml::from_str(content)?;
        Ok(endpoints.unwrap_or_default())
    }
}

/// Load, validate and build the endpoint list.
pub fn load_config(path: &Path) -> Result<Vec<Endpoint>, ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let configs = parse_endpoints(&content, path)?;
    let endpoints = build_endpoints(configs).map_err(ConfigError::Validation)?;
    if endpoints.is_empty() {
        return Err(ConfigError::NoEndpoints);
    }

    Ok(endpoints)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(suffix: &str, content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_yaml() {
        let file = write_config(
            ".yaml",
            r#"
- name: index
  url: https://fetch.example.com/
- name: careers
  url: https://fetch.example.com/careers
  method: POST
  headers:
    content-type: application/json
    user-agent: monitor
  body: '{"foo":"bar"}'
- name: rewards
  url: https://www.example.org:8443/rewards
"#,
        );

        let endpoints = load_config(file.path()).unwrap();
        assert_eq!(endpoints.len(), 3);
        assert_eq!(endpoints[0].domain(), "fetch.example.com");
        assert_eq!(endpoints[1].method().as_str(), "POST");
        assert_eq!(endpoints[1].body(), Some(r#"{"foo":"bar"}"#));
        assert_eq!(endpoints[2].domain(), "www.example.org");
    }

    #[test]
    fn test_load_toml() {
        let file = write_config(
            ".toml",
            r#"
[[endpoints]]
name = "index"
url = "http://a.test/"

[[endpoints]]
name = "head"
url = "http://b.test:81/"
method = "HEAD"
"#,
        );

        let endpoints = load_config(file.path()).unwrap();
        assert_eq!(endpoints.len(), 2);
        assert_eq!(endpoints[1].domain(), "b.test");
        assert_eq!(endpoints[1].method().as_str(), "HEAD");
    }

    #[test]
    fn test_missing_file() {
        let err = load_config(Path::new("/definitely/not/here.yaml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn test_not_a_list() {
        let file = write_config(".yaml", "name: index\nurl: http://a.test/\n");
        assert!(matches!(load_config(file.path()), Err(ConfigError::Yaml(_))));
    }

    #[test]
    fn test_empty_file_has_no_endpoints() {
        let file = write_config(".yml", "");
        assert!(matches!(load_config(file.path()), Err(ConfigError::NoEndpoints)));
    }

    #[test]
    fn test_validation_errors_are_fatal() {
        let file = write_config(".yaml", "- name: a\n  url: http://a.test/\n- url: http://b.test/\n");
        match load_config(file.path()) {
            Err(ConfigError::Validation(errors)) => {
                assert_eq!(errors.len(), 1);
                assert_eq!(errors[0].index, 2);
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }
}
