//! The configuration object handed to entry functions.

use std::fmt;

use serde::Serialize;
use serde_yaml::{Mapping, Value};

use crate::error::{AppError, AppResult};

/// A parsed configuration file.
///
/// The top level is always a mapping; values below it may be nested
/// mappings, sequences or scalars. Keys keep the order they had in the
/// source file, so rendering is stable across runs.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Config {
    root: Mapping,
}

impl Config {
    /// Builds a configuration from a decoded YAML document.
    ///
    /// A null document (empty file, `~`) becomes an empty configuration.
    /// Any other non-mapping document is rejected.
    pub(crate) fn from_document(path: &str, document: Value) -> AppResult<Self> {
        match document {
            Value::Mapping(root) => Ok(Self { root }),
            Value::Null => Ok(Self::default()),
            other => Err(AppError::ConfigParseError {
                path: path.to_string(),
                message: format!(
                    "expected a mapping at the top level, found {}",
                    kind_of(&other)
                ),
            }),
        }
    }

    /// Returns the top-level mapping.
    pub fn root(&self) -> &Mapping {
        &self.root
    }

    /// Number of top-level keys.
    pub fn len(&self) -> usize {
        self.root.len()
    }

    /// Returns `true` if the configuration has no keys.
    pub fn is_empty(&self) -> bool {
        self.root.is_empty()
    }

    /// Looks up a top-level key.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.root.get(key)
    }

    /// Looks up a value by dotted key path.
    ///
    /// Each segment names a mapping key, or an index when the current
    /// value is a sequence.
    ///
    /// # Example
    ///
    /// ```
    /// use hydra_app::config::ConfigLoader;
    ///
    /// let config = ConfigLoader::parse("inline", b"db:\n  hosts: [a, b]\n")?;
    /// assert_eq!(config.select("db.hosts.1").and_then(|v| v.as_str()), Some("b"));
    /// assert!(config.select("db.port").is_none());
    /// # Ok::<(), hydra_app::error::AppError>(())
    /// ```
    pub fn select(&self, path: &str) -> Option<&Value> {
        let mut segments = path.split('.');
        let mut current = self.root.get(segments.next()?)?;

        for segment in segments {
            current = match current {
                Value::Sequence(items) => items.get(segment.parse::<usize>().ok()?)?,
                Value::Mapping(map) => map.get(segment)?,
                _ => return None,
            };
        }

        Some(current)
    }

    /// Renders the configuration as block-style YAML.
    ///
    /// Nested mappings are indented under their parent key and scalars
    /// are written as `key: value`, one per line.
    pub fn pretty(&self) -> AppResult<String> {
        serde_yaml::to_string(&self.root).map_err(|e| AppError::RenderError {
            message: e.to_string(),
        })
    }
}

/// Writes [`Config::pretty`]. A render failure surfaces only as
/// `fmt::Error`; call `pretty()` directly to get the underlying error.
impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered = self.pretty().map_err(|_| fmt::Error)?;
        f.write_str(&rendered)
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Sequence(_) => "a sequence",
        Value::Mapping(_) => "a mapping",
        Value::Tagged(_) => "a tagged value",
    }
}
