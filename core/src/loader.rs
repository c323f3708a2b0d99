#![deny(missing_docs)]

//! # RAML Loader
//!
//! Reads a RAML file into a `serde_json::Value` tree with every `!include`
//! substituted.
//!
//! - `!include` paths resolve against the directory of the file holding the tag.
//! - `.raml`, `.yaml` and `.yml` targets are parsed as YAML (and their own
//!   includes resolved); `.json` targets are parsed as JSON; anything else is
//!   inlined as text.
//! - A file that includes itself, directly or transitively, is rejected.
//! - YAML merge keys (`<<: *anchor`) are applied once includes are resolved.
//!
//! Mapping keys are stringified (`200:` becomes `"200"`) and declaration order
//! is kept, which the resource walker relies on.

use crate::error::{RamlError, RamlResult};
use serde_json::{Map, Number, Value as JsonValue};
use serde_yaml::Value as YamlValue;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

const INCLUDE_TAG: &str = "!include";

/// Loads a RAML file from disk.
pub fn load_raml_file(path: impl AsRef<Path>) -> RamlResult<JsonValue> {
    let path = path.as_ref();
    let mut resolver = IncludeResolver::default();
    let yaml = resolver.load_yaml_file(path)?;
    info!(path = %path.display(), includes = resolver.loaded, "loaded RAML document");
    yaml_to_json(yaml)
}

/// Loads RAML text already in memory; includes resolve against `base_dir`.
pub fn load_raml_str(source: &str, base_dir: impl AsRef<Path>) -> RamlResult<JsonValue> {
    let mut resolver = IncludeResolver::default();
    let yaml = resolver.parse_yaml(source, base_dir.as_ref())?;
    yaml_to_json(yaml)
}

#[derive(Default)]
struct IncludeResolver {
    /// Canonical paths of the files currently being expanded.
    stack: Vec<PathBuf>,
    /// Number of include targets read.
    loaded: usize,
}

impl IncludeResolver {
    fn load_yaml_file(&mut self, path: &Path) -> RamlResult<YamlValue> {
        let canonical = fs::canonicalize(path).map_err(|source| RamlError::Include {
            path: path.to_path_buf(),
            source,
        })?;
        if self.stack.contains(&canonical) {
            return Err(RamlError::IncludeCycle(canonical));
        }

        let text = read_include(&canonical)?;
        let base_dir = canonical
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();

        self.stack.push(canonical);
        let result = self.parse_yaml(&text, &base_dir);
        self.stack.pop();
        result
    }

    fn parse_yaml(&mut self, text: &str, base_dir: &Path) -> RamlResult<YamlValue> {
        let value: YamlValue = serde_yaml::from_str(text)?;
        let mut value = self.resolve(value, base_dir)?;
        value.apply_merge()?;
        Ok(value)
    }

    fn resolve(&mut self, value: YamlValue, base_dir: &Path) -> RamlResult<YamlValue> {
        match value {
            YamlValue::Tagged(tagged) => {
                if tagged.tag == INCLUDE_TAG {
                    self.include(tagged.value, base_dir)
                } else {
                    self.resolve(tagged.value, base_dir)
                }
            }
            YamlValue::Mapping(mapping) => {
                let mut out = serde_yaml::Mapping::with_capacity(mapping.len());
                for (key, value) in mapping {
                    out.insert(key, self.resolve(value, base_dir)?);
                }
                Ok(YamlValue::Mapping(out))
            }
            YamlValue::Sequence(items) => items
                .into_iter()
                .map(|item| self.resolve(item, base_dir))
                .collect::<RamlResult<Vec<_>>>()
                .map(YamlValue::Sequence),
            other => Ok(other),
        }
    }

    fn include(&mut self, target: YamlValue, base_dir: &Path) -> RamlResult<YamlValue> {
        let relative = match target {
            YamlValue::String(relative) => relative,
            other => {
                return Err(RamlError::General(format!(
                    "{} expects a file path, found {:?}",
                    INCLUDE_TAG, other
                )))
            }
        };

        let path = base_dir.join(relative.trim());
        debug!(path = %path.display(), "resolving include");
        self.loaded += 1;

        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);

        match extension.as_deref() {
            Some("raml" | "yaml" | "yml") => self.load_yaml_file(&path),
            Some("json") => {
                let text = read_include(&path)?;
                let json: JsonValue = serde_json::from_str(&text)?;
                Ok(serde_yaml::to_value(json)?)
            }
            _ => Ok(YamlValue::String(read_include(&path)?)),
        }
    }
}

fn read_include(path: &Path) -> RamlResult<String> {
    fs::read_to_string(path).map_err(|source| RamlError::Include {
        path: path.to_path_buf(),
        source,
    })
}

/// Converts a fully resolved YAML tree to JSON, stringifying mapping keys.
fn yaml_to_json(value: YamlValue) -> RamlResult<JsonValue> {
    Ok(match value {
        YamlValue::Null => JsonValue::Null,
        YamlValue::Bool(b) => JsonValue::Bool(b),
        YamlValue::Number(n) => yaml_number(&n),
        YamlValue::String(s) => JsonValue::String(s),
        YamlValue::Sequence(items) => JsonValue::Array(
            items
                .into_iter()
                .map(yaml_to_json)
                .collect::<RamlResult<Vec<_>>>()?,
        ),
        YamlValue::Mapping(mapping) => {
            let mut map = Map::new();
            for (key, value) in mapping {
                map.insert(mapping_key(key)?, yaml_to_json(value)?);
            }
            JsonValue::Object(map)
        }
        YamlValue::Tagged(tagged) => yaml_to_json(tagged.value)?,
    })
}

fn yaml_number(n: &serde_yaml::Number) -> JsonValue {
    if let Some(i) = n.as_i64() {
        JsonValue::from(i)
    } else if let Some(u) = n.as_u64() {
        JsonValue::from(u)
    } else {
        n.as_f64()
            .and_then(Number::from_f64)
            .map_or(JsonValue::Null, JsonValue::Number)
    }
}

fn mapping_key(key: YamlValue) -> RamlResult<String> {
    match key {
        YamlValue::String(s) => Ok(s),
        YamlValue::Number(n) => Ok(n.to_string()),
        YamlValue::Bool(b) => Ok(b.to_string()),
        YamlValue::Null => Ok("null".to_string()),
        YamlValue::Tagged(tagged) => mapping_key(tagged.value),
        other => Err(RamlError::General(format!(
            "unsupported mapping key: {:?}",
            other
        ))),
    }
}
