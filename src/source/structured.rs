//! Structured config loading (`.wskprops` and its TOML/YAML equivalents)

use super::properties::parse_properties;
use super::{FileReader, PropertyMap};
use crate::error::SourceError;
use std::io;
use std::path::{Path, PathBuf};

/// File names tried, in order, in each search directory.
pub const DEFAULT_CONFIG_NAMES: [&str; 4] =
    [".wskprops", ".wskprops.toml", ".wskprops.yaml", ".wskprops.yml"];

/// Where to look for the structured config file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigLocator {
    /// Used alone when set; the search list is ignored.
    pub file: Option<PathBuf>,
    pub names: Vec<String>,
    pub search_paths: Vec<PathBuf>,
}

impl ConfigLocator {
    pub fn explicit(path: impl Into<PathBuf>) -> Self {
        Self { file: Some(path.into()), ..Self::default() }
    }

    /// Search `dir` for the default config names.
    pub fn search(dir: impl Into<PathBuf>) -> Self {
        Self {
            file: None,
            names: DEFAULT_CONFIG_NAMES.iter().map(|n| n.to_string()).collect(),
            search_paths: vec![dir.into()],
        }
    }

    fn candidates(&self) -> Vec<PathBuf> {
        if let Some(file) = &self.file {
            return vec![file.clone()];
        }
        self.search_paths
            .iter()
            .flat_map(|dir| self.names.iter().map(move |name| dir.join(name)))
            .collect()
    }
}

/// A structured config file that was found and parsed.
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub path: PathBuf,
    pub values: PropertyMap,
}

/// Loads the structured config through a [`FileReader`].
pub struct StructuredConfigFile<'a, F: FileReader + ?Sized> {
    files: &'a F,
}

impl<'a, F: FileReader + ?Sized> StructuredConfigFile<'a, F> {
    pub fn new(files: &'a F) -> Self {
        Self { files }
    }

    /// Read the first candidate that exists and parse it by extension.
    ///
    /// A candidate that exists but fails to parse is an error; the search
    /// does not continue past it.
    pub fn load(&self, locator: &ConfigLocator) -> Result<LoadedConfig, SourceError> {
        let candidates = locator.candidates();
        for path in &candidates {
            let content = match self.files.read_to_string(path) {
                Ok(content) => content,
                Err(e) if e.kind() == io::ErrorKind::NotFound => continue,
                Err(source) => return Err(SourceError::Io { path: path.clone(), source }),
            };
            let values = parse_structured(&content, path)?;
            return Ok(LoadedConfig { path: path.clone(), values });
        }

        let searched =
            candidates.iter().map(|p| p.display().to_string()).collect::<Vec<_>>().join(", ");
        Err(SourceError::NotFound { searched })
    }
}

fn parse_structured(content: &str, path: &Path) -> Result<PropertyMap, SourceError> {
    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("").to_ascii_lowercase();
    match ext.as_str() {
        "toml" => parse_toml(content, path),
        "yaml" | "yml" => parse_yaml(content, path),
        _ => Ok(parse_properties(content)),
    }
}

fn parse_error(path: &Path, message: impl Into<String>) -> SourceError {
    SourceError::Parse { path: path.to_path_buf(), message: message.into() }
}

fn parse_toml(content: &str, path: &Path) -> Result<PropertyMap, SourceError> {
    let table: toml::Table =
        toml::from_str(content).map_err(|e| parse_error(path, e.to_string()))?;

    let mut map = PropertyMap::new();
    for (key, value) in table {
        let text = match value {
            toml::Value::String(s) => s.trim().to_string(),
            toml::Value::Integer(i) => i.to_string(),
            toml::Value::Float(f) => f.to_string(),
            toml::Value::Boolean(b) => b.to_string(),
            other => {
                return Err(parse_error(
                    path,
                    format!("key '{}' must be a scalar, found {}", key, other.type_str()),
                ))
            }
        };
        map.insert(key, text);
    }
    Ok(map)
}

fn parse_yaml(content: &str, path: &Path) -> Result<PropertyMap, SourceError> {
    let raw: serde_yaml::Value =
        serde_yaml::from_str(content).map_err(|e| parse_error(path, e.to_string()))?;

    let mapping = match raw {
        serde_yaml::Value::Mapping(m) => m,
        // An empty document carries no settings.
        serde_yaml::Value::Null => return Ok(PropertyMap::new()),
        _ => return Err(parse_error(path, "top level must be a mapping")),
    };

    let mut map = PropertyMap::new();
    for (key, value) in mapping {
        let serde_yaml::Value::String(key) = key else {
            return Err(parse_error(path, "keys must be strings"));
        };
        let text = match value {
            serde_yaml::Value::String(s) => s.trim().to_string(),
            serde_yaml::Value::Number(n) => n.to_string(),
            serde_yaml::Value::Bool(b) => b.to_string(),
            serde_yaml::Value::Null => continue,
            _ => return Err(parse_error(path, format!("key '{}' must be a scalar", key))),
        };
        map.insert(key, text);
    }
    Ok(map)
}
