//! Source readers: environment, `.wskprops` and `whisk.properties`
//!
//! Every reader answers `get(key, default)` and never fails on a missing
//! key. File access goes through [`FileReader`] so the resolver can be
//! driven from memory in tests.

use std::collections::BTreeMap;
use std::io;
use std::path::Path;

pub mod legacy;
pub mod properties;
pub mod structured;

pub use legacy::LegacyPropertiesFile;
pub use structured::{ConfigLocator, StructuredConfigFile};

/// Key lookup with a caller-supplied fallback.
pub trait ValueSource {
    fn get(&self, key: &str, default: &str) -> String;
}

/// Reads whole files. Implementations must treat a missing file as
/// `io::ErrorKind::NotFound`.
pub trait FileReader {
    fn read_to_string(&self, path: &Path) -> io::Result<String>;
}

/// Parsed key/value pairs from one file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PropertyMap {
    values: BTreeMap<String, String>,
}

impl PropertyMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), value.into());
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl ValueSource for PropertyMap {
    fn get(&self, key: &str, default: &str) -> String {
        self.values.get(key).cloned().unwrap_or_else(|| default.to_string())
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for PropertyMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = PropertyMap::new();
        for (k, v) in iter {
            map.insert(k, v);
        }
        map
    }
}

/// The process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl ValueSource for ProcessEnv {
    fn get(&self, key: &str, default: &str) -> String {
        std::env::var(key).unwrap_or_else(|_| default.to_string())
    }
}

/// The local filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFiles;

impl FileReader for LocalFiles {
    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        std::fs::read_to_string(path)
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::FileReader;
    use std::collections::HashMap;
    use std::io;
    use std::path::{Path, PathBuf};

    /// In-memory filesystem for reader and resolver tests.
    #[derive(Default)]
    pub struct MemoryFiles {
        files: HashMap<PathBuf, String>,
    }

    impl MemoryFiles {
        pub fn with(mut self, path: impl Into<PathBuf>, content: &str) -> Self {
            self.files.insert(path.into(), content.to_string());
            self
        }
    }

    impl FileReader for MemoryFiles {
        fn read_to_string(&self, path: &Path) -> io::Result<String> {
            self.files
                .get(path)
                .cloned()
                .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "no such file"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn property_map_returns_default_for_missing_key() {
        let map: PropertyMap = [("APIHOST", "localhost")].into_iter().collect();
        assert_eq!(map.get("APIHOST", ""), "localhost");
        assert_eq!(map.get("AUTH", "fallback"), "fallback");
    }

    #[test]
    fn process_env_returns_default_when_unset() {
        assert_eq!(
            ProcessEnv.get("WHISK_PROPS_SURELY_UNSET_VARIABLE", "dflt"),
            "dflt"
        );
    }

    #[test]
    fn local_files_reports_not_found() {
        let tmp = tempfile::TempDir::new().expect("tmp");
        let err = LocalFiles.read_to_string(&tmp.path().join("missing")).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }
}
