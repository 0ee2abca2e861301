//! Legacy `whisk.properties` reader

use super::properties::parse_properties;
use super::{FileReader, PropertyMap, ValueSource};
use std::io;
use std::path::{Path, PathBuf};

pub const LEGACY_FILE_NAME: &str = "whisk.properties";

pub const LEGACY_HOST: &str = "whisk.api.host.name";
pub const LEGACY_PORT: &str = "whisk.api.host.port";
pub const LEGACY_PROTO: &str = "whisk.api.host.proto";
/// Path of a separate file holding the auth key.
pub const LEGACY_AUTH_FILE: &str = "testing.auth";

/// Contents of `whisk.properties`, empty when the file is absent or unreadable.
pub struct LegacyPropertiesFile<'a, F: FileReader + ?Sized> {
    files: &'a F,
    values: PropertyMap,
}

impl<'a, F: FileReader + ?Sized> LegacyPropertiesFile<'a, F> {
    pub fn open(files: &'a F, path: &Path) -> Self {
        let values = match files.read_to_string(path) {
            Ok(content) => parse_properties(&content),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::debug!("No legacy properties at {}", path.display());
                PropertyMap::new()
            }
            Err(e) => {
                tracing::warn!("Failed reading legacy properties {}: {}", path.display(), e);
                PropertyMap::new()
            }
        };
        Self { files, values }
    }

    /// Whether `testing.auth` names a secret file.
    pub fn declares_secret_file(&self) -> bool {
        !self.values.get(LEGACY_AUTH_FILE, "").is_empty()
    }

    /// Auth key from the declared secret file, trimmed. `None` when no secret
    /// file is declared or it cannot be read.
    pub fn auth_from_secret_file(&self) -> Option<String> {
        let declared = self.values.get(LEGACY_AUTH_FILE, "");
        if declared.is_empty() {
            return None;
        }
        let path = PathBuf::from(&declared);
        match self.files.read_to_string(&path) {
            Ok(content) => Some(content.trim().to_string()),
            Err(e) => {
                tracing::debug!("Auth file {} not readable: {}", path.display(), e);
                None
            }
        }
    }
}

impl<F: FileReader + ?Sized> ValueSource for LegacyPropertiesFile<'_, F> {
    fn get(&self, key: &str, default: &str) -> String {
        self.values.get(key, default)
    }
}
