//! Per-source record loading

use super::{Resolver, HOMEPATH, OPENWHISK_HOME, WSK_CONFIG_FILE};
use crate::domain::{
    space_suid_from_auth, ConnectionProperties, Provenance, APIGW_ACCESS_TOKEN, APIGW_SPACE_SUID,
    APIGW_TENANT_ID, APIHOST, APIVERSION, AUTH, CERT, DEFAULT_NAMESPACE, DEFAULT_VERSION, KEY,
    NAMESPACE,
};
use crate::error::SourceError;
use crate::source::legacy::{LEGACY_FILE_NAME, LEGACY_HOST, LEGACY_PORT, LEGACY_PROTO};
use crate::source::{
    ConfigLocator, FileReader, LegacyPropertiesFile, StructuredConfigFile, ValueSource,
};
use std::path::{Path, PathBuf};

impl<E: ValueSource, F: FileReader> Resolver<E, F> {
    /// Where the structured config is looked up: `explicit_path`, then
    /// `$WSK_CONFIG_FILE`, then the default names under `$HOME`.
    pub fn structured_locator(&self, explicit_path: Option<&Path>) -> ConfigLocator {
        if let Some(path) = explicit_path.filter(|p| !p.as_os_str().is_empty()) {
            return ConfigLocator::explicit(path);
        }
        let from_env = self.env.get(WSK_CONFIG_FILE, "");
        if !from_env.is_empty() {
            return ConfigLocator::explicit(from_env);
        }
        let home = self.env.get(HOMEPATH, "");
        if home.is_empty() {
            return ConfigLocator::default();
        }
        ConfigLocator::search(home)
    }

    /// Load the structured config.
    ///
    /// Any load failure yields an empty record tagged [`Provenance::None`] so
    /// that merging falls through to the legacy source.
    pub fn load_structured(&self, explicit_path: Option<&Path>) -> ConnectionProperties {
        let locator = self.structured_locator(explicit_path);
        let loaded = match StructuredConfigFile::new(&self.files).load(&locator) {
            Ok(loaded) => loaded,
            Err(e @ SourceError::NotFound { .. }) if locator.file.is_none() => {
                tracing::debug!("{}", e);
                return ConnectionProperties::default();
            }
            Err(e) => {
                tracing::warn!("Ignoring structured config: {}", e);
                return ConnectionProperties::default();
            }
        };
        tracing::debug!("Loaded structured config from {}", loaded.path.display());

        let values = &loaded.values;
        let mut props = ConnectionProperties::from_source(Provenance::StructuredConfig);
        props.api_host = values.get(APIHOST, "");
        props.api_version = values.get(APIVERSION, "");
        props.auth_key = values.get(AUTH, "");
        props.namespace = values.get(NAMESPACE, "");
        props.apigw_access_token = values.get(APIGW_ACCESS_TOKEN, "");
        props.apigw_tenant_id = values.get(APIGW_TENANT_ID, "");
        props.cert = values.get(CERT, "");
        props.key = values.get(KEY, "");
        props.apigw_space_suid = values.get(APIGW_SPACE_SUID, "");
        if props.apigw_space_suid.is_empty() {
            props.apigw_space_suid = space_suid_from_auth(&props.auth_key).to_string();
        }
        props
    }

    /// Path of `whisk.properties`, if `$OPENWHISK_HOME` is set.
    pub fn legacy_path(&self) -> Option<PathBuf> {
        let home = self.env.get(OPENWHISK_HOME, "");
        if home.is_empty() {
            return None;
        }
        Some(Path::new(&home).join(LEGACY_FILE_NAME))
    }

    /// Load the legacy properties.
    ///
    /// Namespace and API version always carry their defaults; every other
    /// field is empty unless the file provides it.
    pub fn load_legacy(&self) -> ConnectionProperties {
        let mut props = ConnectionProperties::from_source(Provenance::LegacyProperties);
        props.namespace = DEFAULT_NAMESPACE.to_string();
        props.api_version = DEFAULT_VERSION.to_string();

        let Some(path) = self.legacy_path() else {
            tracing::debug!("{} not set; skipping {}", OPENWHISK_HOME, LEGACY_FILE_NAME);
            return props;
        };

        let legacy = LegacyPropertiesFile::open(&self.files, &path);
        props.api_host = legacy.get(LEGACY_HOST, "");
        // A declared secret file replaces inline AUTH, even when it cannot be read.
        props.auth_key = if legacy.declares_secret_file() {
            legacy.auth_from_secret_file().unwrap_or_default()
        } else {
            legacy.get(AUTH, "")
        };
        props.apigw_space_suid = space_suid_from_auth(&props.auth_key).to_string();

        tracing::debug!(
            "Legacy endpoint host={:?} port={:?} proto={:?}",
            props.api_host,
            legacy.get(LEGACY_PORT, ""),
            legacy.get(LEGACY_PROTO, "")
        );
        props
    }
}
