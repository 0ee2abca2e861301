//! Core records shared by the readers and the resolver

use serde::Serialize;
use std::fmt;

/// Namespace used when no source names one.
pub const DEFAULT_NAMESPACE: &str = "_";
/// API version used when no source names one.
pub const DEFAULT_VERSION: &str = "v1";

// Keys recognized in the structured config file (`.wskprops`).
pub const APIGW_SPACE_SUID: &str = "APIGW_SPACE_SUID";
pub const APIGW_TENANT_ID: &str = "APIGW_TENANT_ID";
pub const APIHOST: &str = "APIHOST";
pub const APIVERSION: &str = "APIVERSION";
pub const APIGW_ACCESS_TOKEN: &str = "APIGW_ACCESS_TOKEN";
pub const AUTH: &str = "AUTH";
pub const CERT: &str = "CERT";
pub const KEY: &str = "KEY";
pub const NAMESPACE: &str = "NAMESPACE";

/// Which source populated a [`ConnectionProperties`] record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Provenance {
    /// `whisk.properties` under `$OPENWHISK_HOME`
    LegacyProperties,
    /// `.wskprops` or an explicitly named config file
    StructuredConfig,
    #[default]
    None,
}

impl Provenance {
    pub fn as_str(&self) -> &'static str {
        match self {
            Provenance::LegacyProperties => "legacy-properties",
            Provenance::StructuredConfig => "structured-config",
            Provenance::None => "none",
        }
    }
}

impl fmt::Display for Provenance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Connection settings as read from a single source (or merged from two).
///
/// Every field is a plain string; an empty string means "not set". The
/// legacy reader fills `namespace` and `api_version` with their defaults
/// instead of leaving them empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ConnectionProperties {
    pub apigw_space_suid: String,
    pub apigw_tenant_id: String,
    pub api_host: String,
    pub api_version: String,
    pub apigw_access_token: String,
    pub auth_key: String,
    pub cert: String,
    pub key: String,
    pub namespace: String,
    source: Provenance,
}

impl ConnectionProperties {
    /// Empty record tagged with the source that is about to fill it.
    pub fn from_source(source: Provenance) -> Self {
        Self { source, ..Self::default() }
    }

    pub fn source(&self) -> Provenance {
        self.source
    }
}

/// Space id embedded in an auth key of the form `uuid:secret`.
pub fn space_suid_from_auth(auth_key: &str) -> &str {
    auth_key.split(':').next().unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn provenance_display_matches_json_name() {
        for tag in [Provenance::LegacyProperties, Provenance::StructuredConfig, Provenance::None] {
            let json = serde_json::to_value(tag).expect("json");
            assert_eq!(json, tag.to_string());
        }
        assert_eq!(Provenance::StructuredConfig.as_str(), "structured-config");
    }

    #[test]
    fn space_suid_is_prefix_before_colon() {
        assert_eq!(space_suid_from_auth("32kc46b1-71f6:abc123"), "32kc46b1-71f6");
        assert_eq!(space_suid_from_auth("no-colon"), "no-colon");
        assert_eq!(space_suid_from_auth(""), "");
    }

    #[test]
    fn provenance_is_fixed_at_construction() {
        let props = ConnectionProperties::from_source(Provenance::LegacyProperties);
        assert_eq!(props.source(), Provenance::LegacyProperties);
        assert_eq!(ConnectionProperties::default().source(), Provenance::None);
    }
}
