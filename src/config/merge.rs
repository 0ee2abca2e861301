//! Field-by-field precedence between structured and legacy records

use crate::domain::{ConnectionProperties, Provenance, DEFAULT_NAMESPACE, DEFAULT_VERSION};

/// Merge two records, preferring `structured`.
///
/// A structured field falls back to the legacy value when it is empty.
/// Namespace and API version also fall back when they equal the defaults,
/// since the legacy reader always fills those two with defaults and an
/// explicit legacy value must not be hidden by a structured placeholder.
pub fn merge(
    structured: &ConnectionProperties,
    legacy: &ConnectionProperties,
) -> ConnectionProperties {
    let source = match structured.source() {
        Provenance::None => legacy.source(),
        tagged => tagged,
    };

    let mut merged = ConnectionProperties::from_source(source);
    merged.apigw_space_suid = pick(&structured.apigw_space_suid, &legacy.apigw_space_suid);
    merged.apigw_tenant_id = pick(&structured.apigw_tenant_id, &legacy.apigw_tenant_id);
    merged.api_host = pick(&structured.api_host, &legacy.api_host);
    merged.api_version =
        pick_unless_default(&structured.api_version, &legacy.api_version, DEFAULT_VERSION);
    merged.apigw_access_token = pick(&structured.apigw_access_token, &legacy.apigw_access_token);
    merged.auth_key = pick(&structured.auth_key, &legacy.auth_key);
    merged.cert = pick(&structured.cert, &legacy.cert);
    merged.key = pick(&structured.key, &legacy.key);
    merged.namespace =
        pick_unless_default(&structured.namespace, &legacy.namespace, DEFAULT_NAMESPACE);
    merged
}

fn pick(preferred: &str, fallback: &str) -> String {
    if preferred.is_empty() { fallback } else { preferred }.to_string()
}

fn pick_unless_default(preferred: &str, fallback: &str, default: &str) -> String {
    if preferred.is_empty() || preferred == default { fallback } else { preferred }.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn structured() -> ConnectionProperties {
        ConnectionProperties::from_source(Provenance::StructuredConfig)
    }

    fn legacy() -> ConnectionProperties {
        let mut props = ConnectionProperties::from_source(Provenance::LegacyProperties);
        props.namespace = DEFAULT_NAMESPACE.to_string();
        props.api_version = DEFAULT_VERSION.to_string();
        props
    }

    #[test]
    fn structured_host_wins_when_set() {
        let mut s = structured();
        s.api_host = "h1".into();
        let mut l = legacy();
        l.api_host = "h2".into();
        assert_eq!(merge(&s, &l).api_host, "h1");
    }

    #[test]
    fn empty_structured_field_takes_legacy_value() {
        let mut l = legacy();
        l.auth_key = "uuid:secret".into();
        l.api_host = "h2".into();
        let merged = merge(&structured(), &l);
        assert_eq!(merged.auth_key, "uuid:secret");
        assert_eq!(merged.api_host, "h2");
    }

    #[test]
    fn default_namespace_does_not_mask_legacy_value() {
        let mut s = structured();
        s.namespace = DEFAULT_NAMESPACE.into();
        let mut l = legacy();
        l.namespace = "custom".into();
        assert_eq!(merge(&s, &l).namespace, "custom");
    }

    #[test]
    fn default_version_does_not_mask_legacy_value() {
        let mut s = structured();
        s.api_version = DEFAULT_VERSION.into();
        let mut l = legacy();
        l.api_version = "v2".into();
        assert_eq!(merge(&s, &l).api_version, "v2");
    }

    #[test]
    fn explicit_structured_namespace_wins() {
        let mut s = structured();
        s.namespace = "mine".into();
        s.api_version = "v3".into();
        let merged = merge(&s, &legacy());
        assert_eq!(merged.namespace, "mine");
        assert_eq!(merged.api_version, "v3");
    }

    #[test]
    fn soft_miss_adopts_legacy_record_and_provenance() {
        let mut l = legacy();
        l.api_host = "h2".into();
        l.auth_key = "a:b".into();
        l.apigw_space_suid = "a".into();
        let merged = merge(&ConnectionProperties::default(), &l);
        similar_asserts::assert_eq!(merged, l);
        assert_eq!(merged.source(), Provenance::LegacyProperties);
    }

    #[test]
    fn provenance_stays_structured_when_structured_loaded() {
        let merged = merge(&structured(), &legacy());
        assert_eq!(merged.source(), Provenance::StructuredConfig);
        assert_eq!(merged.namespace, DEFAULT_NAMESPACE);
        assert_eq!(merged.api_version, DEFAULT_VERSION);
    }
}
