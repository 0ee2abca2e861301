//! Required-field checks

use crate::domain::ConnectionProperties;
use crate::error::ResolveError;

/// Check the two required fields, host first. Stops at the first one missing.
/// A host of only whitespace counts as missing.
pub fn validate(props: &ConnectionProperties) -> Result<(), ResolveError> {
    if props.api_host.trim().is_empty() {
        return Err(ResolveError::MissingUrl);
    }
    if props.auth_key.is_empty() {
        return Err(ResolveError::MissingAuth);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Provenance, DEFAULT_NAMESPACE, DEFAULT_VERSION};

    fn props(host: &str, auth: &str) -> ConnectionProperties {
        let mut p = ConnectionProperties::from_source(Provenance::StructuredConfig);
        p.api_host = host.into();
        p.auth_key = auth.into();
        p.namespace = DEFAULT_NAMESPACE.into();
        p.api_version = DEFAULT_VERSION.into();
        p
    }

    #[test]
    fn missing_host_is_reported_before_missing_auth() {
        let err = validate(&props("", "")).unwrap_err();
        assert_eq!(err, ResolveError::MissingUrl);
        assert!(err.to_string().contains("OpenWhisk API host is missing"));
    }

    #[test]
    fn blank_host_is_missing() {
        assert_eq!(validate(&props("   ", "auth_key")), Err(ResolveError::MissingUrl));
    }

    #[test]
    fn missing_auth_with_host() {
        let err = validate(&props("192.168.9.100", "")).unwrap_err();
        assert_eq!(err, ResolveError::MissingAuth);
        assert!(err.to_string().contains("Authentication key is missing"));
    }

    #[test]
    fn complete_record_is_valid() {
        assert_eq!(validate(&props("192.168.9.100", "auth_key")), Ok(()));
    }
}
