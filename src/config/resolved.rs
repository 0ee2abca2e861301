//! Final client configuration

use super::validate::validate;
use crate::domain::{ConnectionProperties, Provenance};
use crate::error::ResolveError;
use serde::Serialize;
use url::Url;

/// Path appended to the API host to form the base URL.
pub const DEFAULT_API_PATH: &str = "/api";

/// Settings handed to the HTTP client.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedConfig {
    pub namespace: String,
    pub cert: String,
    pub key: String,
    pub auth_token: String,
    pub host: String,
    /// Unset when the host is empty or does not form a valid URL.
    pub base_url: Option<Url>,
    pub version: String,
    pub verbose: bool,
    pub debug: bool,
    pub insecure: bool,
    pub apigw_access_token: String,
    pub apigw_space_suid: String,
    pub apigw_tenant_id: String,
    pub source: Provenance,
}

/// A built config together with the outcome of validating its record.
#[derive(Debug, Clone)]
pub struct Resolution {
    pub config: ResolvedConfig,
    pub error: Option<ResolveError>,
}

impl Resolution {
    pub fn is_valid(&self) -> bool {
        self.error.is_none()
    }

    pub fn into_result(self) -> Result<ResolvedConfig, ResolveError> {
        match self.error {
            None => Ok(self.config),
            Some(e) => Err(e),
        }
    }
}

/// `<host>/api`, with `https://` prepended when the host has no scheme.
pub fn base_url(host: &str) -> Option<Url> {
    let host = host.trim().trim_end_matches('/');
    if host.is_empty() {
        return None;
    }
    let with_scheme =
        if host.contains("://") { host.to_string() } else { format!("https://{}", host) };

    match Url::parse(&format!("{}{}", with_scheme, DEFAULT_API_PATH)) {
        Ok(url) if url.host_str().is_some_and(|h| !h.is_empty()) => Some(url),
        Ok(_) => {
            tracing::warn!("API host {:?} has no host component", host);
            None
        }
        Err(e) => {
            tracing::warn!("Invalid API host {:?}: {}", host, e);
            None
        }
    }
}

/// Build the client config from a record. The config is built even when
/// validation fails; the failure is reported in [`Resolution::error`].
///
/// A host that is present but cannot form a base URL is reported as
/// [`ResolveError::MissingUrl`].
pub fn build_config(props: &ConnectionProperties) -> Resolution {
    let base_url = base_url(&props.api_host);
    let error = match validate(props) {
        Err(e) => Some(e),
        Ok(()) if base_url.is_none() => Some(ResolveError::MissingUrl),
        Ok(()) => None,
    };

    let config = ResolvedConfig {
        namespace: props.namespace.clone(),
        cert: props.cert.clone(),
        key: props.key.clone(),
        auth_token: props.auth_key.clone(),
        host: props.api_host.clone(),
        base_url,
        version: props.api_version.clone(),
        verbose: false,
        debug: false,
        insecure: true,
        apigw_access_token: props.apigw_access_token.clone(),
        apigw_space_suid: props.apigw_space_suid.clone(),
        apigw_tenant_id: props.apigw_tenant_id.clone(),
        source: props.source(),
    };

    Resolution { config, error }
}
