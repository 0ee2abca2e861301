//! whisk-props: resolve FaaS client connection settings
//!
//! Settings come from the structured config file (`.wskprops`), the legacy
//! `whisk.properties` file and the environment. Structured values take
//! precedence over legacy ones; the result is validated for the two
//! required fields, API host and auth key.

pub mod config;
pub mod domain;
pub mod error;
pub mod source;

pub use config::{Resolution, ResolvedConfig, Resolver, Strategy};
pub use domain::{ConnectionProperties, Provenance};
pub use error::{ResolveError, SourceError};
