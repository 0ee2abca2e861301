//! Connection settings resolution
//!
//! Reads `.wskprops` (structured config) and `whisk.properties` (legacy),
//! merges them with structured values taking precedence, and validates the
//! result. Locations come from the environment.

pub mod loader;
pub mod merge;
pub mod resolved;
pub mod validate;

pub use merge::merge;
pub use resolved::{base_url, build_config, Resolution, ResolvedConfig};
pub use validate::validate;

use crate::source::{FileReader, LocalFiles, ProcessEnv, ValueSource};
use std::path::Path;

/// Home directory searched for `.wskprops`.
pub const HOMEPATH: &str = "HOME";
/// Overrides the `.wskprops` location when no explicit path is given.
pub const WSK_CONFIG_FILE: &str = "WSK_CONFIG_FILE";
/// Directory holding `whisk.properties`.
pub const OPENWHISK_HOME: &str = "OPENWHISK_HOME";

/// How the two file sources are combined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Strategy {
    /// Field-by-field merge, structured config wins.
    #[default]
    Merged,
    StructuredOnly,
    LegacyOnly,
    /// Whole structured record if valid, else whole legacy record if valid.
    FirstValid,
}

/// Resolves connection settings from an environment and a filesystem.
pub struct Resolver<E = ProcessEnv, F = LocalFiles> {
    env: E,
    files: F,
}

impl Resolver {
    /// Resolver over the real process environment and local disk.
    pub fn from_process() -> Self {
        Self::new(ProcessEnv, LocalFiles)
    }
}

impl<E: ValueSource, F: FileReader> Resolver<E, F> {
    pub fn new(env: E, files: F) -> Self {
        Self { env, files }
    }

    /// Legacy properties only.
    pub fn resolve_legacy(&self) -> Resolution {
        build_config(&self.load_legacy())
    }

    /// Structured config only, from `explicit_path` or the default location.
    pub fn resolve_structured(&self, explicit_path: Option<&Path>) -> Resolution {
        build_config(&self.load_structured(explicit_path))
    }

    /// Structured config merged over legacy properties, then validated.
    pub fn resolve(&self, explicit_path: Option<&Path>) -> Resolution {
        let structured = self.load_structured(explicit_path);
        let legacy = self.load_legacy();
        build_config(&merge(&structured, &legacy))
    }

    /// The first whole record that validates, structured before legacy.
    ///
    /// When neither validates, the structured record and its error are
    /// returned.
    pub fn resolve_first_valid(&self, explicit_path: Option<&Path>) -> Resolution {
        let structured = build_config(&self.load_structured(explicit_path));
        if structured.is_valid() {
            return structured;
        }
        let legacy = build_config(&self.load_legacy());
        if legacy.is_valid() {
            tracing::debug!("Structured config incomplete; using {}", legacy.config.source);
            return legacy;
        }
        structured
    }

    pub fn resolve_with(&self, strategy: Strategy, explicit_path: Option<&Path>) -> Resolution {
        match strategy {
            Strategy::Merged => self.resolve(explicit_path),
            Strategy::StructuredOnly => self.resolve_structured(explicit_path),
            Strategy::LegacyOnly => self.resolve_legacy(),
            Strategy::FirstValid => self.resolve_first_valid(explicit_path),
        }
    }
}
