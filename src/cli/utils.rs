//! Shared CLI utilities.

use clap::{Args, ValueEnum};
use std::path::PathBuf;
use whisk_props::{Resolution, Resolver, Strategy};

/// Which sources to resolve from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SourceArg {
    /// Structured config merged over whisk.properties
    Merged,
    /// Structured config only
    Structured,
    /// whisk.properties only
    Legacy,
    /// First complete source, structured before legacy
    FirstValid,
}

impl From<SourceArg> for Strategy {
    fn from(arg: SourceArg) -> Self {
        match arg {
            SourceArg::Merged => Strategy::Merged,
            SourceArg::Structured => Strategy::StructuredOnly,
            SourceArg::Legacy => Strategy::LegacyOnly,
            SourceArg::FirstValid => Strategy::FirstValid,
        }
    }
}

#[derive(Args)]
pub struct SourceArgs {
    /// Structured config file to read instead of $WSK_CONFIG_FILE or ~/.wskprops
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Sources to resolve from
    #[arg(short, long, value_enum, default_value_t = SourceArg::Merged)]
    pub source: SourceArg,
}

impl SourceArgs {
    pub fn resolve(&self) -> Resolution {
        Resolver::from_process().resolve_with(self.source.into(), self.config.as_deref())
    }
}

/// Keep the first four characters of a secret and hide the rest.
pub fn mask_secret(value: &str) -> String {
    if value.is_empty() {
        return String::new();
    }
    let visible: String = value.chars().take(4).collect();
    format!("{}****", visible)
}

#[cfg(test)]
mod tests {
    use super::mask_secret;

    #[test]
    fn mask_keeps_prefix_only() {
        assert_eq!(mask_secret("32kc46b1:secret"), "32kc****");
        assert_eq!(mask_secret("ab"), "ab****");
        assert_eq!(mask_secret(""), "");
    }
}
