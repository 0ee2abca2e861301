//! Show command implementation

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};

use super::utils::{mask_secret, SourceArgs};
use whisk_props::ResolvedConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Args)]
pub struct ShowArgs {
    #[command(flatten)]
    pub sources: SourceArgs,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Print auth key and gateway token unmasked
    #[arg(long)]
    pub show_secrets: bool,
}

pub fn run(args: ShowArgs) -> Result<()> {
    let resolution = args.sources.resolve();

    let mut config = resolution.config;
    if !args.show_secrets {
        config.auth_token = mask_secret(&config.auth_token);
        config.apigw_access_token = mask_secret(&config.apigw_access_token);
    }

    match args.format {
        OutputFormat::Text => print_text(&config),
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&config).context("Failed to serialize config")?;
            println!("{}", json);
        }
    }

    // The settings are printed even when incomplete; the error decides the exit code.
    match resolution.error {
        Some(e) => Err(e.into()),
        None => Ok(()),
    }
}

fn print_text(config: &ResolvedConfig) {
    let base_url = config.base_url.as_ref().map(|u| u.as_str()).unwrap_or("(unset)");
    println!("Source: {}", config.source);
    println!("API host: {}", config.host);
    println!("Base URL: {}", base_url);
    println!("API version: {}", config.version);
    println!("Namespace: {}", config.namespace);
    println!("Auth: {}", config.auth_token);
    println!("Cert: {}", config.cert);
    println!("Key: {}", config.key);
    println!("API gateway access token: {}", config.apigw_access_token);
    println!("API gateway space: {}", config.apigw_space_suid);
    println!("API gateway tenant: {}", config.apigw_tenant_id);
    println!("Insecure: {}", config.insecure);
}
