use crate::adapters::StaticResolver;
use crate::config::toml_config::TomlConfig;
use crate::core::client::HttpHelloClient;
use crate::utils::error::Result;
use crate::utils::validation::{validate_positive_number, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "hello-client")]
#[command(about = "Fetch /service-instances/{applicationName} from a named service")]
pub struct CliConfig {
    /// Application whose instance metadata is requested
    pub application_name: String,

    #[arg(long, help = "TOML configuration file")]
    pub config: Option<PathBuf>,

    #[arg(
        long = "service",
        value_name = "NAME=URL",
        help = "Register a service address (repeatable, replaces file registry entries for that name)"
    )]
    pub services: Vec<String>,

    #[arg(long, help = "Per-call timeout, overrides the configuration file")]
    pub timeout_seconds: Option<u64>,

    #[arg(long, help = "Pretty-print the response body when it is JSON")]
    pub pretty: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub log_json: bool,
}

impl CliConfig {
    pub fn load_file_config(&self) -> Result<TomlConfig> {
        match &self.config {
            Some(path) => {
                tracing::debug!("Loading configuration from {}", path.display());
                TomlConfig::from_file(path)
            }
            None => Ok(TomlConfig::default()),
        }
    }

    /// Builds the client from the file configuration plus command-line overrides.
    pub fn build_client(&self) -> Result<HttpHelloClient> {
        let file_config = self.load_file_config()?;
        file_config.validate()?;

        let mut overrides = StaticResolver::new();
        for pair in &self.services {
            overrides.register_pair(pair)?;
        }
        let mut resolver = file_config.resolver()?;
        resolver.override_with(overrides);

        let mut client = HttpHelloClient::new(file_config.call_spec()?, Arc::new(resolver));
        let timeout = self
            .timeout_seconds
            .map(Duration::from_secs)
            .or_else(|| file_config.timeout());
        if let Some(timeout) = timeout {
            client = client.with_timeout(timeout);
        }

        Ok(client)
    }

    /// Pretty JSON when requested and the body parses, otherwise the body as-is.
    pub fn format_body(&self, body: &str) -> String {
        if !self.pretty {
            return body.to_string();
        }
        serde_json::from_str::<serde_json::Value>(body)
            .ok()
            .and_then(|value| serde_json::to_string_pretty(&value).ok())
            .unwrap_or_else(|| body.to_string())
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(timeout) = self.timeout_seconds {
            validate_positive_number("timeout_seconds", timeout, 1)?;
        }
        Ok(())
    }
}
