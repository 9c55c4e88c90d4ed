use crate::adapters::StaticResolver;
use crate::domain::model::{DEFAULT_PARAMETER_NAME, DEFAULT_PATH_TEMPLATE, DEFAULT_SERVICE_NAME};
use crate::utils::error::{HelloClientError, Result};
use crate::utils::validation::{validate_positive_number, validate_url, Validate};
use crate::RemoteCallSpec;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use std::time::Duration;

pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub client: ClientConfig,
    /// Service name to one or more base URLs.
    #[serde(default)]
    pub registry: HashMap<String, Vec<String>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    pub service_name: Option<String>,
    pub path_template: Option<String>,
    pub parameter_name: Option<String>,
    pub method: Option<String>,
    pub timeout_seconds: Option<u64>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            service_name: None,
            path_template: None,
            parameter_name: None,
            method: None,
            timeout_seconds: Some(DEFAULT_TIMEOUT_SECONDS),
        }
    }
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(HelloClientError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);
        let config: Self = toml::from_str(&processed_content)?;
        Ok(config)
    }

    /// 替換環境變數 (例如 ${REGISTRY_URL})，未定義的變數保留原樣
    fn substitute_env_vars(content: &str) -> String {
        use regex::Regex;
        use std::sync::OnceLock;

        static ENV_VAR: OnceLock<Regex> = OnceLock::new();
        let re = ENV_VAR.get_or_init(|| {
            Regex::new(r"\$\{([^}]+)\}").unwrap_or_else(|e| unreachable!("static regex: {}", e))
        });

        re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        })
        .into_owned()
    }

    pub fn service_name(&self) -> &str {
        self.client
            .service_name
            .as_deref()
            .unwrap_or(DEFAULT_SERVICE_NAME)
    }

    pub fn path_template(&self) -> &str {
        self.client
            .path_template
            .as_deref()
            .unwrap_or(DEFAULT_PATH_TEMPLATE)
    }

    pub fn parameter_name(&self) -> &str {
        self.client
            .parameter_name
            .as_deref()
            .unwrap_or(DEFAULT_PARAMETER_NAME)
    }

    pub fn method(&self) -> &str {
        self.client.method.as_deref().unwrap_or("GET")
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.client.timeout_seconds.map(Duration::from_secs)
    }

    pub fn call_spec(&self) -> Result<RemoteCallSpec> {
        RemoteCallSpec::with_method(
            self.service_name(),
            self.path_template(),
            self.parameter_name(),
            self.method(),
        )
    }

    pub fn resolver(&self) -> Result<StaticResolver> {
        let mut resolver = StaticResolver::new();
        // Sorted so registration logs are stable.
        let mut names: Vec<&String> = self.registry.keys().collect();
        names.sort();
        for name in names {
            for url in &self.registry[name] {
                resolver.register(name, url)?;
            }
        }
        Ok(resolver)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.call_spec()?;

        if let Some(timeout) = self.client.timeout_seconds {
            validate_positive_number("client.timeout_seconds", timeout, 1)?;
        }

        for (name, urls) in &self.registry {
            if urls.is_empty() {
                return Err(HelloClientError::InvalidConfigValueError {
                    field: format!("registry.{}", name),
                    value: "[]".to_string(),
                    reason: "at least one address is required".to_string(),
                });
            }
            for url in urls {
                validate_url(&format!("registry.{}", name), url)?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ServiceResolver;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_full_config() {
        let toml_content = r#"
[client]
service_name = "client1"
path_template = "/service-instances/{applicationName}"
parameter_name = "applicationName"
method = "GET"
timeout_seconds = 5

[registry]
client1 = ["http://localhost:8762", "http://localhost:8763"]
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert!(config.validate().is_ok());
        assert_eq!(config.timeout(), Some(Duration::from_secs(5)));
        assert_eq!(config.call_spec().unwrap(), RemoteCallSpec::hello());

        let resolver = config.resolver().unwrap();
        assert_eq!(resolver.instances("client1").len(), 2);
        assert_eq!(resolver.resolve("client1").unwrap().port(), Some(8762));
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = TomlConfig::from_toml_str("").unwrap();
        assert!(config.validate().is_ok());
        assert_eq!(config.service_name(), "client1");
        assert_eq!(config.path_template(), "/service-instances/{applicationName}");
        assert_eq!(config.method(), "GET");
        assert_eq!(
            config.timeout(),
            Some(Duration::from_secs(DEFAULT_TIMEOUT_SECONDS))
        );
        assert!(config.resolver().unwrap().is_empty());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("HELLO_CLIENT_TEST_REGISTRY", "http://10.1.2.3:9000");
        let toml_content = r#"
[registry]
client1 = ["${HELLO_CLIENT_TEST_REGISTRY}"]
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.registry["client1"], vec!["http://10.1.2.3:9000"]);
        std::env::remove_var("HELLO_CLIENT_TEST_REGISTRY");
    }

    #[test]
    fn test_unknown_env_var_left_verbatim() {
        let toml_content = r#"
[registry]
client1 = ["${HELLO_CLIENT_SURELY_UNSET_VAR}"]
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(
            config.registry["client1"],
            vec!["${HELLO_CLIENT_SURELY_UNSET_VAR}"]
        );
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_errors() {
        let mismatched = TomlConfig::from_toml_str(
            r#"
[client]
parameter_name = "name"
"#,
        )
        .unwrap();
        assert!(mismatched.validate().is_err());

        let zero_timeout = TomlConfig::from_toml_str(
            r#"
[client]
timeout_seconds = 0
"#,
        )
        .unwrap();
        assert!(zero_timeout.validate().is_err());

        let no_addresses = TomlConfig::from_toml_str(
            r#"
[registry]
client1 = []
"#,
        )
        .unwrap();
        assert!(no_addresses.validate().is_err());
    }

    #[test]
    fn test_invalid_toml() {
        let err = TomlConfig::from_toml_str("[client\nservice_name = 1").unwrap_err();
        assert!(matches!(err, HelloClientError::TomlError(_)));
    }

    #[test]
    fn test_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
[client]
service_name = "registry"

[registry]
registry = ["https://registry.internal"]
"#
        )
        .unwrap();

        let config = TomlConfig::from_file(file.path()).unwrap();
        assert_eq!(config.call_spec().unwrap().service_name(), "registry");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_missing_file() {
        let err = TomlConfig::from_file("/definitely/not/here.toml").unwrap_err();
        assert!(matches!(err, HelloClientError::IoError(_)));
    }
}
