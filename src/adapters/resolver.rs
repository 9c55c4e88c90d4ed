use crate::core::ServiceResolver;
use crate::utils::error::{HelloClientError, Result};
use crate::utils::validation::{validate_non_empty_string, validate_url};
use std::collections::HashMap;
use url::Url;

/// Fixed service registry. The first registered address wins; there is no
/// balancing between instances.
#[derive(Debug, Clone, Default)]
pub struct StaticResolver {
    services: HashMap<String, Vec<Url>>,
}

impl StaticResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_service(mut self, service_name: &str, url: &str) -> Result<Self> {
        self.register(service_name, url)?;
        Ok(self)
    }

    pub fn register(&mut self, service_name: &str, url: &str) -> Result<()> {
        validate_non_empty_string("registry", service_name)?;
        let url = validate_url(&format!("registry.{}", service_name), url)?;

        tracing::debug!("Registering {} -> {}", service_name, url);
        self.services
            .entry(service_name.to_string())
            .or_default()
            .push(url);
        Ok(())
    }

    /// Parses a `name=url` pair as given on the command line.
    pub fn register_pair(&mut self, pair: &str) -> Result<()> {
        let (name, url) =
            pair.split_once('=')
                .ok_or_else(|| HelloClientError::InvalidConfigValueError {
                    field: "service".to_string(),
                    value: pair.to_string(),
                    reason: "expected NAME=URL".to_string(),
                })?;
        self.register(name.trim(), url.trim())
    }

    /// Every service named in `other` takes `other`'s addresses; the rest
    /// are kept.
    pub fn override_with(&mut self, other: StaticResolver) {
        for (name, urls) in other.services {
            tracing::debug!("Overriding {} with {} address(es)", name, urls.len());
            self.services.insert(name, urls);
        }
    }

    pub fn instances(&self, service_name: &str) -> &[Url] {
        self.services
            .get(service_name)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn is_empty(&self) -> bool {
        self.services.is_empty()
    }
}

impl ServiceResolver for StaticResolver {
    fn resolve(&self, service_name: &str) -> Result<Url> {
        self.instances(service_name)
            .first()
            .cloned()
            .ok_or_else(|| HelloClientError::ResolutionFailure {
                service: service_name.to_string(),
            })
    }
}
