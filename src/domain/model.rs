use crate::core::path_template::PathTemplate;
use crate::utils::error::{HelloClientError, Result};
use crate::utils::validation::{validate_http_method, validate_non_empty_string};
use reqwest::Method;

pub const DEFAULT_SERVICE_NAME: &str = "client1";
pub const DEFAULT_PATH_TEMPLATE: &str = "/service-instances/{applicationName}";
pub const DEFAULT_PARAMETER_NAME: &str = "applicationName";

/// Declarative description of one remote operation: which logical service
/// to call, on which path, with which verb.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteCallSpec {
    service_name: String,
    path_template: PathTemplate,
    parameter_name: String,
    method: Method,
}

impl RemoteCallSpec {
    pub fn new(service_name: &str, path_template: &str, parameter_name: &str) -> Result<Self> {
        Self::with_method(service_name, path_template, parameter_name, "GET")
    }

    pub fn with_method(
        service_name: &str,
        path_template: &str,
        parameter_name: &str,
        method: &str,
    ) -> Result<Self> {
        validate_non_empty_string("service_name", service_name)?;
        let template = PathTemplate::parse(path_template)?;

        if template.slot_name() != parameter_name {
            return Err(HelloClientError::InvalidConfigValueError {
                field: "parameter_name".to_string(),
                value: parameter_name.to_string(),
                reason: format!(
                    "does not match slot '{{{}}}' in '{}'",
                    template.slot_name(),
                    path_template
                ),
            });
        }

        Ok(Self {
            service_name: service_name.to_string(),
            path_template: template,
            parameter_name: parameter_name.to_string(),
            method: validate_http_method("method", method)?,
        })
    }

    /// `GET client1 /service-instances/{applicationName}`
    pub fn hello() -> Self {
        Self {
            service_name: DEFAULT_SERVICE_NAME.to_string(),
            path_template: PathTemplate::parse(DEFAULT_PATH_TEMPLATE)
                .unwrap_or_else(|e| unreachable!("built-in template is valid: {}", e)),
            parameter_name: DEFAULT_PARAMETER_NAME.to_string(),
            method: Method::GET,
        }
    }

    pub fn service_name(&self) -> &str {
        &self.service_name
    }

    pub fn path_template(&self) -> &PathTemplate {
        &self.path_template
    }

    pub fn parameter_name(&self) -> &str {
        &self.parameter_name
    }

    pub fn method(&self) -> &Method {
        &self.method
    }
}

impl Default for RemoteCallSpec {
    fn default() -> Self {
        Self::hello()
    }
}
