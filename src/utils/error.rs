use thiserror::Error;

#[derive(Error, Debug)]
pub enum HelloClientError {
    #[error("Service '{service}' could not be resolved to an address")]
    ResolutionFailure { service: String },

    #[error("Transport failure: {0}")]
    TransportFailure(#[from] reqwest::Error),

    #[error("Remote service returned status {status}")]
    RemoteFailure { status: u16, body: String },

    #[error("Invalid path template '{template}': {reason}")]
    InvalidTemplate { template: String, reason: String },

    #[error("Value '{value}' cannot be used for path parameter '{parameter}'")]
    InvalidPathParameter { parameter: String, value: String },

    #[error("Invalid value for '{field}' ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Resolution,
    Transport,
    Remote,
    Configuration,
    System,
}

impl HelloClientError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::ResolutionFailure { .. } => ErrorCategory::Resolution,
            Self::TransportFailure(_) => ErrorCategory::Transport,
            Self::RemoteFailure { .. } => ErrorCategory::Remote,
            Self::InvalidTemplate { .. }
            | Self::InvalidPathParameter { .. }
            | Self::InvalidConfigValueError { .. }
            | Self::TomlError(_) => ErrorCategory::Configuration,
            Self::IoError(_) => ErrorCategory::System,
        }
    }

    /// Process exit code used by the CLI for this error.
    pub fn exit_code(&self) -> i32 {
        match self.category() {
            ErrorCategory::Configuration | ErrorCategory::System => 1,
            ErrorCategory::Resolution => 2,
            ErrorCategory::Transport => 3,
            ErrorCategory::Remote => 4,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::ResolutionFailure { service } => {
                format!("No address is registered for service '{}'", service)
            }
            Self::TransportFailure(e) if e.is_timeout() => {
                "The downstream service did not answer in time".to_string()
            }
            Self::TransportFailure(e) if e.is_connect() => {
                "Could not connect to the downstream service".to_string()
            }
            Self::TransportFailure(_) => "The request to the downstream service failed".to_string(),
            Self::RemoteFailure { status, .. } => {
                format!("The downstream service answered with HTTP {}", status)
            }
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Resolution => {
                "Register the service with --service name=url or in the [registry] section"
            }
            ErrorCategory::Transport => {
                "Check that the downstream service is running and reachable, or raise the timeout"
            }
            ErrorCategory::Remote => "Inspect the downstream service logs for this request",
            ErrorCategory::Configuration => "Fix the configuration value reported above",
            ErrorCategory::System => "Check file paths and permissions",
        }
    }
}

pub type Result<T> = std::result::Result<T, HelloClientError>;
