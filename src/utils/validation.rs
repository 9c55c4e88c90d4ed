use crate::utils::error::{HelloClientError, Result};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<Url> {
    if url_str.is_empty() {
        return Err(HelloClientError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(url),
            scheme => Err(HelloClientError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(HelloClientError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_positive_number(field_name: &str, value: u64, min_value: u64) -> Result<()> {
    if value < min_value {
        return Err(HelloClientError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be at least {}", min_value),
        });
    }
    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(HelloClientError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_http_method(field_name: &str, method: &str) -> Result<reqwest::Method> {
    const ALLOWED: [&str; 6] = ["GET", "POST", "PUT", "DELETE", "PATCH", "HEAD"];

    let upper = method.trim().to_ascii_uppercase();
    if !ALLOWED.contains(&upper.as_str()) {
        return Err(HelloClientError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: method.to_string(),
            reason: format!("Unsupported method. Valid methods: {}", ALLOWED.join(", ")),
        });
    }

    reqwest::Method::from_bytes(upper.as_bytes()).map_err(|e| {
        HelloClientError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: method.to_string(),
            reason: e.to_string(),
        }
    })
}
