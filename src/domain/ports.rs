use crate::utils::error::Result;
use async_trait::async_trait;
use url::Url;

/// Maps a logical service name to the base URL of one of its instances.
pub trait ServiceResolver: Send + Sync {
    fn resolve(&self, service_name: &str) -> Result<Url>;
}

#[async_trait]
pub trait HelloClient: Send + Sync {
    /// Fetches `/service-instances/{application_name}` from the remote
    /// service and returns the raw response body.
    async fn hello(&self, application_name: &str) -> Result<String>;
}
