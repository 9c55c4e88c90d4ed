use crate::core::{HelloClient, RemoteCallSpec, ServiceResolver};
use crate::utils::error::{HelloClientError, Result};
use reqwest::Client;
use std::sync::Arc;
use std::time::Duration;

/// HTTP implementation of [`HelloClient`]: resolve, render the path, send
/// one request. No retries.
#[derive(Clone)]
pub struct HttpHelloClient {
    spec: RemoteCallSpec,
    resolver: Arc<dyn ServiceResolver>,
    client: Client,
    timeout: Option<Duration>,
}

impl HttpHelloClient {
    pub fn new(spec: RemoteCallSpec, resolver: Arc<dyn ServiceResolver>) -> Self {
        Self {
            spec,
            resolver,
            client: Client::new(),
            timeout: None,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn with_http_client(mut self, client: Client) -> Self {
        self.client = client;
        self
    }

    pub fn spec(&self) -> &RemoteCallSpec {
        &self.spec
    }

    pub async fn call(&self, value: &str) -> Result<String> {
        let service = self.spec.service_name();
        let base = self.resolver.resolve(service).map_err(|e| {
            tracing::warn!("Could not resolve service '{}': {}", service, e);
            e
        })?;

        let url = self.spec.path_template().expand(&base, value)?;
        tracing::debug!("{} {} (service: {})", self.spec.method(), url, service);

        let mut request = self.client.request(self.spec.method().clone(), url.clone());
        if let Some(timeout) = self.timeout {
            request = request.timeout(timeout);
        }

        let response = request.send().await.map_err(|e| {
            tracing::warn!("Request to {} failed: {}", url, e);
            HelloClientError::TransportFailure(e)
        })?;

        let status = response.status();
        tracing::debug!("Response status from {}: {}", service, status);

        if !status.is_success() {
            // The status decides the error kind; an unreadable body stays empty.
            let body = response.text().await.unwrap_or_else(|e| {
                tracing::debug!("Could not read error body from {}: {}", service, e);
                String::new()
            });
            tracing::warn!("Service '{}' answered {} for {}", service, status, url.path());
            return Err(HelloClientError::RemoteFailure {
                status: status.as_u16(),
                body,
            });
        }

        Ok(response.text().await?)
    }
}

#[async_trait::async_trait]
impl HelloClient for HttpHelloClient {
    async fn hello(&self, application_name: &str) -> Result<String> {
        self.call(application_name).await
    }
}

impl std::fmt::Debug for HttpHelloClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpHelloClient")
            .field("spec", &self.spec)
            .field("timeout", &self.timeout)
            .finish_non_exhaustive()
    }
}
