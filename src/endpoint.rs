//! Streaming endpoint resolution.
//!
//! The endpoint provider is consulted before every connect and reconnect, so
//! rotated tokens are picked up without restarting the session. Implement
//! [`EndpointProvider`] to source the target address and auth token from
//! wherever the host keeps them (secure storage, a config service, a login
//! flow); use [`StaticEndpoint`] when both are known up front.

use async_trait::async_trait;

use crate::error::Result;

/// Where a session connects and how it authenticates the handshake.
#[derive(Debug, Clone)]
pub struct SessionEndpoint {
    /// Base URL of the tracking backend (`http(s)://` or `ws(s)://`).
    pub base_url: String,
    /// Bearer token attached to the WebSocket handshake, if any.
    pub auth_token: Option<String>,
}

/// Async source of the streaming endpoint and credentials.
#[async_trait]
pub trait EndpointProvider: Send + Sync {
    /// Return the current (or freshly refreshed) endpoint.
    async fn resolve(&self) -> Result<SessionEndpoint>;
}

/// Fixed endpoint and token known at construction time.
#[derive(Debug, Clone)]
pub struct StaticEndpoint {
    endpoint: SessionEndpoint,
}

impl StaticEndpoint {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            endpoint: SessionEndpoint {
                base_url: base_url.into(),
                auth_token: None,
            },
        }
    }

    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.endpoint.auth_token = Some(token.into());
        self
    }
}

#[async_trait]
impl EndpointProvider for StaticEndpoint {
    async fn resolve(&self) -> Result<SessionEndpoint> {
        Ok(self.endpoint.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_static_endpoint_resolves_clone() {
        let provider = StaticEndpoint::new("http://localhost:3000").with_token("tok-1");
        let endpoint = provider.resolve().await.unwrap();
        assert_eq!(endpoint.base_url, "http://localhost:3000");
        assert_eq!(endpoint.auth_token.as_deref(), Some("tok-1"));
    }
}
