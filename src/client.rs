//! Main leash-link client with builder pattern.
//!
//! The client holds everything sessions share: endpoint resolution,
//! reachability, the frame pipeline, event handlers, and timing
//! configuration. Collaborators are injected explicitly; there is no
//! process-wide state.

use std::sync::Arc;

use crate::endpoint::{EndpointProvider, StaticEndpoint};
use crate::error::{LeashLinkError, Result};
use crate::event_handlers::EventHandlers;
use crate::models::SessionOptions;
use crate::pipeline::FramePipeline;
use crate::reachability::{AlwaysReachable, ReachabilityMonitor};
use crate::security::{PassthroughSecurity, SecuritySuite, SharedKeySecurity};
use crate::session::WalkSession;
use crate::timeouts::LeashLinkTimeouts;

/// Client for the live walk tracking backend.
///
/// Use [`LeashLinkClient::builder`] to construct instances, then spawn one
/// [`WalkSession`] per walk.
///
/// # Examples
///
/// ```rust,no_run
/// use leash_link::{EventHandlers, LeashLinkClient};
///
/// # async fn example() -> leash_link::Result<()> {
/// let client = LeashLinkClient::builder()
///     .base_url("https://api.example.com")
///     .auth_token("jwt-token")
///     .session_key([0u8; 32])
///     .event_handlers(EventHandlers::new().on_connect(|| println!("streaming")))
///     .build()?;
///
/// let session = client.session("walk-42");
/// session.connect().await;
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct LeashLinkClient {
    endpoint: Arc<dyn EndpointProvider>,
    reachability: Arc<dyn ReachabilityMonitor>,
    pipeline: FramePipeline,
    event_handlers: EventHandlers,
    timeouts: LeashLinkTimeouts,
    session_options: SessionOptions,
}

impl LeashLinkClient {
    /// Create a new builder for configuring the client.
    pub fn builder() -> LeashLinkClientBuilder {
        LeashLinkClientBuilder::new()
    }

    /// Create a streaming session scoped to one walk.
    ///
    /// Spawns the session's background task in the idle state; call
    /// [`WalkSession::connect`] to begin streaming. Must be called from
    /// within a tokio runtime.
    pub fn session(&self, session_id: impl Into<String>) -> WalkSession {
        WalkSession::spawn(
            session_id.into(),
            self.endpoint.clone(),
            self.reachability.clone(),
            self.pipeline.clone(),
            self.event_handlers.clone(),
            self.timeouts.clone(),
            self.session_options.clone(),
        )
    }

    /// The configured timeouts.
    pub fn timeouts(&self) -> &LeashLinkTimeouts {
        &self.timeouts
    }

    /// The frame pipeline sessions encode and decode with.
    pub fn pipeline(&self) -> &FramePipeline {
        &self.pipeline
    }
}

/// Builder for [`LeashLinkClient`] instances.
pub struct LeashLinkClientBuilder {
    base_url: Option<String>,
    auth_token: Option<String>,
    endpoint: Option<Arc<dyn EndpointProvider>>,
    reachability: Arc<dyn ReachabilityMonitor>,
    security: Option<Arc<dyn SecuritySuite>>,
    session_key: Option<[u8; 32]>,
    event_handlers: EventHandlers,
    timeouts: LeashLinkTimeouts,
    session_options: SessionOptions,
}

impl LeashLinkClientBuilder {
    fn new() -> Self {
        Self {
            base_url: None,
            auth_token: None,
            endpoint: None,
            reachability: Arc::new(AlwaysReachable),
            security: None,
            session_key: None,
            event_handlers: EventHandlers::default(),
            timeouts: LeashLinkTimeouts::default(),
            session_options: SessionOptions::default(),
        }
    }

    /// Set the base URL of the tracking backend (`http(s)://` or `ws(s)://`).
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set a bearer token attached to the WebSocket handshake.
    pub fn auth_token(mut self, token: impl Into<String>) -> Self {
        self.auth_token = Some(token.into());
        self
    }

    /// Set a dynamic endpoint provider, consulted before every connect and
    /// reconnect. Overrides [`base_url`](Self::base_url) /
    /// [`auth_token`](Self::auth_token).
    pub fn endpoint_provider(mut self, provider: Arc<dyn EndpointProvider>) -> Self {
        self.endpoint = Some(provider);
        self
    }

    /// Set the reachability monitor gating connection attempts.
    pub fn reachability(mut self, monitor: Arc<dyn ReachabilityMonitor>) -> Self {
        self.reachability = monitor;
        self
    }

    /// Set the session-scoped shared key; frames are encrypted with
    /// XChaCha20-Poly1305 under it.
    pub fn session_key(mut self, key: [u8; 32]) -> Self {
        self.session_key = Some(key);
        self
    }

    /// Set a custom security suite directly. Overrides
    /// [`session_key`](Self::session_key).
    pub fn security(mut self, suite: Arc<dyn SecuritySuite>) -> Self {
        self.security = Some(suite);
        self
    }

    /// Register session lifecycle event handlers.
    pub fn event_handlers(mut self, handlers: EventHandlers) -> Self {
        self.event_handlers = handlers;
        self
    }

    /// Set connection and keepalive timing.
    pub fn timeouts(mut self, timeouts: LeashLinkTimeouts) -> Self {
        self.timeouts = timeouts;
        self
    }

    /// Set batching, retention, and reconnect behavior.
    pub fn session_options(mut self, options: SessionOptions) -> Self {
        self.session_options = options;
        self
    }

    /// Build the client.
    pub fn build(self) -> Result<LeashLinkClient> {
        let endpoint: Arc<dyn EndpointProvider> = match self.endpoint {
            Some(provider) => provider,
            None => {
                let base_url = self.base_url.ok_or_else(|| {
                    LeashLinkError::Configuration(
                        "base_url or endpoint_provider is required".to_string(),
                    )
                })?;
                let mut static_endpoint = StaticEndpoint::new(base_url);
                if let Some(token) = self.auth_token {
                    static_endpoint = static_endpoint.with_token(token);
                }
                Arc::new(static_endpoint)
            },
        };

        let suite: Arc<dyn SecuritySuite> = match (self.security, self.session_key) {
            (Some(suite), _) => suite,
            (None, Some(key)) => Arc::new(SharedKeySecurity::new(key)),
            // Without a key the channel relies on TLS alone; frames are still
            // compressed.
            (None, None) => Arc::new(PassthroughSecurity),
        };

        Ok(LeashLinkClient {
            endpoint,
            reachability: self.reachability,
            pipeline: FramePipeline::new(suite),
            event_handlers: self.event_handlers,
            timeouts: self.timeouts,
            session_options: self.session_options,
        })
    }
}
