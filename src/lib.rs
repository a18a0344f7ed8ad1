//! # leash-link
//!
//! Client SDK for streaming live walk location data to the Leash tracking
//! backend over a persistent, bidirectional WebSocket connection.
//!
//! The crate is the client-side session and resilience engine: it validates
//! and batches high-frequency GPS samples, compresses and encrypts them into
//! wire frames, survives radio drops with bounded reconnection, keeps the
//! channel alive with jittered pings, and routes inbound backend messages to
//! registered observers.
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use leash_link::{EventHandlers, LeashLinkClient, LocationSample};
//!
//! # async fn example() -> leash_link::Result<()> {
//! let client = LeashLinkClient::builder()
//!     .base_url("https://api.example.com")
//!     .auth_token("jwt-token")
//!     .session_key([0u8; 32])
//!     .event_handlers(
//!         EventHandlers::new()
//!             .on_connect(|| println!("streaming"))
//!             .on_error(|e| eprintln!("session error: {}", e)),
//!     )
//!     .build()?;
//!
//! let session = client.session("walk-42");
//! session.connect().await;
//!
//! // On each GPS fix:
//! let sample = LocationSample {
//!     sample_id: "fix-1".into(),
//!     session_id: "walk-42".into(),
//!     latitude: 47.6062,
//!     longitude: -122.3321,
//!     accuracy: 5.0,
//!     speed: 1.4,
//!     captured_at_ms: 0, // from the platform clock
//! };
//! if let Err(reason) = session.submit(sample) {
//!     eprintln!("sample rejected: {}", reason);
//! }
//!
//! // When the walk ends:
//! session.disconnect().await;
//! # Ok(())
//! # }
//! ```
//!
//! ## Delivery semantics
//!
//! Batches are transmitted in flush order with at-most-once delivery per
//! batch: a batch that fails mid-send is dropped, never re-queued. While the
//! transport is down, samples stay buffered up to a retention cap with
//! oldest-first eviction. Sample- and batch-level failures are reported
//! through `on_error` but never terminate the session; only retry exhaustion
//! or an explicit `disconnect()` does.

mod batch;

pub mod client;
pub mod compression;
pub mod endpoint;
pub mod error;
pub mod event_handlers;
pub mod lifecycle;
pub mod models;
pub mod pipeline;
pub mod reachability;
pub mod route;
pub mod security;
pub mod session;
pub mod timeouts;

pub use client::{LeashLinkClient, LeashLinkClientBuilder};
pub use endpoint::{EndpointProvider, SessionEndpoint, StaticEndpoint};
pub use error::{LeashLinkError, Result, SampleRejected};
pub use event_handlers::{ConnectionError, DisconnectReason, EventHandlers};
pub use lifecycle::{ReconnectPolicy, SessionState};
pub use models::{
    LocationSample, OutboundBatch, ServerMessage, SessionOptions, WalkStats, WireSample,
};
pub use pipeline::FramePipeline;
pub use reachability::{AlwaysReachable, ReachabilityMonitor, SharedReachability};
pub use security::{PassthroughSecurity, SecuritySuite, SharedKeySecurity};
pub use session::WalkSession;
pub use timeouts::{LeashLinkTimeouts, LeashLinkTimeoutsBuilder};
