//! Data models for the leash-link client library.
//!
//! Defines the location sample and batch types that cross the wire, the
//! server message vocabulary, and per-session configuration.

pub mod location_sample;
pub mod outbound_batch;
pub mod server_message;
pub mod session_options;
pub mod walk_stats;

pub use location_sample::{LocationSample, WireSample};
pub use outbound_batch::OutboundBatch;
pub use server_message::ServerMessage;
pub use session_options::SessionOptions;
pub use walk_stats::WalkStats;
