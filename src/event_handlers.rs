//! Session lifecycle event handlers.
//!
//! Callback-based hooks for monitoring one streaming session:
//!
//! - [`on_connect`](EventHandlers::on_connect): transport established
//! - [`on_disconnect`](EventHandlers::on_disconnect): transport closed
//! - [`on_error`](EventHandlers::on_error): connection, pipeline, or fatal errors
//! - [`on_message`](EventHandlers::on_message): routed inbound server messages
//! - [`on_send`](EventHandlers::on_send): debug hook for outbound traffic
//!
//! All handlers are optional and `Send + Sync`; they are invoked from the
//! session's background task.

use std::fmt;
use std::sync::Arc;

use crate::models::ServerMessage;

/// Reason for a disconnect event.
#[derive(Debug, Clone)]
pub struct DisconnectReason {
    /// Human-readable description of why the connection closed.
    pub message: String,
    /// WebSocket close code, if available (1000 = normal, 1006 = abnormal).
    pub code: Option<u16>,
}

impl DisconnectReason {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            code: None,
        }
    }

    pub fn with_code(message: impl Into<String>, code: u16) -> Self {
        Self {
            message: message.into(),
            code: Some(code),
        }
    }
}

impl fmt::Display for DisconnectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(code) = self.code {
            write!(f, "{} (code: {})", self.message, code)
        } else {
            write!(f, "{}", self.message)
        }
    }
}

/// Error information passed to the `on_error` handler.
#[derive(Debug, Clone)]
pub struct ConnectionError {
    /// Human-readable error message.
    pub message: String,
    /// Whether this error is recoverable (auto-reconnect may succeed).
    /// Retry exhaustion and encode failures are not.
    pub recoverable: bool,
}

impl ConnectionError {
    pub fn new(message: impl Into<String>, recoverable: bool) -> Self {
        Self {
            message: message.into(),
            recoverable,
        }
    }
}

impl fmt::Display for ConnectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

/// Type alias for the on_connect callback.
pub type OnConnectCallback = Arc<dyn Fn() + Send + Sync>;

/// Type alias for the on_disconnect callback.
pub type OnDisconnectCallback = Arc<dyn Fn(DisconnectReason) + Send + Sync>;

/// Type alias for the on_error callback.
pub type OnErrorCallback = Arc<dyn Fn(ConnectionError) + Send + Sync>;

/// Type alias for the on_message callback.
pub type OnMessageCallback = Arc<dyn Fn(ServerMessage) + Send + Sync>;

/// Type alias for the on_send callback (debug hook for outbound traffic).
pub type OnSendCallback = Arc<dyn Fn(&str) + Send + Sync>;

/// Session lifecycle event handlers.
///
/// # Example
///
/// ```rust
/// use leash_link::EventHandlers;
///
/// let handlers = EventHandlers::new()
///     .on_connect(|| println!("streaming"))
///     .on_disconnect(|reason| println!("dropped: {}", reason))
///     .on_error(|err| eprintln!("error (recoverable={}): {}", err.recoverable, err));
/// ```
#[derive(Clone, Default)]
pub struct EventHandlers {
    pub(crate) on_connect: Option<OnConnectCallback>,
    pub(crate) on_disconnect: Option<OnDisconnectCallback>,
    pub(crate) on_error: Option<OnErrorCallback>,
    pub(crate) on_message: Option<OnMessageCallback>,
    pub(crate) on_send: Option<OnSendCallback>,
}

impl fmt::Debug for EventHandlers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventHandlers")
            .field("on_connect", &self.on_connect.is_some())
            .field("on_disconnect", &self.on_disconnect.is_some())
            .field("on_error", &self.on_error.is_some())
            .field("on_message", &self.on_message.is_some())
            .field("on_send", &self.on_send.is_some())
            .finish()
    }
}

impl EventHandlers {
    /// Create a new empty `EventHandlers` (no callbacks registered).
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a callback invoked when the transport is established.
    pub fn on_connect(mut self, f: impl Fn() + Send + Sync + 'static) -> Self {
        self.on_connect = Some(Arc::new(f));
        self
    }

    /// Register a callback invoked when the transport closes, intentionally
    /// or not.
    pub fn on_disconnect(mut self, f: impl Fn(DisconnectReason) + Send + Sync + 'static) -> Self {
        self.on_disconnect = Some(Arc::new(f));
        self
    }

    /// Register a callback invoked on connection, pipeline, or fatal errors.
    pub fn on_error(mut self, f: impl Fn(ConnectionError) + Send + Sync + 'static) -> Self {
        self.on_error = Some(Arc::new(f));
        self
    }

    /// Register a callback invoked for every decoded inbound server message.
    pub fn on_message(mut self, f: impl Fn(ServerMessage) + Send + Sync + 'static) -> Self {
        self.on_message = Some(Arc::new(f));
        self
    }

    /// Register a debug hook invoked for every outbound send
    /// (`"[ping]"`, `"[batch:N]"`).
    pub fn on_send(mut self, f: impl Fn(&str) + Send + Sync + 'static) -> Self {
        self.on_send = Some(Arc::new(f));
        self
    }

    // ── Internal dispatch helpers ───────────────────────────────────────────

    pub(crate) fn emit_connect(&self) {
        if let Some(cb) = &self.on_connect {
            cb();
        }
    }

    pub(crate) fn emit_disconnect(&self, reason: DisconnectReason) {
        if let Some(cb) = &self.on_disconnect {
            cb(reason);
        }
    }

    pub(crate) fn emit_error(&self, error: ConnectionError) {
        if let Some(cb) = &self.on_error {
            cb(error);
        }
    }

    pub(crate) fn emit_message(&self, message: ServerMessage) {
        if let Some(cb) = &self.on_message {
            cb(message);
        }
    }

    pub(crate) fn emit_send(&self, raw: &str) {
        if let Some(cb) = &self.on_send {
            cb(raw);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_emit_without_handlers_is_noop() {
        let handlers = EventHandlers::new();
        handlers.emit_connect();
        handlers.emit_disconnect(DisconnectReason::new("bye"));
        handlers.emit_error(ConnectionError::new("oops", true));
        handlers.emit_send("[ping]");
    }

    #[test]
    fn test_registered_handlers_fire() {
        let hits = Arc::new(AtomicUsize::new(0));
        let connect_hits = hits.clone();
        let message_hits = hits.clone();
        let handlers = EventHandlers::new()
            .on_connect(move || {
                connect_hits.fetch_add(1, Ordering::SeqCst);
            })
            .on_message(move |_| {
                message_hits.fetch_add(1, Ordering::SeqCst);
            });
        handlers.emit_connect();
        handlers.emit_message(ServerMessage::SessionStatus {
            session_id: "walk-1".to_string(),
            status: "active".to_string(),
        });
        assert_eq!(hits.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_disconnect_reason_display() {
        assert_eq!(
            DisconnectReason::with_code("closed", 1000).to_string(),
            "closed (code: 1000)"
        );
        assert_eq!(DisconnectReason::new("closed").to_string(), "closed");
    }
}
