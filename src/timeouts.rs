//! Timeout configuration for streaming sessions.
//!
//! Centralizes connection and liveness timing. Batching and reconnect tuning
//! live in [`SessionOptions`](crate::models::SessionOptions).

use std::time::Duration;

/// Timeout configuration for one streaming session.
///
/// # Examples
///
/// ```rust
/// use leash_link::LeashLinkTimeouts;
/// use std::time::Duration;
///
/// // Defaults (recommended for most cases)
/// let timeouts = LeashLinkTimeouts::default();
///
/// // Custom timing for high-latency cellular networks
/// let timeouts = LeashLinkTimeouts::builder()
///     .connection_timeout(Duration::from_secs(30))
///     .keepalive_interval(Duration::from_secs(60))
///     .build();
/// ```
#[derive(Debug, Clone)]
pub struct LeashLinkTimeouts {
    /// Timeout for establishing the WebSocket connection (TCP + handshake).
    /// Default: 10 seconds.
    pub connection_timeout: Duration,

    /// Keepalive ping interval while connected. Jittered per session to
    /// avoid synchronized ping bursts. Set to 0 to disable.
    /// Default: 30 seconds.
    pub keepalive_interval: Duration,

    /// Maximum wait for any frame after sending a keepalive ping before the
    /// connection is treated as dead. Set to 0 to disable.
    /// Default: 10 seconds.
    pub pong_timeout: Duration,
}

impl Default for LeashLinkTimeouts {
    fn default() -> Self {
        Self {
            connection_timeout: Duration::from_secs(10),
            keepalive_interval: Duration::from_secs(30),
            pong_timeout: Duration::from_secs(10),
        }
    }
}

impl LeashLinkTimeouts {
    /// Create a new builder for custom timeout configuration.
    pub fn builder() -> LeashLinkTimeoutsBuilder {
        LeashLinkTimeoutsBuilder::new()
    }

    /// Timeouts optimized for fast local development.
    pub fn fast() -> Self {
        Self {
            connection_timeout: Duration::from_secs(2),
            keepalive_interval: Duration::from_secs(5),
            pong_timeout: Duration::from_secs(2),
        }
    }

    /// Timeouts optimized for high-latency or unreliable networks.
    pub fn relaxed() -> Self {
        Self {
            connection_timeout: Duration::from_secs(30),
            keepalive_interval: Duration::from_secs(60),
            pong_timeout: Duration::from_secs(20),
        }
    }

    /// Check if a duration represents "no timeout" (zero or absurdly large).
    pub fn is_no_timeout(duration: Duration) -> bool {
        duration.is_zero() || duration > Duration::from_secs(86400 * 365)
    }
}

/// Builder for [`LeashLinkTimeouts`].
#[derive(Debug, Clone)]
pub struct LeashLinkTimeoutsBuilder {
    timeouts: LeashLinkTimeouts,
}

impl LeashLinkTimeoutsBuilder {
    fn new() -> Self {
        Self {
            timeouts: LeashLinkTimeouts::default(),
        }
    }

    pub fn connection_timeout(mut self, timeout: Duration) -> Self {
        self.timeouts.connection_timeout = timeout;
        self
    }

    /// Set the keepalive ping interval. 0 disables keepalive.
    pub fn keepalive_interval(mut self, interval: Duration) -> Self {
        self.timeouts.keepalive_interval = interval;
        self
    }

    /// Set the pong timeout. 0 disables the check.
    pub fn pong_timeout(mut self, timeout: Duration) -> Self {
        self.timeouts.pong_timeout = timeout;
        self
    }

    pub fn build(self) -> LeashLinkTimeouts {
        self.timeouts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_timeouts() {
        let timeouts = LeashLinkTimeouts::default();
        assert_eq!(timeouts.connection_timeout, Duration::from_secs(10));
        assert_eq!(timeouts.keepalive_interval, Duration::from_secs(30));
        assert_eq!(timeouts.pong_timeout, Duration::from_secs(10));
    }

    #[test]
    fn test_builder() {
        let timeouts = LeashLinkTimeouts::builder()
            .connection_timeout(Duration::from_secs(60))
            .keepalive_interval(Duration::ZERO)
            .build();
        assert_eq!(timeouts.connection_timeout, Duration::from_secs(60));
        assert!(timeouts.keepalive_interval.is_zero());
    }

    #[test]
    fn test_is_no_timeout() {
        assert!(LeashLinkTimeouts::is_no_timeout(Duration::ZERO));
        assert!(!LeashLinkTimeouts::is_no_timeout(Duration::from_secs(1)));
    }
}
