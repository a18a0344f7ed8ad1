use std::time::Duration;

use crate::lifecycle::ReconnectPolicy;

/// Tuning knobs for one streaming session.
///
/// Batching, retention, and reconnection behavior are configured here;
/// connection/keepalive timing lives in
/// [`LeashLinkTimeouts`](crate::timeouts::LeashLinkTimeouts).
///
/// # Example
///
/// ```rust
/// use leash_link::{ReconnectPolicy, SessionOptions};
/// use std::time::Duration;
///
/// let options = SessionOptions::default()
///     .with_batch_max_samples(20)
///     .with_flush_interval(Duration::from_millis(500))
///     .with_reconnect_policy(ReconnectPolicy::Exponential {
///         base: Duration::from_secs(1),
///         max: Duration::from_secs(30),
///     });
/// ```
#[derive(Debug, Clone)]
pub struct SessionOptions {
    /// Maximum samples per outbound batch. A buffer that reaches this size
    /// flushes immediately. Default: 10.
    pub batch_max_samples: usize,

    /// Interval of the periodic flush tick while connected. Default: 1 s.
    pub flush_interval: Duration,

    /// Maximum samples retained while the transport is down. Beyond this the
    /// oldest samples are evicted first to bound memory. Default: 300.
    pub max_buffered_samples: usize,

    /// Delay policy between reconnect attempts. The same delay acts as the
    /// cooldown window gating manual `connect()` calls after a failure.
    /// Default: constant 3 s.
    pub reconnect_policy: ReconnectPolicy,

    /// Reconnect attempt ceiling before the session terminates. Default: 5.
    pub max_reconnect_attempts: u32,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            batch_max_samples: 10,
            flush_interval: Duration::from_secs(1),
            max_buffered_samples: 300,
            reconnect_policy: ReconnectPolicy::default(),
            max_reconnect_attempts: 5,
        }
    }
}

impl SessionOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_batch_max_samples(mut self, max: usize) -> Self {
        self.batch_max_samples = max.max(1);
        self
    }

    pub fn with_flush_interval(mut self, interval: Duration) -> Self {
        self.flush_interval = interval;
        self
    }

    /// Set the offline retention cap. Clamped to at least one batch so a
    /// reconnect can always produce a full batch.
    pub fn with_max_buffered_samples(mut self, max: usize) -> Self {
        self.max_buffered_samples = max.max(self.batch_max_samples);
        self
    }

    pub fn with_reconnect_policy(mut self, policy: ReconnectPolicy) -> Self {
        self.reconnect_policy = policy;
        self
    }

    pub fn with_max_reconnect_attempts(mut self, max: u32) -> Self {
        self.max_reconnect_attempts = max;
        self
    }
}
