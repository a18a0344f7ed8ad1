//! Connection lifecycle state machine and reconnect policy.
//!
//! The state machine is a plain struct driven by typed events so every guard
//! (reachability, cooldown, attempt ceiling) is unit-testable without a
//! network. The session task owns one instance and is the only mutator.

use std::time::{Duration, Instant};

/// Lifecycle states of one streaming session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Constructed, never connected.
    Idle,
    /// A transport-open request is in flight.
    Connecting,
    /// Transport open; sends and keepalive are active.
    Connected,
    /// Transport lost; a retry is scheduled.
    Reconnecting,
    /// Transport lost and no retry is in flight (e.g. network unreachable).
    /// `connect()` is legal from here, gated by the cooldown window.
    Disconnected,
    /// Absorbing. Reached by `disconnect()` or retry exhaustion; no further
    /// automatic reconnection.
    Terminated,
}

impl SessionState {
    /// Compact encoding for the handle-visible state gauge.
    pub(crate) fn as_u8(self) -> u8 {
        match self {
            Self::Idle => 0,
            Self::Connecting => 1,
            Self::Connected => 2,
            Self::Reconnecting => 3,
            Self::Disconnected => 4,
            Self::Terminated => 5,
        }
    }

    pub(crate) fn from_u8(raw: u8) -> Self {
        match raw {
            0 => Self::Idle,
            1 => Self::Connecting,
            2 => Self::Connected,
            3 => Self::Reconnecting,
            4 => Self::Disconnected,
            _ => Self::Terminated,
        }
    }
}

/// Delay schedule between reconnect attempts.
///
/// The observed production policy is a constant delay; exponential backoff is
/// available behind the same interface without touching any other component.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReconnectPolicy {
    /// Same delay before every attempt.
    Constant { delay: Duration },
    /// Doubling delay starting at `base`, capped at `max`.
    Exponential { base: Duration, max: Duration },
}

impl ReconnectPolicy {
    /// Delay before retry number `attempt` (zero-based).
    pub fn delay_for(&self, attempt: u32) -> Duration {
        match self {
            Self::Constant { delay } => *delay,
            Self::Exponential { base, max } => {
                let factor = 2u32.saturating_pow(attempt);
                base.saturating_mul(factor).min(*max)
            },
        }
    }
}

impl Default for ReconnectPolicy {
    fn default() -> Self {
        Self::Constant {
            delay: Duration::from_secs(3),
        }
    }
}

/// Outcome of gating a caller-initiated connect request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectDecision {
    /// Guards passed; begin a transport-open attempt.
    Proceed,
    /// Already connected, connecting, or waiting on a scheduled retry.
    AlreadyActive,
    /// The reachability monitor reports no network.
    Unreachable,
    /// The cooldown window since the last attempt has not elapsed.
    CoolingDown,
    /// The session is terminated; a new session is required.
    Terminated,
}

/// What to do after a transport failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureDisposition {
    /// Schedule another attempt after `delay`.
    Retry { attempt: u32, delay: Duration },
    /// The attempt ceiling is reached; the session is now terminated.
    Exhausted { attempts: u32 },
}

/// Lifecycle state for one session: current state, bounded attempt counter,
/// and the timestamp feeding cooldown math.
#[derive(Debug)]
pub(crate) struct SessionLifecycle {
    state: SessionState,
    reconnect_attempts: u32,
    last_connect_at: Option<Instant>,
    policy: ReconnectPolicy,
    max_attempts: u32,
}

impl SessionLifecycle {
    pub fn new(policy: ReconnectPolicy, max_attempts: u32) -> Self {
        Self {
            state: SessionState::Idle,
            reconnect_attempts: 0,
            last_connect_at: None,
            policy,
            max_attempts,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn reconnect_attempts(&self) -> u32 {
        self.reconnect_attempts
    }

    /// Gate a caller-initiated connect request. Violating a guard is a
    /// no-op decision, not an error.
    pub fn request_connect(&self, reachable: bool, now: Instant) -> ConnectDecision {
        match self.state {
            SessionState::Terminated => ConnectDecision::Terminated,
            SessionState::Connected | SessionState::Connecting | SessionState::Reconnecting => {
                ConnectDecision::AlreadyActive
            },
            SessionState::Idle | SessionState::Disconnected => {
                if !reachable {
                    return ConnectDecision::Unreachable;
                }
                if self.reconnect_attempts > 0 {
                    if let Some(last) = self.last_connect_at {
                        let cooldown =
                            self.policy.delay_for(self.reconnect_attempts.saturating_sub(1));
                        if now.duration_since(last) < cooldown {
                            return ConnectDecision::CoolingDown;
                        }
                    }
                }
                ConnectDecision::Proceed
            },
        }
    }

    /// Mark the start of a transport-open attempt.
    pub fn begin_attempt(&mut self, now: Instant) {
        self.state = SessionState::Connecting;
        self.last_connect_at = Some(now);
    }

    /// Transport reported open: connected, attempt counter reset.
    pub fn on_opened(&mut self) {
        self.state = SessionState::Connected;
        self.reconnect_attempts = 0;
    }

    /// Transport closed or errored. Coalesced by construction: the session
    /// task replaces the socket wholesale before this can fire again, so one
    /// underlying failure produces exactly one disposition.
    pub fn on_failure(&mut self) -> FailureDisposition {
        if self.reconnect_attempts >= self.max_attempts {
            self.state = SessionState::Terminated;
            FailureDisposition::Exhausted {
                attempts: self.reconnect_attempts,
            }
        } else {
            self.reconnect_attempts += 1;
            self.state = SessionState::Reconnecting;
            FailureDisposition::Retry {
                attempt: self.reconnect_attempts,
                delay: self.policy.delay_for(self.reconnect_attempts - 1),
            }
        }
    }

    /// A scheduled retry could not run (network unreachable). The session
    /// parks in `Disconnected` until the caller connects again.
    pub fn park(&mut self) {
        if self.state == SessionState::Reconnecting {
            self.state = SessionState::Disconnected;
        }
    }

    /// Explicit termination; legal from any state and absorbing.
    pub fn terminate(&mut self) {
        self.state = SessionState::Terminated;
    }
}
