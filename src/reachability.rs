//! Network reachability gating for connection attempts.
//!
//! The host platform owns the actual reachability signal (cellular/Wi-Fi
//! interface state); the session only consumes a boolean view of it.
//! `connect()` is a no-op while the monitor reports unreachable.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Host-supplied view of network reachability.
pub trait ReachabilityMonitor: Send + Sync {
    /// Whether a connection attempt is worth making right now.
    fn is_reachable(&self) -> bool;

    /// Called once when a session starts.
    fn start_monitoring(&self) {}

    /// Called once when a session terminates.
    fn stop_monitoring(&self) {}
}

/// Default monitor for hosts without a reachability signal: always attempts.
#[derive(Debug, Default, Clone, Copy)]
pub struct AlwaysReachable;

impl ReachabilityMonitor for AlwaysReachable {
    fn is_reachable(&self) -> bool {
        true
    }
}

/// Flag-backed monitor for hosts that push reachability changes.
///
/// Clone the handle into the platform callback and flip it as the network
/// comes and goes.
#[derive(Debug, Clone)]
pub struct SharedReachability {
    flag: Arc<AtomicBool>,
}

impl SharedReachability {
    pub fn new(initially_reachable: bool) -> Self {
        Self {
            flag: Arc::new(AtomicBool::new(initially_reachable)),
        }
    }

    pub fn set_reachable(&self, reachable: bool) {
        self.flag.store(reachable, Ordering::Relaxed);
    }
}

impl ReachabilityMonitor for SharedReachability {
    fn is_reachable(&self) -> bool {
        self.flag.load(Ordering::Relaxed)
    }
}
