/// Running counters for one walk session.
///
/// Queried through [`WalkSession::stats`](crate::session::WalkSession::stats).
/// Batch drops are counted rather than hidden: delivery is at-most-once per
/// batch, and a transport failure mid-send loses exactly that batch.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WalkStats {
    /// Samples accepted into the batching buffer.
    pub samples_accepted: u64,
    /// Samples evicted (oldest first) while the transport was down.
    pub samples_evicted: u64,
    /// Batches handed to the transport successfully.
    pub batches_sent: u64,
    /// Batches dropped on encode or send failure.
    pub batches_dropped: u64,
    /// Cumulative great-circle distance over accepted samples, in meters.
    pub distance_m: f64,
}
