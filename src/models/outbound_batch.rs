use super::location_sample::{LocationSample, WireSample};

/// An ordered group of validated samples transmitted as one frame.
///
/// Immutable once handed to the frame pipeline: a batch is either fully
/// transmitted or fully discarded, never split.
#[derive(Debug, Clone, PartialEq)]
pub struct OutboundBatch {
    samples: Vec<LocationSample>,
}

impl OutboundBatch {
    pub(crate) fn new(samples: Vec<LocationSample>) -> Self {
        debug_assert!(!samples.is_empty(), "batches are only built from a non-empty buffer");
        Self { samples }
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn samples(&self) -> &[LocationSample] {
        &self.samples
    }

    /// Wire representation: one object per sample, in arrival order.
    pub fn wire_samples(&self) -> Vec<WireSample> {
        self.samples.iter().map(WireSample::from).collect()
    }
}
