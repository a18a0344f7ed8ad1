//! Outbound sample batching.
//!
//! Accepted samples accumulate in arrival order until a flush trigger fires:
//! the buffer reaches the batch size, or the periodic flush tick finds it
//! non-empty. While the transport is down samples stay buffered up to a
//! retention cap, past which the oldest are evicted first.

use std::collections::VecDeque;

use crate::models::{LocationSample, OutboundBatch};

/// What the session should do after accepting a sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum FlushTrigger {
    /// Keep accumulating.
    None,
    /// The buffer holds at least one full batch; flush now.
    SizeReached,
}

/// FIFO accumulator for validated samples awaiting transmission.
#[derive(Debug)]
pub(crate) struct SampleBuffer {
    samples: VecDeque<LocationSample>,
    batch_max: usize,
    retention_max: usize,
    evicted: u64,
}

impl SampleBuffer {
    pub fn new(batch_max: usize, retention_max: usize) -> Self {
        let batch_max = batch_max.max(1);
        Self {
            samples: VecDeque::new(),
            batch_max,
            retention_max: retention_max.max(batch_max),
            evicted: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Total samples evicted over the buffer's lifetime.
    pub fn evicted(&self) -> u64 {
        self.evicted
    }

    /// Accept a validated sample, evicting the oldest past the retention cap.
    pub fn push(&mut self, sample: LocationSample) -> FlushTrigger {
        self.samples.push_back(sample);
        while self.samples.len() > self.retention_max {
            self.samples.pop_front();
            self.evicted += 1;
        }
        if self.samples.len() >= self.batch_max {
            FlushTrigger::SizeReached
        } else {
            FlushTrigger::None
        }
    }

    /// Remove up to one batch worth of samples, oldest first.
    pub fn take_batch(&mut self) -> Option<OutboundBatch> {
        if self.samples.is_empty() {
            return None;
        }
        let count = self.samples.len().min(self.batch_max);
        let samples: Vec<LocationSample> = self.samples.drain(..count).collect();
        Some(OutboundBatch::new(samples))
    }

    /// Drain the entire buffer into consecutive batches for a forced flush.
    pub fn drain_batches(&mut self) -> Vec<OutboundBatch> {
        let mut batches = Vec::new();
        while let Some(batch) = self.take_batch() {
            batches.push(batch);
        }
        batches
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::location_sample::now_ms;

    fn sample(n: u32) -> LocationSample {
        LocationSample {
            sample_id: format!("fix-{}", n),
            session_id: "walk-1".to_string(),
            latitude: 47.6 + f64::from(n) * 1e-5,
            longitude: -122.3,
            accuracy: 5.0,
            speed: 1.2,
            captured_at_ms: now_ms(),
        }
    }

    #[test]
    fn test_size_trigger_at_batch_max() {
        let mut buffer = SampleBuffer::new(10, 300);
        for n in 0..9 {
            assert_eq!(buffer.push(sample(n)), FlushTrigger::None);
        }
        assert_eq!(buffer.push(sample(9)), FlushTrigger::SizeReached);
        assert_eq!(buffer.len(), 10);
    }

    #[test]
    fn test_take_batch_preserves_arrival_order() {
        let mut buffer = SampleBuffer::new(10, 300);
        for n in 0..12 {
            buffer.push(sample(n));
        }
        let batch = buffer.take_batch().unwrap();
        assert_eq!(batch.len(), 10);
        assert_eq!(batch.samples()[0].sample_id, "fix-0");
        assert_eq!(batch.samples()[9].sample_id, "fix-9");
        // The remainder stays buffered for the next flush.
        assert_eq!(buffer.len(), 2);
        let rest = buffer.take_batch().unwrap();
        assert_eq!(rest.len(), 2);
        assert_eq!(rest.samples()[0].sample_id, "fix-10");
        assert!(buffer.take_batch().is_none());
    }

    #[test]
    fn test_retention_evicts_oldest_first() {
        let mut buffer = SampleBuffer::new(10, 20);
        for n in 0..25 {
            buffer.push(sample(n));
        }
        assert_eq!(buffer.len(), 20);
        assert_eq!(buffer.evicted(), 5);
        let batch = buffer.take_batch().unwrap();
        // fix-0..fix-4 were evicted; the oldest survivor is fix-5.
        assert_eq!(batch.samples()[0].sample_id, "fix-5");
    }

    #[test]
    fn test_drain_batches_empties_buffer() {
        let mut buffer = SampleBuffer::new(10, 300);
        for n in 0..23 {
            buffer.push(sample(n));
        }
        let batches = buffer.drain_batches();
        assert_eq!(batches.len(), 3);
        assert_eq!(batches[0].len(), 10);
        assert_eq!(batches[1].len(), 10);
        assert_eq!(batches[2].len(), 3);
        assert!(buffer.is_empty());
    }

    #[test]
    fn test_retention_never_below_batch_size() {
        let buffer = SampleBuffer::new(10, 3);
        assert_eq!(buffer.retention_max, 10);
    }
}
