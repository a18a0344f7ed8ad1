//! Encode/decode pipeline for wire frames.
//!
//! Outbound: `serialize → compress → encrypt`. Inbound applies the exact
//! inverse in reverse order: `decrypt → decompress → deserialize`. The
//! pipeline guarantees round-trip equivalence for any valid payload and maps
//! every failure to a distinguishable [`LeashLinkError::Encode`] or
//! [`LeashLinkError::Decode`].

use std::sync::Arc;

use serde::{de::DeserializeOwned, Serialize};

use crate::error::LeashLinkError;
use crate::models::{OutboundBatch, ServerMessage, WireSample};
use crate::security::SecuritySuite;

/// Ceiling on raw inbound frame size before any processing (256 KiB).
pub(crate) const MAX_FRAME_BYTES: usize = 256 << 10;

/// The encode/decode pipeline for one session's frames.
///
/// Cheap to clone; the security suite is shared behind an `Arc`.
#[derive(Clone)]
pub struct FramePipeline {
    suite: Arc<dyn SecuritySuite>,
}

impl FramePipeline {
    pub fn new(suite: Arc<dyn SecuritySuite>) -> Self {
        Self { suite }
    }

    /// Encode any serializable value into a secure frame.
    pub fn encode<T: Serialize>(&self, value: &T) -> Result<Vec<u8>, LeashLinkError> {
        let plain = serde_json::to_vec(value)
            .map_err(|e| LeashLinkError::Encode(format!("serialization failed: {}", e)))?;
        let packed = self.suite.compress(&plain)?;
        self.suite.encrypt(&packed)
    }

    /// Decode a secure frame back into a typed value.
    pub fn decode<T: DeserializeOwned>(&self, frame: &[u8]) -> Result<T, LeashLinkError> {
        if frame.is_empty() {
            return Err(LeashLinkError::Decode("empty frame".to_string()));
        }
        if frame.len() > MAX_FRAME_BYTES {
            return Err(LeashLinkError::Decode(format!(
                "frame too large ({} bytes > {} bytes)",
                frame.len(),
                MAX_FRAME_BYTES
            )));
        }
        let packed = self.suite.decrypt(frame)?;
        let plain = self.suite.decompress(&packed)?;
        serde_json::from_slice(&plain)
            .map_err(|e| LeashLinkError::Decode(format!("deserialization failed: {}", e)))
    }

    /// Encode one outbound batch: a JSON array of wire samples in arrival
    /// order, one frame per batch.
    pub fn encode_batch(&self, batch: &OutboundBatch) -> Result<Vec<u8>, LeashLinkError> {
        self.encode(&batch.wire_samples())
    }

    /// Inverse of [`encode_batch`](Self::encode_batch). The backend runs this
    /// side; the client uses it in tests to assert the round-trip law.
    pub fn decode_batch(&self, frame: &[u8]) -> Result<Vec<WireSample>, LeashLinkError> {
        self.decode(frame)
    }

    /// Decode an inbound frame into a routed server message.
    pub fn decode_message(&self, frame: &[u8]) -> Result<ServerMessage, LeashLinkError> {
        self.decode(frame)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::location_sample::now_ms;
    use crate::models::LocationSample;
    use crate::security::{PassthroughSecurity, SharedKeySecurity};

    fn batch() -> OutboundBatch {
        let samples = (0..4u32)
            .map(|n| LocationSample {
                sample_id: format!("fix-{}", n),
                session_id: "walk-7".to_string(),
                latitude: 47.6097 + f64::from(n) * 1e-5,
                longitude: -122.3331,
                accuracy: 4.5,
                speed: 1.3,
                captured_at_ms: now_ms() - u64::from(n) * 100,
            })
            .collect();
        OutboundBatch::new(samples)
    }

    fn pipelines() -> Vec<FramePipeline> {
        vec![
            FramePipeline::new(Arc::new(SharedKeySecurity::new([7u8; 32]))),
            FramePipeline::new(Arc::new(PassthroughSecurity)),
        ]
    }

    #[test]
    fn test_batch_round_trip_law() {
        let batch = batch();
        for pipeline in pipelines() {
            let frame = pipeline.encode_batch(&batch).unwrap();
            let decoded = pipeline.decode_batch(&frame).unwrap();
            assert_eq!(decoded, batch.wire_samples());
        }
    }

    #[test]
    fn test_message_round_trip_law() {
        let msg = ServerMessage::SessionStatus {
            session_id: "walk-7".to_string(),
            status: "paused".to_string(),
        };
        for pipeline in pipelines() {
            let frame = pipeline.encode(&msg).unwrap();
            assert_eq!(pipeline.decode_message(&frame).unwrap(), msg);
        }
    }

    #[test]
    fn test_empty_frame_is_decode_error() {
        for pipeline in pipelines() {
            assert!(matches!(
                pipeline.decode_message(&[]),
                Err(LeashLinkError::Decode(_))
            ));
        }
    }

    #[test]
    fn test_tampered_frame_is_decode_error_not_panic() {
        let pipeline = FramePipeline::new(Arc::new(SharedKeySecurity::new([9u8; 32])));
        let mut frame = pipeline.encode_batch(&batch()).unwrap();
        frame[30] ^= 0xFF;
        assert!(matches!(
            pipeline.decode_batch(&frame),
            Err(LeashLinkError::Decode(_))
        ));
    }

    #[test]
    fn test_oversized_frame_is_decode_error() {
        let pipeline = FramePipeline::new(Arc::new(PassthroughSecurity));
        let frame = vec![0u8; MAX_FRAME_BYTES + 1];
        assert!(matches!(
            pipeline.decode_message(&frame),
            Err(LeashLinkError::Decode(_))
        ));
    }

    #[test]
    fn test_wire_order_is_arrival_order() {
        let batch = batch();
        let pipeline = FramePipeline::new(Arc::new(PassthroughSecurity));
        let frame = pipeline.encode_batch(&batch).unwrap();
        let decoded = pipeline.decode_batch(&frame).unwrap();
        for (wire, sample) in decoded.iter().zip(batch.samples()) {
            assert_eq!(wire.captured_at, sample.captured_at_ms);
        }
    }
}
