//! Pluggable confidentiality layer for wire frames.
//!
//! The frame pipeline is `serialize → compress → encrypt` outbound and the
//! exact inverse inbound. Both transform halves live behind one capability
//! trait so a session can swap algorithms without touching batching or the
//! state machine.

use chacha20poly1305::{
    aead::{Aead, AeadCore, KeyInit, OsRng},
    Key, XChaCha20Poly1305, XNonce,
};

use crate::compression;
use crate::error::LeashLinkError;

/// Ceiling on decompressed payload size for inbound frames (1 MiB).
pub(crate) const MAX_DECOMPRESSED_BYTES: usize = 1 << 20;

/// XChaCha20-Poly1305 nonce length prefixed to every encrypted frame.
const NONCE_LEN: usize = 24;

/// Poly1305 authentication tag length.
const TAG_LEN: usize = 16;

/// Capability interface for the compress and encrypt halves of the frame
/// pipeline.
///
/// Implementations must be symmetric: `decrypt(encrypt(x)) == x` and
/// `decompress(compress(x)) == x` for any payload `x`. Compression failures
/// map to [`LeashLinkError::Encode`] / [`LeashLinkError::Decode`] like their
/// crypto counterparts so callers see one error surface.
pub trait SecuritySuite: Send + Sync {
    fn compress(&self, data: &[u8]) -> Result<Vec<u8>, LeashLinkError>;
    fn decompress(&self, data: &[u8]) -> Result<Vec<u8>, LeashLinkError>;
    fn encrypt(&self, data: &[u8]) -> Result<Vec<u8>, LeashLinkError>;
    fn decrypt(&self, data: &[u8]) -> Result<Vec<u8>, LeashLinkError>;
}

fn decompress_limited(data: &[u8]) -> Result<Vec<u8>, LeashLinkError> {
    compression::decompress_with_limit(data, MAX_DECOMPRESSED_BYTES)
        .map_err(|e| LeashLinkError::Decode(e.to_string()))
}

/// Shared-key suite: zlib compression plus XChaCha20-Poly1305 under a
/// session-scoped 32-byte key.
///
/// Frame layout: random 24-byte nonce followed by the ciphertext (which
/// carries the Poly1305 tag). Tampering with any byte fails decryption with a
/// distinguishable [`LeashLinkError::Decode`].
pub struct SharedKeySecurity {
    cipher: XChaCha20Poly1305,
}

impl SharedKeySecurity {
    pub fn new(key: [u8; 32]) -> Self {
        Self {
            cipher: XChaCha20Poly1305::new(Key::from_slice(&key)),
        }
    }
}

impl std::fmt::Debug for SharedKeySecurity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Never print key material.
        f.debug_struct("SharedKeySecurity").finish_non_exhaustive()
    }
}

impl SecuritySuite for SharedKeySecurity {
    fn compress(&self, data: &[u8]) -> Result<Vec<u8>, LeashLinkError> {
        Ok(compression::compress(data))
    }

    fn decompress(&self, data: &[u8]) -> Result<Vec<u8>, LeashLinkError> {
        decompress_limited(data)
    }

    fn encrypt(&self, data: &[u8]) -> Result<Vec<u8>, LeashLinkError> {
        let nonce = XChaCha20Poly1305::generate_nonce(&mut OsRng);
        let ciphertext = self
            .cipher
            .encrypt(&nonce, data)
            .map_err(|_| LeashLinkError::Encode("encryption failed".to_string()))?;
        let mut frame = Vec::with_capacity(NONCE_LEN + ciphertext.len());
        frame.extend_from_slice(nonce.as_slice());
        frame.extend_from_slice(&ciphertext);
        Ok(frame)
    }

    fn decrypt(&self, data: &[u8]) -> Result<Vec<u8>, LeashLinkError> {
        if data.len() < NONCE_LEN + TAG_LEN {
            return Err(LeashLinkError::Decode(format!(
                "frame too short for nonce and tag ({} bytes)",
                data.len()
            )));
        }
        let (nonce, ciphertext) = data.split_at(NONCE_LEN);
        self.cipher
            .decrypt(XNonce::from_slice(nonce), ciphertext)
            .map_err(|_| {
                LeashLinkError::Decode("authentication failed: frame tampered or wrong key".to_string())
            })
    }
}

/// Compression-only suite with identity crypto.
///
/// Matches backends that leave confidentiality to the TLS layer and run the
/// streaming channel without frame-level encryption. Compression is kept so
/// frames stay transmission-efficient either way.
#[derive(Debug, Default, Clone, Copy)]
pub struct PassthroughSecurity;

impl SecuritySuite for PassthroughSecurity {
    fn compress(&self, data: &[u8]) -> Result<Vec<u8>, LeashLinkError> {
        Ok(compression::compress(data))
    }

    fn decompress(&self, data: &[u8]) -> Result<Vec<u8>, LeashLinkError> {
        decompress_limited(data)
    }

    fn encrypt(&self, data: &[u8]) -> Result<Vec<u8>, LeashLinkError> {
        Ok(data.to_vec())
    }

    fn decrypt(&self, data: &[u8]) -> Result<Vec<u8>, LeashLinkError> {
        Ok(data.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key() -> [u8; 32] {
        let mut key = [0u8; 32];
        for (i, byte) in key.iter_mut().enumerate() {
            *byte = i as u8;
        }
        key
    }

    #[test]
    fn test_shared_key_round_trip() {
        let suite = SharedKeySecurity::new(key());
        let plain = b"walk telemetry payload";
        let frame = suite.encrypt(plain).unwrap();
        assert_ne!(&frame[NONCE_LEN..], plain.as_slice());
        assert_eq!(suite.decrypt(&frame).unwrap(), plain);
    }

    #[test]
    fn test_nonce_makes_ciphertext_unique() {
        let suite = SharedKeySecurity::new(key());
        let a = suite.encrypt(b"same payload").unwrap();
        let b = suite.encrypt(b"same payload").unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_tampered_frame_fails_decrypt() {
        let suite = SharedKeySecurity::new(key());
        let mut frame = suite.encrypt(b"authentic bytes").unwrap();
        let last = frame.len() - 1;
        frame[last] ^= 0x01;
        assert!(matches!(
            suite.decrypt(&frame),
            Err(LeashLinkError::Decode(_))
        ));
    }

    #[test]
    fn test_wrong_key_fails_decrypt() {
        let suite = SharedKeySecurity::new(key());
        let frame = suite.encrypt(b"authentic bytes").unwrap();
        let other = SharedKeySecurity::new([0xAA; 32]);
        assert!(other.decrypt(&frame).is_err());
    }

    #[test]
    fn test_short_frame_is_decode_error() {
        let suite = SharedKeySecurity::new(key());
        assert!(matches!(
            suite.decrypt(&[0u8; 10]),
            Err(LeashLinkError::Decode(_))
        ));
    }

    #[test]
    fn test_passthrough_is_identity_crypto() {
        let suite = PassthroughSecurity;
        let frame = suite.encrypt(b"plain").unwrap();
        assert_eq!(frame, b"plain");
        assert_eq!(suite.decrypt(&frame).unwrap(), b"plain");
    }
}
