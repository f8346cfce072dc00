//! Cached stage outputs.

use sha2::{Digest, Sha256};

use crate::domain::foundation::Timestamp;

/// The generated cancellation document (an opaque binary, normally a PDF).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentArtifact {
    payload: Vec<u8>,
    generated_at: Timestamp,
}

impl DocumentArtifact {
    pub fn new(payload: Vec<u8>, generated_at: Timestamp) -> Self {
        Self {
            payload,
            generated_at,
        }
    }

    pub fn payload(&self) -> &[u8] {
        &self.payload
    }

    pub fn into_payload(self) -> Vec<u8> {
        self.payload
    }

    pub fn generated_at(&self) -> Timestamp {
        self.generated_at
    }

    pub fn len(&self) -> usize {
        self.payload.len()
    }

    pub fn is_empty(&self) -> bool {
        self.payload.is_empty()
    }

    /// Hex SHA-256 of the payload, for log correlation only.
    pub fn checksum(&self) -> String {
        format!("{:x}", Sha256::digest(&self.payload))
    }
}

/// The BiPRO XML produced by the mapping stage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructuredTextArtifact {
    payload: String,
    generated_at: Timestamp,
}

impl StructuredTextArtifact {
    pub fn new(payload: impl Into<String>, generated_at: Timestamp) -> Self {
        Self {
            payload: payload.into(),
            generated_at,
        }
    }

    pub fn payload(&self) -> &str {
        &self.payload
    }

    pub fn into_payload(self) -> String {
        self.payload
    }

    pub fn generated_at(&self) -> Timestamp {
        self.generated_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn checksum_is_sha256_hex() {
        let artifact = DocumentArtifact::new(b"abc".to_vec(), Timestamp::now());
        assert_eq!(
            artifact.checksum(),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
        assert_eq!(artifact.len(), 3);
    }
}
