//! Content-hash identity for structured errors
//!
//! An [`Identity`] is a running SHA-256 accumulator. Producers feed it the
//! fields that describe a fault; consumers finalize it into a [`Digest`] as
//! many times as they like without disturbing what has been absorbed.

use sha2::{Digest as _, Sha256};
use std::fmt;
use std::str::FromStr;

/// Length in bytes of a finalized [`Digest`]
pub const DIGEST_LEN: usize = 32;

/// Running content hash of an error's own payload
#[derive(Clone, Default)]
pub struct Identity {
    hasher: Sha256,
}

impl Identity {
    /// Create an empty accumulator
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed raw bytes into the accumulator
    pub fn absorb(&mut self, bytes: &[u8]) {
        self.hasher.update(bytes);
    }

    /// Feed a labelled field
    ///
    /// Label and value are both length-prefixed so that adjacent fields can
    /// never be re-split into a colliding input.
    pub fn absorb_field(&mut self, label: &str, value: &[u8]) {
        self.absorb(&(label.len() as u64).to_be_bytes());
        self.absorb(label.as_bytes());
        self.absorb(&(value.len() as u64).to_be_bytes());
        self.absorb(value);
    }

    /// Finalize a copy of the accumulator
    #[must_use]
    pub fn digest(&self) -> Digest {
        Digest(self.hasher.clone().finalize().into())
    }
}

impl fmt::Debug for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Identity").field(&self.digest()).finish()
    }
}

/// Compare two accumulators by their finalized digests
#[must_use]
pub fn same_digest(a: &Identity, b: &Identity) -> bool {
    a.digest().as_bytes() == b.digest().as_bytes()
}

/// Finalized SHA-256 digest of an [`Identity`]
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Digest([u8; DIGEST_LEN]);

impl Digest {
    /// Raw digest bytes
    #[must_use]
    pub fn as_bytes(&self) -> &[u8; DIGEST_LEN] {
        &self.0
    }

    /// Lowercase hex rendering
    #[must_use]
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl From<[u8; DIGEST_LEN]> for Digest {
    fn from(bytes: [u8; DIGEST_LEN]) -> Self {
        Self(bytes)
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl fmt::Debug for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Digest({})", self.to_hex())
    }
}

/// A string could not be parsed as a [`Digest`]
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ParseDigestError {
    /// Input is not valid hex
    #[error("invalid digest hex: {0}")]
    Hex(#[from] hex::FromHexError),

    /// Input decoded to the wrong number of bytes
    #[error("digest must be {DIGEST_LEN} bytes, got {0}")]
    Length(usize),
}

impl FromStr for Digest {
    type Err = ParseDigestError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = hex::decode(s)?;
        let len = bytes.len();
        let bytes: [u8; DIGEST_LEN] = bytes
            .try_into()
            .map_err(|_| ParseDigestError::Length(len))?;
        Ok(Self(bytes))
    }
}

impl TryFrom<String> for Digest {
    type Error = ParseDigestError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Digest> for String {
    fn from(digest: Digest) -> Self {
        digest.to_hex()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digest_is_repeatable() {
        let mut id = Identity::new();
        id.absorb(b"disk full");

        let first = id.digest();
        let second = id.digest();
        assert_eq!(first, second);

        // Finalizing must not have reset the accumulator
        id.absorb(b"!");
        assert_ne!(first, id.digest());
    }

    #[test]
    fn test_field_boundaries_do_not_collide() {
        let mut left = Identity::new();
        left.absorb_field("ab", b"c");

        let mut right = Identity::new();
        right.absorb_field("a", b"bc");

        assert!(!same_digest(&left, &right));
    }

    #[test]
    fn test_hex_parse() {
        let mut id = Identity::new();
        id.absorb(b"x");
        let digest = id.digest();

        let parsed: Digest = digest.to_hex().parse().expect("hex should round-trip");
        assert_eq!(parsed, digest);

        assert_eq!("abcd".parse::<Digest>(), Err(ParseDigestError::Length(2)));
        assert!(matches!("zz".parse::<Digest>(), Err(ParseDigestError::Hex(_))));
    }
}
