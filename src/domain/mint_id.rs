//! Token mint identifier.

use core::fmt;

/// The 32-byte identifier of a token mint.
///
/// Wraps a fixed-size `[u8; 32]` byte array. All 32-byte sequences are
/// valid mint identifiers, so construction is infallible. The engine
/// never interprets the bytes; they only name a token and feed record
/// derivation.
///
/// # Examples
///
/// ```
/// use cpamm::domain::MintId;
///
/// let mint = MintId::from_bytes([1u8; 32]);
/// assert_eq!(mint.as_bytes(), [1u8; 32]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MintId([u8; 32]);

impl MintId {
    /// Creates a `MintId` from raw bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Returns the underlying 32-byte representation.
    #[must_use]
    pub const fn as_bytes(&self) -> [u8; 32] {
        self.0
    }
}

impl fmt::Display for MintId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in &self.0[..4] {
            write!(f, "{byte:02x}")?;
        }
        write!(f, "..")
    }
}
