//! 32-byte address naming a record or a holder.

use core::fmt;

/// A 32-byte address.
///
/// Addresses name two kinds of parties: holders (wallets supplied by
/// callers, any byte pattern) and engine-derived records (produced only
/// by [`derive_address`](super::derive_address)). The two spaces are
/// disjoint by construction: derivation accepts only digests whose final
/// byte has its low bit set, and that bit is the ownership marker
/// checked before any vault or ledger write.
///
/// # Examples
///
/// ```
/// use cpamm::address::Address;
///
/// let holder = Address::from_bytes([7u8; 32]);
/// assert_eq!(holder.as_bytes(), [7u8; 32]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Address([u8; 32]);

impl Address {
    /// Creates an `Address` from raw bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Returns the underlying 32-byte representation.
    #[must_use]
    pub const fn as_bytes(&self) -> [u8; 32] {
        self.0
    }

    /// Returns `true` if this address carries the engine-derived marker.
    ///
    /// Only addresses produced by the deriver carry the marker; an
    /// address without it must never be accepted as the authority for a
    /// vault or LP ledger write.
    #[must_use]
    pub const fn is_engine_derived(&self) -> bool {
        self.0[31] & 1 == 1
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in &self.0[..4] {
            write!(f, "{byte:02x}")?;
        }
        write!(f, "..")
    }
}
