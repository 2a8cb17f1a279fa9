//! Error kinds raised while encoding a symbol.

/// Everything that can go wrong between a payload and a finished matrix.
///
/// Only [`QrError::CapacityExceeded`] is worth retrying with a bigger version;
/// the other kinds point at a bad argument or a bug and are returned as is.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QrError {
    /// The bitstream does not fit the data codewords of the version.
    #[error("code length overflow: {bits} bits do not fit in {capacity} bits")]
    CapacityExceeded { bits: usize, capacity: usize },

    /// Data codewords shorter than the version's capacity.
    #[error("expected {expected} data codewords, got {len}")]
    InvalidDataLength { len: usize, expected: usize },

    /// A module lookup outside `0..size` on either axis.
    #[error("module ({row}, {col}) is outside the {size}x{size} matrix")]
    InvalidModuleAccess { row: usize, col: usize, size: usize },

    #[error("bad mask pattern {0}, expected 0..8")]
    InvalidMaskPattern(u8),

    /// Zero has no discrete logarithm in GF(256).
    #[error("log(0) is undefined in GF(256)")]
    InvalidFieldOperand,

    #[error("unsupported version {0}, expected 1..=10")]
    UnsupportedVersion(u8),
}
