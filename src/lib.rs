//! QR Code matrix encoder.
//!
//! Payloads are written in 8-bit byte mode at error correction level M, in the
//! smallest of versions 1 to 10 that holds them. The mask is picked by the
//! usual four penalty rules.
//!
//! ```
//! let qr = miniqr::encode(b"https://example.com").unwrap();
//! assert_eq!(qr.size(), 25);
//! let svg = miniqr::render::Svg::new(200).render(&qr);
//! assert!(svg.starts_with("<svg"));
//! ```

pub mod bits;
pub mod encode;
mod err_corr;
mod error;
pub mod gf;
pub mod matrix;
pub mod poly;
pub mod render;
pub mod structure;

pub use error::QrError;
pub use matrix::{Mask, Module, QrMatrix};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ErrorCorrectLv {
    /// Recovers roughly 15% of the codewords.
    M,
}

impl ErrorCorrectLv {
    /// Two-bit level indicator stored in the format information.
    pub const fn format_bits(self) -> u16 {
        match self {
            Self::M => 0b00,
        }
    }
}

/// Symbol version, from 1 (21x21) to 10 (57x57).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Version(u8);

impl Version {
    pub const MIN: Version = Version(1);
    pub const MAX: Version = Version(10);

    pub fn new(version: u8) -> Result<Self, QrError> {
        if !(Self::MIN.0..=Self::MAX.0).contains(&version) {
            return Err(QrError::UnsupportedVersion(version));
        }

        Ok(Self(version))
    }

    pub const fn version(self) -> u8 {
        self.0
    }

    /// Side length in modules.
    pub const fn size(self) -> usize {
        self.0 as usize * 4 + 17
    }

    /// Every supported version, smallest first.
    pub fn all() -> impl Iterator<Item = Version> {
        (Self::MIN.0..=Self::MAX.0).map(Version)
    }

    /// The smallest version whose data codewords hold `segments`.
    ///
    /// Only the bitstream is built for each candidate, so a miss is cheap.
    pub fn smallest_version(segments: &[&[u8]], ec: ErrorCorrectLv) -> Result<Version, QrError> {
        for version in Version::all() {
            match encode::encode(segments, version, ec) {
                Ok(_) => {
                    tracing::debug!(version = version.0, "selected version");
                    return Ok(version);
                }
                Err(QrError::CapacityExceeded { bits, capacity }) if version < Version::MAX => {
                    tracing::debug!(version = version.0, bits, capacity, "payload does not fit");
                }
                Err(e) => return Err(e),
            }
        }

        unreachable!("the largest version either fits or reports the overflow")
    }
}

/// Encodes `data` as a single byte segment.
pub fn encode(data: &[u8]) -> Result<QrMatrix, QrError> {
    encode_segments(&[data])
}

/// Encodes each slice of `segments` as its own byte segment, in the smallest
/// version that fits all of them.
pub fn encode_segments(segments: &[&[u8]]) -> Result<QrMatrix, QrError> {
    let ec = ErrorCorrectLv::M;
    let version = Version::smallest_version(segments, ec)?;

    QrMatrix::generate(segments, version, ec)
}

#[test]
fn test_version_bounds() {
    assert_eq!(Version::new(0), Err(QrError::UnsupportedVersion(0)));
    assert_eq!(Version::new(11), Err(QrError::UnsupportedVersion(11)));
    assert_eq!(Version::new(7).unwrap().version(), 7);
}

#[test]
fn test_version_size() {
    for v in Version::all() {
        assert_eq!(v.size(), 4 * v.version() as usize + 17);
    }
    assert_eq!(Version::all().count(), 10);
    assert_eq!(Version::MIN.size(), 21);
    assert_eq!(Version::MAX.size(), 57);
}

#[test]
fn test_smallest_version() {
    let ec = ErrorCorrectLv::M;
    assert_eq!(Version::smallest_version(&[b""], ec).unwrap().version(), 1);
    assert_eq!(Version::smallest_version(&[&[0; 14]], ec).unwrap().version(), 1);
    assert_eq!(Version::smallest_version(&[&[0; 15]], ec).unwrap().version(), 2);
    assert_eq!(Version::smallest_version(&[&[0; 182]], ec).unwrap().version(), 10);
    assert!(matches!(
        Version::smallest_version(&[&[0; 214]], ec),
        Err(QrError::CapacityExceeded { capacity: 1728, .. }),
    ));
}
