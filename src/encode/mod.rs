//! Data bitstream: segment headers, payload bytes, terminator and padding.

use crate::{ErrorCorrectLv, QrError, Version, bits::BitStream, structure};

const PAD_BYTES: [u8; 2] = [0xec, 0x11];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Bytes,
}

impl Mode {
    pub const fn indicator(self) -> u32 {
        match self {
            Self::Bytes => 0b0100,
        }
    }

    /// Width of the character count indicator.
    pub const fn count_bits(self, version: Version) -> usize {
        match (self, version.version()) {
            (Self::Bytes, 1..=9) => 8,
            (Self::Bytes, _) => 16,
        }
    }
}

/// Builds the padded data codewords for `version`, one byte segment per
/// element of `segments`.
pub fn encode(segments: &[&[u8]], version: Version, ec: ErrorCorrectLv) -> Result<Vec<u8>, QrError> {
    let capacity = structure::data_codewords(version, ec) * 8;
    let mut buffer = BitStream::new();

    for data in segments {
        write_segment(data, Mode::Bytes, version, &mut buffer, capacity)?;
    }

    if buffer.len() > capacity {
        return Err(QrError::CapacityExceeded { bits: buffer.len(), capacity });
    }

    // terminator, shortened away when the symbol is full
    if buffer.len() + 4 <= capacity {
        buffer.put_bits(0, 4);
    }

    while buffer.len() % 8 != 0 {
        buffer.put_bit(false);
    }

    for pad in PAD_BYTES.iter().cycle() {
        if buffer.len() >= capacity {
            break;
        }
        buffer.put_bits(*pad as u32, 8);
    }

    Ok(buffer.into_bytes())
}

fn write_segment(
    data: &[u8],
    mode: Mode,
    version: Version,
    buffer: &mut BitStream,
    capacity: usize,
) -> Result<(), QrError> {
    let count_bits = mode.count_bits(version);
    if data.len() >= 1 << count_bits {
        return Err(QrError::CapacityExceeded {
            bits: buffer.len() + 4 + count_bits + data.len() * 8,
            capacity,
        });
    }

    buffer.put_bits(mode.indicator(), 4);
    buffer.put_bits(data.len() as u32, count_bits);
    encode_bytes(data, buffer);

    Ok(())
}

fn encode_bytes(data: &[u8], buffer: &mut BitStream) {
    for b in data.iter() {
        buffer.put_bits(*b as u32, 8);
    }
}

#[cfg(test)]
fn v(version: u8) -> Version {
    Version::new(version).unwrap()
}

#[test]
fn test_count_bits() {
    assert_eq!(Mode::Bytes.count_bits(v(1)), 8);
    assert_eq!(Mode::Bytes.count_bits(v(9)), 8);
    assert_eq!(Mode::Bytes.count_bits(v(10)), 16);
}

#[test]
fn test_single_byte() {
    let data = encode(&[b"A"], v(1), ErrorCorrectLv::M).unwrap();

    // 0100 00000001 01000001 0000, then pad bytes
    let mut expected = vec![0b0100_0000, 0b0001_0100, 0b0001_0000];
    expected.extend([0xec, 0x11].iter().cycle().take(13));
    assert_eq!(data, expected);
    assert_eq!(data.len() * 8, 128);
}

#[test]
fn test_empty() {
    let data = encode(&[b""], v(1), ErrorCorrectLv::M).unwrap();

    assert_eq!(&data[..2], &[0b0100_0000, 0b0000_0000]);
    assert_eq!(data[2], 0xec);
    assert_eq!(data.len(), 16);
}

#[test]
fn test_no_segments() {
    let data = encode(&[], v(1), ErrorCorrectLv::M).unwrap();

    assert_eq!(data[0], 0);
    assert!(data[1..].chunks(2).all(|c| c[0] == 0xec && c.get(1).is_none_or(|b| *b == 0x11)));
}

#[test]
fn test_terminator_fills_last_bits() {
    // 12 + 14 * 8 = 124 bits, the terminator takes the final 4
    let data = encode(&[&[0xff; 14]], v(1), ErrorCorrectLv::M).unwrap();

    assert_eq!(data.len(), 16);
    assert_eq!(data[15], 0xf0);
}

#[test]
fn test_exact_fit() {
    // two headers: 24 + 13 * 8 = 128 bits, no room for the terminator
    let data = encode(&[&[0x55; 6], &[0x55; 7]], v(1), ErrorCorrectLv::M).unwrap();

    assert_eq!(data.len(), 16);
    assert_eq!(data[15], 0x55);
}

#[test]
fn test_overflow() {
    assert_eq!(
        encode(&[&[0x55; 7], &[0x55; 7]], v(1), ErrorCorrectLv::M),
        Err(QrError::CapacityExceeded { bits: 136, capacity: 128 }),
    );
    assert_eq!(
        encode(&[&[0; 15]], v(1), ErrorCorrectLv::M),
        Err(QrError::CapacityExceeded { bits: 132, capacity: 128 }),
    );
}

#[test]
fn test_count_field_overflow() {
    assert!(matches!(
        encode(&[&[0; 256]], v(9), ErrorCorrectLv::M),
        Err(QrError::CapacityExceeded { .. }),
    ));
}

#[test]
fn test_version_10_uses_wide_count() {
    let data = encode(&[&[0xab; 3]], v(10), ErrorCorrectLv::M).unwrap();

    // 0100 0000000000000011 10101011...
    assert_eq!(&data[..3], &[0b0100_0000, 0b0000_0000, 0b0011_1010]);
    assert_eq!(data.len(), 216);
}
