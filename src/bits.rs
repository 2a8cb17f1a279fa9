/// Append-only bit buffer, packed MSB-first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BitStream {
    bytes: Vec<u8>,
    length: usize,
}

impl BitStream {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn put_bit(&mut self, b: bool) {
        let index = self.length / 8;
        if self.bytes.len() <= index {
            self.bytes.push(0);
        }

        if b {
            self.bytes[index] |= 0x80 >> (self.length % 8);
        }
        self.length += 1;
    }

    /// Writes the low `count` bits of `value`, most significant first.
    pub fn put_bits(&mut self, value: u32, count: usize) {
        for i in 0..count {
            self.put_bit((value >> (count - i - 1)) & 1 == 1);
        }
    }

    /// The bit at `index`, or `None` past the written length.
    pub fn get(&self, index: usize) -> Option<bool> {
        if index >= self.length {
            return None;
        }

        Some((self.bytes[index / 8] >> (7 - index % 8)) & 1 == 1)
    }

    /// Length in bits.
    pub fn len(&self) -> usize {
        self.length
    }

    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// The partial last byte, if any, is zero-padded.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }
}

#[test]
fn test_put_bits() {
    let mut w = BitStream::new();
    w.put_bits(0b0100, 4);
    w.put_bits(1, 8);
    w.put_bits(0x41, 8);

    assert_eq!(w.len(), 20);
    assert_eq!(w.as_bytes(), &[0b0100_0000, 0b0001_0100, 0b0001_0000]);
}

#[test]
fn test_grows_on_byte_boundary() {
    let mut w = BitStream::new();
    assert!(w.is_empty());
    assert!(w.as_bytes().is_empty());

    w.put_bits(0xff, 8);
    assert_eq!(w.as_bytes().len(), 1);

    w.put_bit(false);
    assert_eq!(w.as_bytes(), &[0xff, 0]);
    assert_eq!(w.len(), 9);
}

#[test]
fn test_get() {
    let mut w = BitStream::new();
    w.put_bits(0b1011, 4);

    assert_eq!((0..4).map(|i| w.get(i).unwrap()).collect::<Vec<_>>(), [true, false, true, true]);
    // the zero padding of the last byte is not readable
    assert_eq!(w.get(4), None);
    assert_eq!(w.get(8), None);
    assert_eq!(w.into_bytes(), vec![0b1011_0000]);
}
