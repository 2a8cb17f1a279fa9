//! Block split, per-block error correction and codeword interleaving.

use crate::{ErrorCorrectLv, QrError, Version, err_corr::generate_ec};

/// Shape of one Reed-Solomon block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RsBlock {
    pub total: usize,
    pub data: usize,
}

impl RsBlock {
    pub const fn ec(self) -> usize {
        self.total - self.data
    }
}

/// Blocks of `version` at level `ec`, in codeword order.
pub fn rs_blocks(version: Version, ec: ErrorCorrectLv) -> Vec<RsBlock> {
    let table = match ec {
        ErrorCorrectLv::M => RS_BLOCKS_M[version.version() as usize - 1],
    };

    table
        .iter()
        .flat_map(|&(count, total, data)| std::iter::repeat_n(RsBlock { total, data }, count))
        .collect()
}

/// Data capacity of `version` in bytes.
pub fn data_codewords(version: Version, ec: ErrorCorrectLv) -> usize {
    rs_blocks(version, ec).iter().map(|b| b.data).sum()
}

/// Data and check bytes of one block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    pub data: Vec<u8>,
    pub ec: Vec<u8>,
}

/// Splits `data` into blocks and computes each block's check bytes.
///
/// `data` must hold exactly [`data_codewords`] bytes.
pub fn blocks(data: &[u8], version: Version, ec: ErrorCorrectLv) -> Result<Vec<Block>, QrError> {
    let shapes = rs_blocks(version, ec);
    let capacity = shapes.iter().map(|b| b.data).sum::<usize>();
    if data.len() > capacity {
        return Err(QrError::CapacityExceeded { bits: data.len() * 8, capacity: capacity * 8 });
    }
    if data.len() < capacity {
        return Err(QrError::InvalidDataLength { len: data.len(), expected: capacity });
    }

    let mut offset = 0;
    shapes
        .iter()
        .map(|shape| {
            let block = &data[offset..offset + shape.data];
            offset += shape.data;
            Ok(Block { data: block.to_vec(), ec: generate_ec(block, shape.ec())? })
        })
        .collect()
}

/// Final codeword sequence: data bytes interleaved across blocks, then check
/// bytes interleaved the same way.
pub fn structure(data: &[u8], version: Version, ec: ErrorCorrectLv) -> Result<Vec<u8>, QrError> {
    let blocks = blocks(data, version, ec)?;

    let total = blocks.iter().map(|b| b.data.len() + b.ec.len()).sum();
    let mut result = Vec::with_capacity(total);

    let max_dc = blocks.iter().map(|b| b.data.len()).max().unwrap_or(0);
    for i in 0..max_dc {
        result.extend(blocks.iter().filter_map(|b| b.data.get(i)));
    }

    let max_ec = blocks.iter().map(|b| b.ec.len()).max().unwrap_or(0);
    for i in 0..max_ec {
        result.extend(blocks.iter().filter_map(|b| b.ec.get(i)));
    }

    Ok(result)
}

/// `(count, total codewords, data codewords)` per version at level M.
static RS_BLOCKS_M: [&[(usize, usize, usize)]; 10] = [
    &[(1, 26, 16)],
    &[(1, 44, 28)],
    &[(1, 70, 44)],
    &[(2, 50, 32)],
    &[(2, 67, 43)],
    &[(4, 43, 27)],
    &[(4, 49, 31)],
    &[(2, 60, 38), (2, 61, 39)],
    &[(3, 58, 36), (2, 59, 37)],
    &[(4, 69, 43), (1, 70, 44)],
];

#[cfg(test)]
fn v(version: u8) -> Version {
    Version::new(version).unwrap()
}

#[test]
fn test_capacities() {
    let capacities = Version::all()
        .map(|version| data_codewords(version, ErrorCorrectLv::M))
        .collect::<Vec<_>>();
    assert_eq!(capacities, [16, 28, 44, 64, 86, 108, 124, 154, 182, 216]);
}

#[test]
fn test_total_fills_symbol() {
    // raw data modules per version, remainder bits excluded
    let totals = [26, 44, 70, 100, 134, 172, 196, 242, 292, 346];
    for (version, total) in Version::all().zip(totals) {
        let sum = rs_blocks(version, ErrorCorrectLv::M).iter().map(|b| b.total).sum::<usize>();
        assert_eq!(sum, total);
    }
}

#[test]
fn test_mixed_blocks() {
    assert_eq!(
        rs_blocks(v(9), ErrorCorrectLv::M),
        vec![
            RsBlock { total: 58, data: 36 },
            RsBlock { total: 58, data: 36 },
            RsBlock { total: 58, data: 36 },
            RsBlock { total: 59, data: 37 },
            RsBlock { total: 59, data: 37 },
        ],
    );
}

#[test]
fn test_single_block() {
    let data = [32, 91, 11, 120, 209, 114, 220, 77, 67, 64, 236, 17, 236, 17, 236, 17];
    let m = structure(&data, v(1), ErrorCorrectLv::M).unwrap();

    assert_eq!(&m[..16], &data);
    assert_eq!(&m[16..], &[196, 35, 39, 119, 235, 215, 231, 226, 93, 23]);
}

#[test]
fn test_interleave() {
    // version 8: 2 blocks of 38 data bytes, then 2 of 39
    let data = (0..154).map(|i| i as u8).collect::<Vec<_>>();
    let m = structure(&data, v(8), ErrorCorrectLv::M).unwrap();
    let blocks = blocks(&data, v(8), ErrorCorrectLv::M).unwrap();

    assert_eq!(m.len(), 242);
    assert_eq!(&m[..8], &[0, 38, 76, 115, 1, 39, 77, 116]);
    // only the long blocks have a 39th byte
    assert_eq!(&m[148..154], &[37, 75, 113, 152, 114, 153]);
    assert_eq!(m[154], blocks[0].ec[0]);
    assert_eq!(m[155], blocks[1].ec[0]);
    assert_eq!(m[241], blocks[3].ec[21]);
}

#[test]
fn test_wrong_length() {
    assert_eq!(
        structure(&[0; 17], v(1), ErrorCorrectLv::M),
        Err(QrError::CapacityExceeded { bits: 136, capacity: 128 }),
    );
    assert_eq!(
        structure(&[0; 15], v(1), ErrorCorrectLv::M),
        Err(QrError::InvalidDataLength { len: 15, expected: 16 }),
    );
}

#[test]
fn test_blocks_are_systematic() {
    use crate::poly::Polynomial;

    let data = (0..216).map(|i| (i * 13 + 5) as u8).collect::<Vec<_>>();
    for block in blocks(&data, v(10), ErrorCorrectLv::M).unwrap() {
        let generator = Polynomial::generator(block.ec.len());
        let mut codeword = block.data.clone();
        codeword.extend_from_slice(&block.ec);

        assert_eq!(block.ec.len(), 26);
        assert!(Polynomial::new(&codeword, 0).modulo(&generator).unwrap().is_zero());
    }
}
