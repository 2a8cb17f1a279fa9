use rayon::prelude::*;

use crate::{ErrorCorrectLv, QrError, Version, structure};

const MAX_SIZE: usize = Version::MAX.size();

/// BCH generator of the format information, `x^10 + x^8 + x^5 + x^4 + x^2 + x + 1`.
const FORMAT_GENERATOR: u32 = 0x537;
const FORMAT_MASK: u32 = 0x5412;
/// BCH generator of the version information.
const VERSION_GENERATOR: u32 = 0x1f25;

const PENALTY_RUN: usize = 3;
const PENALTY_BLOCK: usize = 3;
const PENALTY_FINDER_LIKE: usize = 40;
const PENALTY_BALANCE: usize = 10;

const FINDER_LIKE: [bool; 7] = [true, false, true, true, true, false, true];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Module {
    /// Not written yet. Never present in a finished [`QrMatrix`].
    #[default]
    Unset,
    Light,
    Dark,
}

impl Module {
    pub const fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }
}

impl From<bool> for Module {
    fn from(dark: bool) -> Self {
        if dark { Self::Dark } else { Self::Light }
    }
}

/// One of the eight data mask patterns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Mask(u8);

impl Mask {
    pub const ALL: [Mask; 8] = [Mask(0), Mask(1), Mask(2), Mask(3), Mask(4), Mask(5), Mask(6), Mask(7)];

    pub fn new(pattern: u8) -> Result<Self, QrError> {
        if pattern >= 8 {
            return Err(QrError::InvalidMaskPattern(pattern));
        }

        Ok(Self(pattern))
    }

    pub const fn pattern(self) -> u8 {
        self.0
    }

    /// Whether the data bit at `(row, col)` gets inverted.
    pub fn inverts(self, row: usize, col: usize) -> bool {
        let (i, j) = (row, col);
        match self.0 {
            0 => (i + j) % 2 == 0,
            1 => i % 2 == 0,
            2 => j % 3 == 0,
            3 => (i + j) % 3 == 0,
            4 => (i / 2 + j / 3) % 2 == 0,
            5 => i * j % 2 + i * j % 3 == 0,
            6 => (i * j % 2 + i * j % 3) % 2 == 0,
            7 => (i * j % 3 + (i + j) % 2) % 2 == 0,
            _ => unreachable!("mask patterns are checked on construction"),
        }
    }
}

/// A finished symbol: every module is either light or dark.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QrMatrix {
    modules: [[Module; MAX_SIZE]; MAX_SIZE],
    version: Version,
    mask: Mask,
}

impl QrMatrix {
    /// Encodes `segments` at a fixed `version`, choosing the mask with the
    /// lowest penalty.
    pub fn generate(segments: &[&[u8]], version: Version, ec: ErrorCorrectLv) -> Result<Self, QrError> {
        Self::from_data(&crate::encode::encode(segments, version, ec)?, version, ec)
    }

    /// Like [`QrMatrix::generate`], but with the mask given by the caller.
    pub fn with_mask(segments: &[&[u8]], version: Version, ec: ErrorCorrectLv, mask: Mask) -> Result<Self, QrError> {
        let data = crate::encode::encode(segments, version, ec)?;
        let codewords = structure::structure(&data, version, ec)?;

        Ok(build(version, ec, &codewords, mask, false))
    }

    /// Builds the symbol from already padded data codewords.
    pub fn from_data(data: &[u8], version: Version, ec: ErrorCorrectLv) -> Result<Self, QrError> {
        let codewords = structure::structure(data, version, ec)?;
        let mask = best_mask(version, ec, &codewords);

        Ok(build(version, ec, &codewords, mask, false))
    }

    pub fn size(&self) -> usize {
        self.version.size()
    }

    pub fn version(&self) -> Version {
        self.version
    }

    pub fn mask(&self) -> Mask {
        self.mask
    }

    pub fn module(&self, row: usize, col: usize) -> Result<Module, QrError> {
        let size = self.size();
        if row >= size || col >= size {
            return Err(QrError::InvalidModuleAccess { row, col, size });
        }

        Ok(self.modules[row][col])
    }

    pub fn is_dark(&self, row: usize, col: usize) -> Result<bool, QrError> {
        self.module(row, col).map(Module::is_dark)
    }

    /// Unchecked lookup for callers iterating over `0..size`.
    pub(crate) fn dark(&self, row: usize, col: usize) -> bool {
        self.modules[row][col].is_dark()
    }

    /// Total score of the four penalty rules, lower is better.
    pub fn penalty(&self) -> usize {
        self.run_penalty() + self.block_penalty() + self.finder_like_penalty() + self.balance_penalty()
    }

    /// Same colour runs of 5 or more in rows and columns.
    fn run_penalty(&self) -> usize {
        let size = self.size();
        (0..size)
            .map(|i| line_runs((0..size).map(|j| self.dark(i, j))) + line_runs((0..size).map(|j| self.dark(j, i))))
            .sum()
    }

    /// Uniform 2x2 blocks, overlapping ones counted separately.
    fn block_penalty(&self) -> usize {
        let size = self.size();
        let mut penalty = 0;
        for row in 0..size - 1 {
            for col in 0..size - 1 {
                let c = self.dark(row, col);
                if c == self.dark(row, col + 1) && c == self.dark(row + 1, col) && c == self.dark(row + 1, col + 1) {
                    penalty += PENALTY_BLOCK;
                }
            }
        }
        penalty
    }

    /// 1:1:3:1:1 finder lookalikes in rows and columns.
    fn finder_like_penalty(&self) -> usize {
        let size = self.size();
        let mut penalty = 0;
        for i in 0..size {
            for j in 0..=size - FINDER_LIKE.len() {
                if FINDER_LIKE.iter().enumerate().all(|(k, c)| self.dark(i, j + k) == *c) {
                    penalty += PENALTY_FINDER_LIKE;
                }
                if FINDER_LIKE.iter().enumerate().all(|(k, c)| self.dark(j + k, i) == *c) {
                    penalty += PENALTY_FINDER_LIKE;
                }
            }
        }
        penalty
    }

    /// Every full 5% the dark share strays from half costs 10.
    fn balance_penalty(&self) -> usize {
        let size = self.size();
        let total = size * size;
        let dark = (0..size)
            .map(|row| (0..size).filter(|col| self.dark(row, *col)).count())
            .sum::<usize>();
        PENALTY_BALANCE * ((dark * 100).abs_diff(total * 50) / (total * 5))
    }
}

fn line_runs(line: impl Iterator<Item = bool>) -> usize {
    let cost = |run: usize| if run >= 5 { PENALTY_RUN + run - 5 } else { 0 };

    let mut penalty = 0;
    let mut color = None;
    let mut run = 0;
    for c in line {
        if color == Some(c) {
            run += 1;
        } else {
            penalty += cost(run);
            color = Some(c);
            run = 1;
        }
    }

    penalty + cost(run)
}

struct UnfinishedMatrix {
    modules: [[Module; MAX_SIZE]; MAX_SIZE],
    size: usize,
}

impl UnfinishedMatrix {
    fn new(size: usize) -> Self {
        Self {
            modules: [[Module::Unset; MAX_SIZE]; MAX_SIZE],
            size,
        }
    }

    fn get(&self, row: usize, col: usize) -> Module {
        self.modules[row][col]
    }

    /// Writes the module unless something is already there.
    fn set(&mut self, row: usize, col: usize, dark: bool) {
        if self.modules[row][col] == Module::Unset {
            self.modules[row][col] = dark.into();
        }
    }

    fn put(&mut self, row: usize, col: usize, dark: bool) {
        self.modules[row][col] = dark.into();
    }

    fn set_hline(&mut self, row: usize, col: usize, dist: usize, dark: bool) {
        for col in col..col + dist {
            self.set(row, col, dark);
        }
    }

    fn set_vline(&mut self, row: usize, col: usize, dist: usize, dark: bool) {
        for row in row..row + dist {
            self.set(row, col, dark);
        }
    }

    fn set_filled_box(&mut self, row: usize, col: usize, height: usize, width: usize, dark: bool) {
        for row in row..row + height {
            self.set_hline(row, col, width, dark);
        }
    }

    fn set_outline_box(&mut self, row: usize, col: usize, height: usize, width: usize, dark: bool) {
        self.set_hline(row, col, width, dark);
        self.set_hline(row + height - 1, col, width, dark);
        self.set_vline(row, col, height, dark);
        self.set_vline(row, col + width - 1, height, dark);
    }

    fn finish(self, version: Version, mask: Mask) -> QrMatrix {
        let mut modules = self.modules;
        for row in modules.iter_mut().take(self.size) {
            for module in row.iter_mut().take(self.size) {
                if *module == Module::Unset {
                    *module = Module::Light;
                }
            }
        }

        QrMatrix { modules, version, mask }
    }
}

/// Lays out one complete symbol. In `test` mode the format and version
/// information are left light, which is how mask candidates are scored.
fn build(version: Version, ec: ErrorCorrectLv, codewords: &[u8], mask: Mask, test: bool) -> QrMatrix {
    let size = version.size();
    let mut mat = UnfinishedMatrix::new(size);

    place_finder(&mut mat, 0, 0);
    place_finder(&mut mat, 0, size - 7);
    place_finder(&mut mat, size - 7, 0);

    let positions = ALIGN_LOCATIONS[version.version() as usize - 1];
    for row in positions {
        for col in positions {
            place_alignment(&mut mat, *row, *col);
        }
    }

    // timing
    for i in 8..size - 8 {
        mat.set(i, 6, i % 2 == 0);
        mat.set(6, i, i % 2 == 0);
    }

    place_format(&mut mat, ec, mask, test);

    // dark module
    mat.put(size - 8, 8, true);

    if version.version() >= 7 {
        place_version(&mut mat, version, test);
    }

    place_data(&mut mat, codewords, mask);

    mat.finish(version, mask)
}

fn place_finder(mat: &mut UnfinishedMatrix, row: usize, col: usize) {
    mat.set_outline_box(row, col, 7, 7, true);
    mat.set_outline_box(row + 1, col + 1, 5, 5, false);
    mat.set_filled_box(row + 2, col + 2, 3, 3, true);

    // separator on the inner sides
    let sep_row = if row == 0 { 7 } else { row - 1 };
    let sep_col = if col == 0 { 7 } else { col - 1 };
    mat.set_hline(sep_row, col, 7, false);
    mat.set_vline(row, sep_col, 7, false);
    mat.set(sep_row, sep_col, false);
}

fn place_alignment(mat: &mut UnfinishedMatrix, row: usize, col: usize) {
    if mat.get(row, col) != Module::Unset {
        return;
    }

    mat.set_outline_box(row - 2, col - 2, 5, 5, true);
    mat.set_outline_box(row - 1, col - 1, 3, 3, false);
    mat.set(row, col, true);
}

fn place_format(mat: &mut UnfinishedMatrix, ec: ErrorCorrectLv, mask: Mask, test: bool) {
    let size = mat.size;
    let bits = format_bits(ec, mask);

    for i in 0..15 {
        let dark = !test && (bits >> i) & 1 == 1;

        // column 8, top then bottom
        let row = match i {
            0..6 => i,
            6..8 => i + 1,
            _ => size - 15 + i,
        };
        mat.put(row, 8, dark);

        // row 8, right then left
        let col = match i {
            0..8 => size - i - 1,
            8 => 7,
            _ => 14 - i,
        };
        mat.put(8, col, dark);
    }
}

fn place_version(mat: &mut UnfinishedMatrix, version: Version, test: bool) {
    let size = mat.size;
    let bits = version_bits(version);

    for i in 0..18 {
        let dark = !test && (bits >> i) & 1 == 1;
        mat.put(i / 3, i % 3 + size - 11, dark);
        mat.put(i % 3 + size - 11, i / 3, dark);
    }
}

/// Zig-zags over column pairs from the bottom right, skipping the vertical
/// timing column, and fills every free module with the next codeword bit.
fn place_data(mat: &mut UnfinishedMatrix, codewords: &[u8], mask: Mask) {
    let size = mat.size;
    let mut bits = codewords.iter().flat_map(|b| (0..8).rev().map(move |i| (b >> i) & 1 == 1));

    let mut right = size - 1;
    let mut upward = true;
    loop {
        if right == 6 {
            right -= 1;
        }

        for step in 0..size {
            let row = if upward { size - 1 - step } else { step };
            for col in [right, right - 1] {
                if mat.get(row, col) != Module::Unset {
                    continue;
                }

                // remainder bits are light before masking
                let dark = bits.next().unwrap_or(false) ^ mask.inverts(row, col);
                mat.put(row, col, dark);
            }
        }

        if right < 2 {
            break;
        }
        right -= 2;
        upward = !upward;
    }
}

fn best_mask(version: Version, ec: ErrorCorrectLv, codewords: &[u8]) -> Mask {
    let (penalty, mask) = Mask::ALL
        .par_iter()
        .map(|mask| {
            let penalty = build(version, ec, codewords, *mask, true).penalty();
            tracing::trace!(mask = mask.0, penalty, "mask candidate");
            (penalty, *mask)
        })
        .reduce(|| (usize::MAX, Mask(0)), |a, b| a.min(b));

    tracing::debug!(mask = mask.0, penalty, "selected mask");
    mask
}

fn bch_digit(data: u32) -> u32 {
    u32::BITS - data.leading_zeros()
}

fn bch_remainder(value: u32, generator: u32) -> u32 {
    let mut d = value;
    while bch_digit(d) >= bch_digit(generator) {
        d ^= generator << (bch_digit(d) - bch_digit(generator));
    }
    d
}

/// 15-bit format information for `ec` and `mask`, masked.
pub fn format_bits(ec: ErrorCorrectLv, mask: Mask) -> u32 {
    let data = ((ec.format_bits() as u32) << 3) | mask.0 as u32;
    ((data << 10) | bch_remainder(data << 10, FORMAT_GENERATOR)) ^ FORMAT_MASK
}

/// 18-bit version information.
pub fn version_bits(version: Version) -> u32 {
    let data = version.version() as u32;
    (data << 12) | bch_remainder(data << 12, VERSION_GENERATOR)
}

static ALIGN_LOCATIONS: [&[usize]; 10] = [
    &[],
    &[6, 18],
    &[6, 22],
    &[6, 26],
    &[6, 30],
    &[6, 34],
    &[6, 22, 38],
    &[6, 24, 42],
    &[6, 26, 46],
    &[6, 28, 50],
];

#[cfg(test)]
fn test_matrix(data: &[u8]) -> QrMatrix {
    crate::encode(data).unwrap()
}

#[test]
fn test_format_bits() {
    let expected = [
        0b101010000010010,
        0b101000100100101,
        0b101111001111100,
        0b101101101001011,
        0b100010111111001,
        0b100000011001110,
        0b100111110010111,
        0b100101010100000,
    ];
    for (mask, expected) in Mask::ALL.into_iter().zip(expected) {
        assert_eq!(format_bits(ErrorCorrectLv::M, mask), expected);
    }
}

#[test]
fn test_version_bits() {
    let expected = [0x07c94, 0x085bc, 0x09a99, 0x0a4d3];
    for (version, expected) in (7..=10).zip(expected) {
        assert_eq!(version_bits(Version::new(version).unwrap()), expected);
    }
}

#[test]
fn test_mask_new() {
    assert_eq!(Mask::new(7).unwrap().pattern(), 7);
    assert_eq!(Mask::new(8), Err(QrError::InvalidMaskPattern(8)));
}

#[test]
fn test_mask_predicates() {
    let m = |p| Mask::new(p).unwrap();

    assert!(m(0).inverts(0, 0) && !m(0).inverts(0, 1));
    assert!(m(1).inverts(2, 5) && !m(1).inverts(3, 5));
    assert!(m(2).inverts(5, 3) && !m(2).inverts(5, 4));
    assert!(m(3).inverts(1, 2) && !m(3).inverts(1, 1));
    assert!(m(4).inverts(0, 0) && !m(4).inverts(2, 0));
    assert!(m(5).inverts(0, 7) && !m(5).inverts(1, 1));
    assert!(m(6).inverts(2, 3) && !m(6).inverts(1, 4));
    assert!(m(7).inverts(0, 0) && !m(7).inverts(0, 1));

    assert!(Mask::ALL.iter().all(|m| m.inverts(0, 0)));
}

#[test]
fn test_all_modules_set() {
    for data in [&b""[..], b"hello", &[0xa5; 100], &[0x3c; 213]] {
        let qr = test_matrix(data);
        for row in 0..qr.size() {
            for col in 0..qr.size() {
                assert_ne!(qr.module(row, col).unwrap(), Module::Unset);
            }
        }
    }
}

#[test]
fn test_dark_module_for_every_mask() {
    for mask in Mask::ALL {
        let qr = QrMatrix::with_mask(&[b"dark"], Version::MIN, ErrorCorrectLv::M, mask).unwrap();
        assert_eq!(qr.mask(), mask);
        assert!(qr.is_dark(qr.size() - 8, 8).unwrap());
    }
}

#[test]
fn test_finder_patterns() {
    let qr = test_matrix(b"finder");
    let size = qr.size();

    for (top, left) in [(0, 0), (0, size - 7), (size - 7, 0)] {
        for r in 0..7 {
            for c in 0..7 {
                let ring = r.min(c).min(6 - r).min(6 - c);
                assert_eq!(qr.is_dark(top + r, left + c).unwrap(), ring != 1, "({r}, {c})");
            }
        }
    }

    // separators
    for i in 0..8 {
        assert!(!qr.is_dark(7, i).unwrap());
        assert!(!qr.is_dark(i, 7).unwrap());
        assert!(!qr.is_dark(7, size - 1 - i).unwrap());
        assert!(!qr.is_dark(size - 8, i).unwrap());
    }
}

#[test]
fn test_timing_patterns() {
    let qr = test_matrix(&[0; 100]);
    for i in 8..qr.size() - 8 {
        assert_eq!(qr.is_dark(6, i).unwrap(), i % 2 == 0);
        assert_eq!(qr.is_dark(i, 6).unwrap(), i % 2 == 0);
    }
}

#[test]
fn test_alignment_patterns() {
    let version = Version::new(7).unwrap();
    let qr = QrMatrix::generate(&[b"align"], version, ErrorCorrectLv::M).unwrap();

    for (row, col) in [(22, 22), (6, 22), (22, 6), (38, 38), (22, 38), (38, 22)] {
        assert!(qr.is_dark(row, col).unwrap());
        assert!(!qr.is_dark(row - 1, col - 1).unwrap());
        assert!(!qr.is_dark(row + 1, col).unwrap());
        assert!(qr.is_dark(row - 2, col + 2).unwrap());
        assert!(qr.is_dark(row + 2, col).unwrap());
    }
}

#[test]
fn test_format_info_placed_twice() {
    let qr = test_matrix(b"format");
    let size = qr.size();
    let bits = format_bits(ErrorCorrectLv::M, qr.mask());

    let top = [(0, 8), (1, 8), (2, 8), (3, 8), (4, 8), (5, 8), (7, 8), (8, 8), (8, 7), (8, 5), (8, 4), (8, 3), (8, 2), (8, 1), (8, 0)];
    for (i, (row, col)) in top.into_iter().enumerate() {
        assert_eq!(qr.is_dark(row, col).unwrap(), (bits >> i) & 1 == 1);
    }
    for i in 0..8 {
        assert_eq!(qr.is_dark(8, size - 1 - i).unwrap(), (bits >> i) & 1 == 1);
    }
    for i in 8..15 {
        assert_eq!(qr.is_dark(size - 15 + i, 8).unwrap(), (bits >> i) & 1 == 1);
    }
}

#[test]
fn test_version_info_placed_twice() {
    let version = Version::new(9).unwrap();
    let qr = QrMatrix::generate(&[b"version"], version, ErrorCorrectLv::M).unwrap();
    let size = qr.size();
    let bits = version_bits(version);

    for i in 0..18 {
        let dark = (bits >> i) & 1 == 1;
        assert_eq!(qr.is_dark(i / 3, i % 3 + size - 11).unwrap(), dark);
        assert_eq!(qr.is_dark(i % 3 + size - 11, i / 3).unwrap(), dark);
    }
}

#[test]
fn test_picks_lowest_penalty() {
    let qr = test_matrix(b"https://example.com/penalty");
    let data = crate::encode::encode(&[b"https://example.com/penalty"], qr.version(), ErrorCorrectLv::M).unwrap();
    let codewords = structure::structure(&data, qr.version(), ErrorCorrectLv::M).unwrap();

    let penalties = Mask::ALL
        .map(|mask| build(qr.version(), ErrorCorrectLv::M, &codewords, mask, true).penalty());
    let best = penalties.iter().min().unwrap();

    assert_eq!(penalties[qr.mask().pattern() as usize], *best);
    // ties go to the lowest pattern
    assert_eq!(penalties.iter().position(|p| p == best).unwrap(), qr.mask().pattern() as usize);
}

#[test]
fn test_deterministic() {
    assert_eq!(test_matrix(b"same input"), test_matrix(b"same input"));
}

#[test]
fn test_out_of_range() {
    let qr = test_matrix(b"x");
    assert_eq!(qr.module(21, 0), Err(QrError::InvalidModuleAccess { row: 21, col: 0, size: 21 }));
    assert!(qr.is_dark(0, 21).is_err());
    assert!(qr.is_dark(20, 20).is_ok());
}

#[cfg(test)]
fn hand_made(dark: impl Fn(usize, usize) -> bool) -> QrMatrix {
    let mut modules = [[Module::Light; MAX_SIZE]; MAX_SIZE];
    for (row, line) in modules.iter_mut().enumerate().take(21) {
        for (col, module) in line.iter_mut().enumerate().take(21) {
            *module = dark(row, col).into();
        }
    }

    QrMatrix { modules, version: Version::MIN, mask: Mask(0) }
}

#[test]
fn test_line_runs() {
    assert_eq!(line_runs([true; 4].into_iter()), 0);
    assert_eq!(line_runs([true; 5].into_iter()), 3);
    assert_eq!(line_runs([false; 7].into_iter()), 5);
    assert_eq!(line_runs([true, true, true, true, true, false, false, false, false, false, false].into_iter()), 7);
}

#[test]
fn test_penalty_checkerboard() {
    let mat = hand_made(|row, col| (row + col) % 2 == 0);

    // 221 of 441 dark is under 5% away from half
    assert_eq!(mat.run_penalty(), 0);
    assert_eq!(mat.block_penalty(), 0);
    assert_eq!(mat.finder_like_penalty(), 0);
    assert_eq!(mat.balance_penalty(), 0);
    assert_eq!(mat.penalty(), 0);
}

#[test]
fn test_penalty_uniform() {
    let light = hand_made(|_, _| false);

    // 42 lines of 21, 400 blocks
    assert_eq!(light.run_penalty(), 42 * 19);
    assert_eq!(light.block_penalty(), 400 * 3);
    assert_eq!(light.finder_like_penalty(), 0);
    assert_eq!(light.balance_penalty(), 100);
    assert_eq!(light.penalty(), 798 + 1200 + 100);

    assert_eq!(hand_made(|_, _| true).penalty(), light.penalty());
}

#[test]
fn test_penalty_finder_like_row() {
    // 1011101 at the start of row 0, light elsewhere
    let mat = hand_made(|row, col| row == 0 && col < 7 && FINDER_LIKE[col]);

    // rows 1..21: 20 * 19, row 0: tail of 14 light costs 12,
    // 5 columns starting dark cost 18 each, 16 light columns 19 each
    assert_eq!(mat.run_penalty(), 380 + 12 + 5 * 18 + 16 * 19);
    // 19 * 20 blocks below row 0, plus 13 light pairs in row 0
    assert_eq!(mat.block_penalty(), (380 + 13) * 3);
    assert_eq!(mat.finder_like_penalty(), 40);
    // 5 of 441 dark: 48.9% off, 9 full steps
    assert_eq!(mat.balance_penalty(), 90);
    assert_eq!(mat.penalty(), 786 + 1179 + 40 + 90);
}

#[test]
fn test_penalty_finder_like_column() {
    let mat = hand_made(|row, col| col == 20 && (7..14).contains(&row) && FINDER_LIKE[row - 7]);

    assert_eq!(mat.finder_like_penalty(), 40);
    assert_eq!(mat.balance_penalty(), 90);
}

#[test]
fn test_remainder_modules_are_masked() {
    // version 2 holds 352 codeword bits in 359 data modules, the last 7 sit
    // at the bottom of the leftmost column pair
    let remainder = [(13, 0), (14, 1), (14, 0), (15, 1), (15, 0), (16, 1), (16, 0)];
    let version = Version::new(2).unwrap();

    for mask in Mask::ALL {
        let qr = QrMatrix::with_mask(&[b"remainder bits"], version, ErrorCorrectLv::M, mask).unwrap();
        for (row, col) in remainder {
            assert_eq!(qr.is_dark(row, col).unwrap(), mask.inverts(row, col), "mask {} at ({row}, {col})", mask.0);
        }
    }
}
