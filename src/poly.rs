//! Polynomials over GF(256), highest degree first.

use crate::{QrError, gf};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Polynomial {
    coeffs: Vec<u8>,
}

impl Polynomial {
    /// Strips leading zeros from `coeffs`, then appends `shift` zero
    /// coefficients (multiplication by `x^shift`).
    pub fn new(coeffs: &[u8], shift: usize) -> Self {
        let offset = coeffs.iter().position(|c| *c != 0).unwrap_or(coeffs.len());
        let mut num = Vec::with_capacity(coeffs.len() - offset + shift);
        num.extend_from_slice(&coeffs[offset..]);
        num.resize(coeffs.len() - offset + shift, 0);

        Self { coeffs: num }
    }

    /// Reed-Solomon generator `(x - α^0)(x - α^1)...(x - α^(degree-1))`.
    pub fn generator(degree: usize) -> Self {
        (0..degree).fold(Self::new(&[1], 0), |acc, i| {
            acc.multiply(&Self::new(&[1, gf::exp(i as isize)], 0))
        })
    }

    pub fn coeffs(&self) -> &[u8] {
        &self.coeffs
    }

    pub fn len(&self) -> usize {
        self.coeffs.len()
    }

    /// The zero polynomial has no coefficients at all.
    pub fn is_zero(&self) -> bool {
        self.coeffs.is_empty()
    }

    pub fn multiply(&self, other: &Self) -> Self {
        if self.is_zero() || other.is_zero() {
            return Self::new(&[], 0);
        }

        let mut num = vec![0_u8; self.len() + other.len() - 1];
        for (i, a) in self.coeffs.iter().enumerate() {
            for (j, b) in other.coeffs.iter().enumerate() {
                num[i + j] ^= gf::mul(*a, *b);
            }
        }

        Self::new(&num, 0)
    }

    /// Remainder of the long division by `divisor`.
    pub fn modulo(&self, divisor: &Self) -> Result<Self, QrError> {
        let lead_log = gf::log(divisor.coeffs.first().copied().unwrap_or(0))? as isize;

        let mut num = self.coeffs.clone();
        let mut start = 0;
        while num.len() - start >= divisor.len() {
            let lead = num[start];
            if lead != 0 {
                let ratio = gf::exp(gf::log(lead)? as isize - lead_log);
                for (n, d) in num[start..].iter_mut().zip(divisor.coeffs.iter()) {
                    *n ^= gf::mul(*d, ratio);
                }
            }

            // leading term is now zero
            start += 1;
        }

        Ok(Self::new(&num[start..], 0))
    }
}

#[test]
fn test_strip_and_shift() {
    let p = Polynomial::new(&[0, 0, 5, 0, 7], 3);
    assert_eq!(p.coeffs(), &[5, 0, 7, 0, 0, 0]);
    assert_eq!(p.len(), 6);

    assert!(Polynomial::new(&[0, 0], 0).is_zero());
}

#[test]
fn test_multiply() {
    // (x + 1)(x + 2) = x^2 + 3x + 2
    let p = Polynomial::new(&[1, 1], 0).multiply(&Polynomial::new(&[1, 2], 0));
    assert_eq!(p.coeffs(), &[1, 3, 2]);

    let q = Polynomial::new(&[3, 0, 9], 0);
    assert_eq!(q.multiply(&Polynomial::new(&[1], 0)), q);
    assert!(q.multiply(&Polynomial::new(&[], 0)).is_zero());
}

#[test]
fn test_generator() {
    // α-notation of the degree 10 generator: 0 251 67 46 61 118 70 64 94 32 45
    let expected = [0, 251, 67, 46, 61, 118, 70, 64, 94, 32, 45]
        .map(|e| gf::exp(e));
    assert_eq!(Polynomial::generator(10).coeffs(), &expected);
    assert_eq!(Polynomial::generator(0).coeffs(), &[1]);
}

#[test]
fn test_modulo_shorter_than_divisor() {
    let p = Polynomial::new(&[4, 5], 0);
    let g = Polynomial::generator(4);
    assert_eq!(p.modulo(&g).unwrap(), p);
}

#[test]
fn test_modulo_of_multiple_is_zero() {
    let a = Polynomial::new(&[17, 0, 236, 1, 99, 255, 3], 0);
    for degree in [7, 10, 16, 26] {
        let g = Polynomial::generator(degree);
        assert!(a.multiply(&g).modulo(&g).unwrap().is_zero());
    }
}

#[test]
fn test_modulo_by_zero() {
    let p = Polynomial::new(&[1, 2, 3], 0);
    assert_eq!(p.modulo(&Polynomial::new(&[0], 0)), Err(QrError::InvalidFieldOperand));
}

#[test]
fn test_long_remainder() {
    // a long dividend must not grow the stack
    let data = (0..4000).map(|i| (i * 7 + 1) as u8).collect::<Vec<_>>();
    let g = Polynomial::generator(26);
    let rem = Polynomial::new(&data, 26).modulo(&g).unwrap();
    assert!(rem.len() < g.len());
}
