//! GF(256) arithmetic over the QR field polynomial `x^8 + x^4 + x^3 + x^2 + 1`.

use crate::QrError;

include!(concat!(env!("OUT_DIR"), "/gf_tables.rs"));

/// `α^n`, with `n` reduced modulo 255 so negative and large exponents work.
pub fn exp(n: isize) -> u8 {
    EXP[n.rem_euclid(255) as usize]
}

/// Discrete logarithm of a nonzero element.
pub fn log(n: u8) -> Result<usize, QrError> {
    if n == 0 {
        return Err(QrError::InvalidFieldOperand);
    }

    Ok(LOG[n as usize] as usize)
}

pub fn mul(a: u8, b: u8) -> u8 {
    if a == 0 || b == 0 {
        return 0;
    }

    EXP[(LOG[a as usize] as usize + LOG[b as usize] as usize) % 255]
}

#[test]
fn test_tables() {
    assert_eq!(&EXP[..10], &[1, 2, 4, 8, 16, 32, 64, 128, 29, 58]);
    assert_eq!(EXP[255], 1);

    for i in 0..255 {
        assert_eq!(log(exp(i)).unwrap(), i as usize);
    }
}

#[test]
fn test_exp_wraps() {
    assert_eq!(exp(255), 1);
    assert_eq!(exp(256), 2);
    assert_eq!(exp(-1), EXP[254]);
    assert_eq!(exp(-255), 1);
}

#[test]
fn test_log_zero() {
    assert_eq!(log(0), Err(QrError::InvalidFieldOperand));
}

#[test]
fn test_mul() {
    assert_eq!(mul(0, 200), 0);
    assert_eq!(mul(200, 0), 0);
    assert_eq!(mul(1, 173), 173);
    assert_eq!(mul(2, 128), 29);
    assert_eq!(mul(exp(100), exp(200)), exp(300));

    for a in 1..=255_u8 {
        assert_eq!(mul(a, exp(255 - log(a).unwrap() as isize)), 1);
    }
}
