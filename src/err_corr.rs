use crate::{QrError, poly::Polynomial};

/// Reed-Solomon check bytes for one block: the remainder of
/// `data(x) * x^ec_len` by the degree `ec_len` generator, left-padded with
/// zeros to exactly `ec_len` bytes.
pub fn generate_ec(data: &[u8], ec_len: usize) -> Result<Vec<u8>, QrError> {
    let generator = Polynomial::generator(ec_len);
    let rem = Polynomial::new(data, ec_len).modulo(&generator)?;

    let mut ec = vec![0_u8; ec_len];
    ec[ec_len - rem.len()..].copy_from_slice(rem.coeffs());

    Ok(ec)
}

#[test]
fn test_generate_ec() {
    // 1-M "HELLO WORLD"
    let data = [32, 91, 11, 120, 209, 114, 220, 77, 67, 64, 236, 17, 236, 17, 236, 17];
    assert_eq!(
        generate_ec(&data, 10).unwrap(),
        vec![196, 35, 39, 119, 235, 215, 231, 226, 93, 23],
    );
}

#[test]
fn test_zero_data() {
    assert_eq!(generate_ec(&[0; 16], 10).unwrap(), vec![0; 10]);
}

#[test]
fn test_codeword_is_multiple_of_generator() {
    let data = (0..43).map(|i| (i * 37 + 11) as u8).collect::<Vec<_>>();
    let ec = generate_ec(&data, 26).unwrap();

    let mut codeword = data.clone();
    codeword.extend_from_slice(&ec);
    let rem = Polynomial::new(&codeword, 0).modulo(&Polynomial::generator(26)).unwrap();
    assert!(rem.is_zero());
}
