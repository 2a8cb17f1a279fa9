use miniqr::{ErrorCorrectLv, Mask, Module, QrError, QrMatrix, Version};

fn assert_finished(mat: &QrMatrix) {
    for row in 0..mat.size() {
        for col in 0..mat.size() {
            assert_ne!(mat.module(row, col).unwrap(), Module::Unset, "({row}, {col})");
        }
    }
}

#[test]
fn test_capacity_boundaries() {
    // largest byte payload per version at level M
    let limits = [14, 26, 42, 62, 84, 106, 122, 152, 180, 213];

    for (version, limit) in Version::all().zip(limits) {
        let fits = miniqr::encode(&vec![b'x'; limit]).unwrap();
        assert_eq!(fits.version(), version);
        assert_eq!(fits.size(), version.size());

        let bigger = miniqr::encode(&vec![b'x'; limit + 1]);
        if version < Version::MAX {
            assert_eq!(bigger.unwrap().version().version(), version.version() + 1);
        } else {
            assert_eq!(bigger, Err(QrError::CapacityExceeded { bits: 1732, capacity: 1728 }));
        }
    }
}

#[test]
fn test_segments_share_capacity() {
    assert_eq!(miniqr::encode_segments(&[&[1; 6], &[2; 7]]).unwrap().version(), Version::MIN);
    assert_eq!(miniqr::encode_segments(&[&[1; 7], &[2; 7]]).unwrap().version().version(), 2);
}

#[test]
fn test_empty_payload() {
    let mat = miniqr::encode(b"").unwrap();

    assert_eq!(mat.size(), 21);
    assert_finished(&mat);
    assert!(mat.is_dark(13, 8).unwrap());
}

#[test]
fn test_single_letter() {
    let mat = miniqr::encode(b"A").unwrap();

    assert_eq!(mat.version(), Version::MIN);
    assert!(mat.is_dark(mat.size() - 8, 8).unwrap());
    assert_eq!(mat, miniqr::encode(b"A").unwrap());
}

#[test]
fn test_module_count() {
    for version in Version::all() {
        let mat = QrMatrix::generate(&[b"size"], version, ErrorCorrectLv::M).unwrap();
        assert_eq!(mat.size(), 4 * version.version() as usize + 17);
        assert_finished(&mat);
    }
}

#[test]
fn test_dark_module() {
    for version in [1, 6, 7, 10] {
        let version = Version::new(version).unwrap();
        for mask in Mask::ALL {
            let mat = QrMatrix::with_mask(&[b"dark module"], version, ErrorCorrectLv::M, mask).unwrap();
            assert_eq!(mat.module(mat.size() - 8, 8), Ok(Module::Dark));
        }
    }
}

#[test]
fn test_deterministic() {
    let payload = b"the same bytes every time";
    let first = miniqr::encode(payload).unwrap();

    for _ in 0..4 {
        let again = miniqr::encode(payload).unwrap();
        assert_eq!(again, first);
        assert_eq!(again.mask(), first.mask());
    }
}

#[test]
fn test_fixed_mask_matches_search() {
    let payload: &[u8] = b"penalty comparison across all eight masks";
    let chosen = miniqr::encode(payload).unwrap();

    let rebuilt = QrMatrix::with_mask(&[payload], chosen.version(), ErrorCorrectLv::M, chosen.mask()).unwrap();
    assert_eq!(rebuilt, chosen);

    for mask in Mask::ALL.into_iter().filter(|m| *m != chosen.mask()) {
        let other = QrMatrix::with_mask(&[payload], chosen.version(), ErrorCorrectLv::M, mask).unwrap();
        assert_ne!(other, chosen);
    }
}

#[test]
fn test_errors() {
    let mat = miniqr::encode(b"errors").unwrap();

    assert_eq!(mat.module(0, 21), Err(QrError::InvalidModuleAccess { row: 0, col: 21, size: 21 }));
    assert_eq!(Mask::new(9), Err(QrError::InvalidMaskPattern(9)));
    assert_eq!(Version::new(11), Err(QrError::UnsupportedVersion(11)));
    assert!(matches!(
        QrMatrix::generate(&[&[0; 30]], Version::MIN, ErrorCorrectLv::M),
        Err(QrError::CapacityExceeded { .. }),
    ));
}

#[test]
fn test_from_data_length() {
    let v2 = Version::new(2).unwrap();

    // unpadded codewords are a caller error, not an overflow
    assert_eq!(
        QrMatrix::from_data(&[0x40, 0x10], v2, ErrorCorrectLv::M),
        Err(QrError::InvalidDataLength { len: 2, expected: 28 }),
    );
    assert_eq!(
        QrMatrix::from_data(&[0; 29], v2, ErrorCorrectLv::M),
        Err(QrError::CapacityExceeded { bits: 232, capacity: 224 }),
    );
    assert_eq!(QrMatrix::from_data(&[0; 28], v2, ErrorCorrectLv::M).unwrap().size(), 25);
}
