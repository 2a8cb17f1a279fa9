//! Renders symbols to pixels and reads them back with an independent decoder.

use miniqr::{ErrorCorrectLv, Mask, QrMatrix, Version};

const SCALE: usize = 4;
const QUIET: usize = 4;

fn scan(mat: &QrMatrix) -> (rqrr::MetaData, String) {
    let side = (mat.size() + QUIET * 2) * SCALE;
    let mut image = rqrr::PreparedImage::prepare_from_greyscale(side, side, |x, y| {
        let (col, row) = (x / SCALE, y / SCALE);
        let inside = (QUIET..QUIET + mat.size()).contains(&col) && (QUIET..QUIET + mat.size()).contains(&row);
        if inside && mat.is_dark(row - QUIET, col - QUIET).unwrap() { 0 } else { 255 }
    });

    let grids = image.detect_grids();
    assert_eq!(grids.len(), 1, "expected exactly one symbol");
    grids[0].decode().unwrap()
}

#[test]
fn test_scan_short_text() {
    let mat = miniqr::encode(b"HELLO WORLD").unwrap();
    let (meta, content) = scan(&mat);

    assert_eq!(content, "HELLO WORLD");
    assert_eq!(meta.version.0, 1);
    assert_eq!(meta.mask, mat.mask().pattern() as u16);
}

#[test]
fn test_scan_url() {
    let url = "https://example.com/some/rather/long/path?with=query&and=more#fragment";
    let mat = miniqr::encode(url.as_bytes()).unwrap();
    let (meta, content) = scan(&mat);

    assert_eq!(content, url);
    assert_eq!(meta.version.0, mat.version().version() as usize);
}

#[test]
fn test_scan_every_version() {
    // payload sizes landing in versions 1 through 10
    for len in [10, 20, 40, 60, 80, 100, 120, 150, 170, 210] {
        let text = (0..len).map(|i| (b'a' + (i % 26) as u8) as char).collect::<String>();
        let mat = miniqr::encode(text.as_bytes()).unwrap();
        let (meta, content) = scan(&mat);

        assert_eq!(content, text);
        assert_eq!(meta.version.0, mat.version().version() as usize);
    }
}

#[test]
fn test_scan_every_mask() {
    for mask in Mask::ALL {
        let mat = QrMatrix::with_mask(&[b"mask check"], Version::new(2).unwrap(), ErrorCorrectLv::M, mask).unwrap();
        let (meta, content) = scan(&mat);

        assert_eq!(content, "mask check");
        assert_eq!(meta.mask, mask.pattern() as u16);
    }
}

#[test]
fn test_scan_utf8() {
    let text = "héllo wörld, ぐるぐる";
    let mat = miniqr::encode(text.as_bytes()).unwrap();

    assert_eq!(scan(&mat).1, text);
}

#[test]
fn test_scan_segments() {
    let mat = miniqr::encode_segments(&[b"first ", b"second"]).unwrap();

    assert_eq!(scan(&mat).1, "first second");
}
