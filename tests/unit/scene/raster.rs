use super::*;

const SQUARE: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" width="4" height="2" viewBox="0 0 4 2"><rect x="0" y="0" width="2" height="2" fill="#ff0000"/></svg>"##;

#[test]
fn rasterizes_at_natural_size() {
    let tree = parse_svg(SQUARE).unwrap();
    let (w, h, data) = rasterize(&tree).unwrap();
    assert_eq!((w, h), (4, 2));
    assert_eq!(data.len(), 4 * 2 * 4);
    assert_eq!(&data[0..4], &[255, 0, 0, 255]);
    // Right half is transparent.
    assert_eq!(data[3 * 4 + 3], 0);
}

#[test]
fn rejects_malformed_markup() {
    let err = parse_svg("<svg").unwrap_err();
    assert!(matches!(err, ContribError::Other(_)));
}

#[test]
fn writes_png_file() {
    let path = std::path::PathBuf::from("target")
        .join("unit_raster")
        .join("square.png");
    let _ = std::fs::remove_file(&path);
    rasterize_png(SQUARE, &path).unwrap();
    let bytes = std::fs::read(&path).unwrap();
    assert_eq!(&bytes[1..4], b"PNG");
}
