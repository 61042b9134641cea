use image::{Rgba, RgbaImage};
use sheet_bars::render::{OVERLAY_ALPHA, apply_overlay, build_overlay};

fn write_solid_png(path: &std::path::Path, width: u32, height: u32, pixel: Rgba<u8>) {
    RgbaImage::from_pixel(width, height, pixel)
        .save(path)
        .expect("write fixture png");
}

fn read_png(path: &std::path::Path) -> RgbaImage {
    image::open(path).expect("open png").to_rgba8()
}

#[test]
fn overlay_darkens_inset_region_only() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("white.png");
    write_solid_png(&path, 400, 300, Rgba([255, 255, 255, 255]));

    let written = apply_overlay(&path, 300, 400).expect("overlay applied");
    assert_eq!(written, path);

    let image = read_png(&path);
    assert_eq!(image.dimensions(), (400, 300));
    for (x, y) in [(100, 50), (300, 250), (200, 150)] {
        let pixel = image.get_pixel(x, y);
        assert!(pixel[0] < 255 && pixel[0] > 190, "({x}, {y}) = {pixel:?}");
        assert_eq!(pixel[3], 255);
    }
    for (x, y) in [(99, 50), (100, 49), (301, 250), (300, 251), (0, 0), (399, 299)] {
        assert_eq!(image.get_pixel(x, y), &Rgba([255, 255, 255, 255]), "({x}, {y})");
    }
}

#[test]
fn applying_overlay_twice_darkens_twice() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("twice.png");
    write_solid_png(&path, 400, 300, Rgba([255, 255, 255, 255]));

    apply_overlay(&path, 300, 400).expect("first overlay");
    let once = read_png(&path).get_pixel(200, 150)[0];
    apply_overlay(&path, 300, 400).expect("second overlay");
    let twice = read_png(&path).get_pixel(200, 150)[0];

    assert!(twice < once, "second pass must darken again: {once} -> {twice}");
}

#[test]
fn transparent_background_gets_translucent_black() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("clear.png");
    write_solid_png(&path, 300, 200, Rgba([0, 0, 0, 0]));

    apply_overlay(&path, 200, 300).expect("overlay applied");
    let image = read_png(&path);
    let alpha = image.get_pixel(150, 100)[3];
    assert!((50..=52).contains(&alpha), "alpha = {alpha}");
    assert_eq!(image.get_pixel(10, 10)[3], 0);
}

#[test]
fn overlay_rectangle_is_clipped_to_the_image() {
    let overlay = build_overlay(200, 120, 1440, 2560);
    assert_eq!(overlay.get_pixel(199, 119)[3], OVERLAY_ALPHA);
    assert_eq!(overlay.get_pixel(99, 119)[3], 0);
}

#[test]
fn tiny_dimensions_produce_no_overlay() {
    let overlay = build_overlay(80, 40, 40, 80);
    assert!(overlay.pixels().all(|pixel| pixel[3] == 0));
}

#[test]
fn missing_image_is_reported() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("missing.png");
    assert!(matches!(
        apply_overlay(&path, 100, 100),
        Err(sheet_bars::ChartError::ImageIo { .. })
    ));
}
