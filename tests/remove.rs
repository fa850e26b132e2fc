use image::{Rgba, RgbaImage};
use remove_bg::color::TRANSPARENT;
use remove_bg::error::Error;
use remove_bg::image_io::{load_rgba, save_png};
use remove_bg::remove::{clean_file, clean_image, Options};

const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);
const BLUE: Rgba<u8> = Rgba([20, 40, 200, 255]);

fn sprite() -> RgbaImage {
    let mut img = RgbaImage::from_pixel(10, 10, WHITE);
    for y in 3..7 {
        for x in 2..8 {
            img.put_pixel(x, y, BLUE);
        }
    }
    img
}

#[test]
fn clean_image_reports_counts() {
    let mut img = sprite();
    let report = clean_image(&mut img, &Options::default()).unwrap();

    assert_eq!(report.background, WHITE);
    assert_eq!(report.total, 100);
    assert_eq!(report.erased, 76);
    assert_eq!(report.kept(), 24);
    assert_eq!(*img.get_pixel(0, 0), TRANSPARENT);
    assert_eq!(*img.get_pixel(4, 4), BLUE);
}

#[test]
fn bleed_colors_erased_pixels() {
    let mut img = sprite();
    let options = Options {
        bleed: true,
        ..Options::default()
    };
    clean_image(&mut img, &options).unwrap();

    assert_eq!(*img.get_pixel(1, 4), Rgba([20, 40, 200, 0]));
    assert_eq!(*img.get_pixel(0, 0), Rgba([20, 40, 200, 0]));
    assert_eq!(*img.get_pixel(4, 4), BLUE);
}

#[test]
fn invalid_tolerance_is_rejected_before_touching_pixels() {
    let mut img = sprite();
    for tolerance in [-1.0, f64::NAN, f64::INFINITY] {
        let options = Options {
            tolerance,
            bleed: false,
        };
        let err = clean_image(&mut img, &options).unwrap_err();
        assert!(matches!(err, Error::InvalidTolerance(_)), "error: {err}");
        assert_eq!(err.exit_code(), 64);
    }
    assert_eq!(img, sprite());
}

#[test]
fn empty_image_is_invalid() {
    let mut img = RgbaImage::new(0, 0);
    let err = clean_image(&mut img, &Options::default()).unwrap_err();
    assert!(matches!(err, Error::InvalidImage { .. }));
    assert_eq!(err.exit_code(), 65);
}

#[test]
fn clean_file_writes_transparent_png() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("in.png");
    let output = dir.path().join("out.png");
    save_png(&sprite(), &input).unwrap();

    let report = clean_file(&input, Some(&output), &Options::default()).unwrap();
    assert_eq!(report.erased, 76);

    let result = load_rgba(&output).unwrap();
    assert_eq!(*result.get_pixel(9, 9), TRANSPARENT);
    assert_eq!(*result.get_pixel(2, 3), BLUE);
    // Input is left as it was.
    assert_eq!(load_rgba(&input).unwrap(), sprite());
}

#[test]
fn clean_file_without_output_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("in.png");
    save_png(&sprite(), &input).unwrap();

    let report = clean_file(&input, None, &Options::default()).unwrap();
    assert_eq!(report.erased, 76);
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 1);
}

#[test]
fn failed_load_writes_no_output() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("out.png");

    let err = clean_file(&dir.path().join("missing.png"), Some(&output), &Options::default())
        .unwrap_err();
    assert!(matches!(err, Error::NotFound { .. }));
    assert!(!output.exists());
}
