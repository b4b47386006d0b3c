use embedded_graphics::{
    pixelcolor::Rgb888,
    prelude::*,
    primitives::{PrimitiveStyle, Rectangle},
};
use garden_testing::TestCanvas;

fn draw_sample(t: &mut TestCanvas) {
    Rectangle::new(Point::new(2, 2), Size::new(6, 4))
        .into_styled(PrimitiveStyle::with_fill(Rgb888::new(0xEC, 0x48, 0x99)))
        .draw(&mut **t)
        .unwrap();
}

#[test]
fn test_golden_round_trip() {
    let mut t = TestCanvas::new(12, 8);
    draw_sample(&mut t);

    let path = std::env::temp_dir()
        .join(format!("garden_testing_{}", std::process::id()))
        .join("sample.png");
    t.save_golden(&path).unwrap();
    assert!(t.assert_matches_golden(&path, 0).is_ok());

    // A changed pixel is reported.
    Pixel(Point::new(0, 0), Rgb888::WHITE).draw(&mut *t).unwrap();
    let err = t.assert_matches_golden(&path, 0).unwrap_err();
    assert!(err.contains("1 pixels differ"), "{err}");

    let _ = std::fs::remove_dir_all(path.parent().unwrap());
}

#[test]
fn test_missing_golden_explains_update() {
    let t = TestCanvas::new(4, 4);
    let err = t
        .assert_matches_golden("/nonexistent/garden/golden.png", 0)
        .unwrap_err();
    assert!(err.contains("UPDATE_GOLDEN=1"), "{err}");
}

#[test]
fn test_dimension_mismatch() {
    let small = TestCanvas::new(4, 4);
    let path = std::env::temp_dir().join(format!("garden_testing_dim_{}.png", std::process::id()));
    small.screenshot(&path).unwrap();
    let big = TestCanvas::new(8, 8);
    let err = big.assert_matches_golden(&path, 0).unwrap_err();
    let _ = std::fs::remove_file(&path);
    assert!(err.contains("Dimension mismatch"), "{err}");
}
