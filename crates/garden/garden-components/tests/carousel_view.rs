//! Rendering the carousel card into a headless canvas.

use carousel::prelude::*;
use embassy_time::{Duration, Instant};
use embedded_graphics::{pixelcolor::Rgb888, prelude::*, primitives::Rectangle};
use garden_components::prelude::*;
use garden_testing::TestCanvas;
use platform::mocks::MockImageSource;

const WIDTH: u32 = 800;
const HEIGHT: u32 = 420;
const IMAGE: Rgb888 = Rgb888::new(0x20, 0x40, 0x60);

fn ms(v: u64) -> Instant {
    Instant::from_millis(v)
}

fn view() -> CarouselView {
    CarouselView::new(Rectangle::new(Point::zero(), Size::new(WIDTH, HEIGHT))).entrance(None)
}

fn mounted(config: CarouselConfig<'static>) -> Carousel<'static> {
    let mut c = Carousel::new(config).unwrap();
    c.mount(ms(0));
    c
}

/// Register every visible tile so tests can look them up by key.
fn register_tiles(t: &mut TestCanvas, view: &CarouselView, c: &Carousel<'_>, now: Instant) {
    let config = c.config();
    for (slot, x) in c.visible_slots(STRIP_INSET, WIDTH, now) {
        let origin = view.tile_origin(x, config.item_height);
        t.register_bounds(
            &slot.key().to_string(),
            "ImageTile",
            Rectangle::new(origin, Size::new(config.item_width, config.item_height)),
        );
    }
}

#[test]
fn test_memories_renders_images_at_rest() {
    let mut c = mounted(ui::memories());
    let mut images = MockImageSource::new().with_color(IMAGE);
    let mut t = TestCanvas::new(WIDTH, HEIGHT);
    let v = view();

    let report = v.render(&mut c, &mut images, &mut *t, ms(0)).unwrap();
    assert!(!report.hidden);
    assert_eq!(report.placeholders, 0);
    assert!(report.images >= 3);

    register_tiles(&mut t, &v, &c, ms(0));
    // First tile of the middle copy sits at the strip inset.
    let first = t.query_by_test_id("/images/memories/m1.jpg-10").unwrap();
    assert_eq!(first.position.0, STRIP_INSET);
    t.assert_pixel(
        u32::try_from(first.position.0 + 100).unwrap(),
        u32::try_from(first.position.1 + 100).unwrap(),
        IMAGE,
    )
    .unwrap();
}

#[test]
fn test_header_uses_theme() {
    let mut c = mounted(ui::personal());
    let mut images = MockImageSource::new();
    let mut t = TestCanvas::new(WIDTH, HEIGHT);
    view().render(&mut c, &mut images, &mut *t, ms(0)).unwrap();

    let pink = Palette::for_theme(Theme::Pink);
    // Left edge of the band, clear of the rounded corner and the text.
    t.assert_pixel(2, 40, pink.header).unwrap();
}

#[test]
fn test_failed_image_shows_placeholder_for_that_item_only() {
    let mut c = mounted(ui::memories());
    let mut images = MockImageSource::new()
        .with_color(IMAGE)
        .fail("/images/memories/m2.jpg");
    let mut t = TestCanvas::new(WIDTH, HEIGHT);
    let v = view();

    let report = v.render(&mut c, &mut images, &mut *t, ms(0)).unwrap();
    assert_eq!(report.placeholders, 1);
    assert!(c.shows_placeholder(1));
    assert!(!c.shows_placeholder(0));

    register_tiles(&mut t, &v, &c, ms(0));
    let green = Palette::for_theme(Theme::Green);
    let failed = t.query_by_test_id("/images/memories/m2.jpg-11").unwrap().bounds();
    let fine = t.query_by_test_id("/images/memories/m1.jpg-10").unwrap().bounds();
    t.assert_region_contains(failed, green.placeholder).unwrap();
    t.assert_region_contains(failed, Rgb888::WHITE).unwrap();
    t.assert_region_contains(fine, IMAGE).unwrap();
}

#[test]
fn test_failed_image_is_not_retried() {
    let mut c = mounted(ui::memories());
    let mut images = MockImageSource::new().fail("/images/memories/m2.jpg");
    let mut t = TestCanvas::new(WIDTH, HEIGHT);
    let v = view();

    v.render(&mut c, &mut images, &mut *t, ms(0)).unwrap();
    c.tick(ms(3500));
    v.render(&mut c, &mut images, &mut *t, ms(3600)).unwrap();
    v.render(&mut c, &mut images, &mut *t, ms(4400)).unwrap();
    assert_eq!(images.requests_for("/images/memories/m2.jpg"), 1);
}

#[test]
fn test_strip_moves_after_tick() {
    let mut c = mounted(ui::memories());
    let mut images = MockImageSource::new();
    let v = view();

    c.tick(ms(3500));
    // Landed one stride to the right.
    let mut t = TestCanvas::new(WIDTH, HEIGHT);
    v.render(&mut c, &mut images, &mut *t, ms(4300)).unwrap();
    register_tiles(&mut t, &v, &c, ms(4300));
    let first = t.query_by_test_id("/images/memories/m1.jpg-10").unwrap();
    assert_eq!(first.position.0, STRIP_INSET + 215);
}

#[test]
fn test_empty_carousel_draws_card_only() {
    let mut c = mounted(CarouselConfig::new(&[]).theme(Theme::Green));
    let mut images = MockImageSource::new();
    let mut t = TestCanvas::new(WIDTH, HEIGHT);
    let report = view().render(&mut c, &mut images, &mut *t, ms(0)).unwrap();
    assert_eq!(report.tiles(), 0);
    assert_eq!(images.request_count(), 0);
    let green = Palette::for_theme(Theme::Green);
    t.assert_pixel(400, 400, green.background).unwrap();
}

#[test]
fn test_entrance_hides_then_slides_in() {
    let mut c = mounted(ui::personal());
    let mut images = MockImageSource::new();
    let v = CarouselView::new(Rectangle::new(Point::zero(), Size::new(WIDTH, HEIGHT)));

    let mut t = TestCanvas::new(WIDTH, HEIGHT);
    let report = v.render(&mut c, &mut images, &mut *t, ms(1000)).unwrap();
    assert!(report.hidden);
    t.assert_region_uniform(
        Rectangle::new(Point::zero(), Size::new(WIDTH, HEIGHT)),
        Rgb888::BLACK,
    )
    .unwrap();

    // Personal scrolls right, so it enters from the left: the right edge of
    // the panel is still uncovered early in the slide.
    let mut t = TestCanvas::new(WIDTH, HEIGHT);
    let report = v.render(&mut c, &mut images, &mut *t, ms(2600)).unwrap();
    assert!(!report.hidden);
    t.assert_pixel(WIDTH - 1, 200, Rgb888::BLACK).unwrap();

    let settled = Duration::from_millis(3500);
    let mut t = TestCanvas::new(WIDTH, HEIGHT);
    v.render(&mut c, &mut images, &mut *t, ms(settled.as_millis())).unwrap();
    let pink = Palette::for_theme(Theme::Pink);
    t.assert_pixel(2, 40, pink.header).unwrap();
}

#[test]
fn test_unmounted_carousel_draws_and_loads_nothing() {
    let mut c = mounted(ui::memories());
    c.unmount();
    let mut images = MockImageSource::new().fail("/images/memories/m2.jpg");
    let mut t = TestCanvas::new(WIDTH, HEIGHT);

    let report = view().render(&mut c, &mut images, &mut *t, ms(0)).unwrap();
    assert!(report.hidden);
    assert_eq!(report.tiles(), 0);
    assert_eq!(images.request_count(), 0);
    assert!(c.fallbacks().is_empty());
    t.assert_region_uniform(
        Rectangle::new(Point::zero(), Size::new(WIDTH, HEIGHT)),
        Rgb888::BLACK,
    )
    .unwrap();
}
