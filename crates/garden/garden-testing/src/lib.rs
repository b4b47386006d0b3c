//! Headless testing utilities for the carousel UI
//!
//! Playwright-style assertions over an in-memory `Rgb888` panel.
//!
//! # Quick start
//!
//! ```no_run
//! use garden_testing::TestCanvas;
//! use embedded_graphics::{pixelcolor::Rgb888, prelude::*, primitives::{PrimitiveStyle, Rectangle}};
//!
//! let mut t = TestCanvas::new(200, 100);
//!
//! Rectangle::new(Point::new(10, 10), Size::new(40, 20))
//!     .into_styled(PrimitiveStyle::with_fill(Rgb888::WHITE))
//!     .draw(&mut *t)
//!     .unwrap();
//!
//! // Register the component so it can be queried by test ID
//! t.register_component("header", "Header", (10, 10), (40, 20));
//!
//! t.assert_pixel(20, 15, Rgb888::WHITE).unwrap();
//! t.assert_has_component("header").unwrap();
//! ```
//!
//! # Golden screenshot testing
//!
//! ```no_run
//! # use garden_testing::TestCanvas;
//! # let t = TestCanvas::new(100, 100);
//! // First run: set UPDATE_GOLDEN=1 to create/update the reference file.
//! t.assert_matches_golden("tests/golden/memories.png", 0).unwrap();
//! ```

// Desktop/tooling crate: assertion helpers panic on failure.
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![warn(clippy::all)]
#![warn(clippy::dbg_macro)]
#![warn(clippy::print_stdout)]
#![allow(clippy::module_name_repetitions)]
#![allow(missing_docs)]

use std::path::Path;

use embedded_graphics::{pixelcolor::Rgb888, prelude::*, primitives::Rectangle};

pub use garden_emulator::Emulator;

// ─────────────────────────────────────────────────────────────────────────────
// ComponentRef
// ─────────────────────────────────────────────────────────────────────────────

/// A UI component registered in the [`TestCanvas`]'s component registry.
#[derive(Debug, Clone, PartialEq)]
pub struct ComponentRef {
    /// The test identifier (analogous to `data-testid` in web testing).
    pub test_id: String,
    /// Broad component category, e.g. `"ImageTile"`, `"Header"`.
    pub component_type: String,
    /// Top-left corner in canvas coordinates.
    pub position: (i32, i32),
    /// Width × height in pixels.
    pub size: (u32, u32),
}

impl ComponentRef {
    /// The bounding rectangle as an `embedded-graphics` [`Rectangle`].
    pub fn bounds(&self) -> Rectangle {
        Rectangle::new(
            Point::new(self.position.0, self.position.1),
            Size::new(self.size.0, self.size.1),
        )
    }

    /// Centre of the component's bounding box.
    pub fn center(&self) -> Point {
        self.bounds().center()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// TestCanvas
// ─────────────────────────────────────────────────────────────────────────────

/// Headless canvas for UI testing.
///
/// Wraps [`Emulator`] and adds a component registry, pixel and region
/// assertions, and golden-file comparison. Derefs to [`Emulator`], which
/// implements [`DrawTarget`], so components draw straight into it.
pub struct TestCanvas {
    inner: Emulator,
    components: Vec<ComponentRef>,
}

impl TestCanvas {
    /// Create a black canvas of the given size.
    pub fn new(width: u32, height: u32) -> Self {
        Self::from_emulator(Emulator::new(width, height))
    }

    /// Create a canvas that clears to `background`.
    pub fn with_background(width: u32, height: u32, background: Rgb888) -> Self {
        Self::from_emulator(Emulator::with_background(width, height, background))
    }

    /// Wrap an existing panel.
    pub fn from_emulator(inner: Emulator) -> Self {
        Self {
            inner,
            components: Vec::new(),
        }
    }

    // ── Framebuffer access ───────────────────────────────────────────────────

    /// Return the colour at `(x, y)`, or `None` if out of bounds.
    pub fn pixel_at(&self, x: u32, y: u32) -> Option<Rgb888> {
        self.inner.framebuffer.get_pixel(x, y)
    }

    // ── Pixel assertions ─────────────────────────────────────────────────────

    /// Assert that pixel `(x, y)` has the expected colour.
    pub fn assert_pixel(&self, x: u32, y: u32, expected: Rgb888) -> Result<(), String> {
        let actual = self
            .pixel_at(x, y)
            .ok_or_else(|| format!("Pixel ({x}, {y}) is out of bounds"))?;
        if actual == expected {
            Ok(())
        } else {
            Err(format!(
                "assert_pixel({x}, {y}): expected {}, got {}",
                hex(expected),
                hex(actual)
            ))
        }
    }

    /// Assert that every pixel inside `rect` has the given colour.
    pub fn assert_region_uniform(&self, rect: Rectangle, color: Rgb888) -> Result<(), String> {
        for point in rect.points() {
            let (x, y) = to_unsigned(point)
                .ok_or_else(|| format!("assert_region_uniform: {point:?} is out of bounds"))?;
            self.assert_pixel(x, y, color)
                .map_err(|e| format!("assert_region_uniform failed in {rect:?}: {e}"))?;
        }
        Ok(())
    }

    /// Assert that `rect` contains **at least one** pixel with the given colour.
    pub fn assert_region_contains(&self, rect: Rectangle, color: Rgb888) -> Result<(), String> {
        if self.pixel_count_of_color(rect, color) > 0 {
            Ok(())
        } else {
            Err(format!(
                "assert_region_contains: no pixel {} found in {rect:?}",
                hex(color)
            ))
        }
    }

    /// Assert that `rect` contains no pixel with the given colour.
    pub fn assert_region_lacks(&self, rect: Rectangle, color: Rgb888) -> Result<(), String> {
        match self.pixel_count_of_color(rect, color) {
            0 => Ok(()),
            n => Err(format!(
                "assert_region_lacks: {n} pixels {} found in {rect:?}",
                hex(color)
            )),
        }
    }

    /// Count how many pixels in `rect` match `color`.
    pub fn pixel_count_of_color(&self, rect: Rectangle, color: Rgb888) -> usize {
        rect.points()
            .filter_map(to_unsigned)
            .filter(|&(x, y)| self.pixel_at(x, y) == Some(color))
            .count()
    }

    // ── Component registry ───────────────────────────────────────────────────

    /// Register (or update) a component by test ID.
    pub fn register_component(
        &mut self,
        test_id: &str,
        component_type: &str,
        position: (i32, i32),
        size: (u32, u32),
    ) {
        if let Some(existing) = self.components.iter_mut().find(|c| c.test_id == test_id) {
            existing.component_type = component_type.to_string();
            existing.position = position;
            existing.size = size;
        } else {
            self.components.push(ComponentRef {
                test_id: test_id.to_string(),
                component_type: component_type.to_string(),
                position,
                size,
            });
        }
    }

    /// Register a component by its bounding rectangle.
    pub fn register_bounds(&mut self, test_id: &str, component_type: &str, bounds: Rectangle) {
        self.register_component(
            test_id,
            component_type,
            (bounds.top_left.x, bounds.top_left.y),
            (bounds.size.width, bounds.size.height),
        );
    }

    /// Remove all registered components.
    pub fn clear_components(&mut self) {
        self.components.clear();
    }

    /// Find a component by test ID.
    pub fn query_by_test_id(&self, test_id: &str) -> Option<&ComponentRef> {
        self.components.iter().find(|c| c.test_id == test_id)
    }

    /// Return all components of one type.
    pub fn query_by_type(&self, component_type: &str) -> Vec<&ComponentRef> {
        self.components
            .iter()
            .filter(|c| c.component_type == component_type)
            .collect()
    }

    /// Return all registered components.
    pub fn components(&self) -> &[ComponentRef] {
        &self.components
    }

    pub fn component_count(&self) -> usize {
        self.components.len()
    }

    /// Assert that a component with `test_id` exists in the registry.
    pub fn assert_has_component(&self, test_id: &str) -> Result<(), String> {
        self.query_by_test_id(test_id)
            .ok_or_else(|| format!("Component '{test_id}' not found"))
            .map(|_| ())
    }

    // ── Screenshot utilities ─────────────────────────────────────────────────

    /// Save the current framebuffer as a PNG.
    pub fn screenshot(&self, path: impl AsRef<Path>) -> Result<(), Box<dyn std::error::Error>> {
        self.inner.screenshot(path)
    }

    /// Save the current framebuffer as the golden reference PNG.
    ///
    /// Parent directories are created automatically.
    pub fn save_golden(&self, path: impl AsRef<Path>) -> Result<(), Box<dyn std::error::Error>> {
        let p = path.as_ref();
        if let Some(parent) = p.parent() {
            std::fs::create_dir_all(parent)?;
        }
        self.inner.screenshot(p)
    }

    /// Assert the current framebuffer matches a golden reference PNG.
    ///
    /// `threshold` is the maximum per-channel absolute difference still
    /// considered equal (0 = exact match).
    ///
    /// Set `UPDATE_GOLDEN=1` to **update** the golden file instead:
    ///
    /// ```bash
    /// UPDATE_GOLDEN=1 cargo test
    /// ```
    pub fn assert_matches_golden(
        &self,
        golden_path: impl AsRef<Path>,
        threshold: u8,
    ) -> Result<(), String> {
        let golden_path = golden_path.as_ref();

        if std::env::var("UPDATE_GOLDEN").is_ok() {
            return self.save_golden(golden_path).map_err(|e| {
                format!(
                    "Failed to save golden '{p}': {e}",
                    p = golden_path.display()
                )
            });
        }

        let current = self.inner.framebuffer.to_image();
        let golden = image::open(golden_path)
            .map_err(|e| {
                format!(
                    "Failed to open golden '{}': {e}\nRun with UPDATE_GOLDEN=1 to create it.",
                    golden_path.display()
                )
            })?
            .to_rgb8();

        if current.dimensions() != golden.dimensions() {
            let (cw, ch) = current.dimensions();
            let (gw, gh) = golden.dimensions();
            return Err(format!(
                "Dimension mismatch: screenshot is {cw}×{ch}, golden is {gw}×{gh}"
            ));
        }

        let diff_pixels = current
            .pixels()
            .zip(golden.pixels())
            .filter(|(cp, gp)| {
                cp.0.iter()
                    .zip(gp.0.iter())
                    .any(|(&a, &b)| a.abs_diff(b) > threshold)
            })
            .count();

        if diff_pixels > 0 {
            Err(format!(
                "{diff_pixels} pixels differ from golden '{}' (threshold={threshold})",
                golden_path.display()
            ))
        } else {
            Ok(())
        }
    }

    // ── Emulator access ──────────────────────────────────────────────────────

    pub fn emulator(&self) -> &Emulator {
        &self.inner
    }

    pub fn emulator_mut(&mut self) -> &mut Emulator {
        &mut self.inner
    }
}

impl std::ops::Deref for TestCanvas {
    type Target = Emulator;
    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl std::ops::DerefMut for TestCanvas {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.inner
    }
}

fn to_unsigned(point: Point) -> Option<(u32, u32)> {
    Some((u32::try_from(point.x).ok()?, u32::try_from(point.y).ok()?))
}

fn hex(color: Rgb888) -> String {
    format!("#{:02X}{:02X}{:02X}", color.r(), color.g(), color.b())
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_graphics::primitives::PrimitiveStyle;

    #[test]
    fn pixel_at_default_is_black() {
        let t = TestCanvas::new(50, 50);
        assert_eq!(t.pixel_at(0, 0), Some(Rgb888::BLACK));
        assert_eq!(t.pixel_at(49, 49), Some(Rgb888::BLACK));
    }

    #[test]
    fn pixel_at_out_of_bounds_is_none() {
        let t = TestCanvas::new(50, 50);
        assert_eq!(t.pixel_at(50, 0), None);
        assert_eq!(t.pixel_at(0, 50), None);
    }

    #[test]
    fn assert_pixel_after_draw() {
        let mut t = TestCanvas::new(50, 50);
        Rectangle::new(Point::new(10, 10), Size::new(10, 10))
            .into_styled(PrimitiveStyle::with_fill(Rgb888::WHITE))
            .draw(&mut *t)
            .unwrap();
        assert!(t.assert_pixel(15, 15, Rgb888::WHITE).is_ok());
        assert!(t.assert_pixel(0, 0, Rgb888::BLACK).is_ok());
        let err = t.assert_pixel(15, 15, Rgb888::BLACK).unwrap_err();
        assert!(err.contains("#FFFFFF"), "{err}");
    }

    #[test]
    fn register_and_query_component() {
        let mut t = TestCanvas::new(100, 100);
        t.register_component("tile-0", "ImageTile", (10, 20), (80, 30));

        assert!(t.assert_has_component("tile-0").is_ok());
        assert!(t.assert_has_component("missing").is_err());

        let c = t.query_by_test_id("tile-0").unwrap();
        assert_eq!(c.position, (10, 20));
        assert_eq!(c.center(), Point::new(49, 34));
        assert_eq!(t.component_count(), 1);
    }

    #[test]
    fn register_component_overwrites_existing() {
        let mut t = TestCanvas::new(100, 100);
        t.register_component("hdr", "Header", (0, 0), (50, 20));
        t.register_bounds(
            "hdr",
            "Header",
            Rectangle::new(Point::new(5, 5), Size::new(60, 25)),
        );
        assert_eq!(t.component_count(), 1);
        assert_eq!(t.query_by_test_id("hdr").unwrap().position, (5, 5));
    }

    #[test]
    fn query_by_type_filters() {
        let mut t = TestCanvas::new(100, 100);
        t.register_component("a", "ImageTile", (0, 0), (1, 1));
        t.register_component("b", "ImageTile", (1, 0), (1, 1));
        t.register_component("c", "Header", (0, 1), (1, 1));
        assert_eq!(t.query_by_type("ImageTile").len(), 2);
        t.clear_components();
        assert_eq!(t.component_count(), 0);
    }

    #[test]
    fn region_assertions() {
        let mut t = TestCanvas::new(50, 50);
        Rectangle::new(Point::new(5, 5), Size::new(20, 20))
            .into_styled(PrimitiveStyle::with_fill(Rgb888::WHITE))
            .draw(&mut *t)
            .unwrap();

        let filled = Rectangle::new(Point::new(5, 5), Size::new(20, 20));
        let empty = Rectangle::new(Point::new(30, 30), Size::new(10, 10));

        assert!(t.assert_region_contains(filled, Rgb888::WHITE).is_ok());
        assert!(t.assert_region_uniform(empty, Rgb888::BLACK).is_ok());
        assert!(t.assert_region_contains(empty, Rgb888::WHITE).is_err());
        assert!(t.assert_region_lacks(empty, Rgb888::WHITE).is_ok());
        assert!(t.assert_region_lacks(filled, Rgb888::WHITE).is_err());
    }

    #[test]
    fn pixel_count_of_color() {
        let mut t = TestCanvas::new(10, 10);
        Rectangle::new(Point::zero(), Size::new(5, 5))
            .into_styled(PrimitiveStyle::with_fill(Rgb888::WHITE))
            .draw(&mut *t)
            .unwrap();
        assert_eq!(
            t.pixel_count_of_color(
                Rectangle::new(Point::zero(), Size::new(10, 10)),
                Rgb888::WHITE
            ),
            25
        );
    }
}
