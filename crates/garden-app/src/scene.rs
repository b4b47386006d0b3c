//! The selected carousels, stacked vertically on one canvas

use std::cell::RefCell;

use anyhow::{Context, Result};
use carousel::{Carousel, TimerState};
use embassy_time::Instant;
use embedded_graphics::{pixelcolor::Rgb888, prelude::*, primitives::Rectangle};
use garden_components::carousel_view::{CarouselView, FrameReport};
use garden_emulator::Emulator;
use platform::config::{PANEL_HEIGHT, PANEL_WIDTH};
use platform::ImageSource;
use ui::CarouselId;

/// Page background behind the cards
pub const PAGE_BACKGROUND: Rgb888 = Rgb888::new(0x1E, 0x10, 0x2A);

/// One carousel and where it is drawn.
pub struct Panel {
    pub id: CarouselId,
    pub carousel: RefCell<Carousel<'static>>,
    pub view: CarouselView,
}

/// Every panel on the canvas, top to bottom.
pub struct Scene {
    panels: Vec<Panel>,
}

impl Scene {
    /// Build panels for `ids`, each `PANEL_WIDTH` x `PANEL_HEIGHT`.
    pub fn new(ids: &[CarouselId], entrance: bool) -> Result<Self> {
        let mut panels = Vec::with_capacity(ids.len());
        let mut top = 0_i32;
        let height = i32::try_from(PANEL_HEIGHT).context("panel height")?;
        for &id in ids {
            let carousel = Carousel::new(id.config())
                .with_context(|| format!("invalid configuration for '{id}'"))?;
            let bounds = Rectangle::new(Point::new(0, top), Size::new(PANEL_WIDTH, PANEL_HEIGHT));
            let mut view = CarouselView::new(bounds);
            if !entrance {
                view = view.entrance(None);
            }
            panels.push(Panel {
                id,
                carousel: RefCell::new(carousel),
                view,
            });
            top = top.saturating_add(height);
        }
        Ok(Self { panels })
    }

    pub fn panels(&self) -> &[Panel] {
        &self.panels
    }

    /// Canvas size fitting every panel
    pub fn canvas_size(&self) -> Size {
        let count = u32::try_from(self.panels.len()).unwrap_or(u32::MAX);
        Size::new(PANEL_WIDTH, PANEL_HEIGHT.saturating_mul(count.max(1)))
    }

    /// Fresh canvas for this scene
    pub fn canvas(&self) -> Emulator {
        let size = self.canvas_size();
        Emulator::with_background(size.width, size.height, PAGE_BACKGROUND)
    }

    /// Mount every carousel at `now`.
    pub fn mount(&self, now: Instant) {
        for panel in &self.panels {
            let state = panel.carousel.borrow_mut().mount(now);
            if state == TimerState::Idle {
                tracing::info!(carousel = %panel.id, "nothing to animate");
            }
        }
    }

    /// Whether any carousel still has autoplay armed
    pub fn is_armed(&self) -> bool {
        self.panels
            .iter()
            .any(|p| p.carousel.borrow().is_autoplay_armed())
    }

    /// Unmount every carousel.
    pub fn unmount(&self) {
        for panel in &self.panels {
            panel.carousel.borrow_mut().unmount();
        }
    }

    /// Draw one complete frame at `now`.
    pub fn draw<S: ImageSource>(
        &self,
        images: &mut S,
        canvas: &mut Emulator,
        now: Instant,
    ) -> Vec<FrameReport> {
        canvas.clear_frame();
        let reports = self
            .panels
            .iter()
            .map(|panel| {
                let mut carousel = panel.carousel.borrow_mut();
                match panel.view.render(&mut carousel, images, canvas, now) {
                    Ok(report) => report,
                    Err(never) => match never {},
                }
            })
            .collect();
        canvas.present();
        reports
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_panels_stack_vertically() {
        let scene = Scene::new(&CarouselId::ALL, true).unwrap();
        assert_eq!(scene.panels().len(), 2);
        assert_eq!(scene.canvas_size(), Size::new(800, 840));
        assert_eq!(scene.panels()[1].view.bounds().top_left, Point::new(0, 420));
    }

    #[test]
    fn test_mount_and_unmount() {
        let scene = Scene::new(&[CarouselId::Personal], false).unwrap();
        scene.mount(Instant::from_millis(0));
        assert!(scene.panels()[0].carousel.borrow().is_autoplay_armed());
        scene.unmount();
        assert!(!scene.panels()[0].carousel.borrow().is_autoplay_armed());
    }
}
