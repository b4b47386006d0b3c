//! Deterministic frame dump on a virtual clock
//!
//! No timers run here. The clock advances by exactly one frame period per
//! frame and each carousel is ticked whenever the clock passes its next tick
//! instant, so the same options always produce the same PNGs.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use embassy_time::{Duration, Instant};
use platform::ImageSource;

use crate::scene::Scene;

/// Frame dump settings
#[derive(Debug, Clone)]
pub struct RenderOptions {
    pub out: PathBuf,
    pub frames: u32,
    pub fps: u32,
}

/// What a render produced
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderSummary {
    pub frames_written: u32,
    pub ticks: u64,
    /// Placeholder tiles in the last frame
    pub placeholders: usize,
}

/// File name of frame `index`
pub fn frame_path(out: &Path, index: u32) -> PathBuf {
    out.join(format!("frame_{index:05}.png"))
}

/// Render `options.frames` frames of `scene` into `options.out`.
pub fn render<S: ImageSource>(
    scene: &Scene,
    images: &mut S,
    options: &RenderOptions,
) -> Result<RenderSummary> {
    anyhow::ensure!(options.fps > 0, "--fps must be at least 1");
    std::fs::create_dir_all(&options.out)
        .with_context(|| format!("failed to create {}", options.out.display()))?;

    let frame_period = Duration::from_micros(1_000_000 / u64::from(options.fps));
    let start = Instant::from_ticks(0);
    scene.mount(start);

    let mut next_ticks: Vec<Instant> = scene
        .panels()
        .iter()
        .map(|p| start + p.carousel.borrow().config().tick_interval)
        .collect();

    let mut canvas = scene.canvas();
    let mut summary = RenderSummary::default();
    for frame in 0..options.frames {
        let now = start + frame_period * frame;

        for (panel, next) in scene.panels().iter().zip(next_ticks.iter_mut()) {
            let mut carousel = panel.carousel.borrow_mut();
            let interval = carousel.config().tick_interval;
            while *next <= now {
                carousel.tick(*next);
                *next += interval;
            }
        }

        let reports = scene.draw(images, &mut canvas, now);
        let path = frame_path(&options.out, frame);
        canvas
            .screenshot(&path)
            .map_err(|e| anyhow::anyhow!("failed to write {}: {e}", path.display()))?;
        summary.frames_written += 1;
        summary.placeholders = reports.iter().map(|r| r.placeholders).sum();
        tracing::trace!(frame, "frame written");
    }

    summary.ticks = scene
        .panels()
        .iter()
        .map(|p| p.carousel.borrow().ticks())
        .sum();
    scene.unmount();
    tracing::info!(
        frames = summary.frames_written,
        ticks = summary.ticks,
        out = %options.out.display(),
        "render finished"
    );
    Ok(summary)
}
