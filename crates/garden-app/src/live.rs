//! Real-time autoplay on a tokio current-thread runtime
//!
//! Each carousel gets its own [`Autoplay`] driven by an [`IntervalTicks`].
//! A frame loop redraws the canvas on its own interval. Everything runs as
//! futures on one task, so the carousels are shared through `RefCell` and
//! never borrowed across an await.

use std::path::PathBuf;

use anyhow::{Context, Result};
use carousel::{Autoplay, AutoplayExit};
use embassy_time::Instant;
use futures::future::join_all;
use platform::ImageSource;
use tokio::time::MissedTickBehavior;

use crate::scene::Scene;
use crate::ticks::IntervalTicks;

/// Live run settings
#[derive(Debug, Clone)]
pub struct LiveOptions {
    /// Stop after this long; `None` runs until Ctrl-C
    pub duration: Option<std::time::Duration>,
    pub fps: u32,
    /// Where the last frame is written
    pub out: PathBuf,
}

/// Why the live loop ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    Elapsed,
    Interrupted,
    /// No carousel had anything to animate
    NothingToAnimate,
}

/// Run `scene` until the duration elapses or Ctrl-C.
///
/// Returns the number of frames drawn. The final frame, drawn just before
/// the carousels are unmounted, is saved to `options.out/last.png`.
pub async fn run<S: ImageSource>(
    scene: &Scene,
    images: &mut S,
    options: &LiveOptions,
) -> Result<(StopReason, u64)> {
    anyhow::ensure!(options.fps > 0, "--fps must be at least 1");
    std::fs::create_dir_all(&options.out)
        .with_context(|| format!("failed to create {}", options.out.display()))?;

    let mut canvas = scene.canvas();
    scene.mount(Instant::now());

    let autoplay = async {
        let drivers = scene.panels().iter().map(|panel| {
            let period = panel.carousel.borrow().config().tick_interval;
            let id = panel.id;
            async move {
                let exit = Autoplay::new(&panel.carousel, IntervalTicks::new(period))
                    .run()
                    .await;
                if exit == AutoplayExit::NothingToAnimate {
                    tracing::info!(carousel = %id, "autoplay not started");
                }
                exit
            }
        });
        join_all(drivers).await;
    };

    let mut frames = 0_u64;
    let frame_loop = async {
        let period = std::time::Duration::from_micros(1_000_000 / u64::from(options.fps));
        let mut interval = tokio::time::interval(period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
        loop {
            interval.tick().await;
            scene.draw(images, &mut canvas, Instant::now());
            frames += 1;
            if !scene.is_armed() {
                break;
            }
        }
    };
    let animate = async {
        tokio::join!(autoplay, frame_loop);
    };

    let deadline = async {
        match options.duration {
            Some(d) => tokio::time::sleep(d).await,
            None => std::future::pending().await,
        }
    };

    let reason = tokio::select! {
        () = animate => StopReason::NothingToAnimate,
        () = deadline => StopReason::Elapsed,
        res = tokio::signal::ctrl_c() => {
            res.context("failed to listen for Ctrl-C")?;
            StopReason::Interrupted
        }
    };

    // Last frame while still mounted; unmounted carousels draw nothing.
    scene.draw(images, &mut canvas, Instant::now());
    frames += 1;
    scene.unmount();
    let last = options.out.join("last.png");
    canvas
        .screenshot(&last)
        .map_err(|e| anyhow::anyhow!("failed to write {}: {e}", last.display()))?;

    let ticks: u64 = scene
        .panels()
        .iter()
        .map(|p| p.carousel.borrow().ticks())
        .sum();
    tracing::info!(?reason, frames, ticks, last = %last.display(), "stopped");
    Ok((reason, frames))
}
