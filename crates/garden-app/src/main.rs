// Desktop tooling crate: rustdoc on CLI plumbing is not required.
#![allow(clippy::arithmetic_side_effects)]
#![allow(missing_docs)]

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use garden_app::{
    live::{self, LiveOptions},
    render::{self, RenderOptions},
    FsImageSource, Scene,
};
use platform::config::{app_title, APP_VERSION, DEFAULT_IMAGE_ROOT};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use ui::CarouselId;

#[derive(Parser)]
#[command(name = "garden")]
#[command(about = "Enchanted Garden carousel runner", long_about = None)]
#[command(version)]
struct Cli {
    /// Directory image locators are resolved against
    #[arg(long, global = true, env = "GARDEN_IMAGES", default_value = DEFAULT_IMAGE_ROOT)]
    images: PathBuf,

    /// Which carousels to show
    #[arg(long, global = true, value_enum, default_value_t = Which::Both)]
    carousel: Which,

    /// Skip the slide-in played when the carousels first appear
    #[arg(long, global = true)]
    no_entrance: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write frames on a virtual clock (deterministic)
    Render {
        /// Output directory for PNG frames
        #[arg(long, default_value = "frames")]
        out: PathBuf,
        /// Number of frames to write
        #[arg(long, default_value_t = 120)]
        frames: u32,
        /// Frames per second of virtual time
        #[arg(long, default_value_t = 10)]
        fps: u32,
    },
    /// Autoplay in real time, then write the last frame
    Run {
        /// Output directory for the last frame
        #[arg(long, default_value = "frames")]
        out: PathBuf,
        /// Stop after this many seconds (default: until Ctrl-C)
        #[arg(long)]
        duration_secs: Option<u64>,
        /// Redraw rate
        #[arg(long, default_value_t = 10)]
        fps: u32,
    },
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Which {
    Memories,
    Personal,
    Both,
}

impl Which {
    fn ids(self) -> &'static [CarouselId] {
        match self {
            Which::Memories => &[CarouselId::Memories],
            Which::Personal => &[CarouselId::Personal],
            Which::Both => &CarouselId::ALL,
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    tracing::info!(version = APP_VERSION, images = %cli.images.display(), "{}", app_title());

    let scene = Scene::new(cli.carousel.ids(), !cli.no_entrance)?;
    let mut images = FsImageSource::new(&cli.images);

    match cli.command {
        Commands::Render { out, frames, fps } => {
            let summary = render::render(&scene, &mut images, &RenderOptions { out, frames, fps })?;
            tracing::info!(
                frames = summary.frames_written,
                placeholders = summary.placeholders,
                "done"
            );
            Ok(())
        }
        Commands::Run {
            out,
            duration_secs,
            fps,
        } => {
            let options = LiveOptions {
                duration: duration_secs.map(std::time::Duration::from_secs),
                fps,
                out,
            };
            let runtime = tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()?;
            runtime.block_on(live::run(&scene, &mut images, &options))?;
            Ok(())
        }
    }
}
