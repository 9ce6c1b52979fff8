use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use rotation_demo::{
    rotation_demo, AnimationPolicy, OffsetRange, ScreenConfig, SliderRanges, DEFAULT_WINDOW_SIZE,
};
use spincard_app::AppLauncher;

/// Two cards and seven sliders. Click a card to select it, drag the sliders
/// to rotate, scale and move it.
#[derive(Debug, Parser)]
#[command(name = "rotation-demo", version, about)]
struct Args {
    /// Bounds of the offset sliders: `wide` (±2000) or `narrow` (±200).
    #[arg(long, default_value = "wide")]
    offset_range: OffsetRange,

    /// `default-aware` tweens back to identity and springs elsewhere;
    /// `uniform` springs everywhere.
    #[arg(long, default_value = "default-aware")]
    animation: AnimationPolicy,

    #[arg(long, default_value_t = DEFAULT_WINDOW_SIZE.0)]
    width: u32,

    #[arg(long, default_value_t = DEFAULT_WINDOW_SIZE.1)]
    height: u32,

    /// TrueType font for labels. Defaults to a common system font.
    #[arg(long)]
    font: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    let args = Args::parse();
    let config = ScreenConfig::default()
        .with_offset_range(args.offset_range)
        .with_animation(args.animation);
    let ranges = SliderRanges::new(&config).context("invalid slider ranges")?;
    log::info!(
        "offset range {}, animation {}",
        config.offset_range,
        config.animation
    );

    let mut launcher = AppLauncher::new()
        .with_title("Compose Rotation")
        .with_size(args.width, args.height);
    if let Some(font) = args.font {
        launcher = launcher.with_font_path(font);
    }
    launcher
        .run(rotation_demo(config, ranges))
        .context("desktop app failed")?;
    Ok(())
}
