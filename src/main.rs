#![allow(non_snake_case)]

mod app;
mod audio_bridge;
mod components;
pub mod context;
mod theme;

use std::path::PathBuf;
use std::sync::OnceLock;

use anyhow::Context;
use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use giftbox_core::StageConfig;

/// Global stage configuration, set from command line
static STAGE_CONFIG: OnceLock<StageConfig> = OnceLock::new();

/// Get the stage configuration (set from command line or default)
pub fn get_stage_config() -> StageConfig {
    STAGE_CONFIG.get().cloned().unwrap_or_default()
}

/// Giftbox - an interactive greeting
#[derive(Parser, Debug)]
#[command(name = "giftbox-desktop")]
#[command(about = "Giftbox - a welcome, a gift, and a gallery of moments")]
struct Args {
    /// JSON config file (timings, gallery, audio)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Background music used when no inline audio element is rendered
    #[arg(short, long)]
    audio: Option<String>,

    /// Fixed seed for particle randomness
    #[arg(short, long)]
    seed: Option<u64>,

    /// Disable background hearts
    #[arg(long)]
    no_ambient: bool,

    /// Show the explicit play-music button
    #[arg(long)]
    play_button: bool,

    /// Log filter used when RUST_LOG is unset
    #[arg(long)]
    log: Option<String>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut config = match args.config {
        Some(ref path) => StageConfig::load(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => StageConfig::default(),
    };

    if let Some(audio) = args.audio {
        // An explicit asset means the embedded element must not shadow it
        config.audio.fallback_src = audio;
        config.inline_audio = false;
    }
    if args.seed.is_some() {
        config.seed = args.seed;
    }
    if args.no_ambient {
        config.ambient_hearts = false;
    }
    if args.play_button {
        config.play_button = true;
    }
    if let Some(filter) = args.log {
        config.log_filter = filter;
    }

    giftbox_core::logging::init(&config.log_filter);
    config.validate()?;

    tracing::info!(
        items = config.gallery.items.len(),
        audio = %config.audio.fallback_src,
        "Starting Giftbox"
    );

    let _ = STAGE_CONFIG.set(config);

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title("Giftbox")
            .with_inner_size(dioxus::desktop::LogicalSize::new(480.0, 860.0))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);

    Ok(())
}
