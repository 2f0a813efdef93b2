//! Giftbox Core Library
//!
//! State machines and effect generators behind the Giftbox greeting: a
//! welcome screen that turns into a gift box, which opens onto a photo
//! gallery with a caption modal, background music and floating hearts.
//!
//! ## Overview
//!
//! Nothing here touches a UI toolkit. The [`Stage`] reduces user gestures,
//! expired timers and confirmed audio events into effects; the [`Director`]
//! runs a stage on tokio, turning scheduled effects into timers and
//! publishing snapshots for a renderer.
//!
//! ## Quick Start
//!
//! ```ignore
//! use giftbox_core::{Action, Director, Stage, StageConfig};
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = StageConfig::default();
//!     let (director, handle, mut platform) =
//!         Director::new(Stage::new(&config), Some(config.timings.ambient_tick()));
//!     tokio::spawn(director.run());
//!
//!     handle.dispatch(Action::StartPressed).unwrap();
//!     while let Some(cmd) = platform.recv().await {
//!         println!("{cmd:?}");
//!     }
//! }
//! ```

pub mod audio;
pub mod config;
pub mod director;
pub mod error;
pub mod gallery;
pub mod gesture;
pub mod logging;
pub mod modal;
pub mod particles;
pub mod pool;
pub mod reveal;
pub mod stage;

// Re-exports
pub use audio::{
    AudioCommand, AudioController, AudioEvent, AudioSource, MusicIcon, PlayOrigin, PlaybackState,
};
pub use config::{StageConfig, Timings};
pub use director::{Director, DirectorHandle, PlatformCommand};
pub use error::{GiftError, GiftResult};
pub use gallery::{Catalog, ContentKey, ContentRecord, Gallery, GalleryItem, Media, ModalContent};
pub use gesture::{GestureKind, GestureLatch};
pub use modal::{ModalPhase, ModalState};
pub use particles::{ConfettiPiece, Heart, ParticleField, CONFETTI_PALETTE};
pub use reveal::{RevealSequencer, RevealState};
pub use stage::{Action, Effect, Stage};
