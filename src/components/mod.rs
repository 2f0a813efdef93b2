//! UI Components for Giftbox.
//!
//! Each component reads the stage snapshot and maps its state onto the CSS
//! classes the stylesheet animates.

mod gallery;
mod gift_box;
mod image_modal;
mod music;
mod particles;
mod welcome;

pub use gallery::GalleryGrid;
pub use gift_box::GiftBox;
pub use image_modal::ImageModal;
pub use music::{BackgroundAudio, MusicToggle, PlayMusicButton};
pub use particles::{ConfettiLayer, FloatingHearts};
pub use welcome::WelcomeMessage;
