//! Visual theme for Giftbox.

mod styles;

pub use styles::GLOBAL_STYLES;
