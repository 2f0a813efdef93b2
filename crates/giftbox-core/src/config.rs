//! Runtime configuration.
//!
//! Everything has a default matching the stock greeting, so an empty JSON
//! object is a valid config file.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::audio::AudioSource;
use crate::error::{GiftError, GiftResult};
use crate::gallery::Gallery;

/// Upper bound for every delay in [`Timings`]
pub const MAX_DELAY_MS: u64 = 60_000;

/// Delays and counts driving the choreography. All durations in ms.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Timings {
    /// Welcome fade before the gift box appears
    pub welcome_fade_ms: u64,
    /// Lid opening before the gallery appears
    pub gift_open_ms: u64,
    pub heart_burst_count: usize,
    pub heart_burst_stagger_ms: u64,
    pub ambient_tick_ms: u64,
    /// Probability of an ambient heart per tick
    pub ambient_chance: f64,
    pub confetti_count: usize,
    /// Delay before confetti starts falling
    pub confetti_fall_ms: u64,
    pub confetti_lifetime_ms: u64,
    pub modal_enter_ms: u64,
    pub modal_exit_ms: u64,
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            welcome_fade_ms: 500,
            gift_open_ms: 1000,
            heart_burst_count: 30,
            heart_burst_stagger_ms: 100,
            ambient_tick_ms: 500,
            ambient_chance: 0.3,
            confetti_count: 100,
            confetti_fall_ms: 50,
            confetti_lifetime_ms: 3000,
            modal_enter_ms: 10,
            modal_exit_ms: 300,
        }
    }
}

impl Timings {
    fn delays(&self) -> [(&'static str, u64); 8] {
        [
            ("welcome_fade_ms", self.welcome_fade_ms),
            ("gift_open_ms", self.gift_open_ms),
            ("heart_burst_stagger_ms", self.heart_burst_stagger_ms),
            ("ambient_tick_ms", self.ambient_tick_ms),
            ("confetti_fall_ms", self.confetti_fall_ms),
            ("confetti_lifetime_ms", self.confetti_lifetime_ms),
            ("modal_enter_ms", self.modal_enter_ms),
            ("modal_exit_ms", self.modal_exit_ms),
        ]
    }

    pub fn welcome_fade(&self) -> Duration {
        Duration::from_millis(self.welcome_fade_ms)
    }

    pub fn gift_open(&self) -> Duration {
        Duration::from_millis(self.gift_open_ms)
    }

    pub fn heart_burst_stagger(&self) -> Duration {
        Duration::from_millis(self.heart_burst_stagger_ms)
    }

    pub fn ambient_tick(&self) -> Duration {
        Duration::from_millis(self.ambient_tick_ms)
    }

    pub fn confetti_fall(&self) -> Duration {
        Duration::from_millis(self.confetti_fall_ms)
    }

    pub fn confetti_lifetime(&self) -> Duration {
        Duration::from_millis(self.confetti_lifetime_ms)
    }

    pub fn modal_enter(&self) -> Duration {
        Duration::from_millis(self.modal_enter_ms)
    }

    pub fn modal_exit(&self) -> Duration {
        Duration::from_millis(self.modal_exit_ms)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StageConfig {
    pub timings: Timings,
    pub audio: AudioSource,
    /// Render the embedded `#bg-audio` element
    pub inline_audio: bool,
    /// Render the `.play-music-button` fallback
    pub play_button: bool,
    /// Spawn background hearts on the ambient tick
    pub ambient_hearts: bool,
    pub max_hearts: usize,
    pub max_confetti: usize,
    /// Fixed RNG seed; random when absent
    pub seed: Option<u64>,
    /// Filter used when `RUST_LOG` is unset
    pub log_filter: String,
    pub gallery: Gallery,
}

impl Default for StageConfig {
    fn default() -> Self {
        Self {
            timings: Timings::default(),
            audio: AudioSource::default(),
            inline_audio: true,
            play_button: false,
            ambient_hearts: true,
            max_hearts: 400,
            max_confetti: 200,
            seed: None,
            log_filter: "info".to_string(),
            gallery: Gallery::default(),
        }
    }
}

impl StageConfig {
    /// Read a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> GiftResult<Self> {
        let raw = std::fs::read_to_string(path.as_ref())?;
        let config: StageConfig = serde_json::from_str(&raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> GiftResult<()> {
        if !(0.0..=1.0).contains(&self.timings.ambient_chance) {
            return Err(GiftError::Config(format!(
                "ambient_chance must be within 0..=1, got {}",
                self.timings.ambient_chance
            )));
        }
        for (name, value) in self.timings.delays() {
            if value > MAX_DELAY_MS {
                return Err(GiftError::Config(format!(
                    "{name} must be at most {MAX_DELAY_MS}, got {value}"
                )));
            }
        }
        if self.timings.ambient_tick_ms == 0 {
            return Err(GiftError::Config("ambient_tick_ms must be positive".to_string()));
        }
        let mut seen = std::collections::HashSet::new();
        for item in &self.gallery.items {
            if !seen.insert(&item.key) {
                return Err(GiftError::Config(format!(
                    "duplicate gallery key: {}",
                    item.key
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_match_stock_greeting() {
        let config = StageConfig::default();
        assert_eq!(config.timings.welcome_fade(), Duration::from_millis(500));
        assert_eq!(config.timings.gift_open(), Duration::from_secs(1));
        assert_eq!(config.timings.heart_burst_count, 30);
        assert_eq!(config.timings.confetti_count, 100);
        assert_eq!(config.timings.confetti_lifetime(), Duration::from_secs(3));
        assert_eq!(config.gallery.items.len(), 11);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn empty_object_is_default() {
        let config: StageConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, StageConfig::default());
    }

    #[test]
    fn load_partial_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"play_button": true, "seed": 42, "timings": {{"gift_open_ms": 250}}}}"#
        )
        .unwrap();

        let config = StageConfig::load(file.path()).unwrap();
        assert!(config.play_button);
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.timings.gift_open_ms, 250);
        assert_eq!(config.timings.welcome_fade_ms, 500);
    }

    #[test]
    fn rejects_oversized_delays() {
        let mut config = StageConfig::default();
        config.timings.heart_burst_stagger_ms = u64::MAX;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("heart_burst_stagger_ms"));

        config.timings.heart_burst_stagger_ms = MAX_DELAY_MS;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn load_rejects_bad_chance() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"timings": {{"ambient_chance": 1.5}}}}"#).unwrap();
        let err = StageConfig::load(file.path()).unwrap_err();
        assert!(matches!(err, GiftError::Config(_)));
    }

    #[test]
    fn load_missing_file() {
        let err = StageConfig::load("/nonexistent/giftbox.json").unwrap_err();
        assert!(matches!(err, GiftError::Io(_)));
    }
}
