//! Background music controller.
//!
//! The controller never touches a real audio handle. It decides which
//! [`AudioCommand`]s to send to the platform and folds the platform's
//! confirmed [`AudioEvent`]s back into [`PlaybackState`]. The displayed icon
//! is derived from the confirmed state only, so a silently blocked play
//! request leaves the icon on "music" rather than flipping it optimistically.

use serde::{Deserialize, Serialize};

/// Message shown when playback started from the explicit play button is
/// refused by the platform.
pub const PLAY_BLOCKED_ALERT: &str =
    "If audio is blocked, tap the music icon at the bottom-right to allow playback.";

/// Last confirmed playback state
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlaybackState {
    /// No audio handle yet
    #[default]
    Uninitialized,
    Paused,
    Playing,
}

/// Which gesture asked for playback. Echoed back on rejection.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlayOrigin {
    /// First gesture of some type anywhere in the page
    Gesture,
    /// Start button on the welcome screen
    Start,
    /// Gift box click, resuming paused music
    GiftBox,
    /// Music toggle in the corner
    Toggle,
    /// Explicit play-music fallback button
    PlayButton,
}

/// Where the audio handle comes from.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AudioSource {
    /// Id of an embedded `<audio>` element, preferred when present
    pub element_id: String,
    /// Asset constructed when the embedded element is absent
    pub fallback_src: String,
}

impl Default for AudioSource {
    fn default() -> Self {
        Self {
            element_id: "bg-audio".to_string(),
            fallback_src: "assets/audio/background-music.mp3".to_string(),
        }
    }
}

/// Requests sent to the platform audio handle
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "cmd", rename_all = "snake_case")]
pub enum AudioCommand {
    /// Obtain or construct a looping, preloaded handle and subscribe to its
    /// `playing`/`pause` events
    Init {
        element_id: String,
        fallback_src: String,
    },
    /// Best-effort play; may be rejected by autoplay policy
    Play { origin: PlayOrigin },
    Pause,
}

/// Notifications coming back from the platform audio handle
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum AudioEvent {
    /// Handle constructed; `inline` is true when the embedded element was used
    Ready { inline: bool },
    /// Native `playing` event
    Playing,
    /// Native `pause` event
    Paused,
    /// A play request was refused
    PlayRejected { origin: PlayOrigin, reason: String },
}

/// Music toggle icon
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MusicIcon {
    Music,
    Pause,
}

impl MusicIcon {
    /// Font Awesome classes for the icon element
    pub fn class(&self) -> &'static str {
        match self {
            MusicIcon::Music => "fas fa-music",
            MusicIcon::Pause => "fas fa-pause",
        }
    }

    /// Plain-text fallback when the icon font is unavailable
    pub fn glyph(&self) -> &'static str {
        match self {
            MusicIcon::Music => "\u{266B}",
            MusicIcon::Pause => "\u{275A}\u{275A}",
        }
    }
}

/// Playback state machine
#[derive(Clone, Debug, Default)]
pub struct AudioController {
    state: PlaybackState,
    source: AudioSource,
}

impl AudioController {
    pub fn new(source: AudioSource) -> Self {
        Self {
            state: PlaybackState::Uninitialized,
            source,
        }
    }

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    pub fn is_initialized(&self) -> bool {
        self.state != PlaybackState::Uninitialized
    }

    pub fn icon(&self) -> MusicIcon {
        match self.state {
            PlaybackState::Playing => MusicIcon::Pause,
            _ => MusicIcon::Music,
        }
    }

    /// Idempotent. Yields the `Init` command on the first call only.
    pub fn ensure_initialized(&mut self) -> Option<AudioCommand> {
        if self.is_initialized() {
            return None;
        }
        self.state = PlaybackState::Paused;
        tracing::debug!(src = %self.source.fallback_src, "audio handle requested");
        Some(AudioCommand::Init {
            element_id: self.source.element_id.clone(),
            fallback_src: self.source.fallback_src.clone(),
        })
    }

    /// Initialize if needed, then ask for playback.
    pub fn request_play(&mut self, origin: PlayOrigin) -> Vec<AudioCommand> {
        let mut commands: Vec<AudioCommand> = self.ensure_initialized().into_iter().collect();
        commands.push(AudioCommand::Play { origin });
        commands
    }

    /// Play again only if a handle exists and is paused.
    pub fn resume_if_paused(&self, origin: PlayOrigin) -> Option<AudioCommand> {
        (self.state == PlaybackState::Paused).then_some(AudioCommand::Play { origin })
    }

    /// Pause when confirmed playing, otherwise request play.
    pub fn toggle(&mut self) -> Vec<AudioCommand> {
        let mut commands: Vec<AudioCommand> = self.ensure_initialized().into_iter().collect();
        if self.state == PlaybackState::Playing {
            commands.push(AudioCommand::Pause);
        } else {
            commands.push(AudioCommand::Play {
                origin: PlayOrigin::Toggle,
            });
        }
        commands
    }

    /// Apply a confirmed event. Returns an alert to surface to the user, if any.
    pub fn on_event(&mut self, event: AudioEvent) -> Option<&'static str> {
        match event {
            AudioEvent::Ready { inline } => {
                tracing::debug!(inline, "audio handle ready");
                None
            }
            AudioEvent::Playing => {
                self.state = PlaybackState::Playing;
                None
            }
            AudioEvent::Paused => {
                if self.is_initialized() {
                    self.state = PlaybackState::Paused;
                }
                None
            }
            AudioEvent::PlayRejected { origin, reason } => {
                tracing::warn!(?origin, %reason, "background music playback prevented");
                (origin == PlayOrigin::PlayButton).then_some(PLAY_BLOCKED_ALERT)
            }
        }
    }
}
