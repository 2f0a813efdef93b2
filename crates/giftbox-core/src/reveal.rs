//! Reveal sequencing: welcome screen → gift box → opened gift → gallery.
//!
//! The sequencer only ever moves forward. Each user-facing transition is
//! split in two: an immediate half (fade out the welcome message, open the
//! box lid) and a delayed half that the caller schedules and later reports
//! back through [`RevealSequencer::finish_start`] or
//! [`RevealSequencer::finish_open`].

use serde::{Deserialize, Serialize};

/// Where the visitor is in the reveal.
///
/// Ordering follows the reveal, so `a < b` means `a` comes first.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum RevealState {
    /// Welcome message with the start button
    #[default]
    Welcome,
    /// Gift box visible, lid closed
    GiftClosed,
    /// Lid opened, gallery not yet shown
    GiftOpen,
    /// Gallery visible
    GalleryShown,
}

/// Forward-only reveal state machine.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RevealSequencer {
    state: RevealState,
    /// Start was pressed and the welcome message is fading out
    welcome_fading: bool,
}

impl RevealSequencer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> RevealState {
        self.state
    }

    /// Start button pressed.
    ///
    /// Returns `true` when the caller should begin the fade and schedule
    /// [`finish_start`](Self::finish_start). Presses while the fade is
    /// already running, or after it, return `false`.
    pub fn begin_start(&mut self) -> bool {
        if self.state != RevealState::Welcome || self.welcome_fading {
            return false;
        }
        self.welcome_fading = true;
        true
    }

    /// The welcome fade has elapsed: hide the message, show the gift box.
    pub fn finish_start(&mut self) -> bool {
        if !self.welcome_fading {
            return false;
        }
        self.advance(RevealState::Welcome, RevealState::GiftClosed)
    }

    /// Gift box clicked. Only the first click on a closed box counts.
    pub fn open_gift(&mut self) -> bool {
        self.advance(RevealState::GiftClosed, RevealState::GiftOpen)
    }

    /// The opening delay has elapsed: show the gallery.
    pub fn finish_open(&mut self) -> bool {
        self.advance(RevealState::GiftOpen, RevealState::GalleryShown)
    }

    fn advance(&mut self, from: RevealState, to: RevealState) -> bool {
        if self.state != from {
            return false;
        }
        tracing::info!(?from, ?to, "reveal advanced");
        self.state = to;
        true
    }

    /// Welcome message carries the `hide` class (fading or gone).
    pub fn welcome_hiding(&self) -> bool {
        self.welcome_fading || self.state > RevealState::Welcome
    }

    /// Welcome message is removed from layout (`display:none`).
    pub fn welcome_removed(&self) -> bool {
        self.state > RevealState::Welcome
    }

    /// Gift container carries the `show` class.
    pub fn gift_shown(&self) -> bool {
        self.state >= RevealState::GiftClosed
    }

    /// Gift box carries the `open` class.
    pub fn gift_open(&self) -> bool {
        self.state >= RevealState::GiftOpen
    }

    /// Gallery carries the `show` class.
    pub fn gallery_shown(&self) -> bool {
        self.state == RevealState::GalleryShown
    }
}
