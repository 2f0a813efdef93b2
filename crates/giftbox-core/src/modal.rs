//! Image modal visibility.
//!
//! Visibility has two layers that follow the stylesheet: `display` (the
//! modal takes part in layout) and the `show` class (the CSS transition has
//! run). Opening sets `display` first and adds `show` a moment later;
//! closing removes `show` first and drops `display` after the transition.
//! Delayed halves are guarded by phase, so a timer that outlives the state it
//! was meant for does nothing.

use crate::gallery::ModalContent;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ModalPhase {
    /// `display:none`
    #[default]
    Hidden,
    /// `display:block`, entrance transition pending
    Displayed,
    /// `display:block` with `show`
    Shown,
    /// `show` removed, waiting for `display:none`
    Closing,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ModalState {
    phase: ModalPhase,
    content: Option<ModalContent>,
}

impl ModalState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> ModalPhase {
        self.phase
    }

    pub fn content(&self) -> Option<&ModalContent> {
        self.content.as_ref()
    }

    /// Populate and display. The caller schedules [`mark_shown`](Self::mark_shown).
    pub fn open(&mut self, content: ModalContent) {
        tracing::debug!(key = %content.key, "modal opened");
        self.content = Some(content);
        if self.phase != ModalPhase::Shown {
            self.phase = ModalPhase::Displayed;
        }
    }

    /// Entrance delay elapsed.
    pub fn mark_shown(&mut self) -> bool {
        if self.phase != ModalPhase::Displayed {
            return false;
        }
        self.phase = ModalPhase::Shown;
        true
    }

    /// Remove `show`. Returns `true` when the caller should schedule
    /// [`finish_close`](Self::finish_close).
    pub fn close(&mut self) -> bool {
        match self.phase {
            ModalPhase::Displayed | ModalPhase::Shown => {
                self.phase = ModalPhase::Closing;
                true
            }
            ModalPhase::Hidden | ModalPhase::Closing => false,
        }
    }

    /// Exit transition elapsed. Drops the content so no media stays mounted
    /// behind `display:none`.
    pub fn finish_close(&mut self) -> bool {
        if self.phase != ModalPhase::Closing {
            return false;
        }
        self.phase = ModalPhase::Hidden;
        self.content = None;
        true
    }

    /// `display:block`
    pub fn is_displayed(&self) -> bool {
        self.phase != ModalPhase::Hidden
    }

    /// Carries the `show` class
    pub fn is_shown(&self) -> bool {
        self.phase == ModalPhase::Shown
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gallery::{ContentKey, Media};

    fn content(n: usize) -> ModalContent {
        ModalContent {
            key: ContentKey::from_position(n),
            media: Media::Image(format!("{n}.jpg")),
            title: format!("title {n}"),
            description: "d".to_string(),
            quote: "q".to_string(),
        }
    }

    #[test]
    fn open_show_close_hide() {
        let mut modal = ModalState::new();
        assert!(!modal.is_displayed());

        modal.open(content(1));
        assert!(modal.is_displayed());
        assert!(!modal.is_shown());

        assert!(modal.mark_shown());
        assert!(modal.is_shown());

        assert!(modal.close());
        assert!(!modal.is_shown());
        assert!(modal.is_displayed());

        assert!(modal.finish_close());
        assert!(!modal.is_displayed());
        assert_eq!(modal.phase(), ModalPhase::Hidden);
    }

    #[test]
    fn close_before_entrance_keeps_it_closed() {
        let mut modal = ModalState::new();
        modal.open(content(1));
        modal.close();
        // Stale entrance timer fires after the close started
        assert!(!modal.mark_shown());
        assert!(!modal.is_shown());
        assert!(modal.finish_close());
        assert!(!modal.is_displayed());
    }

    #[test]
    fn reopen_during_exit_ignores_stale_exit() {
        let mut modal = ModalState::new();
        modal.open(content(1));
        modal.mark_shown();
        modal.close();
        modal.open(content(2));
        // Exit timer from the first close fires now
        assert!(!modal.finish_close());
        assert!(modal.is_displayed());
        assert!(modal.mark_shown());
        assert_eq!(modal.content().unwrap().key, ContentKey::from_position(2));
    }

    #[test]
    fn finished_close_drops_video() {
        let mut modal = ModalState::new();
        modal.open(ModalContent {
            media: Media::Video("clip.mp4".to_string()),
            ..content(10)
        });
        modal.mark_shown();
        modal.close();
        // Still fading out, media stays until the transition ends
        assert!(modal.content().is_some());
        assert!(modal.finish_close());
        assert!(modal.content().is_none());
    }

    #[test]
    fn close_when_hidden_is_noop() {
        let mut modal = ModalState::new();
        assert!(!modal.close());
        assert!(!modal.finish_close());
    }
}
