//! The greeting as one explicit state object.
//!
//! [`Stage`] owns the reveal sequencer, playback state, gesture latch, modal
//! and particle field. Every input (user gesture, expired timer, confirmed
//! audio event) is an [`Action`]; [`Stage::dispatch`] applies it and returns
//! the [`Effect`]s the host must carry out. Delays are expressed as
//! [`Effect::Schedule`] and come back later as another action, so the stage
//! itself never sleeps or reads a clock.

use std::time::Duration;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::audio::{AudioCommand, AudioController, AudioEvent, MusicIcon, PlayOrigin};
use crate::config::{StageConfig, Timings};
use crate::gallery::{ContentKey, Gallery};
use crate::gesture::{GestureKind, GestureLatch};
use crate::modal::ModalState;
use crate::particles::{burst_schedule, BurstId, ParticleField};
use crate::pool::ParticleId;
use crate::reveal::RevealSequencer;

/// Everything that can happen to the stage
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Action {
    /// Any document-level gesture, used to unlock audio
    Gesture(GestureKind),
    StartPressed,
    GiftClicked,
    ToggleMusic,
    PlayButtonPressed,
    GalleryHovered(ContentKey),
    GalleryClicked(ContentKey),
    CloseModal,
    /// Click that landed on the modal backdrop itself
    BackdropClicked,
    EscapePressed,
    Audio(AudioEvent),
    AmbientTick,

    // Scheduled by the stage itself
    WelcomeFaded,
    GiftOpened,
    SpawnHeart,
    HeartExpired(ParticleId),
    ConfettiFall(BurstId),
    ConfettiExpired(BurstId),
    ModalEntered,
    ModalExited,
}

/// Work the host performs on the stage's behalf
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Effect {
    /// Dispatch `action` after `delay`
    Schedule { delay: Duration, action: Action },
    Audio(AudioCommand),
    /// User-facing alert
    Alert(String),
    /// Scroll the gallery back to its first photo
    ResetGalleryScroll,
}

#[derive(Clone, Debug)]
pub struct Stage {
    timings: Timings,
    ambient_hearts: bool,
    reveal: RevealSequencer,
    audio: AudioController,
    gestures: GestureLatch,
    modal: ModalState,
    particles: ParticleField,
    gallery: Gallery,
    rng: StdRng,
}

impl Stage {
    pub fn new(config: &StageConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self {
            timings: config.timings.clone(),
            ambient_hearts: config.ambient_hearts,
            reveal: RevealSequencer::new(),
            audio: AudioController::new(config.audio.clone()),
            gestures: GestureLatch::new(),
            modal: ModalState::new(),
            particles: ParticleField::new(config.max_hearts, config.max_confetti),
            gallery: config.gallery.clone(),
            rng,
        }
    }

    pub fn reveal(&self) -> &RevealSequencer {
        &self.reveal
    }

    pub fn audio(&self) -> &AudioController {
        &self.audio
    }

    pub fn music_icon(&self) -> MusicIcon {
        self.audio.icon()
    }

    pub fn gestures(&self) -> &GestureLatch {
        &self.gestures
    }

    pub fn modal(&self) -> &ModalState {
        &self.modal
    }

    pub fn particles(&self) -> &ParticleField {
        &self.particles
    }

    pub fn gallery(&self) -> &Gallery {
        &self.gallery
    }

    pub fn timings(&self) -> &Timings {
        &self.timings
    }

    pub fn dispatch(&mut self, action: Action) -> Vec<Effect> {
        let mut effects = Vec::new();

        match action {
            Action::Gesture(kind) => {
                if self.gestures.fire(kind) {
                    tracing::debug!(?kind, "first gesture of kind, unlocking audio");
                    self.play(PlayOrigin::Gesture, &mut effects);
                }
            }
            Action::StartPressed => {
                self.play(PlayOrigin::Start, &mut effects);
                if self.reveal.begin_start() {
                    schedule(&mut effects, self.timings.welcome_fade(), Action::WelcomeFaded);
                }
            }
            Action::WelcomeFaded => {
                if self.reveal.finish_start() {
                    self.heart_burst(&mut effects);
                }
            }
            Action::GiftClicked => {
                if self.reveal.open_gift() {
                    if let Some(cmd) = self.audio.resume_if_paused(PlayOrigin::GiftBox) {
                        effects.push(Effect::Audio(cmd));
                    }
                    schedule(&mut effects, self.timings.gift_open(), Action::GiftOpened);
                }
            }
            Action::GiftOpened => {
                if self.reveal.finish_open() {
                    effects.push(Effect::ResetGalleryScroll);
                    self.heart_burst(&mut effects);
                    self.confetti_burst(&mut effects);
                }
            }
            Action::ToggleMusic => {
                effects.extend(self.audio.toggle().into_iter().map(Effect::Audio));
            }
            Action::PlayButtonPressed => {
                self.play(PlayOrigin::PlayButton, &mut effects);
            }
            Action::GalleryHovered(_) => {
                if self.reveal.gallery_shown() {
                    self.heart_burst(&mut effects);
                }
            }
            Action::GalleryClicked(key) => match self.gallery.resolve(&key) {
                Ok(content) => {
                    self.modal.open(content);
                    schedule(&mut effects, self.timings.modal_enter(), Action::ModalEntered);
                    self.heart_burst(&mut effects);
                }
                Err(e) => {
                    tracing::debug!(%key, error = %e, "gallery click ignored");
                }
            },
            Action::CloseModal | Action::BackdropClicked => self.close_modal(&mut effects),
            Action::EscapePressed => {
                if self.modal.is_displayed() {
                    self.close_modal(&mut effects);
                }
            }
            Action::ModalEntered => {
                self.modal.mark_shown();
            }
            Action::ModalExited => {
                self.modal.finish_close();
            }
            Action::Audio(event) => {
                if let Some(alert) = self.audio.on_event(event) {
                    effects.push(Effect::Alert(alert.to_string()));
                }
            }
            Action::AmbientTick => {
                if self.ambient_hearts && self.rng.random_bool(self.timings.ambient_chance) {
                    self.spawn_heart(&mut effects);
                }
            }
            Action::SpawnHeart => self.spawn_heart(&mut effects),
            Action::HeartExpired(id) => {
                self.particles.remove_heart(id);
            }
            Action::ConfettiFall(burst) => {
                self.particles.drop_confetti(burst);
            }
            Action::ConfettiExpired(burst) => {
                let removed = self.particles.remove_confetti(burst);
                tracing::debug!(burst, removed, "confetti burst expired");
            }
        }

        effects
    }

    fn play(&mut self, origin: PlayOrigin, effects: &mut Vec<Effect>) {
        effects.extend(self.audio.request_play(origin).into_iter().map(Effect::Audio));
    }

    fn close_modal(&mut self, effects: &mut Vec<Effect>) {
        if self.modal.close() {
            schedule(effects, self.timings.modal_exit(), Action::ModalExited);
        }
    }

    fn heart_burst(&self, effects: &mut Vec<Effect>) {
        let offsets = burst_schedule(
            self.timings.heart_burst_count,
            self.timings.heart_burst_stagger(),
        );
        for delay in offsets {
            schedule(effects, delay, Action::SpawnHeart);
        }
    }

    fn spawn_heart(&mut self, effects: &mut Vec<Effect>) {
        let (id, lifetime) = self.particles.spawn_heart(&mut self.rng);
        schedule(effects, lifetime, Action::HeartExpired(id));
    }

    fn confetti_burst(&mut self, effects: &mut Vec<Effect>) {
        let burst = self
            .particles
            .spawn_confetti(self.timings.confetti_count, &mut self.rng);
        schedule(effects, self.timings.confetti_fall(), Action::ConfettiFall(burst));
        schedule(
            effects,
            self.timings.confetti_lifetime(),
            Action::ConfettiExpired(burst),
        );
    }
}

fn schedule(effects: &mut Vec<Effect>, delay: Duration, action: Action) {
    effects.push(Effect::Schedule { delay, action });
}
