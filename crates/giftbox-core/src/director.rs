//! Async runner for a [`Stage`].
//!
//! The director owns the stage and processes one [`Action`] at a time.
//! Scheduled effects become detached timer tasks that post their action back
//! into the same queue; nothing is ever cancelled. After every action the
//! director publishes a fresh snapshot on a `watch` channel for renderers.
//!
//! ```ignore
//! let stage = Stage::new(&config);
//! let (director, handle, mut platform_rx) = Director::new(stage, Some(Duration::from_millis(500)));
//! tokio::spawn(director.run());
//!
//! handle.dispatch(Action::StartPressed)?;
//! while let Some(cmd) = platform_rx.recv().await {
//!     // forward audio commands and alerts to the webview
//! }
//! ```

use std::time::Duration;

use tokio::sync::{mpsc, watch};
use tokio::time::{interval_at, sleep, Instant, MissedTickBehavior};

use crate::audio::AudioCommand;
use crate::error::{GiftError, GiftResult};
use crate::stage::{Action, Effect, Stage};

/// Side effects the director cannot perform itself
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PlatformCommand {
    Audio(AudioCommand),
    Alert(String),
    ResetGalleryScroll,
}

/// Cheap, cloneable access to a running director
#[derive(Clone)]
pub struct DirectorHandle {
    actions: mpsc::UnboundedSender<Action>,
    snapshots: watch::Receiver<Stage>,
}

impl DirectorHandle {
    pub fn dispatch(&self, action: Action) -> GiftResult<()> {
        self.actions
            .send(action)
            .map_err(|_| GiftError::DirectorStopped)
    }

    /// Latest published stage
    pub fn snapshot(&self) -> Stage {
        self.snapshots.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<Stage> {
        self.snapshots.clone()
    }
}

pub struct Director {
    stage: Stage,
    actions_tx: mpsc::WeakUnboundedSender<Action>,
    actions_rx: mpsc::UnboundedReceiver<Action>,
    platform_tx: mpsc::UnboundedSender<PlatformCommand>,
    snapshots: watch::Sender<Stage>,
    ambient_tick: Option<Duration>,
}

impl Director {
    /// Create a director, its handle, and the platform command stream.
    ///
    /// `ambient_tick` enables the background heart ticker.
    pub fn new(
        stage: Stage,
        ambient_tick: Option<Duration>,
    ) -> (
        Self,
        DirectorHandle,
        mpsc::UnboundedReceiver<PlatformCommand>,
    ) {
        let (actions_tx, actions_rx) = mpsc::unbounded_channel();
        let (platform_tx, platform_rx) = mpsc::unbounded_channel();
        let (snapshots, snapshot_rx) = watch::channel(stage.clone());

        let director = Self {
            stage,
            actions_tx: actions_tx.downgrade(),
            actions_rx,
            platform_tx,
            snapshots,
            ambient_tick,
        };
        let handle = DirectorHandle {
            actions: actions_tx,
            snapshots: snapshot_rx,
        };
        (director, handle, platform_rx)
    }

    /// Process actions until every handle is dropped and all timers fired.
    pub async fn run(mut self) {
        if let Some(period) = self.ambient_tick {
            self.spawn_ambient_ticker(period);
        }

        while let Some(action) = self.actions_rx.recv().await {
            tracing::trace!(?action, "dispatch");
            let effects = self.stage.dispatch(action);
            for effect in effects {
                self.perform(effect);
            }
            self.snapshots.send_replace(self.stage.clone());
        }

        tracing::debug!("director stopped");
    }

    fn perform(&self, effect: Effect) {
        match effect {
            Effect::Schedule { delay, action } => {
                let Some(tx) = self.actions_tx.upgrade() else {
                    return;
                };
                tokio::spawn(async move {
                    sleep(delay).await;
                    let _ = tx.send(action);
                });
            }
            Effect::Audio(cmd) => self.forward(PlatformCommand::Audio(cmd)),
            Effect::Alert(message) => self.forward(PlatformCommand::Alert(message)),
            Effect::ResetGalleryScroll => self.forward(PlatformCommand::ResetGalleryScroll),
        }
    }

    fn forward(&self, cmd: PlatformCommand) {
        if self.platform_tx.send(cmd).is_err() {
            tracing::debug!("platform receiver dropped");
        }
    }

    fn spawn_ambient_ticker(&self, period: Duration) {
        let weak = self.actions_tx.clone();
        tokio::spawn(async move {
            let mut ticker = interval_at(Instant::now() + period, period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                ticker.tick().await;
                let Some(tx) = weak.upgrade() else {
                    break;
                };
                if tx.send(Action::AmbientTick).is_err() {
                    break;
                }
            }
        });
    }
}
