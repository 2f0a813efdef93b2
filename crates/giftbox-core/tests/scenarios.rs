//! Timed end-to-end scenarios
//!
//! Runs a real Director on a paused tokio clock so every delay in the
//! choreography can be checked to the millisecond.

use std::time::Duration;

use giftbox_core::{
    Action, AudioCommand, AudioEvent, ContentKey, Director, DirectorHandle, GestureKind, Media,
    MusicIcon, PlatformCommand, PlayOrigin, RevealState, Stage, StageConfig,
};
use tokio::sync::mpsc::UnboundedReceiver;

fn quiet_config() -> StageConfig {
    StageConfig {
        seed: Some(1),
        ambient_hearts: false,
        ..StageConfig::default()
    }
}

fn launch(config: StageConfig) -> (DirectorHandle, UnboundedReceiver<PlatformCommand>) {
    let ambient = config
        .ambient_hearts
        .then(|| config.timings.ambient_tick());
    let (director, handle, platform) = Director::new(Stage::new(&config), ambient);
    tokio::spawn(director.run());
    (handle, platform)
}

async fn advance(ms: u64) {
    tokio::time::sleep(Duration::from_millis(ms)).await;
}

fn drain(rx: &mut UnboundedReceiver<PlatformCommand>) -> Vec<PlatformCommand> {
    let mut out = Vec::new();
    while let Ok(cmd) = rx.try_recv() {
        out.push(cmd);
    }
    out
}

/// Start, wait for the gift box, click it, wait for the gallery.
async fn reveal_gallery(handle: &DirectorHandle) {
    handle.dispatch(Action::StartPressed).unwrap();
    advance(600).await;
    handle.dispatch(Action::GiftClicked).unwrap();
    advance(1001).await;
}

// ============================================================================
// Reveal
// ============================================================================

#[tokio::test(start_paused = true)]
async fn start_hides_welcome_then_shows_gift() {
    let (handle, mut platform) = launch(quiet_config());

    handle.dispatch(Action::StartPressed).unwrap();
    advance(1).await;

    let stage = handle.snapshot();
    assert!(stage.reveal().welcome_hiding());
    assert!(!stage.reveal().welcome_removed());
    assert!(!stage.reveal().gift_shown());

    let cmds = drain(&mut platform);
    assert!(matches!(
        cmds[0],
        PlatformCommand::Audio(AudioCommand::Init { .. })
    ));
    assert_eq!(
        cmds[1],
        PlatformCommand::Audio(AudioCommand::Play {
            origin: PlayOrigin::Start
        })
    );

    advance(498).await;
    assert!(!handle.snapshot().reveal().welcome_removed());

    advance(2).await;
    let stage = handle.snapshot();
    assert!(stage.reveal().welcome_removed());
    assert!(stage.reveal().gift_shown());
    assert_eq!(stage.reveal().state(), RevealState::GiftClosed);
    assert!(stage.particles().heart_count() >= 1);
    assert!(stage.particles().heart_count() < 30);

    // Burst started at 500ms and staggers 29 × 100ms
    advance(2900).await;
    assert_eq!(handle.snapshot().particles().heart_count(), 30);
}

#[tokio::test(start_paused = true)]
async fn rapid_start_clicks_burst_once() {
    let (handle, _platform) = launch(quiet_config());

    for _ in 0..5 {
        handle.dispatch(Action::StartPressed).unwrap();
        advance(50).await;
    }
    advance(3500).await;

    // One burst of 30, none expired yet (minimum heart lifetime is 4s)
    assert_eq!(handle.snapshot().particles().heart_count(), 30);
}

#[tokio::test(start_paused = true)]
async fn gift_opens_gallery_once() {
    let (handle, mut platform) = launch(quiet_config());

    handle.dispatch(Action::StartPressed).unwrap();
    advance(600).await;
    drain(&mut platform);

    handle.dispatch(Action::GiftClicked).unwrap();
    handle.dispatch(Action::GiftClicked).unwrap();
    advance(1).await;
    let stage = handle.snapshot();
    assert!(stage.reveal().gift_open());
    assert!(!stage.reveal().gallery_shown());

    advance(998).await;
    assert!(!handle.snapshot().reveal().gallery_shown());

    advance(2).await;
    let stage = handle.snapshot();
    assert!(stage.reveal().gallery_shown());
    assert_eq!(stage.particles().confetti_count(), 100);

    let cmds = drain(&mut platform);
    let scroll_resets = cmds
        .iter()
        .filter(|c| **c == PlatformCommand::ResetGalleryScroll)
        .count();
    assert_eq!(scroll_resets, 1);
    // Music was requested but never confirmed, so the box retries once
    let resumes = cmds
        .iter()
        .filter(|c| {
            **c == PlatformCommand::Audio(AudioCommand::Play {
                origin: PlayOrigin::GiftBox,
            })
        })
        .count();
    assert_eq!(resumes, 1);

    handle.dispatch(Action::GiftClicked).unwrap();
    advance(2000).await;
    assert!(drain(&mut platform).is_empty());
}

#[tokio::test(start_paused = true)]
async fn confetti_falls_and_expires() {
    let (handle, _platform) = launch(quiet_config());
    reveal_gallery(&handle).await;

    let stage = handle.snapshot();
    assert_eq!(stage.particles().confetti_count(), 100);
    assert!(stage.particles().confetti().all(|p| !p.fallen));

    advance(50).await;
    assert!(handle.snapshot().particles().confetti().all(|p| p.fallen));

    advance(2940).await;
    assert_eq!(handle.snapshot().particles().confetti_count(), 100);

    advance(20).await;
    assert_eq!(handle.snapshot().particles().confetti_count(), 0);
}

#[tokio::test(start_paused = true)]
async fn reveal_never_regresses() {
    let (handle, _platform) = launch(quiet_config());
    reveal_gallery(&handle).await;

    for action in [
        Action::StartPressed,
        Action::GiftClicked,
        Action::WelcomeFaded,
        Action::GiftOpened,
        Action::EscapePressed,
    ] {
        handle.dispatch(action).unwrap();
        advance(1100).await;
        assert_eq!(handle.snapshot().reveal().state(), RevealState::GalleryShown);
    }
}

// ============================================================================
// Particles
// ============================================================================

#[tokio::test(start_paused = true)]
async fn hearts_leave_within_lifetime() {
    let (handle, _platform) = launch(quiet_config());

    handle.dispatch(Action::StartPressed).unwrap();
    advance(3401).await;
    assert_eq!(handle.snapshot().particles().heart_count(), 30);

    // Last heart spawned at 3400ms and lives under 10s
    advance(10_000).await;
    assert_eq!(handle.snapshot().particles().heart_count(), 0);
}

#[tokio::test(start_paused = true)]
async fn ambient_hearts_stay_sparse() {
    let config = StageConfig {
        seed: Some(99),
        ..StageConfig::default()
    };
    let (handle, _platform) = launch(config);

    let mut peak = 0;
    for _ in 0..120 {
        advance(500).await;
        peak = peak.max(handle.snapshot().particles().heart_count());
    }
    assert!(peak > 0, "no ambient hearts in a minute");
    // A heart lives under 10s, so at most 20 ticks can overlap
    assert!(peak <= 21, "peak {peak}");
}

// ============================================================================
// Gallery modal
// ============================================================================

#[tokio::test(start_paused = true)]
async fn modal_opens_then_closes_on_escape() {
    let (handle, _platform) = launch(quiet_config());
    reveal_gallery(&handle).await;

    handle
        .dispatch(Action::GalleryClicked(ContentKey::from_position(3)))
        .unwrap();
    advance(1).await;
    let stage = handle.snapshot();
    assert!(stage.modal().is_displayed());
    assert!(!stage.modal().is_shown());
    assert_eq!(stage.modal().content().unwrap().title, "Perfect Evening");

    advance(10).await;
    assert!(handle.snapshot().modal().is_shown());

    handle.dispatch(Action::EscapePressed).unwrap();
    advance(1).await;
    let stage = handle.snapshot();
    assert!(!stage.modal().is_shown());
    assert!(stage.modal().is_displayed());

    advance(298).await;
    assert!(handle.snapshot().modal().is_displayed());

    advance(2).await;
    assert!(!handle.snapshot().modal().is_displayed());
}

#[tokio::test(start_paused = true)]
async fn closed_video_is_unmounted() {
    let (handle, _platform) = launch(quiet_config());
    reveal_gallery(&handle).await;

    handle
        .dispatch(Action::GalleryClicked(ContentKey::from_position(10)))
        .unwrap();
    advance(20).await;
    let stage = handle.snapshot();
    assert!(matches!(
        stage.modal().content().map(|c| &c.media),
        Some(Media::Video(_))
    ));

    handle.dispatch(Action::EscapePressed).unwrap();
    advance(301).await;
    let stage = handle.snapshot();
    assert!(!stage.modal().is_displayed());
    assert!(stage.modal().content().is_none());
}

#[tokio::test(start_paused = true)]
async fn every_close_trigger_hides_modal() {
    let (handle, _platform) = launch(quiet_config());
    reveal_gallery(&handle).await;

    for close in [Action::CloseModal, Action::BackdropClicked, Action::EscapePressed] {
        handle
            .dispatch(Action::GalleryClicked(ContentKey::from_position(1)))
            .unwrap();
        advance(20).await;
        assert!(handle.snapshot().modal().is_shown());

        handle.dispatch(close).unwrap();
        advance(301).await;
        assert!(!handle.snapshot().modal().is_displayed());
    }
}

#[tokio::test(start_paused = true)]
async fn each_item_shows_its_own_record() {
    let (handle, _platform) = launch(quiet_config());
    reveal_gallery(&handle).await;

    for n in 1..=11 {
        let key = ContentKey::from_position(n);
        handle.dispatch(Action::GalleryClicked(key.clone())).unwrap();
        advance(20).await;

        let stage = handle.snapshot();
        let record = stage.gallery().catalog.get(&key).unwrap();
        let content = stage.modal().content().unwrap();
        assert_eq!(content.key, key);
        assert_eq!(content.title, record.title);
        assert_eq!(content.description, record.description);
        assert_eq!(content.quote, record.quote);

        handle.dispatch(Action::CloseModal).unwrap();
        advance(301).await;
    }
}

// ============================================================================
// Audio
// ============================================================================

#[tokio::test(start_paused = true)]
async fn icon_follows_confirmed_state() {
    let (handle, mut platform) = launch(quiet_config());

    handle.dispatch(Action::ToggleMusic).unwrap();
    advance(1).await;
    assert_eq!(handle.snapshot().music_icon(), MusicIcon::Music);

    handle.dispatch(Action::Audio(AudioEvent::Playing)).unwrap();
    advance(1).await;
    assert_eq!(handle.snapshot().music_icon(), MusicIcon::Pause);

    handle.dispatch(Action::ToggleMusic).unwrap();
    advance(1).await;
    // Pause requested, not yet confirmed
    assert_eq!(handle.snapshot().music_icon(), MusicIcon::Pause);
    assert_eq!(
        drain(&mut platform).last(),
        Some(&PlatformCommand::Audio(AudioCommand::Pause))
    );

    handle.dispatch(Action::Audio(AudioEvent::Paused)).unwrap();
    advance(1).await;
    assert_eq!(handle.snapshot().music_icon(), MusicIcon::Music);
}

#[tokio::test(start_paused = true)]
async fn gestures_initialize_audio_once() {
    let (handle, mut platform) = launch(quiet_config());

    for kind in GestureKind::ALL {
        handle.dispatch(Action::Gesture(kind)).unwrap();
    }
    handle.dispatch(Action::Gesture(GestureKind::Click)).unwrap();
    advance(1).await;

    let cmds = drain(&mut platform);
    let inits = cmds
        .iter()
        .filter(|c| matches!(c, PlatformCommand::Audio(AudioCommand::Init { .. })))
        .count();
    let plays = cmds
        .iter()
        .filter(|c| matches!(c, PlatformCommand::Audio(AudioCommand::Play { .. })))
        .count();
    assert_eq!(inits, 1);
    assert_eq!(plays, 4);
    assert!(handle.snapshot().gestures().exhausted());
}

#[tokio::test(start_paused = true)]
async fn blocked_play_button_alerts() {
    let (handle, mut platform) = launch(quiet_config());

    handle.dispatch(Action::PlayButtonPressed).unwrap();
    handle
        .dispatch(Action::Audio(AudioEvent::PlayRejected {
            origin: PlayOrigin::PlayButton,
            reason: "NotAllowedError".to_string(),
        }))
        .unwrap();
    advance(1).await;

    let cmds = drain(&mut platform);
    assert!(matches!(cmds.last(), Some(PlatformCommand::Alert(_))));
    assert_eq!(handle.snapshot().music_icon(), MusicIcon::Music);
}

// ============================================================================
// Lifecycle
// ============================================================================

#[tokio::test(start_paused = true)]
async fn director_stops_when_handles_drop() {
    let config = quiet_config();
    let (director, handle, _platform) = Director::new(Stage::new(&config), None);
    let task = tokio::spawn(director.run());

    drop(handle);
    task.await.unwrap();
}

#[tokio::test(start_paused = true)]
async fn dispatch_after_stop_fails() {
    let config = quiet_config();
    let (director, handle, _platform) = Director::new(Stage::new(&config), None);
    let task = tokio::spawn(director.run());

    task.abort();
    let _ = task.await;
    assert!(handle.dispatch(Action::StartPressed).is_err());
}
