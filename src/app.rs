use dioxus::prelude::*;
use futures::StreamExt;
use giftbox_core::{Action, Director, GestureKind, Stage};

use crate::components::{
    BackgroundAudio, ConfettiLayer, FloatingHearts, GalleryGrid, GiftBox, ImageModal,
    MusicToggle, PlayMusicButton, WelcomeMessage,
};
use crate::context::get_stage_config;
use crate::theme::GLOBAL_STYLES;

/// Root application component.
///
/// Starts the director, mirrors its snapshots into a signal, and listens for
/// the document-level gestures that unlock audio.
#[component]
pub fn App() -> Element {
    let config = use_hook(get_stage_config);

    let director = use_hook(|| {
        let ambient = config
            .ambient_hearts
            .then(|| config.timings.ambient_tick());
        let (director, handle, platform) = Director::new(Stage::new(&config), ambient);
        spawn(director.run());
        spawn(crate::audio_bridge::run(platform, handle.clone()));
        tracing::info!("Director started");
        handle
    });

    let mut stage: Signal<Stage> = use_signal(|| director.snapshot());
    let mut loaded = use_signal(|| false);

    // Provide the stage snapshot to all child components
    use_context_provider(|| stage);

    let queue = director.clone();
    let actions = use_coroutine(move |mut rx: UnboundedReceiver<Action>| {
        let queue = queue.clone();
        async move {
            while let Some(action) = rx.next().await {
                if let Err(e) = queue.dispatch(action) {
                    tracing::error!("Failed to dispatch action: {}", e);
                    break;
                }
            }
        }
    });

    // Mirror every published snapshot into the signal
    let snapshots = director.clone();
    use_effect(move || {
        let mut rx = snapshots.subscribe();
        spawn(async move {
            while rx.changed().await.is_ok() {
                let snapshot = rx.borrow_and_update().clone();
                stage.set(snapshot);
            }
        });
    });

    let on_keydown = move |evt: KeyboardEvent| {
        for action in key_actions(&evt.key()) {
            actions.send(action);
        }
    };

    rsx! {
        style { {GLOBAL_STYLES} }
        div {
            class: if loaded() { "giftbox-root loaded" } else { "giftbox-root" },
            tabindex: "0",
            // Key listeners live here, so the root has to own focus from the start
            onmounted: move |evt: MountedEvent| async move {
                loaded.set(true);
                if let Err(e) = evt.set_focus(true).await {
                    tracing::warn!("Failed to focus root: {:?}", e);
                }
            },
            onclick: move |_| actions.send(Action::Gesture(GestureKind::Click)),
            ontouchstart: move |_| actions.send(Action::Gesture(GestureKind::TouchStart)),
            ontouchend: move |_| actions.send(Action::Gesture(GestureKind::TouchEnd)),
            onkeydown: on_keydown,

            if config.inline_audio {
                BackgroundAudio {
                    id: config.audio.element_id.clone(),
                    src: config.audio.fallback_src.clone(),
                }
            }

            FloatingHearts {}
            ConfettiLayer {}
            WelcomeMessage {}
            GiftBox {}
            GalleryGrid {}
            ImageModal {}
            MusicToggle {}

            if config.play_button {
                PlayMusicButton {}
            }
        }
    }
}

/// Every key press is an unlock gesture; Escape also closes the modal.
fn key_actions(key: &Key) -> Vec<Action> {
    let mut out = vec![Action::Gesture(GestureKind::KeyDown)];
    if *key == Key::Escape {
        out.push(Action::EscapePressed);
    }
    out
}
