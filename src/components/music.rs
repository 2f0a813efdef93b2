//! Music controls
//!
//! - `MusicToggle`: corner button whose icon follows confirmed playback
//! - `PlayMusicButton`: optional fallback for when the first play is blocked
//! - `BackgroundAudio`: embedded `<audio>` element preferred by the bridge

use dioxus::prelude::*;
use giftbox_core::Action;

use crate::context::{use_actions, use_stage};

#[component]
pub fn MusicToggle() -> Element {
    let stage = use_stage();
    let actions = use_actions();
    let icon = stage.read().music_icon();

    rsx! {
        button {
            class: "music-toggle",
            "aria-label": "Toggle music",
            onclick: move |_| actions.send(Action::ToggleMusic),
            i { class: "{icon.class()}", "{icon.glyph()}" }
        }
    }
}

#[component]
pub fn PlayMusicButton() -> Element {
    let actions = use_actions();

    rsx! {
        button {
            class: "play-music-button",
            onclick: move |e| {
                // The root gesture listener must not see this click
                e.stop_propagation();
                actions.send(Action::PlayButtonPressed);
            },
            "\u{266B} Play music"
        }
    }
}

#[component]
pub fn BackgroundAudio(id: String, src: String) -> Element {
    rsx! {
        audio {
            id: "{id}",
            src: "{src}",
            preload: "auto",
            "loop": "true",
            "playsinline": "true",
        }
    }
}
