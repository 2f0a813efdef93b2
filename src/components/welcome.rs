//! Welcome message - the first screen.
//!
//! Fades out (`hide`) as soon as Start is pressed and leaves the layout once
//! the fade has run, so it can never cover the gallery.

use dioxus::prelude::*;
use giftbox_core::Action;

use crate::context::{use_actions, use_stage};

#[component]
pub fn WelcomeMessage() -> Element {
    let stage = use_stage();
    let actions = use_actions();

    let reveal = stage.read().reveal().clone();
    let class = if reveal.welcome_hiding() {
        "welcome-message hide"
    } else {
        "welcome-message"
    };
    let style = if reveal.welcome_removed() {
        "display: none;"
    } else {
        ""
    };

    rsx! {
        div { class: "{class}", style: "{style}",
            h1 { class: "welcome-title", "Hey, you" }
            p { class: "welcome-text",
                "Something small is waiting for you. Turn the sound on and press start."
            }
            button {
                class: "start-button",
                onclick: move |_| actions.send(Action::StartPressed),
                "Start"
            }
        }
    }
}
