//! Gift box component.

use dioxus::prelude::*;
use giftbox_core::Action;

use crate::context::{use_actions, use_stage};

/// The wrapped box. Clicking it lifts the lid; only the first click counts.
#[component]
pub fn GiftBox() -> Element {
    let stage = use_stage();
    let actions = use_actions();

    let (shown, open) = {
        let stage = stage.read();
        (stage.reveal().gift_shown(), stage.reveal().gift_open())
    };

    rsx! {
        div { class: if shown { "gift-container show" } else { "gift-container" },
            div {
                class: if open { "gift-box open" } else { "gift-box" },
                onclick: move |_| actions.send(Action::GiftClicked),

                div { class: "gift-lid",
                    div { class: "gift-bow" }
                }
                div { class: "gift-body",
                    div { class: "gift-ribbon" }
                }
            }
            if !open {
                p { class: "gift-hint", "Tap the gift" }
            }
        }
    }
}
