//! Image Modal Component
//!
//! Overlay showing a gallery item with its caption. Closes from the close
//! control, a click on the backdrop itself, or Escape (handled at the root).

use dioxus::prelude::*;
use giftbox_core::{Action, Media};

use crate::context::{use_actions, use_stage};

#[component]
pub fn ImageModal() -> Element {
    let stage = use_stage();
    let actions = use_actions();

    let (displayed, shown, content) = {
        let stage = stage.read();
        let modal = stage.modal();
        (modal.is_displayed(), modal.is_shown(), modal.content().cloned())
    };

    let display = if displayed { "display: block;" } else { "display: none;" };

    rsx! {
        div {
            id: "imageModal",
            class: if shown { "modal show" } else { "modal" },
            style: "{display}",
            onclick: move |_| actions.send(Action::BackdropClicked),

            div {
                class: "modal-content",
                onclick: move |e| e.stop_propagation(),

                span {
                    class: "close-modal",
                    onclick: move |e| {
                        e.stop_propagation();
                        actions.send(Action::CloseModal);
                    },
                    "\u{00D7}"
                }

                if let Some(content) = content {
                    {match &content.media {
                        Media::Image(src) => rsx! {
                            img { id: "modalImage", src: "{src}", alt: "{content.title}" }
                        },
                        Media::Video(src) => rsx! {
                            video {
                                id: "modalImage",
                                src: "{src}",
                                controls: true,
                                autoplay: true,
                                "playsinline": "true",
                            }
                        },
                    }}
                    h2 { class: "modal-title", "{content.title}" }
                    p { class: "modal-description", "{content.description}" }
                    p { class: "modal-quote", "{content.quote}" }
                }
            }
        }
    }
}
