//! Gallery grid.
//!
//! Each tile carries its content key in `data-content-key`; clicks resolve
//! against that key, never against the tile's position.

use dioxus::prelude::*;
use giftbox_core::{Action, GalleryItem, Media};

use crate::context::{use_actions, use_stage};

#[component]
pub fn GalleryGrid() -> Element {
    let stage = use_stage();

    let (shown, items) = {
        let stage = stage.read();
        (stage.reveal().gallery_shown(), stage.gallery().items.clone())
    };

    rsx! {
        div { class: if shown { "gallery show" } else { "gallery" },
            h2 { class: "gallery-title", "Our Moments" }
            div { class: "gallery-grid",
                for item in items {
                    GalleryTile { key: "{item.key}", item: item.clone() }
                }
            }
        }
    }
}

#[component]
fn GalleryTile(item: GalleryItem) -> Element {
    let actions = use_actions();
    let hover_key = item.key.clone();
    let click_key = item.key.clone();

    rsx! {
        div {
            class: "gallery-item",
            "data-content-key": "{item.key}",
            onmouseenter: move |_| actions.send(Action::GalleryHovered(hover_key.clone())),
            onclick: move |_| actions.send(Action::GalleryClicked(click_key.clone())),

            {match &item.media {
                Some(Media::Image(src)) => rsx! {
                    img { src: "{src}", alt: "{item.key}" }
                },
                Some(Media::Video(src)) => rsx! {
                    video {
                        src: "{src}",
                        muted: true,
                        preload: "metadata",
                        "playsinline": "true",
                    }
                },
                None => rsx! {
                    div { class: "gallery-placeholder" }
                },
            }}
        }
    }
}
