//! Particle layers.
//!
//! Pure renderers: the director decides when hearts and confetti appear and
//! disappear, these just draw whatever is live in the snapshot.

use dioxus::prelude::*;

use crate::context::use_stage;

/// Floating hearts behind everything else
#[component]
pub fn FloatingHearts() -> Element {
    let stage = use_stage();
    let hearts: Vec<(u64, String)> = stage
        .read()
        .particles()
        .hearts()
        .map(|h| (h.id, h.style()))
        .collect();

    rsx! {
        div { class: "floating-hearts",
            for (id, style) in hearts {
                div { key: "{id}", class: "heart", style: "{style}" }
            }
        }
    }
}

/// Confetti pieces, positioned against the viewport
#[component]
pub fn ConfettiLayer() -> Element {
    let stage = use_stage();
    let pieces: Vec<(u64, String)> = stage
        .read()
        .particles()
        .confetti()
        .map(|p| (p.id, p.style()))
        .collect();

    rsx! {
        div { class: "confetti-layer",
            for (id, style) in pieces {
                div { key: "{id}", class: "confetti", style: "{style}" }
            }
        }
    }
}
