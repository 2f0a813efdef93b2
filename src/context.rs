//! Stage context for Giftbox.
//!
//! The App component owns the director. Children read the latest stage
//! snapshot through [`use_stage`] and report DOM events through
//! [`use_actions`].
//!
//! ## Usage
//!
//! ```ignore
//! let stage = use_stage();
//! let actions = use_actions();
//!
//! rsx! {
//!     button {
//!         class: if stage.read().reveal().gift_open() { "gift-box open" } else { "gift-box" },
//!         onclick: move |_| actions.send(Action::GiftClicked),
//!     }
//! }
//! ```

use dioxus::prelude::*;
use giftbox_core::{Action, Stage, StageConfig};

/// Get the configuration the app was launched with.
pub fn get_stage_config() -> StageConfig {
    crate::get_stage_config()
}

/// Hook to access the latest stage snapshot.
///
/// Updated every time the director finishes an action.
pub fn use_stage() -> Signal<Stage> {
    use_context::<Signal<Stage>>()
}

/// Hook to send actions to the director.
///
/// The coroutine forwards each action to the director's queue, so sending
/// never blocks the UI.
pub fn use_actions() -> Coroutine<Action> {
    use_coroutine_handle::<Action>()
}
