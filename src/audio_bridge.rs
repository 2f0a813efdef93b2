//! Webview glue for platform commands.
//!
//! One long-lived eval installs `window.giftbox` and streams the audio
//! element's `playing`/`pause` events (and rejected play requests) back to
//! Rust. Each outgoing command is a short fire-and-forget eval calling
//! `window.giftbox.handle(...)`.

use dioxus::document::{self, EvalError};
use dioxus::prelude::spawn;
use giftbox_core::{Action, AudioEvent, DirectorHandle, PlatformCommand};
use serde_json::{json, Value};
use tokio::sync::mpsc::UnboundedReceiver;

const BRIDGE_JS: &str = r#"
window.giftbox = {
    audio: null,
    handle(cmd) {
        switch (cmd.cmd) {
            case "init": {
                if (this.audio) return;
                const inline = document.getElementById(cmd.element_id);
                this.audio = inline || new Audio(cmd.fallback_src);
                this.audio.loop = true;
                this.audio.preload = "auto";
                try { this.audio.setAttribute("playsinline", ""); } catch (e) {}
                this.audio.addEventListener("playing", () => dioxus.send({ event: "playing" }));
                this.audio.addEventListener("pause", () => dioxus.send({ event: "paused" }));
                dioxus.send({ event: "ready", inline: !!inline });
                return;
            }
            case "play": {
                if (!this.audio) return;
                this.audio.play().catch((err) =>
                    dioxus.send({ event: "play_rejected", origin: cmd.origin, reason: String(err) }));
                return;
            }
            case "pause":
                if (this.audio) this.audio.pause();
                return;
            case "alert":
                alert(cmd.message);
                return;
            case "reset_gallery_scroll": {
                const gallery = document.querySelector(".gallery");
                if (gallery) gallery.scrollTop = 0;
                return;
            }
        }
    },
};
await new Promise(() => {});
"#;

/// Wire form of a command as understood by `window.giftbox.handle`
fn to_wire(cmd: &PlatformCommand) -> Value {
    match cmd {
        PlatformCommand::Audio(audio) => serde_json::to_value(audio).unwrap_or(Value::Null),
        PlatformCommand::Alert(message) => json!({ "cmd": "alert", "message": message }),
        PlatformCommand::ResetGalleryScroll => json!({ "cmd": "reset_gallery_scroll" }),
    }
}

/// A single bad message leaves the eval usable; anything else ends it.
fn channel_alive(err: &EvalError) -> bool {
    matches!(err, EvalError::Serialization(_))
}

/// Forward platform commands into the webview and audio events back out.
pub async fn run(mut platform: UnboundedReceiver<PlatformCommand>, director: DirectorHandle) {
    let mut events = document::eval(BRIDGE_JS);

    spawn(async move {
        loop {
            match events.recv::<AudioEvent>().await {
                Ok(event) => {
                    if director.dispatch(Action::Audio(event)).is_err() {
                        break;
                    }
                }
                Err(e) if channel_alive(&e) => {
                    tracing::warn!("Dropped malformed audio event: {:?}", e);
                }
                Err(e) => {
                    tracing::warn!("Audio event channel closed: {:?}", e);
                    break;
                }
            }
        }
    });

    while let Some(cmd) = platform.recv().await {
        let wire = to_wire(&cmd);
        if wire.is_null() {
            tracing::warn!(?cmd, "Unencodable platform command");
            continue;
        }
        tracing::debug!(%wire, "platform command");
        let _ = document::eval(&format!(
            "if (window.giftbox) window.giftbox.handle({wire});"
        ));
    }
}
