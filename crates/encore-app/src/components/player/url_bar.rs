//! Free-text URL field with a Go action.

use dioxus::prelude::*;
use tracing::info;

use encore_core::VideoId;

use crate::services::PlayerService;
use crate::state::player::Readiness;
use crate::state::AppState;

/// URL entry. Whatever follows the first `v=` is handed to the embed as the
/// id, unvalidated; garbage makes the embed report its own failure.
#[component]
pub fn UrlBar() -> Element {
    let app_state = use_context::<AppState>();
    let player = use_context::<Signal<PlayerService>>();
    let disabled = *app_state.player.readiness.read() == Readiness::NotReady;
    let mut url = app_state.player.url;

    rsx! {
        div { class: "player__url",
            span { class: "player__url-label", "URL:" }
            input {
                class: "player__url-input",
                r#type: "text",
                placeholder: "https://www.youtube.com/watch?v=...",
                value: "{url}",
                oninput: move |evt| url.set(evt.value()),
            }
            button {
                class: "player__button",
                disabled: disabled,
                onclick: move |_| {
                    let id = VideoId::from_url(&url.read());
                    info!(%id, "loading video");
                    player.read().load_video(id);
                },
                "Go"
            }
        }
    }
}
