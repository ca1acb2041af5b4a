//! The embedded player container.

use dioxus::prelude::*;

use encore_core::DEFAULT_VIDEO_ID;

/// Embed geometry, the hosted player's stock size.
const EMBED_WIDTH: u32 = 640;
const EMBED_HEIGHT: u32 = 390;

/// Container the IFrame API replaces with the actual player, plus the
/// bootstrap script that installs it at `window.__encore`.
#[component]
pub fn PlayerEmbed() -> Element {
    let bootstrap = include_str!("../../../assets/player.js")
        .replace("__VIDEO_ID__", DEFAULT_VIDEO_ID)
        .replace("__WIDTH__", &EMBED_WIDTH.to_string())
        .replace("__HEIGHT__", &EMBED_HEIGHT.to_string());

    rsx! {
        div { class: "player__embed",
            div { id: "encore-embed" }
        }
        script { {bootstrap} }
    }
}
