//! The player screen: the embed plus its control stack.

mod embed;
mod loop_range;
mod transport;
mod tuning;
mod url_bar;

use dioxus::prelude::*;

use encore_core::format_seconds;

use crate::state::player::Readiness;
use crate::state::AppState;

use embed::PlayerEmbed;
use loop_range::LoopRangeControls;
use transport::TransportControls;
use tuning::TuningControls;
use url_bar::UrlBar;

/// Full player screen.
#[component]
pub fn PlayerScreen() -> Element {
    let app_state = use_context::<AppState>();
    let readiness = *app_state.player.readiness.read();
    let status = *app_state.player.status.read();
    let position = *app_state.player.position.read();
    let duration = *app_state.player.duration.read();
    let looping = *app_state.player.looping.read();

    rsx! {
        div { class: "player",
            PlayerEmbed {}

            div { class: "player__readout",
                span { class: "player__status", "{status.label()}" }
                span { class: "player__clock",
                    "{format_seconds(position)} / {format_seconds(duration)}"
                }
                if looping {
                    span { class: "player__loop-badge", "loop" }
                }
                if readiness == Readiness::NotReady {
                    span { class: "player__waiting", "waiting for player..." }
                }
            }

            TransportControls {}
            LoopRangeControls {}
            TuningControls {}
            UrlBar {}
        }
    }
}
