//! Transport buttons.

use dioxus::prelude::*;

use crate::services::PlayerService;
use crate::state::player::Readiness;
use crate::state::AppState;

/// Play / Pause / Stop.
///
/// Play re-arms looping and rewinds to the loop start before starting
/// playback; Stop disarms looping and parks the position back at the loop
/// start. Pause only pauses.
#[component]
pub fn TransportControls() -> Element {
    let app_state = use_context::<AppState>();
    let player = use_context::<Signal<PlayerService>>();
    let disabled = *app_state.player.readiness.read() == Readiness::NotReady;
    let mut looping = app_state.player.looping;
    let loop_start = app_state.player.loop_start;

    rsx! {
        div { class: "player__transport",
            button {
                class: "player__button",
                disabled: disabled,
                onclick: move |_| {
                    *looping.write() = true;
                    player.read().play_from(*loop_start.peek());
                },
                "Play"
            }
            button {
                class: "player__button",
                disabled: disabled,
                onclick: move |_| {
                    player.read().pause();
                },
                "Pause"
            }
            button {
                class: "player__button",
                disabled: disabled,
                onclick: move |_| {
                    *looping.write() = false;
                    player.read().stop_at(*loop_start.peek());
                },
                "Stop"
            }
        }
    }
}
