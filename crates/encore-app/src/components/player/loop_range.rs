//! Loop bound sliders.

use dioxus::prelude::*;

use crate::state::player::Readiness;
use crate::state::AppState;

/// Loop start and end sliders.
///
/// The start slider tops out at the current end; the end slider starts at
/// the current start and tops out at the video duration. Both write straight
/// to state; the monitor effect picks the change up and restarts polling
/// with the new bounds.
#[component]
pub fn LoopRangeControls() -> Element {
    let app_state = use_context::<AppState>();
    let disabled = *app_state.player.readiness.read() == Readiness::NotReady;
    let mut loop_start = app_state.player.loop_start;
    let mut loop_end = app_state.player.loop_end;

    let start = *loop_start.read();
    let end = *loop_end.read();
    let total = *app_state.player.duration.read();

    rsx! {
        div { class: "player__sliders",
            label { class: "player__slider-row",
                span { class: "player__slider-label", "Loop start: {start:.0}s" }
                input {
                    r#type: "range",
                    min: "0",
                    max: "{end}",
                    step: "1",
                    value: "{start}",
                    disabled: disabled,
                    oninput: move |evt| {
                        if let Ok(seconds) = evt.value().parse::<f64>() {
                            *loop_start.write() = seconds;
                        }
                    },
                }
            }
            label { class: "player__slider-row",
                span { class: "player__slider-label", "Loop end: {end:.0}s" }
                input {
                    r#type: "range",
                    min: "{start}",
                    max: "{total}",
                    step: "1",
                    value: "{end}",
                    disabled: disabled,
                    oninput: move |evt| {
                        if let Ok(seconds) = evt.value().parse::<f64>() {
                            *loop_end.write() = seconds;
                        }
                    },
                }
            }
        }
    }
}
