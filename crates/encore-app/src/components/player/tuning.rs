//! Volume and playback-rate sliders.

use dioxus::prelude::*;

use encore_core::{PlaybackRate, Volume};

use crate::services::PlayerService;
use crate::state::player::Readiness;
use crate::state::AppState;

/// Volume and rate sliders.
///
/// Each change writes state and pushes exactly one call to the embed,
/// synchronously with the input event; the poll timer plays no part here.
#[component]
pub fn TuningControls() -> Element {
    let app_state = use_context::<AppState>();
    let player = use_context::<Signal<PlayerService>>();
    let disabled = *app_state.player.readiness.read() == Readiness::NotReady;
    let mut volume = app_state.player.volume;
    let mut rate = app_state.player.rate;

    let volume_percent = volume.read().as_percent();
    let rate_value = rate.read().as_f64();
    let rate_min = PlaybackRate::MIN.as_f64();
    let rate_max = PlaybackRate::MAX.as_f64();
    let rate_step = PlaybackRate::STEP;

    rsx! {
        div { class: "player__sliders",
            label { class: "player__slider-row",
                span { class: "player__slider-label", "Volume: {volume_percent}%" }
                input {
                    r#type: "range",
                    min: "0",
                    max: "100",
                    step: "1",
                    value: "{volume_percent}",
                    disabled: disabled,
                    oninput: move |evt| {
                        if let Ok(percent) = evt.value().parse::<u8>() {
                            let changed = Volume::new(percent);
                            *volume.write() = changed;
                            player.read().set_volume(changed);
                        }
                    },
                }
            }
            label { class: "player__slider-row",
                span { class: "player__slider-label", "Rate: {rate_value:.2}x" }
                input {
                    r#type: "range",
                    min: "{rate_min}",
                    max: "{rate_max}",
                    step: "{rate_step}",
                    value: "{rate_value}",
                    disabled: disabled,
                    oninput: move |evt| {
                        if let Ok(value) = evt.value().parse::<f64>() {
                            let changed = PlaybackRate::new(value);
                            *rate.write() = changed;
                            player.read().set_playback_rate(changed);
                        }
                    },
                }
            }
        }
    }
}
