//! # Encore
//!
//! An A-B loop practice player for `YouTube`, built with Rust and Dioxus.

// RSX macros generate code that triggers these warnings incorrectly
#![allow(unused_qualifications)]
#![allow(clippy::use_self)]

mod components;
mod services;
mod state;

use anyhow::Result;
use components::PlayerScreen;
use dioxus::desktop::tao::window::Icon;
use dioxus::desktop::{Config, WindowBuilder};
use dioxus::prelude::*;
use services::player::{use_loop_monitor, use_player_service, use_player_sync};
use state::AppState;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Window dimensions: the embed plus the control stack below it.
const WINDOW_WIDTH: f64 = 680.0;
const WINDOW_HEIGHT: f64 = 780.0;

/// Load the app icon from embedded PNG.
fn load_icon() -> Option<Icon> {
    let icon_bytes = include_bytes!("../assets/icons/icon.png");
    let img = image::load_from_memory(icon_bytes).ok()?.into_rgba8();
    let (width, height) = img.dimensions();
    Icon::from_rgba(img.into_raw(), width, height).ok()
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "encore=debug,encore_app=debug,encore_player=debug".into()),
        )
        .init();

    info!("Starting Encore v{}", env!("CARGO_PKG_VERSION"));

    // Load app icon
    let icon = load_icon();

    let mut window_builder = WindowBuilder::new()
        .with_title("Encore")
        .with_inner_size(dioxus::desktop::LogicalSize::new(WINDOW_WIDTH, WINDOW_HEIGHT))
        .with_resizable(true);

    if let Some(icon) = icon {
        window_builder = window_builder.with_window_icon(Some(icon));
    }

    let config = Config::new().with_window(window_builder).with_menu(None);

    // Launch the Dioxus app with custom config
    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(App);

    Ok(())
}

/// Main application component.
#[component]
fn App() -> Element {
    // Initialize global state
    let app_state = use_context_provider(AppState::new);

    // Initialize the player service and share it with child components
    let player = use_player_service();

    // Webview pump: readiness handshake, bridge requests, readout sync
    use_player_sync(player, app_state.clone());

    // Restart the loop monitor whenever its inputs change
    use_loop_monitor(player, app_state);

    rsx! {
        // Inject CSS
        style { {include_str!("../assets/styles.css")} }

        div { class: "app",
            PlayerScreen {}
        }
    }
}
