//! Backend services integration.
//!
//! This module connects the UI to the embedded player:
//! - The bridge carrying remote-control calls into the webview
//! - The player service owning the bridge and the loop monitor

pub mod bridge;
pub mod player;

pub use player::PlayerService;
