//! UI components for Encore.

pub mod player;

pub use player::PlayerScreen;
