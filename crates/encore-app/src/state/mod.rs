//! Application state management.

pub mod player;

pub use player::PlayerState;

/// Global application state.
#[derive(Clone)]
pub struct AppState {
    /// Player state.
    pub player: PlayerState,
}

impl AppState {
    /// Create a new application state.
    pub fn new() -> Self {
        Self {
            player: PlayerState::new(),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
