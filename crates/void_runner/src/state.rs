//! Game state machine

/// Top-level game state
///
/// `Playing` moves to `GameOver` when the ship hits an asteroid; `GameOver`
/// moves back to `Playing` only on the restart input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum GameState {
    /// The game is running
    #[default]
    Playing,
    /// The ship was destroyed; waiting for restart
    GameOver,
}

impl GameState {
    /// Check for game over
    pub fn is_game_over(self) -> bool {
        self == Self::GameOver
    }
}
