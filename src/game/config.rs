//! Round configuration

use crate::core::GRID_SIZE;
use crate::wordlists::DICE;

/// Length of a timed round in seconds
pub const GAME_DURATION: u32 = 90;

/// How a round ends
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Countdown; the board is fixed until the clock runs out
    Timed,
    /// No clock; new boards and reveal-all are available at any time
    Endless,
}

impl Mode {
    /// Parse a mode name as printed by [`Mode::name`]
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "timed" => Some(Self::Timed),
            "endless" => Some(Self::Endless),
            _ => None,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Timed => "timed",
            Self::Endless => "endless",
        }
    }
}

/// Settings shared by every round of a game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub grid_size: usize,
    pub duration: u32,
    pub dice: Vec<String>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_size: GRID_SIZE,
            duration: GAME_DURATION,
            dice: DICE.iter().map(|&d| d.to_string()).collect(),
        }
    }
}

impl GameConfig {
    #[must_use]
    pub fn with_duration(mut self, seconds: u32) -> Self {
        self.duration = seconds;
        self
    }

    /// Use a different board size
    ///
    /// The default dice only cover a 4x4 board; for other sizes the default
    /// set is repeated in order until every cell has a die.
    #[must_use]
    pub fn with_grid_size(mut self, size: usize) -> Self {
        self.grid_size = size;
        if size != GRID_SIZE {
            self.dice = DICE
                .iter()
                .cycle()
                .take(size * size)
                .map(|&d| d.to_string())
                .collect();
        }
        self
    }

    #[must_use]
    pub fn with_dice(mut self, dice: Vec<String>) -> Self {
        self.dice = dice;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_standard_game() {
        let config = GameConfig::default();
        assert_eq!(config.grid_size, 4);
        assert_eq!(config.duration, 90);
        assert_eq!(config.dice.len(), 16);
    }

    #[test]
    fn resized_board_gets_enough_dice() {
        let config = GameConfig::default().with_grid_size(5);
        assert_eq!(config.dice.len(), 25);
        assert_eq!(config.dice[16], config.dice[0]);
    }

    #[test]
    fn mode_names() {
        assert_eq!(Mode::from_name("endless"), Some(Mode::Endless));
        assert_eq!(Mode::from_name("Timed"), Some(Mode::Timed));
        assert_eq!(Mode::Endless.name(), "endless");
        for mode in [Mode::Timed, Mode::Endless] {
            assert_eq!(Mode::from_name(mode.name()), Some(mode));
        }
    }

    #[test]
    fn unknown_mode_names_are_rejected() {
        assert_eq!(Mode::from_name("endles"), None);
        assert_eq!(Mode::from_name("zen"), None);
        assert_eq!(Mode::from_name(""), None);
    }
}
