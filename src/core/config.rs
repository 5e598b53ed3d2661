//! Game configuration.
//!
//! A `GameConfig` fixes the board for one session:
//! - `grid_size`: the board is `grid_size × grid_size` cards
//! - `group_size`: how many identical cards make one match
//! - `move_limit`: completed groups allowed before the session is lost
//!
//! Configs are plain values. They are produced by the difficulty policy
//! (`rules::Difficulty`) or built directly, and are immutable for the
//! lifetime of a session.

use serde::{Deserialize, Serialize};

use super::error::{MemoError, Result};

/// Smallest group size (classic pairs).
pub const MIN_GROUP_SIZE: usize = 2;
/// Largest group size accepted.
pub const MAX_GROUP_SIZE: usize = 10;
/// Group size used when no usable override is supplied.
pub const DEFAULT_GROUP_SIZE: usize = 2;

/// Smallest move limit.
pub const MIN_MOVE_LIMIT: u32 = 1;
/// Largest move limit.
pub const MAX_MOVE_LIMIT: u32 = 999;
/// Move limit used when no usable override is supplied.
pub const DEFAULT_MOVE_LIMIT: u32 = 999;

/// Number of face images shipped with the game.
pub const DEFAULT_FACE_COUNT: usize = 32;

/// Complete configuration for one session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameConfig {
    /// Cards per side of the square board.
    pub grid_size: usize,

    /// Cards per matching group (2 = pairs, 3 = triples, ...).
    pub group_size: usize,

    /// Completed groups allowed before the session is lost.
    pub move_limit: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_size: 4,
            group_size: DEFAULT_GROUP_SIZE,
            move_limit: DEFAULT_MOVE_LIMIT,
        }
    }
}

impl GameConfig {
    /// Create a validated configuration.
    pub fn new(grid_size: usize, group_size: usize, move_limit: u32) -> Result<Self> {
        let config = Self {
            grid_size,
            group_size,
            move_limit,
        };
        config.validate()?;
        Ok(config)
    }

    /// Set the grid size.
    #[must_use]
    pub fn with_grid_size(mut self, grid_size: usize) -> Self {
        self.grid_size = grid_size;
        self
    }

    /// Set the group size.
    #[must_use]
    pub fn with_group_size(mut self, group_size: usize) -> Self {
        self.group_size = group_size;
        self
    }

    /// Set the move limit.
    #[must_use]
    pub fn with_move_limit(mut self, move_limit: u32) -> Self {
        self.move_limit = move_limit;
        self
    }

    /// Check the bounds every session relies on.
    pub fn validate(&self) -> Result<()> {
        if self.grid_size == 0 {
            return Err(MemoError::InvalidConfig("grid size must be at least 1".into()));
        }
        if self.grid_size.checked_mul(self.grid_size).is_none() {
            return Err(MemoError::InvalidConfig(format!(
                "grid size {} overflows the card count",
                self.grid_size
            )));
        }
        if !(MIN_GROUP_SIZE..=MAX_GROUP_SIZE).contains(&self.group_size) {
            return Err(MemoError::InvalidConfig(format!(
                "group size {} outside {}..={}",
                self.group_size, MIN_GROUP_SIZE, MAX_GROUP_SIZE
            )));
        }
        if !(MIN_MOVE_LIMIT..=MAX_MOVE_LIMIT).contains(&self.move_limit) {
            return Err(MemoError::InvalidConfig(format!(
                "move limit {} outside {}..={}",
                self.move_limit, MIN_MOVE_LIMIT, MAX_MOVE_LIMIT
            )));
        }
        Ok(())
    }

    /// Total cards on the board.
    #[must_use]
    pub fn total_cards(&self) -> usize {
        self.grid_size * self.grid_size
    }

    /// Matched groups needed to win. Leftover cards that cannot form a
    /// full group are never required.
    #[must_use]
    pub fn groups_to_win(&self) -> usize {
        self.total_cards() / self.group_size
    }
}

impl std::fmt::Display for GameConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}x{} grid, groups of {}, {} moves",
            self.grid_size, self.grid_size, self.group_size, self.move_limit
        )
    }
}
