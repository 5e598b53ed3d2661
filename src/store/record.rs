//! Best-score record and preference traits.
//!
//! The engine never touches storage directly. It is handed a
//! `ScoreRecord` and asks it for, or offers it, the best move count per
//! grid size. Group size and difficulty label do not affect the key.

use rustc_hash::FxHashMap;

use super::theme::Theme;
use crate::core::Result;

/// Best move count per grid size.
pub trait ScoreRecord {
    /// Best recorded move count for `grid_size`, if any.
    fn best(&self, grid_size: usize) -> Option<u32>;

    /// Store `moves` as the best for `grid_size`, unconditionally.
    fn set_best(&mut self, grid_size: usize, moves: u32) -> Result<()>;

    /// Record `moves` if it beats the stored best (or none exists).
    ///
    /// Returns whether the record changed. Ties do not count.
    fn offer(&mut self, grid_size: usize, moves: u32) -> Result<bool> {
        match self.best(grid_size) {
            Some(best) if moves >= best => Ok(false),
            _ => {
                self.set_best(grid_size, moves)?;
                Ok(true)
            }
        }
    }
}

/// Persisted theme choice.
pub trait PreferenceStore {
    fn theme(&self) -> Option<Theme>;

    fn set_theme(&mut self, theme: Theme) -> Result<()>;
}

impl<T: ScoreRecord + ?Sized> ScoreRecord for Box<T> {
    fn best(&self, grid_size: usize) -> Option<u32> {
        (**self).best(grid_size)
    }

    fn set_best(&mut self, grid_size: usize, moves: u32) -> Result<()> {
        (**self).set_best(grid_size, moves)
    }
}

/// In-memory store; nothing survives the process.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    best: FxHashMap<usize, u32>,
    theme: Option<Theme>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl ScoreRecord for MemoryStore {
    fn best(&self, grid_size: usize) -> Option<u32> {
        self.best.get(&grid_size).copied()
    }

    fn set_best(&mut self, grid_size: usize, moves: u32) -> Result<()> {
        self.best.insert(grid_size, moves);
        Ok(())
    }
}

impl PreferenceStore for MemoryStore {
    fn theme(&self) -> Option<Theme> {
        self.theme
    }

    fn set_theme(&mut self, theme: Theme) -> Result<()> {
        self.theme = Some(theme);
        Ok(())
    }
}
