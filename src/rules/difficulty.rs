//! Difficulty presets and user overrides.
//!
//! A level fixes the grid size and suggests a group size and move limit.
//! The group size and move limit are also user-editable; raw input goes
//! through `clamp_overrides` before it reaches a `GameConfig`.
//!
//! The two overrides are corrected differently on the high side: an
//! oversized group is clamped down to the maximum, while an oversized move
//! limit falls back to the default.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::{
    GameConfig, MemoError, Result, DEFAULT_GROUP_SIZE, DEFAULT_MOVE_LIMIT, MAX_GROUP_SIZE,
    MAX_MOVE_LIMIT, MIN_GROUP_SIZE, MIN_MOVE_LIMIT,
};

/// Named difficulty level.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// All levels, easiest first.
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    /// Preset configuration for this level.
    #[must_use]
    pub const fn config(self) -> GameConfig {
        let (grid_size, group_size, move_limit) = match self {
            Difficulty::Easy => (4, 2, 50),
            Difficulty::Medium => (6, 4, 120),
            Difficulty::Hard => (8, 6, 200),
        };
        GameConfig {
            grid_size,
            group_size,
            move_limit,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }

    /// This level's grid with user-supplied group size and move limit.
    ///
    /// The returned config carries the corrected values; callers should
    /// show those back to the user.
    #[must_use]
    pub fn configure(self, raw_group_size: Option<&str>, raw_move_limit: Option<&str>) -> GameConfig {
        let (group_size, move_limit) = clamp_overrides(raw_group_size, raw_move_limit);
        self.config()
            .with_group_size(group_size)
            .with_move_limit(move_limit)
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Difficulty {
    type Err = MemoError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            _ => Err(MemoError::InvalidLevel(s.to_string())),
        }
    }
}

/// Preset configuration for a level name.
pub fn resolve(level: &str) -> Result<GameConfig> {
    level.parse::<Difficulty>().map(Difficulty::config)
}

/// Correct raw group-size and move-limit input.
///
/// Missing, non-numeric and zero input use the defaults (2 and 999).
/// Group size is clamped into `2..=10`. A move limit above 999 resets to
/// the default; below 1 it is clamped to 1.
#[must_use]
pub fn clamp_overrides(raw_group_size: Option<&str>, raw_move_limit: Option<&str>) -> (usize, u32) {
    let group_size = match parse_leading_int(raw_group_size) {
        Some(n) if n > MAX_GROUP_SIZE as i64 => MAX_GROUP_SIZE,
        Some(n) if n < MIN_GROUP_SIZE as i64 => MIN_GROUP_SIZE,
        Some(n) => n as usize,
        None => DEFAULT_GROUP_SIZE,
    };

    let move_limit = match parse_leading_int(raw_move_limit) {
        Some(n) if n > MAX_MOVE_LIMIT as i64 => DEFAULT_MOVE_LIMIT,
        Some(n) if n < MIN_MOVE_LIMIT as i64 => MIN_MOVE_LIMIT,
        Some(n) => n as u32,
        None => DEFAULT_MOVE_LIMIT,
    };

    (group_size, move_limit)
}

/// Leading integer of a form field: whitespace skipped, optional sign,
/// then digits up to the first non-digit. A `0x` prefix switches to hex.
/// Zero and digit-less input yield `None`.
fn parse_leading_int(raw: Option<&str>) -> Option<i64> {
    let s = raw?.trim_start();
    let (negative, digits) = match s.as_bytes().first().copied()? {
        b'-' => (true, &s[1..]),
        b'+' => (false, &s[1..]),
        _ => (false, s),
    };
    let (radix, digits) = match digits.get(..2) {
        Some("0x" | "0X") => (16, &digits[2..]),
        _ => (10, digits),
    };

    let end = digits
        .find(|c: char| !c.is_digit(radix))
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }

    let magnitude = digits[..end]
        .chars()
        .filter_map(|c| c.to_digit(radix))
        .fold(0i64, |acc, d| {
            acc.saturating_mul(i64::from(radix)).saturating_add(i64::from(d))
        });
    let value = if negative { -magnitude } else { magnitude };

    (value != 0).then_some(value)
}
