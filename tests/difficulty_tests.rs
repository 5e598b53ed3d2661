//! Difficulty policy tests.
//!
//! These tests drive the settings form the way a front end would: a level
//! name plus two free-text numeric fields.

use memo_engine::core::{GameConfig, MemoError};
use memo_engine::rules::{clamp_overrides, resolve, Difficulty};

/// Preset table.
#[test]
fn test_level_table() {
    let expected = [("easy", (4, 2, 50)), ("medium", (6, 4, 120)), ("hard", (8, 6, 200))];
    for (name, (grid, group, limit)) in expected {
        let config = resolve(name).unwrap();
        assert_eq!(config, GameConfig::new(grid, group, limit).unwrap(), "{name}");
    }
}

/// Unknown names fail loudly.
#[test]
fn test_invalid_level() {
    assert!(matches!(resolve("expert"), Err(MemoError::InvalidLevel(_))));
}

/// Group size 15 clamps to 10; move limit 1500 resets to 999.
#[test]
fn test_oversized_overrides() {
    assert_eq!(clamp_overrides(Some("15"), None), (10, 999));
    assert_eq!(clamp_overrides(None, Some("1500")), (2, 999));
}

/// Move limit 1000 resets rather than clamping; 999 is kept as-is.
#[test]
fn test_move_limit_reset_is_not_a_clamp() {
    assert_eq!(clamp_overrides(Some("3"), Some("1000")), (3, 999));
    assert_eq!(clamp_overrides(Some("3"), Some("999")), (3, 999));
    assert_eq!(clamp_overrides(Some("3"), Some("500")), (3, 500));
}

/// Form text with units or stray spaces still parses.
#[test]
fn test_form_text() {
    assert_eq!(clamp_overrides(Some(" 4 "), Some("30 moves")), (4, 30));
    assert_eq!(clamp_overrides(Some(""), Some("")), (2, 999));
}

/// Every clamped result is a valid configuration on every level.
#[test]
fn test_configure_always_valid() {
    let samples = [None, Some(""), Some("0"), Some("-1"), Some("1"), Some("7"), Some("11"), Some("999"), Some("5000")];
    for level in Difficulty::ALL {
        for group in samples {
            for limit in samples {
                let config = level.configure(group, limit);
                assert!(config.validate().is_ok(), "{level} {group:?} {limit:?}");
                assert_eq!(config.grid_size, level.config().grid_size);
            }
        }
    }
}
