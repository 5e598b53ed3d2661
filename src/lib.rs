//! # memo-engine
//!
//! Game-state engine for a tile-matching memory game.
//!
//! Cards are dealt face down on a square grid. The player turns cards up
//! one at a time; once `group_size` cards are up they count as one move.
//! If they all share a face they stay up as a match, otherwise they flip
//! back. Matching every full group wins; running out of moves loses.
//!
//! ## Design Principles
//!
//! 1. **Groups, not pairs**: every rule is written for N-card groups
//!    (2..=10), including boards whose card count is not a multiple of N.
//!
//! 2. **No global state**: all mutable game state lives in a
//!    `MatchSession`. Score records and preferences are injected stores.
//!
//! 3. **Presentation stays outside**: the engine emits `SessionEvent`s and
//!    never owns a timer. The flip-back delay after a mismatch is run by
//!    the caller, who returns a generation-stamped `MismatchTicket`.
//!
//! ## Modules
//!
//! - `core`: configuration, errors, deterministic RNG, shuffle
//! - `cards`: faces, cards, deck construction
//! - `rules`: difficulty presets and override clamping
//! - `session`: session state machine, events, snapshots, controller
//! - `store`: best-score records and theme preference
//!
//! ## Example
//!
//! ```
//! use memo_engine::{GameRng, MemoGame, MemoryStore, SessionEvent};
//!
//! let mut game = MemoGame::with_defaults(MemoryStore::new(), GameRng::new(7)).unwrap();
//! let events = game.reveal(0).unwrap();
//! assert_eq!(events, vec![SessionEvent::Revealed { index: 0 }]);
//! ```

pub mod cards;
pub mod core;
pub mod rules;
pub mod session;
pub mod store;

// Re-export commonly used types
pub use crate::core::{shuffle, GameConfig, GameRng, MemoError, Result};

pub use crate::cards::{build_deck, Card, CardState, Deck, FaceId, FacePool};

pub use crate::rules::{clamp_overrides, resolve, Difficulty};

pub use crate::session::{
    MatchSession, MemoGame, MismatchTicket, Outcome, SessionEvent, SessionObserver,
    SessionSnapshot,
};

pub use crate::store::{JsonStore, MemoryStore, PreferenceStore, ScoreRecord, Theme};
