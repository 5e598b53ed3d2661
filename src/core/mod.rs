//! Core engine types: configuration, errors, RNG, shuffling.
//!
//! Nothing in here knows about cards or sessions; the other modules
//! build on these pieces.

pub mod config;
pub mod error;
pub mod rng;
pub mod shuffle;

pub use config::{
    GameConfig, DEFAULT_FACE_COUNT, DEFAULT_GROUP_SIZE, DEFAULT_MOVE_LIMIT, MAX_GROUP_SIZE,
    MAX_MOVE_LIMIT, MIN_GROUP_SIZE, MIN_MOVE_LIMIT,
};
pub use error::{MemoError, Result};
pub use rng::GameRng;
pub use shuffle::shuffle;
