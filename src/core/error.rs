//! Engine error type.
//!
//! Only programmer and integration errors live here. Interactive
//! no-ops (clicking a matched card, clicking while a mismatch is
//! pending) are not errors and never surface as `MemoError`.

use thiserror::Error;

/// Errors returned by engine operations.
#[derive(Debug, Error)]
pub enum MemoError {
    /// Difficulty name is not one of `easy`, `medium`, `hard`.
    #[error("unknown difficulty level: {0:?}")]
    InvalidLevel(String),

    /// Theme name is not `light` or `dark`.
    #[error("unknown theme: {0:?}")]
    InvalidTheme(String),

    /// Card index outside the deck.
    #[error("card index {index} out of range for deck of {len} cards")]
    IndexOutOfRange { index: usize, len: usize },

    /// Configuration violates grid/group/move-limit bounds.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// A face pool must hold at least one identifier.
    #[error("face pool is empty")]
    EmptyFacePool,

    /// Snapshot decoded but describes an impossible session.
    #[error("corrupt session snapshot: {0}")]
    CorruptSnapshot(String),

    #[error("record store I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("record store JSON failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("snapshot encoding failed: {0}")]
    Snapshot(#[from] bincode::Error),
}

/// Crate result alias.
pub type Result<T> = std::result::Result<T, MemoError>;
