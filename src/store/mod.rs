//! Best-score records and preferences.
//!
//! The session only sees the `ScoreRecord` trait. `MemoryStore` keeps
//! everything in process; `JsonStore` persists to a single JSON file.

pub mod json;
pub mod record;
pub mod theme;

pub use json::{JsonStore, RECORDS_FILE_NAME};
pub use record::{MemoryStore, PreferenceStore, ScoreRecord};
pub use theme::Theme;
