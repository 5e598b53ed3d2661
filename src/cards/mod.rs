//! Cards, faces and decks.
//!
//! - `FacePool`: the catalog of faces a deck draws from
//! - `Card`: one board position with a fixed face and a mutable state
//! - `Deck`: the shuffled board layout, built by `build_deck`

pub mod card;
pub mod deck;
pub mod face;

pub use card::{Card, CardState};
pub use deck::{build_deck, Deck};
pub use face::{FaceId, FacePool};
