//! A single card on the board.

use serde::{Deserialize, Serialize};

use super::face::FaceId;

/// Visibility of a card.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardState {
    /// Face down.
    #[default]
    Hidden,
    /// Face up as part of the current selection.
    Revealed,
    /// Face up for good; part of a completed group.
    Matched,
}

/// A card: a fixed face plus its current state.
///
/// The face never changes once the card is dealt; only `state` moves.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    face: FaceId,

    /// Current visibility.
    pub state: CardState,
}

impl Card {
    /// A face-down card.
    #[must_use]
    pub const fn new(face: FaceId) -> Self {
        Self {
            face,
            state: CardState::Hidden,
        }
    }

    /// The card's face.
    #[must_use]
    pub const fn face(&self) -> FaceId {
        self.face
    }

    #[must_use]
    pub fn is_hidden(&self) -> bool {
        self.state == CardState::Hidden
    }

    #[must_use]
    pub fn is_matched(&self) -> bool {
        self.state == CardState::Matched
    }
}
