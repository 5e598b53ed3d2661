//! Saving and resuming a session.
//!
//! A snapshot captures the board mid-game so an interrupted run can be
//! picked up later. It is encoded with `bincode`. Restoring validates
//! everything, since the bytes may come from an older build or a
//! damaged file.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::state::{MatchSession, Outcome, Selection};
use crate::cards::{Card, CardState, Deck, FaceId};
use crate::core::{GameConfig, MemoError, Result};

/// Serializable state of one session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub config: GameConfig,
    pub cards: Vec<Card>,
    pub selection: Vec<usize>,
    pub move_count: u32,
    pub matched_groups: usize,
    pub outcome: Outcome,
}

impl SessionSnapshot {
    /// Encode as bytes.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        Ok(bincode::serialize(self)?)
    }

    /// Decode bytes written by `to_bytes`.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        Ok(bincode::deserialize(bytes)?)
    }

    fn check(&self) -> Result<()> {
        let corrupt = |msg: String| Err(MemoError::CorruptSnapshot(msg));
        let config = &self.config;

        if let Err(err) = config.validate() {
            return corrupt(err.to_string());
        }
        if self.cards.len() != config.total_cards() {
            return corrupt(format!(
                "{} cards for a {}x{} grid",
                self.cards.len(),
                config.grid_size,
                config.grid_size
            ));
        }
        if self.selection.len() > config.group_size {
            return corrupt(format!("selection of {} exceeds group size", self.selection.len()));
        }
        for (pos, &index) in self.selection.iter().enumerate() {
            match self.cards.get(index) {
                Some(card) if card.state == CardState::Revealed => {}
                Some(_) => return corrupt(format!("selected card {index} is not face up")),
                None => return corrupt(format!("selected card {index} is off the board")),
            }
            if self.selection[..pos].contains(&index) {
                return corrupt(format!("card {index} selected twice"));
            }
        }

        let revealed = self.cards.iter().filter(|c| c.state == CardState::Revealed).count();
        if revealed != self.selection.len() {
            return corrupt(format!("{revealed} face-up cards but {} selected", self.selection.len()));
        }

        // Matched cards must split into whole single-face groups.
        let mut matched_by_face: FxHashMap<FaceId, usize> = FxHashMap::default();
        for card in self.cards.iter().filter(|c| c.is_matched()) {
            *matched_by_face.entry(card.face()).or_insert(0) += 1;
        }
        let mut groups = 0;
        for (face, count) in matched_by_face {
            if count % config.group_size != 0 {
                return corrupt(format!("{count} matched cards of {face} do not form whole groups"));
            }
            groups += count / config.group_size;
        }
        if groups != self.matched_groups {
            return corrupt(format!("{groups} matched groups on the board, {} recorded", self.matched_groups));
        }

        if self.move_count > config.move_limit {
            return corrupt(format!("{} moves exceed the limit of {}", self.move_count, config.move_limit));
        }
        let complete = self.matched_groups == config.groups_to_win();
        let exhausted = self.move_count >= config.move_limit;
        match self.outcome {
            Outcome::Won if !complete => corrupt("won with groups left".into()),
            Outcome::Ongoing | Outcome::Lost if complete => corrupt("all groups matched but not won".into()),
            Outcome::Ongoing if exhausted => corrupt("ongoing with no moves left".into()),
            Outcome::Lost if !exhausted => corrupt("lost with moves left".into()),
            _ => Ok(()),
        }
    }
}

impl MatchSession {
    /// Capture the current state.
    #[must_use]
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            config: self.config,
            cards: self.deck.cards().to_vec(),
            selection: self.selection.to_vec(),
            move_count: self.move_count,
            matched_groups: self.matched_groups,
            outcome: self.outcome,
        }
    }

    /// Rebuild a session from a snapshot under a new generation.
    ///
    /// A mismatch that was still showing is flipped back, since its
    /// ticket died with the old session.
    pub fn restore(snapshot: SessionSnapshot, generation: u64) -> Result<Self> {
        snapshot.check()?;

        let SessionSnapshot {
            config,
            mut cards,
            selection,
            move_count,
            matched_groups,
            outcome,
        } = snapshot;

        let mut selection: Selection = selection.into_iter().collect();
        if selection.len() == config.group_size {
            for &i in &selection {
                cards[i].state = CardState::Hidden;
            }
            selection.clear();
        }

        let mut session = MatchSession::new(config, Deck::from_cards(cards), generation)?;
        session.selection = selection;
        session.move_count = move_count;
        session.matched_groups = matched_groups;
        session.outcome = outcome;
        Ok(session)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs_session() -> MatchSession {
        let config = GameConfig::new(2, 2, 10).unwrap();
        let deck = Deck::from_faces([0, 1, 0, 1].map(FaceId::new));
        MatchSession::new(config, deck, 1).unwrap()
    }

    #[test]
    fn test_snapshot_restore() {
        let mut session = pairs_session();
        session.reveal(0).unwrap();
        session.reveal(2).unwrap();
        session.reveal(1).unwrap();

        let bytes = session.snapshot().to_bytes().unwrap();
        let restored = MatchSession::restore(SessionSnapshot::from_bytes(&bytes).unwrap(), 2).unwrap();

        assert_eq!(restored.generation(), 2);
        assert_eq!(restored.move_count(), 1);
        assert_eq!(restored.matched_groups(), 1);
        assert_eq!(restored.selection(), &[1]);
        assert_eq!(restored.deck(), session.deck());
    }

    #[test]
    fn test_restore_flips_pending_mismatch() {
        let mut session = pairs_session();
        session.reveal(0).unwrap();
        session.reveal(1).unwrap();

        let restored = MatchSession::restore(session.snapshot(), 2).unwrap();
        assert!(restored.selection().is_empty());
        assert!(restored.pending_mismatch().is_none());
        assert!(restored.card(0).unwrap().is_hidden());
        assert_eq!(restored.move_count(), 1);
    }

    #[test]
    fn test_rejects_short_deck() {
        let mut snapshot = pairs_session().snapshot();
        snapshot.cards.pop();
        assert!(matches!(
            MatchSession::restore(snapshot, 2),
            Err(MemoError::CorruptSnapshot(_))
        ));
    }

    #[test]
    fn test_rejects_bad_selection() {
        let mut snapshot = pairs_session().snapshot();
        snapshot.selection = vec![3];
        assert!(matches!(
            MatchSession::restore(snapshot, 2),
            Err(MemoError::CorruptSnapshot(_))
        ));
    }

    #[test]
    fn test_rejects_inconsistent_outcome() {
        let mut snapshot = pairs_session().snapshot();
        snapshot.outcome = Outcome::Won;
        assert!(matches!(
            MatchSession::restore(snapshot, 2),
            Err(MemoError::CorruptSnapshot(_))
        ));
    }

    fn assert_corrupt(snapshot: SessionSnapshot) {
        assert!(matches!(
            MatchSession::restore(snapshot, 2),
            Err(MemoError::CorruptSnapshot(_))
        ));
    }

    /// 2x2 pairs with a limit of 3, one mismatch played.
    fn limited_snapshot() -> SessionSnapshot {
        let config = GameConfig::new(2, 2, 3).unwrap();
        let deck = Deck::from_faces([0, 1, 0, 1].map(FaceId::new));
        let mut session = MatchSession::new(config, deck, 1).unwrap();
        session.reveal(0).unwrap();
        session.reveal(1).unwrap();
        session.resolve_mismatch(session.ticket());
        session.snapshot()
    }

    #[test]
    fn test_rejects_ongoing_at_limit() {
        let mut snapshot = limited_snapshot();
        snapshot.move_count = 3;
        assert_corrupt(snapshot);
    }

    #[test]
    fn test_rejects_moves_past_limit() {
        let mut snapshot = limited_snapshot();
        snapshot.move_count = 4;
        snapshot.outcome = Outcome::Lost;
        assert_corrupt(snapshot);
    }

    #[test]
    fn test_rejects_lost_with_moves_left() {
        let mut snapshot = limited_snapshot();
        snapshot.outcome = Outcome::Lost;
        assert_corrupt(snapshot);
    }

    #[test]
    fn test_accepts_lost_at_limit() {
        let mut snapshot = limited_snapshot();
        snapshot.move_count = 3;
        snapshot.outcome = Outcome::Lost;

        let restored = MatchSession::restore(snapshot, 2).unwrap();
        assert_eq!(restored.outcome(), Outcome::Lost);
    }

    #[test]
    fn test_rejects_mixed_face_match() {
        let mut snapshot = limited_snapshot();
        snapshot.cards[0].state = CardState::Matched;
        snapshot.cards[1].state = CardState::Matched;
        snapshot.matched_groups = 1;
        assert_corrupt(snapshot);
    }

    #[test]
    fn test_accepts_reused_face_groups() {
        // One face backing two matched pairs is two groups, not a mix.
        let config = GameConfig::new(2, 2, 10).unwrap();
        let mut session = MatchSession::new(config, Deck::from_faces([0, 0, 0, 0].map(FaceId::new)), 1).unwrap();
        session.reveal(0).unwrap();
        session.reveal(1).unwrap();

        let restored = MatchSession::restore(session.snapshot(), 2).unwrap();
        assert_eq!(restored.matched_groups(), 1);

        let mut snapshot = session.snapshot();
        snapshot.cards[2].state = CardState::Matched;
        assert_corrupt(snapshot);
    }

    #[test]
    fn test_garbage_bytes() {
        assert!(matches!(
            SessionSnapshot::from_bytes(&[1, 2, 3]),
            Err(MemoError::Snapshot(_))
        ));
    }
}
