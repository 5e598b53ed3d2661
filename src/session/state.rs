//! Match session state machine.
//!
//! A session owns one deck and runs it to a win or a loss:
//!
//! ```text
//!            reveal ──▶ group complete ──▶ all full groups matched ──▶ Won
//! Ongoing ──┤                        └──▶ moves ≥ limit ───────────▶ Lost
//!            └─ (ignored: terminal, card up, selection full, limit hit)
//! ```
//!
//! Reveals that the board cannot accept are silent no-ops; only an index
//! outside the deck is an error.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::{debug, info};

use super::event::{MismatchTicket, SessionEvent};
use crate::cards::{Card, CardState, Deck, FaceId};
use crate::core::{GameConfig, MemoError, Result, MAX_GROUP_SIZE};

/// Where a session stands.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    #[default]
    Ongoing,
    Won,
    Lost,
}

impl Outcome {
    #[must_use]
    pub fn is_terminal(self) -> bool {
        self != Outcome::Ongoing
    }
}

/// Currently revealed, not yet resolved cards.
pub(crate) type Selection = SmallVec<[usize; MAX_GROUP_SIZE]>;

/// One playthrough of a deck.
#[derive(Clone, Debug)]
pub struct MatchSession {
    pub(crate) config: GameConfig,
    pub(crate) deck: Deck,
    pub(crate) selection: Selection,
    pub(crate) move_count: u32,
    pub(crate) matched_groups: usize,
    pub(crate) outcome: Outcome,
    pub(crate) mismatch_pending: bool,
    generation: u64,
}

impl MatchSession {
    /// Start a session on `deck`, which must hold `grid_size²` cards.
    pub fn new(config: GameConfig, deck: Deck, generation: u64) -> Result<Self> {
        config.validate()?;
        if deck.len() != config.total_cards() {
            return Err(MemoError::InvalidConfig(format!(
                "deck has {} cards, {} grid needs {}",
                deck.len(),
                config.grid_size,
                config.total_cards()
            )));
        }

        Ok(Self {
            config,
            deck,
            selection: Selection::new(),
            move_count: 0,
            matched_groups: 0,
            outcome: Outcome::Ongoing,
            mismatch_pending: false,
            generation,
        })
    }

    /// Turn the card at `index` face up.
    ///
    /// Returns the events produced, in order. An empty list means the
    /// reveal was ignored.
    pub fn reveal(&mut self, index: usize) -> Result<Vec<SessionEvent>> {
        let card = self.deck.get(index).ok_or(MemoError::IndexOutOfRange {
            index,
            len: self.deck.len(),
        })?;

        if let Some(reason) = self.reject_reason(card) {
            debug!(target: "memo.session", index, reason, "reveal ignored");
            return Ok(Vec::new());
        }

        if let Some(card) = self.deck.get_mut(index) {
            card.state = CardState::Revealed;
        }
        self.selection.push(index);

        let mut events = vec![SessionEvent::Revealed { index }];
        if self.selection.len() == self.config.group_size {
            self.complete_group(&mut events);
        }
        Ok(events)
    }

    fn reject_reason(&self, card: &Card) -> Option<&'static str> {
        if self.outcome.is_terminal() {
            Some("session over")
        } else if !card.is_hidden() {
            Some("card already face up")
        } else if self.selection.len() >= self.config.group_size {
            Some("selection full")
        } else if self.move_count >= self.config.move_limit && self.selection.is_empty() {
            Some("move limit reached")
        } else {
            None
        }
    }

    fn complete_group(&mut self, events: &mut Vec<SessionEvent>) {
        self.move_count += 1;
        events.push(SessionEvent::MoveCountChanged {
            moves: self.move_count,
        });

        let indices = self.selection.to_vec();
        let first = self.face_at(indices[0]);
        let all_same = indices.iter().all(|&i| self.face_at(i) == first);

        if all_same {
            for &i in &indices {
                if let Some(card) = self.deck.get_mut(i) {
                    card.state = CardState::Matched;
                }
            }
            self.matched_groups += 1;
            self.selection.clear();
            events.push(SessionEvent::Matched { indices });

            if self.matched_groups == self.config.groups_to_win() {
                self.outcome = Outcome::Won;
                info!(target: "memo.session", generation = self.generation, moves = self.move_count, "session won");
                events.push(SessionEvent::Won {
                    moves: self.move_count,
                });
            }
        } else {
            self.mismatch_pending = true;
            events.push(SessionEvent::MismatchPending {
                indices,
                ticket: self.ticket(),
            });
        }

        if self.move_count >= self.config.move_limit && self.outcome == Outcome::Ongoing {
            self.outcome = Outcome::Lost;
            info!(target: "memo.session", generation = self.generation, moves = self.move_count, "session lost");
            events.push(SessionEvent::Lost {
                moves: self.move_count,
            });
        }
    }

    fn face_at(&self, index: usize) -> Option<FaceId> {
        self.deck.get(index).map(Card::face)
    }

    /// Flip a pending mismatch back face down.
    ///
    /// No-op when the ticket belongs to another generation or nothing is
    /// pending. Runs even after the session ended, so the board settles.
    pub fn resolve_mismatch(&mut self, ticket: MismatchTicket) -> Vec<SessionEvent> {
        if ticket.generation != self.generation {
            debug!(
                target: "memo.session",
                ticket = ticket.generation,
                live = self.generation,
                "stale mismatch ticket ignored"
            );
            return Vec::new();
        }
        if !self.mismatch_pending {
            return Vec::new();
        }

        let indices = self.selection.to_vec();
        for &i in &indices {
            if let Some(card) = self.deck.get_mut(i) {
                card.state = CardState::Hidden;
            }
        }
        self.selection.clear();
        self.mismatch_pending = false;

        vec![SessionEvent::MismatchResolved { indices }]
    }

    /// Ticket for this session's pending mismatch.
    #[must_use]
    pub fn ticket(&self) -> MismatchTicket {
        MismatchTicket {
            generation: self.generation,
        }
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Card at `index`.
    #[must_use]
    pub fn card(&self, index: usize) -> Option<&Card> {
        self.deck.get(index)
    }

    /// Revealed cards awaiting resolution, in reveal order.
    #[must_use]
    pub fn selection(&self) -> &[usize] {
        &self.selection
    }

    #[must_use]
    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    /// Moves left before the limit.
    #[must_use]
    pub fn moves_remaining(&self) -> u32 {
        self.config.move_limit.saturating_sub(self.move_count)
    }

    #[must_use]
    pub fn matched_groups(&self) -> usize {
        self.matched_groups
    }

    #[must_use]
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.outcome.is_terminal()
    }

    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Is a mismatched group waiting to be flipped back?
    #[must_use]
    pub fn pending_mismatch(&self) -> Option<MismatchTicket> {
        self.mismatch_pending.then(|| self.ticket())
    }
}
