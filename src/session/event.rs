//! Session events.
//!
//! Every state change a reveal causes is reported as a `SessionEvent`,
//! in the order it happened. The presentation layer turns them into
//! animation and sound; the engine never waits on the observer.

use serde::{Deserialize, Serialize};

/// Claim on a pending mismatch, stamped with the session generation.
///
/// The presentation layer holds the ticket for its flip-back delay and
/// hands it to `resolve_mismatch` afterwards. A ticket from an earlier
/// session is ignored.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MismatchTicket {
    pub generation: u64,
}

/// Something that happened during a session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionEvent {
    /// Card turned face up.
    Revealed { index: usize },
    /// A group was completed and counted as a move.
    MoveCountChanged { moves: u32 },
    /// The completed group shares one face; cards stay up.
    Matched { indices: Vec<usize> },
    /// The completed group differs; cards flip back once the ticket is
    /// resolved.
    MismatchPending {
        indices: Vec<usize>,
        ticket: MismatchTicket,
    },
    /// Mismatched cards are face down again.
    MismatchResolved { indices: Vec<usize> },
    /// Every full group is matched.
    Won { moves: u32 },
    /// Move limit reached before winning.
    Lost { moves: u32 },
}

impl SessionEvent {
    /// Does this event end the session?
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        matches!(self, SessionEvent::Won { .. } | SessionEvent::Lost { .. })
    }
}

/// Receiver of session events.
pub trait SessionObserver {
    fn notify(&mut self, event: &SessionEvent);
}

impl<F: FnMut(&SessionEvent)> SessionObserver for F {
    fn notify(&mut self, event: &SessionEvent) {
        self(event)
    }
}
