//! Match sessions and the game controller.
//!
//! - `MatchSession`: one deck played to a win or loss
//! - `SessionEvent` / `SessionObserver`: what happened, and who hears it
//! - `MismatchTicket`: generation-stamped handle for the flip-back delay
//! - `SessionSnapshot`: save/resume of an interrupted session
//! - `MemoGame`: owns the live session across restarts

pub mod event;
pub mod game;
pub mod snapshot;
pub mod state;

pub use event::{MismatchTicket, SessionEvent, SessionObserver};
pub use game::MemoGame;
pub use snapshot::SessionSnapshot;
pub use state::{MatchSession, Outcome};
