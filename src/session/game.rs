//! Game controller.
//!
//! `MemoGame` is what a front end holds on to. It owns everything that
//! outlives a single session (configuration, face pool, RNG, score
//! record, observer) plus the live `MatchSession`.
//!
//! Restarting never edits the live session: a new deck is dealt and the
//! session is replaced wholesale under the next generation number. Any
//! `MismatchTicket` still in flight from the old session then no longer
//! matches and resolves to nothing.

use tracing::{info, warn};

use super::event::{MismatchTicket, SessionEvent, SessionObserver};
use super::snapshot::SessionSnapshot;
use super::state::MatchSession;
use crate::cards::{Deck, FacePool};
use crate::core::{GameConfig, GameRng, Result};
use crate::rules::Difficulty;
use crate::store::ScoreRecord;

/// Owns the live session and its long-lived collaborators.
pub struct MemoGame<S: ScoreRecord> {
    config: GameConfig,
    faces: FacePool,
    rng: GameRng,
    records: S,
    observer: Option<Box<dyn SessionObserver>>,
    generation: u64,
    session: MatchSession,
}

impl<S: ScoreRecord> MemoGame<S> {
    /// Create a game and deal the first session.
    pub fn new(config: GameConfig, faces: FacePool, records: S, mut rng: GameRng) -> Result<Self> {
        let generation = 1;
        let session = Self::deal(&config, &faces, &mut rng, generation)?;
        Ok(Self {
            config,
            faces,
            rng,
            records,
            observer: None,
            generation,
            session,
        })
    }

    /// Game on the easy preset with the shipped face images.
    pub fn with_defaults(records: S, rng: GameRng) -> Result<Self> {
        Self::new(Difficulty::default().config(), FacePool::default_images(), records, rng)
    }

    fn deal(config: &GameConfig, faces: &FacePool, rng: &mut GameRng, generation: u64) -> Result<MatchSession> {
        let mut session_rng = rng.fork();
        let deck = Deck::for_config(config, faces, &mut session_rng)?;
        let session = MatchSession::new(*config, deck, generation)?;
        info!(
            target: "memo.game",
            generation,
            seed = session_rng.seed(),
            grid_size = config.grid_size,
            group_size = config.group_size,
            move_limit = config.move_limit,
            "session started"
        );
        Ok(session)
    }

    /// Attach an observer that receives every event.
    pub fn set_observer(&mut self, observer: impl SessionObserver + 'static) {
        self.observer = Some(Box::new(observer));
    }

    /// Detach the observer.
    pub fn clear_observer(&mut self) {
        self.observer = None;
    }

    /// Deal a fresh session with the current configuration.
    pub fn restart(&mut self) -> Result<()> {
        let generation = self.generation + 1;
        self.session = Self::deal(&self.config, &self.faces, &mut self.rng, generation)?;
        self.generation = generation;
        Ok(())
    }

    /// Switch to `config` and deal a fresh session.
    ///
    /// On error the current configuration and session are left untouched.
    pub fn reconfigure(&mut self, config: GameConfig) -> Result<()> {
        config.validate()?;
        let generation = self.generation + 1;
        self.session = Self::deal(&config, &self.faces, &mut self.rng, generation)?;
        self.config = config;
        self.generation = generation;
        Ok(())
    }

    /// Apply the settings form: level name plus raw group-size and
    /// move-limit text.
    ///
    /// Returns the corrected configuration for the form to display.
    pub fn apply_settings(
        &mut self,
        level: &str,
        raw_group_size: Option<&str>,
        raw_move_limit: Option<&str>,
    ) -> Result<GameConfig> {
        let level: Difficulty = level.parse()?;
        let config = level.configure(raw_group_size, raw_move_limit);
        self.reconfigure(config)?;
        Ok(config)
    }

    /// Back to the easy preset, as the restart button does.
    pub fn reset_to_default(&mut self) -> Result<()> {
        self.reconfigure(Difficulty::default().config())
    }

    /// Resume a saved session under a new generation.
    pub fn resume(&mut self, snapshot: SessionSnapshot) -> Result<()> {
        let generation = self.generation + 1;
        let session = MatchSession::restore(snapshot, generation)?;
        self.config = *session.config();
        self.session = session;
        self.generation = generation;
        info!(target: "memo.game", generation, "session resumed");
        Ok(())
    }

    /// Reveal a card on the live session.
    ///
    /// A win is offered to the score record. Storage trouble is logged and
    /// does not undo the win.
    pub fn reveal(&mut self, index: usize) -> Result<Vec<SessionEvent>> {
        let events = self.session.reveal(index)?;

        for event in &events {
            if let SessionEvent::Won { moves } = *event {
                self.record_win(moves);
            }
        }
        self.dispatch(&events);
        Ok(events)
    }

    /// Flip back a mismatch once the presentation delay has passed.
    pub fn resolve_mismatch(&mut self, ticket: MismatchTicket) -> Vec<SessionEvent> {
        let events = self.session.resolve_mismatch(ticket);
        self.dispatch(&events);
        events
    }

    fn record_win(&mut self, moves: u32) {
        let grid_size = self.config.grid_size;
        match self.records.offer(grid_size, moves) {
            Ok(true) => info!(target: "memo.game", grid_size, moves, "new best score"),
            Ok(false) => {}
            Err(err) => warn!(target: "memo.game", grid_size, moves, error = %err, "failed to store best score"),
        }
    }

    fn dispatch(&mut self, events: &[SessionEvent]) {
        if let Some(observer) = self.observer.as_mut() {
            for event in events {
                observer.notify(event);
            }
        }
    }

    /// Best score for the current grid size.
    #[must_use]
    pub fn best_score(&self) -> Option<u32> {
        self.records.best(self.config.grid_size)
    }

    #[must_use]
    pub fn session(&self) -> &MatchSession {
        &self.session
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn faces(&self) -> &FacePool {
        &self.faces
    }

    #[must_use]
    pub fn records(&self) -> &S {
        &self.records
    }

    pub fn records_mut(&mut self) -> &mut S {
        &mut self.records
    }

    /// Generation of the live session.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    fn game() -> MemoGame<MemoryStore> {
        MemoGame::with_defaults(MemoryStore::new(), GameRng::new(42)).unwrap()
    }

    #[test]
    fn test_starts_on_easy() {
        let game = game();
        assert_eq!(*game.config(), GameConfig::new(4, 2, 50).unwrap());
        assert_eq!(game.session().deck().len(), 16);
        assert_eq!(game.generation(), 1);
        assert_eq!(game.best_score(), None);
    }

    #[test]
    fn test_restart_bumps_generation() {
        let mut game = game();
        game.restart().unwrap();
        assert_eq!(game.generation(), 2);
        assert_eq!(game.session().generation(), 2);
    }

    #[test]
    fn test_reconfigure_failure_keeps_session() {
        let mut game = game();
        let bad = GameConfig::default().with_group_size(1);
        assert!(game.reconfigure(bad).is_err());
        assert_eq!(game.generation(), 1);
        assert_eq!(game.config().group_size, 2);
    }

    #[test]
    fn test_apply_settings() {
        let mut game = game();
        let config = game.apply_settings("hard", Some("12"), Some("2000")).unwrap();
        assert_eq!(config, GameConfig::new(8, 10, 999).unwrap());
        assert_eq!(game.session().deck().len(), 64);

        assert!(game.apply_settings("extreme", None, None).is_err());
        assert_eq!(*game.config(), config);
    }

    #[test]
    fn test_reset_to_default() {
        let mut game = game();
        game.apply_settings("medium", Some("4"), Some("120")).unwrap();
        game.reset_to_default().unwrap();
        assert_eq!(*game.config(), Difficulty::Easy.config());
    }
}
