//! Deck construction.
//!
//! A deck is the full board layout for one session: exactly
//! `grid_size²` cards in deal order. Faces are taken from the pool in
//! order, `group_size` copies each. When the pool runs out the faces wrap
//! around, so a small pool can back several groups with the same face.
//! When the card count is not a multiple of the group size, the last
//! group is cut short and can never be matched.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::card::Card;
use super::face::{FaceId, FacePool};
use crate::core::{GameConfig, GameRng, MemoError, Result, MIN_GROUP_SIZE};

/// Ordered cards for one session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Deck with the given faces in the given order, all hidden.
    #[must_use]
    pub fn from_faces(faces: impl IntoIterator<Item = FaceId>) -> Self {
        Self {
            cards: faces.into_iter().map(Card::new).collect(),
        }
    }

    pub(crate) fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Build a shuffled deck for `config`.
    pub fn for_config(config: &GameConfig, pool: &FacePool, rng: &mut GameRng) -> Result<Self> {
        config.validate()?;
        build_deck(config.total_cards(), config.group_size, pool, rng)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Card at `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Card> {
        self.cards.get(index)
    }

    pub(crate) fn get_mut(&mut self, index: usize) -> Option<&mut Card> {
        self.cards.get_mut(index)
    }

    /// All cards in deal order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    /// Faces in deal order.
    #[must_use]
    pub fn faces(&self) -> Vec<FaceId> {
        self.cards.iter().map(Card::face).collect()
    }

    /// How many cards carry each face.
    #[must_use]
    pub fn face_counts(&self) -> FxHashMap<FaceId, usize> {
        let mut counts = FxHashMap::default();
        for card in &self.cards {
            *counts.entry(card.face()).or_insert(0) += 1;
        }
        counts
    }
}

/// Build a shuffled deck of exactly `total_cards` cards.
///
/// 1. `ceil(total_cards / group_size)` faces are taken from `pool`,
///    wrapping around if the pool is smaller.
/// 2. The chosen faces are put in random order, then each is expanded
///    into `group_size` copies.
/// 3. Any shortfall is padded by cycling the pool by position.
/// 4. The sequence is cut to `total_cards` and shuffled.
///
/// Every face in the result comes from `pool`. Each appears `group_size`
/// times, except the last group dealt, which keeps at least one card.
/// Which face ends up short is random.
pub fn build_deck(
    total_cards: usize,
    group_size: usize,
    pool: &FacePool,
    rng: &mut GameRng,
) -> Result<Deck> {
    if group_size < MIN_GROUP_SIZE {
        return Err(MemoError::InvalidConfig(format!(
            "group size {group_size} is below {MIN_GROUP_SIZE}"
        )));
    }
    if pool.is_empty() {
        return Err(MemoError::EmptyFacePool);
    }

    let unique_needed = total_cards.div_ceil(group_size);
    let mut chosen: Vec<FaceId> = (0..unique_needed).map(|i| pool.id_at(i)).collect();
    rng.shuffle(&mut chosen);

    let mut faces: Vec<FaceId> = Vec::with_capacity(unique_needed * group_size);
    for face in chosen {
        faces.extend(std::iter::repeat(face).take(group_size));
    }
    while faces.len() < total_cards {
        faces.push(pool.id_at(faces.len()));
    }

    // Trim before shuffling so only the final group comes up short.
    faces.truncate(total_cards);
    rng.shuffle(&mut faces);

    debug!(
        target: "memo.deck",
        total_cards,
        group_size,
        unique_faces = unique_needed,
        pool_size = pool.len(),
        "deck built"
    );

    Ok(Deck::from_faces(faces))
}
