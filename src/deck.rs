use crate::cards::{Card, Rank, Suit};
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum DeckError {
    #[error("deck is out of cards")]
    Exhausted,
    #[error("cannot deal {requested} cards, only {available} remaining")]
    NotEnoughCards { requested: usize, available: usize },
}

/// A standard 52-card deck that remembers what it has dealt.
///
/// Every card appears exactly once across the undealt and dealt piles, so
/// anything dealt from one deck is duplicate-free.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
    dealt: Vec<Card>,
}

impl Deck {
    /// ```
    /// use poker_showdown::deck::Deck;
    ///
    /// let deck = Deck::standard();
    /// assert_eq!(deck.len(), 52);
    /// ```
    pub fn standard() -> Self {
        let cards = Suit::ALL
            .iter()
            .flat_map(|&s| Rank::ALL.iter().map(move |&r| Card::new(r, s)))
            .collect();
        Self { cards, dealt: Vec::with_capacity(52) }
    }

    /// Number of undealt cards.
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Cards dealt since the last [`Deck::collect`], in deal order.
    pub fn dealt(&self) -> &[Card] {
        &self.dealt
    }

    /// Shuffle using a seeded RNG for reproducibility.
    pub fn shuffle_seeded(&mut self, seed: u64) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        self.cards.shuffle(&mut rng);
    }

    /// Shuffle using the provided RNG implementing Rng.
    pub fn shuffle_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    /// Return every dealt card to the undealt pile. Call a shuffle afterwards
    /// to start a new hand.
    pub fn collect(&mut self) {
        self.cards.append(&mut self.dealt);
    }

    /// Deal one card from the top of the deck.
    pub fn deal(&mut self) -> Result<Card, DeckError> {
        let card = self.cards.pop().ok_or(DeckError::Exhausted)?;
        self.dealt.push(card);
        Ok(card)
    }

    /// Deal `n` cards from the top of the deck. Nothing is dealt on error.
    pub fn deal_n(&mut self, n: usize) -> Result<Vec<Card>, DeckError> {
        if n > self.cards.len() {
            return Err(DeckError::NotEnoughCards { requested: n, available: self.cards.len() });
        }
        (0..n).map(|_| self.deal()).collect()
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::standard()
    }
}
