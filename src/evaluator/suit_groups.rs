use crate::cards::{Card, Suit};

/// Cards bucketed by suit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuitGroups {
    buckets: [Vec<Card>; 4],
}

impl SuitGroups {
    pub fn from_cards(cards: &[Card]) -> Self {
        let mut buckets: [Vec<Card>; 4] = std::array::from_fn(|_| Vec::new());
        for &card in cards {
            buckets[card.suit().index()].push(card);
        }
        for bucket in &mut buckets {
            bucket.sort_by(|a, b| b.rank().cmp(&a.rank()));
        }
        Self { buckets }
    }

    /// The suit holding at least five cards, if any. Seven distinct cards can
    /// fill at most one such suit; with more candidates the first in
    /// [`Suit::ALL`] order is taken.
    pub fn flush_suit(&self) -> Option<Suit> {
        Suit::ALL.into_iter().find(|s| self.buckets[s.index()].len() >= 5)
    }

    /// Every card of the flush suit, sorted by rank descending.
    pub fn suited(&self) -> Option<&[Card]> {
        self.flush_suit().map(|s| self.buckets[s.index()].as_slice())
    }

    /// The top five cards of the flush suit.
    pub fn flush(&self) -> Option<[Card; 5]> {
        self.suited()?.get(..5)?.try_into().ok()
    }
}
