use crate::cards::{Card, Rank};

/// Cards bucketed by rank, split into the primary group, the secondary group
/// and the remaining kickers.
///
/// The primary group is the largest bucket holding at least two cards (higher
/// rank wins ties). The secondary group is the largest remaining such bucket,
/// again preferring the higher rank. Everything else is a kicker, sorted by
/// rank descending.
///
/// Example: 7 7 7 A A K K groups as primary [7 7 7], secondary [A A],
/// kickers [K K].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankGroups {
    primary: Vec<Card>,
    secondary: Vec<Card>,
    kickers: Vec<Card>,
}

impl RankGroups {
    pub fn from_cards(cards: &[Card]) -> Self {
        let mut buckets: [Vec<Card>; 13] = std::array::from_fn(|_| Vec::new());
        for &card in cards {
            buckets[card.rank().index()].push(card);
        }

        let primary = take_largest(&mut buckets);
        let secondary = take_largest(&mut buckets);

        // Buckets are ascending by rank; walk them backwards for descending kickers.
        let kickers = buckets.iter().rev().flatten().copied().collect();

        Self { primary, secondary, kickers }
    }

    pub fn primary(&self) -> &[Card] {
        &self.primary
    }

    pub fn secondary(&self) -> &[Card] {
        &self.secondary
    }

    pub fn kickers(&self) -> &[Card] {
        &self.kickers
    }

    pub fn primary_len(&self) -> usize {
        self.primary.len()
    }

    pub fn secondary_len(&self) -> usize {
        self.secondary.len()
    }

    /// Rank of the primary group, if any rank repeats.
    #[cfg(test)]
    pub fn primary_rank(&self) -> Option<Rank> {
        self.primary.first().map(|c| c.rank())
    }
}

/// Remove and return the largest bucket with at least two cards. Scanning
/// from Ace down and only replacing on a strictly larger count gives the
/// higher rank the tie.
fn take_largest(buckets: &mut [Vec<Card>; 13]) -> Vec<Card> {
    let mut best: Option<usize> = None;
    for i in (0..buckets.len()).rev() {
        let len = buckets[i].len();
        if len < 2 {
            continue;
        }
        match best {
            Some(b) if buckets[b].len() >= len => {}
            _ => best = Some(i),
        }
    }
    best.map(|i| std::mem::take(&mut buckets[i])).unwrap_or_default()
}
