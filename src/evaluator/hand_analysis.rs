use super::rank_groups::RankGroups;
use super::straight::find_straight;
use super::suit_groups::SuitGroups;
use crate::cards::Card;

/// Pre-computed analysis of a 5 to 7 card hand.
/// Built once and shared by all category detectors.
#[derive(Debug, Clone)]
pub struct HandAnalysis {
    /// Every input card, rank descending.
    pub sorted_cards: Vec<Card>,
    pub rank_groups: RankGroups,
    pub suit_groups: SuitGroups,
    /// Best straight over the whole hand.
    pub straight: Option<[Card; 5]>,
    /// Best straight over the flush suit only.
    pub straight_flush: Option<[Card; 5]>,
}

impl HandAnalysis {
    pub fn new(cards: &[Card]) -> Self {
        let mut sorted_cards = cards.to_vec();
        sorted_cards.sort_by(|a, b| b.rank().cmp(&a.rank()));

        let rank_groups = RankGroups::from_cards(cards);
        let suit_groups = SuitGroups::from_cards(cards);
        let straight = find_straight(cards);
        let straight_flush = suit_groups.suited().and_then(find_straight);

        Self { sorted_cards, rank_groups, suit_groups, straight, straight_flush }
    }

    /// The five highest cards, ignoring every pattern.
    pub fn top_five(&self) -> Option<[Card; 5]> {
        self.sorted_cards.get(..5)?.try_into().ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{parse_cards, Rank, Suit};

    fn analyze(s: &str) -> HandAnalysis {
        HandAnalysis::new(&parse_cards(s).unwrap())
    }

    #[test]
    fn royal_flush_analysis() {
        let a = analyze("As Ks Qs Js Ts 2d 3c");
        assert_eq!(a.suit_groups.flush_suit(), Some(Suit::Spades));
        assert!(a.straight.is_some());
        assert_eq!(a.straight_flush.map(|xs| xs[0].rank()), Some(Rank::Ace));
        assert_eq!(a.rank_groups.primary_len(), 0);
    }

    #[test]
    fn straight_flush_uses_all_suited_cards() {
        // Top five spades are A 9 8 7 6, the straight flush is 9 down to 5.
        let a = analyze("As 9s 8s 7s 6s 5s Kd");
        let sf = a.straight_flush.unwrap();
        assert_eq!(sf[0].rank(), Rank::Nine);
        assert!(sf.iter().all(|c| c.suit() == Suit::Spades));
    }

    #[test]
    fn straight_and_flush_in_different_cards_is_not_a_straight_flush() {
        let a = analyze("9h 8c 7h 6h 5h 2h Kd");
        assert!(a.straight.is_some());
        assert!(a.suit_groups.flush().is_some());
        assert!(a.straight_flush.is_none());
    }

    #[test]
    fn cards_sorted_descending() {
        let a = analyze("3s Ah 5d Kc 9s");
        let ranks: Vec<Rank> = a.sorted_cards.iter().map(|c| c.rank()).collect();
        assert_eq!(ranks, vec![Rank::Ace, Rank::King, Rank::Nine, Rank::Five, Rank::Three]);
        assert_eq!(a.top_five().map(|xs| xs[4].rank()), Some(Rank::Three));
    }
}
