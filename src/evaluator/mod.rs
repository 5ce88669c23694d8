pub(crate) mod detector;
pub(crate) mod hand_analysis;
pub(crate) mod rank_groups;
pub(crate) mod straight;
pub(crate) mod suit_groups;

use crate::cards::{compare_rank, Card};
use core::cmp::Ordering;
use std::fmt;

/// Smallest hand `classify` accepts.
pub const MIN_HAND_SIZE: usize = 5;
/// Largest hand `classify` accepts.
pub const MAX_HAND_SIZE: usize = 7;

/// Poker hand category from weakest to strongest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[non_exhaustive]
#[repr(u8)]
pub enum HandCategory {
    HighCard = 0,
    Pair = 1,
    TwoPair = 2,
    ThreeOfAKind = 3,
    Straight = 4,
    Flush = 5,
    FullHouse = 6,
    FourOfAKind = 7,
    StraightFlush = 8,
}

impl HandCategory {
    pub const fn ordinal(self) -> u8 {
        self as u8
    }

    pub const fn label(self) -> &'static str {
        match self {
            HandCategory::HighCard => "High Card",
            HandCategory::Pair => "Pair",
            HandCategory::TwoPair => "Two Pair",
            HandCategory::ThreeOfAKind => "Three of a Kind",
            HandCategory::Straight => "Straight",
            HandCategory::Flush => "Flush",
            HandCategory::FullHouse => "Full House",
            HandCategory::FourOfAKind => "Four of a Kind",
            HandCategory::StraightFlush => "Straight Flush",
        }
    }
}

impl fmt::Display for HandCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A classified hand: the category plus the cards that justify it.
///
/// Every variant carries exactly the five comparison cards, ordered by
/// tie-break priority. Straights list the ace last when it plays low.
///
/// Equality and ordering compare hand strength, not suits: two hands that
/// chop are equal.
#[derive(Debug, Clone, Copy)]
pub enum EvaluatedHand {
    StraightFlush { cards: [Card; 5] },
    FourOfAKind { quad: [Card; 4], kicker: Card },
    FullHouse { trips: [Card; 3], pair: [Card; 2] },
    Flush { cards: [Card; 5] },
    Straight { cards: [Card; 5] },
    ThreeOfAKind { trips: [Card; 3], kickers: [Card; 2] },
    TwoPair { high: [Card; 2], low: [Card; 2], kicker: Card },
    Pair { pair: [Card; 2], kickers: [Card; 3] },
    HighCard { cards: [Card; 5] },
}

impl EvaluatedHand {
    pub const fn category(&self) -> HandCategory {
        match self {
            EvaluatedHand::StraightFlush { .. } => HandCategory::StraightFlush,
            EvaluatedHand::FourOfAKind { .. } => HandCategory::FourOfAKind,
            EvaluatedHand::FullHouse { .. } => HandCategory::FullHouse,
            EvaluatedHand::Flush { .. } => HandCategory::Flush,
            EvaluatedHand::Straight { .. } => HandCategory::Straight,
            EvaluatedHand::ThreeOfAKind { .. } => HandCategory::ThreeOfAKind,
            EvaluatedHand::TwoPair { .. } => HandCategory::TwoPair,
            EvaluatedHand::Pair { .. } => HandCategory::Pair,
            EvaluatedHand::HighCard { .. } => HandCategory::HighCard,
        }
    }

    /// The evidence flattened into the five comparison cards, in tie-break order.
    pub fn best_five(&self) -> [Card; 5] {
        match *self {
            EvaluatedHand::StraightFlush { cards }
            | EvaluatedHand::Flush { cards }
            | EvaluatedHand::Straight { cards }
            | EvaluatedHand::HighCard { cards } => cards,
            EvaluatedHand::FourOfAKind { quad: [a, b, c, d], kicker } => [a, b, c, d, kicker],
            EvaluatedHand::FullHouse { trips: [a, b, c], pair: [d, e] } => [a, b, c, d, e],
            EvaluatedHand::ThreeOfAKind { trips: [a, b, c], kickers: [d, e] } => [a, b, c, d, e],
            EvaluatedHand::TwoPair { high: [a, b], low: [c, d], kicker } => [a, b, c, d, kicker],
            EvaluatedHand::Pair { pair: [a, b], kickers: [c, d, e] } => [a, b, c, d, e],
        }
    }
}

impl fmt::Display for EvaluatedHand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (", self.category())?;
        for (i, card) in self.best_five().iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{card}")?;
        }
        f.write_str(")")
    }
}

impl Ord for EvaluatedHand {
    fn cmp(&self, other: &Self) -> Ordering {
        compare(self, other)
    }
}

impl PartialOrd for EvaluatedHand {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for EvaluatedHand {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for EvaluatedHand {}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum EvalError {
    #[error("only hands of 5 to 7 cards can be classified, got {0}")]
    InvalidHandSize(usize),
    #[error("duplicate card in hand: {0}")]
    DuplicateCard(Card),
}

/// Classify 5 to 7 cards into their best poker hand.
///
/// Categories are tried from strongest to weakest and the first that applies
/// wins. Card order in the input does not matter.
///
/// ```
/// use poker_showdown::cards::parse_cards;
/// use poker_showdown::evaluator::{classify, HandCategory};
///
/// let cards = parse_cards("2H 3C AS TS QC 4D 5D").unwrap();
/// let hand = classify(&cards).unwrap();
/// assert_eq!(hand.category(), HandCategory::Straight);
/// assert_eq!(hand.to_string(), "Straight (5d 4d 3c 2h As)");
/// ```
pub fn classify(cards: &[Card]) -> Result<EvaluatedHand, EvalError> {
    use detector::DETECTORS;
    use hand_analysis::HandAnalysis;

    if !(MIN_HAND_SIZE..=MAX_HAND_SIZE).contains(&cards.len()) {
        return Err(EvalError::InvalidHandSize(cards.len()));
    }
    if let Some(dup) = first_duplicate(cards) {
        return Err(EvalError::DuplicateCard(dup));
    }

    // Build analysis once (sorted cards, rank and suit groups, straights)
    let analysis = HandAnalysis::new(cards);

    // Check categories in priority order (highest to lowest)
    let hand = DETECTORS
        .iter()
        .find_map(|detector| detector.detect(&analysis))
        // Unreachable: HighCard matches any hand of at least five cards
        .unwrap_or_else(|| unreachable!("HighCard detector should always match"));

    log::trace!("classified {} cards as {hand}", cards.len());
    Ok(hand)
}

/// Compare two classified hands for a showdown.
///
/// `Ordering::Greater` means `lhs` wins, `Ordering::Less` means `rhs` wins and
/// `Ordering::Equal` is a chop. Note this is the reverse of the integer
/// convention where a negative result means `lhs` wins: code ported from that
/// convention must map "negative" to `Greater`, not `Less`.
///
/// Categories decide first; within a category the evidence is compared rank
/// by rank in tie-break order and suits never matter.
///
/// ```
/// use poker_showdown::cards::parse_cards;
/// use poker_showdown::evaluator::{classify, compare};
/// use std::cmp::Ordering;
///
/// let a = classify(&parse_cards("2C 4H 6S 7D 9S").unwrap()).unwrap();
/// let b = classify(&parse_cards("2C 4S 6C 7D 9H").unwrap()).unwrap();
/// assert_eq!(compare(&a, &b), Ordering::Equal);
///
/// // The stronger hand on the left yields `Greater`.
/// let pair = classify(&parse_cards("AC AD 6C 7D 9H").unwrap()).unwrap();
/// assert_eq!(compare(&pair, &a), Ordering::Greater);
/// assert_eq!(compare(&a, &pair), Ordering::Less);
/// ```
pub fn compare(lhs: &EvaluatedHand, rhs: &EvaluatedHand) -> Ordering {
    use EvaluatedHand::*;

    let by_category = lhs.category().cmp(&rhs.category());
    if by_category != Ordering::Equal {
        return by_category;
    }

    match (lhs, rhs) {
        (StraightFlush { cards: a }, StraightFlush { cards: b })
        | (Flush { cards: a }, Flush { cards: b })
        | (Straight { cards: a }, Straight { cards: b })
        | (HighCard { cards: a }, HighCard { cards: b }) => compare_cards(a, b),
        (FourOfAKind { quad: qa, kicker: ka }, FourOfAKind { quad: qb, kicker: kb }) => {
            compare_cards(qa, qb).then_with(|| compare_rank(ka.rank(), kb.rank()))
        }
        (FullHouse { trips: ta, pair: pa }, FullHouse { trips: tb, pair: pb }) => {
            compare_cards(ta, tb).then_with(|| compare_cards(pa, pb))
        }
        (ThreeOfAKind { trips: ta, kickers: ka }, ThreeOfAKind { trips: tb, kickers: kb }) => {
            compare_cards(ta, tb).then_with(|| compare_cards(ka, kb))
        }
        (
            TwoPair { high: ha, low: la, kicker: ka },
            TwoPair { high: hb, low: lb, kicker: kb },
        ) => compare_cards(ha, hb)
            .then_with(|| compare_cards(la, lb))
            .then_with(|| compare_rank(ka.rank(), kb.rank())),
        (Pair { pair: pa, kickers: ka }, Pair { pair: pb, kickers: kb }) => {
            compare_cards(pa, pb).then_with(|| compare_cards(ka, kb))
        }
        _ => unreachable!("hands of the same category share a variant"),
    }
}

/// Element-wise rank comparison of two equally sized evidence groups.
fn compare_cards<const N: usize>(a: &[Card; N], b: &[Card; N]) -> Ordering {
    a.iter()
        .zip(b.iter())
        .map(|(x, y)| compare_rank(x.rank(), y.rank()))
        .find(|ord| ord.is_ne())
        .unwrap_or(Ordering::Equal)
}

fn first_duplicate(cards: &[Card]) -> Option<Card> {
    cards.iter().enumerate().find_map(|(i, c)| cards[..i].contains(c).then_some(*c))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{parse_cards, Rank};

    fn hand(s: &str) -> EvaluatedHand {
        classify(&parse_cards(s).expect("valid cards")).expect("classifiable hand")
    }

    #[test]
    fn rejects_short_and_long_hands() {
        let cards = parse_cards("2c 3c 4c 5c 6c 7c 8c 9c").unwrap();
        for n in 0..MIN_HAND_SIZE {
            assert_eq!(classify(&cards[..n]), Err(EvalError::InvalidHandSize(n)));
        }
        assert_eq!(classify(&cards), Err(EvalError::InvalidHandSize(8)));
    }

    #[test]
    fn rejects_duplicate_cards() {
        let cards = parse_cards("As Kd As 5c 9h").unwrap();
        let dup = parse_cards("As").unwrap()[0];
        assert_eq!(classify(&cards), Err(EvalError::DuplicateCard(dup)));
    }

    #[test]
    fn size_is_checked_before_duplicates() {
        let cards = parse_cards("As As").unwrap();
        assert_eq!(classify(&cards), Err(EvalError::InvalidHandSize(2)));
    }

    #[test]
    fn classify_every_category() {
        let cases = [
            ("9h 8h 7h 6h 5h", HandCategory::StraightFlush),
            ("Kc Kd Kh Ks 2s", HandCategory::FourOfAKind),
            ("Tc Td Th 2s 2h", HandCategory::FullHouse),
            ("Ah 9h 7h 3h 2h", HandCategory::Flush),
            ("Ac 2d 3h 4s 5c", HandCategory::Straight),
            ("Qc Qd Qh 9s 2c", HandCategory::ThreeOfAKind),
            ("Jc Jd 9c 9h 2s", HandCategory::TwoPair),
            ("Ah Ad Ts 9c 2d", HandCategory::Pair),
            ("Ah Kd 7s 5c 2d", HandCategory::HighCard),
        ];
        for (cards, category) in cases {
            assert_eq!(hand(cards).category(), category, "{cards}");
        }
    }

    #[test]
    fn straight_flush_outranks_quads_in_same_seven() {
        let h = hand("9s 8s 7s 6s 5s 5h 5d");
        assert_eq!(h.category(), HandCategory::StraightFlush);
    }

    #[test]
    fn flush_outranks_straight_in_same_seven() {
        let h = hand("9h 8c 7h 6h 5h 2h Kd");
        assert_eq!(h.category(), HandCategory::Flush);
        assert_eq!(h.to_string(), "Flush (9h 7h 6h 5h 2h)");
    }

    #[test]
    fn best_five_follows_tie_break_order() {
        let h = hand("3d Kc 3s 9h Kh 3c 2s");
        let ranks: Vec<Rank> = h.best_five().iter().map(|c| c.rank()).collect();
        assert_eq!(ranks, vec![Rank::Three, Rank::Three, Rank::Three, Rank::King, Rank::King]);
    }

    #[test]
    fn winning_lhs_is_greater() {
        let quads = hand("Kc Kd Kh Ks 2s");
        let trips = hand("Qc Qd Qh 9s 2c");
        assert_eq!(compare(&quads, &trips), Ordering::Greater);
        assert_eq!(compare(&trips, &quads), Ordering::Less);
        assert!(quads > trips);
    }

    #[test]
    fn wheel_loses_to_six_high_straight() {
        let wheel = hand("Ac 2d 3h 4s 5c");
        let six = hand("2c 3d 4h 5s 6c");
        assert_eq!(compare(&six, &wheel), Ordering::Greater);
        assert_eq!(compare(&wheel, &six), Ordering::Less);
    }

    #[test]
    fn flush_compares_all_five_cards() {
        let a = hand("Ah Jh 9h 5h 3h");
        let b = hand("Ad Jd 9d 5d 2d");
        assert_eq!(compare(&a, &b), Ordering::Greater);
    }

    #[test]
    fn category_beats_evidence() {
        let low_two_pair = hand("3c 3d 2c 2h 4s");
        let ace_pair = hand("Ac Ad Kc Qh Js");
        assert_eq!(compare(&low_two_pair, &ace_pair), Ordering::Greater);
    }

    #[test]
    fn equal_hands_chop() {
        let a = hand("Kc Kd 9h 7s 2c");
        let b = hand("Kh Ks 9c 7d 2h");
        assert_eq!(compare(&a, &b), Ordering::Equal);
        assert_eq!(a, b);
    }

    #[test]
    fn display_lists_category_and_evidence() {
        let h = hand("2h 2c 2s 2d Ah As 5h");
        assert_eq!(h.to_string(), "Four of a Kind (2h 2c 2s 2d Ah)");
        assert_eq!(HandCategory::TwoPair.to_string(), "Two Pair");
    }
}
