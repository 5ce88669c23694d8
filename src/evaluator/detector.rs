use super::hand_analysis::HandAnalysis;
use crate::cards::Card;
use crate::evaluator::EvaluatedHand;

/// Strategy pattern: each category detector checks its own pattern and, when
/// it applies, packages the evidence for it.
///
/// Detectors return `None` instead of indexing blindly, so a shape that does
/// not fit simply falls through to the next category.
pub trait CategoryDetector {
    fn detect(&self, analysis: &HandAnalysis) -> Option<EvaluatedHand>;
}

// ============================================================================
// Detector Implementations (in priority order: highest to lowest)
// ============================================================================

/// Straight Flush: five consecutive ranks within the flush suit
pub struct StraightFlushDetector;

impl CategoryDetector for StraightFlushDetector {
    fn detect(&self, analysis: &HandAnalysis) -> Option<EvaluatedHand> {
        analysis.straight_flush.map(|cards| EvaluatedHand::StraightFlush { cards })
    }
}

/// Four of a Kind: four cards of the same rank plus the best other card
pub struct FourOfAKindDetector;

impl CategoryDetector for FourOfAKindDetector {
    fn detect(&self, analysis: &HandAnalysis) -> Option<EvaluatedHand> {
        let groups = &analysis.rank_groups;
        if groups.primary_len() != 4 {
            return None;
        }
        let quad = groups.primary().try_into().ok()?;
        // The secondary group can outrank every leftover card (2222 AA 5).
        let kicker = match (groups.secondary().first(), groups.kickers().first()) {
            (Some(&s), Some(&k)) => higher(s, k),
            (Some(&s), None) => s,
            (None, Some(&k)) => k,
            (None, None) => return None,
        };
        Some(EvaluatedHand::FourOfAKind { quad, kicker })
    }
}

/// Full House: three of a kind plus a pair
pub struct FullHouseDetector;

impl CategoryDetector for FullHouseDetector {
    fn detect(&self, analysis: &HandAnalysis) -> Option<EvaluatedHand> {
        let groups = &analysis.rank_groups;
        // Two sets of trips still make a full house, paired off the lower set.
        if groups.primary_len() != 3 || groups.secondary_len() < 2 {
            return None;
        }
        let trips = groups.primary().try_into().ok()?;
        let pair = groups.secondary().get(..2)?.try_into().ok()?;
        Some(EvaluatedHand::FullHouse { trips, pair })
    }
}

/// Flush: the five best cards of one suit
pub struct FlushDetector;

impl CategoryDetector for FlushDetector {
    fn detect(&self, analysis: &HandAnalysis) -> Option<EvaluatedHand> {
        analysis.suit_groups.flush().map(|cards| EvaluatedHand::Flush { cards })
    }
}

/// Straight: five consecutive ranks, ace may play low
pub struct StraightDetector;

impl CategoryDetector for StraightDetector {
    fn detect(&self, analysis: &HandAnalysis) -> Option<EvaluatedHand> {
        analysis.straight.map(|cards| EvaluatedHand::Straight { cards })
    }
}

/// Three of a Kind: three cards of the same rank
pub struct ThreeOfAKindDetector;

impl CategoryDetector for ThreeOfAKindDetector {
    fn detect(&self, analysis: &HandAnalysis) -> Option<EvaluatedHand> {
        let groups = &analysis.rank_groups;
        if groups.primary_len() != 3 {
            return None;
        }
        let trips = groups.primary().try_into().ok()?;
        let kickers = groups.kickers().get(..2)?.try_into().ok()?;
        Some(EvaluatedHand::ThreeOfAKind { trips, kickers })
    }
}

/// Two Pair: two pairs of cards
pub struct TwoPairDetector;

impl CategoryDetector for TwoPairDetector {
    fn detect(&self, analysis: &HandAnalysis) -> Option<EvaluatedHand> {
        let groups = &analysis.rank_groups;
        if groups.primary_len() != 2 || groups.secondary_len() != 2 {
            return None;
        }
        let high = groups.primary().try_into().ok()?;
        let low = groups.secondary().try_into().ok()?;
        let kicker = *groups.kickers().first()?;
        Some(EvaluatedHand::TwoPair { high, low, kicker })
    }
}

/// One Pair: two cards of the same rank
pub struct PairDetector;

impl CategoryDetector for PairDetector {
    fn detect(&self, analysis: &HandAnalysis) -> Option<EvaluatedHand> {
        let groups = &analysis.rank_groups;
        if groups.primary_len() != 2 {
            return None;
        }
        let pair = groups.primary().try_into().ok()?;
        let kickers = groups.kickers().get(..3)?.try_into().ok()?;
        Some(EvaluatedHand::Pair { pair, kickers })
    }
}

/// High Card: no matching ranks or sequences
pub struct HighCardDetector;

impl CategoryDetector for HighCardDetector {
    fn detect(&self, analysis: &HandAnalysis) -> Option<EvaluatedHand> {
        analysis.top_five().map(|cards| EvaluatedHand::HighCard { cards })
    }
}

fn higher(a: Card, b: Card) -> Card {
    if a.rank() >= b.rank() {
        a
    } else {
        b
    }
}

// ============================================================================
// Static detector list (in priority order)
// ============================================================================

pub const DETECTORS: [&dyn CategoryDetector; 9] = [
    &StraightFlushDetector,
    &FourOfAKindDetector,
    &FullHouseDetector,
    &FlushDetector,
    &StraightDetector,
    &ThreeOfAKindDetector,
    &TwoPairDetector,
    &PairDetector,
    &HighCardDetector,
];
