use crate::cards::Card;
use crate::deck::{Deck, DeckError};
use crate::evaluator::{classify, EvalError, EvaluatedHand};
use crate::table::{Player, Table};

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ShowdownError {
    #[error("seat {seat}: {source}")]
    Seat {
        seat: usize,
        #[source]
        source: EvalError,
    },
    #[error("no hands to compare")]
    Empty,
    #[error(transparent)]
    Deck(#[from] DeckError),
}

/// Classified hands for every seat still in at showdown.
///
/// ```
/// use poker_showdown::cards::parse_cards;
/// use poker_showdown::showdown::Showdown;
///
/// let a = parse_cards("Ks Kh Qc Jd 9h 3s 2c").unwrap();
/// let b = parse_cards("Qs Qh Qc Jd 9h 3s 2c").unwrap();
/// let showdown = Showdown::evaluate(&[&a, &b]).unwrap();
/// assert_eq!(showdown.winners(), vec![1]);
/// ```
#[derive(Debug, Clone)]
pub struct Showdown {
    hands: Vec<EvaluatedHand>,
}

impl Showdown {
    /// Classify each seat's 5 to 7 cards. Fails on the first seat that cannot
    /// be classified.
    pub fn evaluate(seats: &[&[Card]]) -> Result<Self, ShowdownError> {
        if seats.is_empty() {
            return Err(ShowdownError::Empty);
        }
        let hands = seats
            .iter()
            .enumerate()
            .map(|(seat, cards)| classify(cards).map_err(|source| ShowdownError::Seat { seat, source }))
            .collect::<Result<Vec<_>, _>>()?;

        let showdown = Self { hands };
        log::debug!("showdown of {} seats won by {:?}", showdown.hands.len(), showdown.winners());
        Ok(showdown)
    }

    pub fn hands(&self) -> &[EvaluatedHand] {
        &self.hands
    }

    /// Every seat holding the best hand, ascending. More than one seat means
    /// the pot is chopped.
    pub fn winners(&self) -> Vec<usize> {
        let Some(best) = self.hands.iter().max() else {
            return Vec::new();
        };
        self.hands
            .iter()
            .enumerate()
            .filter(|(_, hand)| *hand == best)
            .map(|(seat, _)| seat)
            .collect()
    }

    pub fn is_chop(&self) -> bool {
        self.winners().len() > 1
    }
}

/// Deal a Hold'em showdown: two hole cards per player, then a five-card board.
/// Returns each seat's seven cards, hole cards first. Nothing is dealt when
/// the deck is too short for every player and the board.
pub fn deal_holdem(deck: &mut Deck, players: usize) -> Result<Vec<Vec<Card>>, ShowdownError> {
    let needed = players.saturating_mul(2).saturating_add(5);
    if needed > deck.len() {
        return Err(DeckError::NotEnoughCards { requested: needed, available: deck.len() }.into());
    }
    let holes = (0..players).map(|_| deck.deal_n(2)).collect::<Result<Vec<_>, _>>()?;
    let board = deck.deal_n(5)?;
    Ok(holes
        .into_iter()
        .map(|mut seat| {
            seat.extend_from_slice(&board);
            seat
        })
        .collect())
}

/// Deal a Hold'em showdown to everyone seated at `table`, in seat order.
/// Each entry pairs the seat number with that seat's seven cards.
pub fn deal_table(table: &Table, deck: &mut Deck) -> Result<Vec<(usize, Vec<Card>)>, ShowdownError> {
    if table.is_empty() {
        return Err(ShowdownError::Empty);
    }
    let hands = deal_holdem(deck, table.len())?;
    Ok(table.players().map(Player::seat).zip(hands).collect())
}
