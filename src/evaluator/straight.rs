use crate::cards::{Card, Rank};

/// Find the highest five-card straight in `cards`.
///
/// Cards are scanned from the highest rank down. Consecutive ranks extend the
/// run, a repeated rank is skipped without breaking it, and any gap restarts
/// it. The first run to reach five cards is the best one. When the scan ends
/// on a four-card run down to Two and the hand holds an Ace, the Ace completes
/// the wheel as the lowest card: `5 4 3 2 A`.
///
/// Returns `None` unless a full five-card run exists.
pub fn find_straight(cards: &[Card]) -> Option<[Card; 5]> {
    let mut sorted = cards.to_vec();
    sorted.sort_by(|a, b| b.rank().cmp(&a.rank()));

    let mut run: Vec<Card> = Vec::with_capacity(5);
    for &card in &sorted {
        match run.last() {
            Some(last) if last.rank() == card.rank() => continue,
            Some(last) if last.rank().value() == card.rank().value() + 1 => run.push(card),
            _ => {
                run.clear();
                run.push(card);
            }
        }
        if run.len() == 5 {
            return run.as_slice().try_into().ok();
        }
    }

    let ace = sorted.first().copied().filter(|c| c.rank() == Rank::Ace)?;
    let ends_at_two = run.last().is_some_and(|c| c.rank() == Rank::Two);
    if run.len() == 4 && ends_at_two {
        run.push(ace);
        return run.as_slice().try_into().ok();
    }
    None
}
