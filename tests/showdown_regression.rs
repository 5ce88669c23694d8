use poker_showdown::cards::{parse_cards, Card};
use poker_showdown::deck::Deck;
use poker_showdown::showdown::{deal_holdem, deal_table, Showdown};
use poker_showdown::table::Table;

fn showdown(hands: &[&str]) -> Showdown {
    let owned: Vec<Vec<Card>> =
        hands.iter().map(|s| parse_cards(s).expect("valid cards")).collect();
    let refs: Vec<&[Card]> = owned.iter().map(Vec::as_slice).collect();
    Showdown::evaluate(&refs).expect("valid showdown")
}

#[test]
fn pair_kicker_decides() {
    // Same pair of kings on board, hole cards decide the third kicker.
    let s = showdown(&["Kc Kd 9h 7s 2c 8d 4h", "Kh Ks 9c 7d 2h 6d 4c"]);
    assert_eq!(s.winners(), vec![0]);
}

#[test]
fn two_pair_kicker_decides() {
    let s = showdown(&["Jc Jd 9c 9h 2s Ad 3c", "Jh Js 9d 9s 2h Kd 3h"]);
    assert_eq!(s.winners(), vec![0]);
}

#[test]
fn full_house_compares_trips_before_pair() {
    let s = showdown(&["7c 7d 7h As Ad", "8c 8d 8h 2s 2d"]);
    assert_eq!(s.winners(), vec![1]);
}

#[test]
fn quads_kicker_decides() {
    let s = showdown(&["9c 9d 9h 9s Ac", "9c 9d 9h 9s Kc"]);
    assert_eq!(s.winners(), vec![0]);
}

#[test]
fn board_plays_for_everyone_is_a_chop() {
    // Royal flush on the board; nobody can improve.
    let s = showdown(&[
        "2c 3d As Ks Qs Js Ts",
        "7h 8h As Ks Qs Js Ts",
        "Ad Ac As Ks Qs Js Ts",
    ]);
    assert_eq!(s.winners(), vec![0, 1, 2]);
    assert!(s.is_chop());
}

#[test]
fn counterfeited_two_pair_chops_on_board_kicker() {
    // Board two pair plus an ace counterfeits both pocket pairs.
    let s = showdown(&["3c 3d Kc Kd Qh Qs Ah", "4c 4d Kc Kd Qh Qs Ah"]);
    assert!(s.is_chop());
}

#[test]
fn wheel_loses_to_six_high_straight() {
    let s = showdown(&["Ac Kd 2h 3s 4c 5d 9h", "6c Kd 2h 3s 4c 5d 9h"]);
    assert_eq!(s.winners(), vec![1]);
}

#[test]
fn seeded_deal_is_reproducible() {
    let deal = |seed| {
        let mut deck = Deck::standard();
        deck.shuffle_seeded(seed);
        deal_holdem(&mut deck, 6).expect("enough cards")
    };
    let first = deal(42);
    assert_eq!(first, deal(42));

    let refs: Vec<&[Card]> = first.iter().map(Vec::as_slice).collect();
    let s = Showdown::evaluate(&refs).expect("dealt hands classify");
    assert_eq!(s.hands().len(), 6);
    assert!(!s.winners().is_empty());
}

#[test]
fn seated_table_deals_and_settles_in_seat_order() {
    let mut table = Table::new(1000, 20).expect("valid rules");
    for (name, seat) in [("dana", 7), ("erin", 1), ("fay", 4)] {
        table.add_player(name, seat).expect("open seat");
    }
    let mut deck = Deck::standard();
    deck.shuffle_seeded(9);
    let dealt = deal_table(&table, &mut deck).expect("enough cards");
    assert_eq!(dealt.iter().map(|(seat, _)| *seat).collect::<Vec<_>>(), vec![1, 4, 7]);
    assert_eq!(deck.len(), 52 - 3 * 2 - 5);

    let refs: Vec<&[Card]> = dealt.iter().map(|(_, cards)| cards.as_slice()).collect();
    let s = Showdown::evaluate(&refs).expect("dealt hands classify");
    assert!(s.winners().iter().all(|&i| i < 3));
}

#[test]
fn short_deck_deals_nothing() {
    let mut deck = Deck::standard();
    deck.deal_n(45).expect("enough cards");
    assert!(deal_holdem(&mut deck, 2).is_err());
    assert_eq!(deck.len(), 7);
    assert_eq!(deck.dealt().len(), 45);
}
