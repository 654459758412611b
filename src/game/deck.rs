use rand::seq::SliceRandom;
use rand::Rng;

use super::{Card, Difficulty, Suit};

const EASY_LOW_RANK_MAX: u8 = 4;
const EASY_CROSS_SWAPS: usize = 10;
const HARD_REGION_SWAPS: usize = 6;
const ACE_COUNT: usize = 4;

pub fn full_deck() -> Vec<Card> {
    let mut deck = Vec::with_capacity(52);
    for suit in Suit::ALL {
        for rank in 1..=13 {
            deck.push(Card {
                suit,
                rank,
                face_up: false,
            });
        }
    }
    deck
}

/// Produce the deal order for one game. The dealer consumes the tail
/// (`Vec::pop`), so the last element is the next card dealt and the head
/// of the vector ends up at the bottom of the stock.
pub fn shuffled_deck(difficulty: Difficulty, rng: &mut impl Rng) -> Vec<Card> {
    let deck = match difficulty {
        Difficulty::Medium => medium_deck(rng),
        Difficulty::Easy => easy_deck(rng),
        Difficulty::Hard => hard_deck(rng),
    };
    assert_full_deck(&deck);
    deck
}

fn medium_deck(rng: &mut impl Rng) -> Vec<Card> {
    let mut deck = full_deck();
    deck.shuffle(rng);
    deck
}

fn easy_deck(rng: &mut impl Rng) -> Vec<Card> {
    let mut deck = full_deck();
    deck.shuffle(rng);

    // Low cards go to the tail, which is dealt first: they land in the
    // shallow early columns where they surface quickly.
    let (mut low, mut rest): (Vec<Card>, Vec<Card>) = deck
        .into_iter()
        .partition(|card| card.rank <= EASY_LOW_RANK_MAX);
    rest.shuffle(rng);
    low.shuffle(rng);

    let mut deck = rest;
    deck.append(&mut low);

    for _ in 0..EASY_CROSS_SWAPS {
        let i = rng.gen_range(0..deck.len());
        let j = rng.gen_range(0..deck.len());
        deck.swap(i, j);
    }
    deck
}

fn hard_deck(rng: &mut impl Rng) -> Vec<Card> {
    let mut deck = full_deck();
    deck.shuffle(rng);

    let (aces, rest): (Vec<Card>, Vec<Card>) =
        deck.into_iter().partition(|card| card.rank == 1);

    // Cluster same-color cards so alternating-color stacking is scarce;
    // the random key keeps the order within each color arbitrary.
    let mut keyed: Vec<(bool, u32, Card)> = rest
        .into_iter()
        .map(|card| (card.color_red(), rng.gen::<u32>(), card))
        .collect();
    keyed.sort_by_key(|&(red, tie, _)| (red, tie));

    // Aces at the head sit at the very bottom of the stock after the deal.
    let mut deck = aces;
    deck.extend(keyed.into_iter().map(|(_, _, card)| card));

    for _ in 0..HARD_REGION_SWAPS {
        let i = rng.gen_range(ACE_COUNT..deck.len());
        let j = rng.gen_range(ACE_COUNT..deck.len());
        deck.swap(i, j);
    }
    deck
}

fn assert_full_deck(deck: &[Card]) {
    assert_eq!(deck.len(), 52, "shuffle must preserve all 52 cards");
    let mut seen = [[false; 13]; 4];
    for card in deck {
        let suit = card.suit as usize;
        let rank = usize::from(card.rank - 1);
        assert!(!seen[suit][rank], "shuffle duplicated {}", card.label());
        seen[suit][rank] = true;
    }
}
