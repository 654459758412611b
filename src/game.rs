mod deck;
mod moves;
mod setup;
mod types;

#[cfg(test)]
mod tests;

pub use deck::{full_deck, shuffled_deck};
pub use types::{
    Card, DealConfig, Difficulty, DrawMode, DrawResult, GameState, MoveEffects, MoveSource,
    MoveTarget, RejectReason, Suit, VEGAS_BUY_IN, VEGAS_FOUNDATION_STEP,
};

pub fn rank_label(rank: u8) -> &'static str {
    match rank {
        1 => "A",
        2 => "2",
        3 => "3",
        4 => "4",
        5 => "5",
        6 => "6",
        7 => "7",
        8 => "8",
        9 => "9",
        10 => "10",
        11 => "J",
        12 => "Q",
        13 => "K",
        _ => "?",
    }
}
