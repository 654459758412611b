//! Hint search: a strict priority policy that never suggests a lateral
//! tableau shuffle — every hint either banks a card, reveals one, or
//! drains the waste.

use crate::game::{GameState, MoveSource, MoveTarget};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hint {
    pub source: MoveSource,
    pub target: MoveTarget,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advice {
    Play(Hint),
    Draw,
    Recycle,
    NoMovesLeft,
}

pub fn find_hint(game: &GameState) -> Option<Hint> {
    waste_to_foundation(game)
        .or_else(|| tableau_top_to_foundation(game))
        .or_else(|| revealing_tableau_move(game))
        .or_else(|| waste_to_tableau(game))
}

/// When no direct play exists, fall back to working the stock; only an
/// empty stock and waste with no hint means the game is out of moves.
pub fn advise(game: &GameState) -> Advice {
    if let Some(hint) = find_hint(game) {
        return Advice::Play(hint);
    }
    if game.stock_len() > 0 {
        return Advice::Draw;
    }
    if game.waste_len() > 0 {
        return Advice::Recycle;
    }
    Advice::NoMovesLeft
}

fn waste_to_foundation(game: &GameState) -> Option<Hint> {
    let card = game.waste_top()?;
    let pile = game.foundation_accepting(card)?;
    Some(Hint {
        source: MoveSource::Waste,
        target: MoveTarget::Foundation { pile },
    })
}

fn tableau_top_to_foundation(game: &GameState) -> Option<Hint> {
    for col in 0..7 {
        let Some(card) = game.tableau_top(col) else {
            continue;
        };
        if !card.face_up {
            continue;
        }
        if let Some(pile) = game.foundation_accepting(card) {
            let index = game.tableau_len(col).unwrap_or(1) - 1;
            return Some(Hint {
                source: MoveSource::Tableau { col, index },
                target: MoveTarget::Foundation { pile },
            });
        }
    }
    None
}

/// A tableau-to-tableau move qualifies only when it uncovers a face-down
/// card: the full face-up run of a column whose start sits on one. A king
/// run headed for an empty pile counts only under the same condition.
fn revealing_tableau_move(game: &GameState) -> Option<Hint> {
    for src in 0..7 {
        let Some(start) = game.first_face_up(src) else {
            continue;
        };
        if start == 0 {
            continue;
        }
        let Some(first) = game.tableau_card(src, start) else {
            continue;
        };
        for dst in 0..7 {
            if dst == src {
                continue;
            }
            if game.can_stack_on_tableau(dst, first) {
                return Some(Hint {
                    source: MoveSource::Tableau { col: src, index: start },
                    target: MoveTarget::Tableau { col: dst },
                });
            }
        }
    }
    None
}

fn waste_to_tableau(game: &GameState) -> Option<Hint> {
    let card = game.waste_top()?;
    for col in 0..7 {
        if game.can_stack_on_tableau(col, card) {
            return Some(Hint {
                source: MoveSource::Waste,
                target: MoveTarget::Tableau { col },
            });
        }
    }
    None
}
