use crate::game::{GameState, MoveSource, MoveTarget};

/// Auto-complete is offered once nothing is hidden any more: every tableau
/// card face-up and the stock exhausted (the waste may still hold cards).
pub fn can_auto_complete(game: &GameState) -> bool {
    let all_face_up = game
        .tableau()
        .iter()
        .all(|pile| pile.iter().all(|card| card.face_up));
    all_face_up && game.stock_len() == 0
}

/// Next foundation move in auto-complete order: waste first, then the
/// lowest tableau column whose top card has a home.
pub fn next_auto_move(game: &GameState) -> Option<(MoveSource, MoveTarget)> {
    if let Some(card) = game.waste_top() {
        if let Some(pile) = game.foundation_accepting(card) {
            return Some((MoveSource::Waste, MoveTarget::Foundation { pile }));
        }
    }

    for col in 0..7 {
        let Some(card) = game.tableau_top(col) else {
            continue;
        };
        if !card.face_up {
            continue;
        }
        let Some(pile) = game.foundation_accepting(card) else {
            continue;
        };
        let index = game.tableau_len(col).unwrap_or(1) - 1;
        return Some((MoveSource::Tableau { col, index }, MoveTarget::Foundation { pile }));
    }

    None
}
