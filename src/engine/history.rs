//! Reversible move history.
//!
//! Each entry records the delta a move applied, never a snapshot of a whole
//! pile: undo restores exactly the cards that moved, so it composes with
//! any stock/waste traffic that happened in between and always conserves
//! the 52-card set.

use crate::game::{Card, GameState, MoveSource, MoveTarget};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveRecord {
    pub source: MoveSource,
    pub target: MoveTarget,
    /// The moved run, bottom-to-top, as it was at move time.
    pub cards: Vec<Card>,
    pub flipped_card: bool,
    pub vegas_delta: i32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HistoryEntry {
    Move(MoveRecord),
    Recycle,
}

pub(crate) fn undo_entry(state: &mut GameState, entry: HistoryEntry) {
    match entry {
        HistoryEntry::Recycle => undo_recycle(state),
        HistoryEntry::Move(record) => undo_move(state, record),
    }
}

fn undo_recycle(state: &mut GameState) {
    // Exact mirror of the recycle loop. Cards drawn since the recycle were
    // consumed in original waste order, so whatever is left in the stock
    // lands back on top of them in the right sequence.
    while let Some(mut card) = state.stock.pop() {
        card.face_up = true;
        state.waste.push(card);
    }
}

fn undo_move(state: &mut GameState, record: MoveRecord) {
    if record.flipped_card {
        if let MoveSource::Tableau { col, .. } = record.source {
            if let Some(top) = state.tableau[col].last_mut() {
                top.face_up = false;
            }
        }
    }

    let count = record.cards.len();
    match record.target {
        MoveTarget::Tableau { col } => {
            let len = state.tableau[col].len();
            state.tableau[col].truncate(len.saturating_sub(count));
        }
        MoveTarget::Foundation { pile } => {
            let len = state.foundations[pile].len();
            state.foundations[pile].truncate(len.saturating_sub(count));
        }
    }

    match record.source {
        MoveSource::Waste => state.waste.extend(record.cards.iter().copied()),
        MoveSource::Foundation { pile } => {
            state.foundations[pile].extend(record.cards.iter().copied());
        }
        MoveSource::Tableau { col, index } => {
            let at = index.min(state.tableau[col].len());
            state.tableau[col].splice(at..at, record.cards.iter().copied());
        }
    }

    state.vegas_score -= record.vegas_delta;
    state.move_count = state.move_count.saturating_sub(1);
}
