use super::*;

#[derive(Debug, Clone)]
pub(crate) struct MoveApplied {
    pub cards: Vec<Card>,
    pub flipped: bool,
}

impl GameState {
    /// Check a proposed move without touching any state.
    pub fn validate_move(
        &self,
        source: MoveSource,
        target: MoveTarget,
    ) -> Result<(), RejectReason> {
        let run = self.peek_run(source)?;
        let first = run[0];
        let run_len = run.len();

        if same_pile(source, target) {
            return Err(RejectReason::SamePile);
        }

        match target {
            MoveTarget::Tableau { col } => {
                let pile = self.tableau.get(col).ok_or(RejectReason::IndexOutOfRange)?;
                match pile.last() {
                    None if first.rank == 13 => Ok(()),
                    None => Err(RejectReason::EmptyPileNeedsKing),
                    Some(top) => {
                        if top.color_red() == first.color_red() {
                            Err(RejectReason::ColorMismatch)
                        } else if top.rank != first.rank + 1 {
                            Err(RejectReason::RankMismatch)
                        } else {
                            Ok(())
                        }
                    }
                }
            }
            MoveTarget::Foundation { pile } => {
                let foundation = self
                    .foundations
                    .get(pile)
                    .ok_or(RejectReason::IndexOutOfRange)?;
                if run_len > 1 {
                    return Err(RejectReason::MultiCardToFoundation);
                }
                match foundation.last() {
                    None if first.rank == 1 => Ok(()),
                    None => Err(RejectReason::EmptyFoundationNeedsAce),
                    Some(top) => {
                        if top.suit != first.suit {
                            Err(RejectReason::WrongFoundationSuit)
                        } else if first.rank != top.rank + 1 {
                            Err(RejectReason::RankMismatch)
                        } else {
                            Ok(())
                        }
                    }
                }
            }
        }
    }

    /// The run a source designates: the waste or foundation top card, or a
    /// tableau pile's face-up suffix from `index` on.
    pub(crate) fn peek_run(&self, source: MoveSource) -> Result<&[Card], RejectReason> {
        match source {
            MoveSource::Waste => {
                if self.waste.is_empty() {
                    return Err(RejectReason::EmptySource);
                }
                Ok(&self.waste[self.waste.len() - 1..])
            }
            MoveSource::Foundation { pile } => {
                let pile = self
                    .foundations
                    .get(pile)
                    .ok_or(RejectReason::IndexOutOfRange)?;
                if pile.is_empty() {
                    return Err(RejectReason::EmptySource);
                }
                Ok(&pile[pile.len() - 1..])
            }
            MoveSource::Tableau { col, index } => {
                let pile = self.tableau.get(col).ok_or(RejectReason::IndexOutOfRange)?;
                if pile.is_empty() {
                    return Err(RejectReason::EmptySource);
                }
                if index >= pile.len() {
                    return Err(RejectReason::IndexOutOfRange);
                }
                if pile[index..].iter().any(|card| !card.face_up) {
                    return Err(RejectReason::FaceDownRun);
                }
                Ok(&pile[index..])
            }
        }
    }

    /// Execute an already-validated move: remove, reveal, append.
    pub(crate) fn apply_move(&mut self, source: MoveSource, target: MoveTarget) -> MoveApplied {
        let cards: Vec<Card> = match source {
            MoveSource::Waste => vec![self.waste.pop().expect("validated waste top")],
            MoveSource::Foundation { pile } => {
                vec![self.foundations[pile].pop().expect("validated foundation top")]
            }
            MoveSource::Tableau { col, index } => self.tableau[col].split_off(index),
        };

        let mut flipped = false;
        if let MoveSource::Tableau { col, .. } = source {
            if let Some(top) = self.tableau[col].last_mut() {
                if !top.face_up {
                    top.face_up = true;
                    flipped = true;
                }
            }
        }

        match target {
            MoveTarget::Tableau { col } => self.tableau[col].extend(cards.iter().copied()),
            MoveTarget::Foundation { pile } => {
                self.foundations[pile].extend(cards.iter().copied())
            }
        }

        MoveApplied { cards, flipped }
    }

    /// First foundation that would accept `card`. At most one non-empty
    /// foundation can match, so the ascending scan is deterministic.
    pub fn foundation_accepting(&self, card: Card) -> Option<usize> {
        (0..self.foundations.len()).find(|&pile| can_stack_foundation(self.foundations[pile].last(), card))
    }

    pub fn can_stack_on_tableau(&self, col: usize, card: Card) -> bool {
        match self.tableau.get(col) {
            None => false,
            Some(pile) => can_stack_tableau(pile.last(), card),
        }
    }

    pub fn first_face_up(&self, col: usize) -> Option<usize> {
        self.tableau.get(col)?.iter().position(|card| card.face_up)
    }

    pub fn tableau(&self) -> &[Vec<Card>; 7] {
        &self.tableau
    }

    pub fn foundations(&self) -> &[Vec<Card>; 4] {
        &self.foundations
    }

    pub fn tableau_top(&self, col: usize) -> Option<Card> {
        self.tableau.get(col).and_then(|pile| pile.last().copied())
    }

    pub fn tableau_len(&self, col: usize) -> Option<usize> {
        self.tableau.get(col).map(Vec::len)
    }

    pub fn tableau_card(&self, col: usize, index: usize) -> Option<Card> {
        self.tableau
            .get(col)
            .and_then(|pile| pile.get(index))
            .copied()
    }

    pub fn foundation_top(&self, pile: usize) -> Option<Card> {
        self.foundations
            .get(pile)
            .and_then(|pile| pile.last().copied())
    }

    pub fn waste_top(&self) -> Option<Card> {
        self.waste.last().copied()
    }

    pub fn stock_len(&self) -> usize {
        self.stock.len()
    }

    pub fn waste_len(&self) -> usize {
        self.waste.len()
    }

    pub fn foundation_total(&self) -> usize {
        self.foundations.iter().map(Vec::len).sum()
    }

    pub fn total_card_count(&self) -> usize {
        self.stock.len()
            + self.waste.len()
            + self.foundation_total()
            + self.tableau.iter().map(Vec::len).sum::<usize>()
    }

    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    pub fn elapsed_seconds(&self) -> u32 {
        self.elapsed_seconds
    }

    pub fn is_won(&self) -> bool {
        self.is_won
    }

    pub fn draw_mode(&self) -> DrawMode {
        self.draw_mode
    }

    pub fn vegas_mode(&self) -> bool {
        self.vegas_mode
    }

    pub fn vegas_score(&self) -> i32 {
        self.vegas_score
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub(crate) fn refresh_win(&mut self) {
        self.is_won = self.foundation_total() == 52;
    }
}

fn same_pile(source: MoveSource, target: MoveTarget) -> bool {
    match (source, target) {
        (MoveSource::Tableau { col: src, .. }, MoveTarget::Tableau { col: dst }) => src == dst,
        (MoveSource::Foundation { pile: src }, MoveTarget::Foundation { pile: dst }) => src == dst,
        _ => false,
    }
}

fn can_stack_foundation(top: Option<&Card>, card: Card) -> bool {
    match top {
        None => card.rank == 1,
        Some(top_card) => top_card.suit == card.suit && card.rank == top_card.rank + 1,
    }
}

fn can_stack_tableau(top: Option<&Card>, card: Card) -> bool {
    match top {
        None => card.rank == 13,
        Some(top_card) => {
            top_card.face_up
                && top_card.color_red() != card.color_red()
                && top_card.rank == card.rank + 1
        }
    }
}
