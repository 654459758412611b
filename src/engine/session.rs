use log::{error, info};

use crate::game::{
    DealConfig, DrawResult, GameState, MoveEffects, MoveSource, MoveTarget, RejectReason,
    VEGAS_FOUNDATION_STEP,
};

use super::automation;
use super::history::{self, HistoryEntry, MoveRecord};
use super::hinting::{self, Advice, Hint};

/// One game of Klondike: the board plus the reversible history that grew
/// on top of it. Every mutation goes through the methods here, so scoring,
/// history, and win detection can never drift apart.
pub struct GameSession {
    state: GameState,
    history: Vec<HistoryEntry>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameStats {
    pub move_count: u32,
    pub elapsed_seconds: u32,
    pub vegas_score: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AutoCompleteRun {
    pub moves: Vec<(MoveSource, MoveTarget)>,
    pub won: bool,
}

impl GameSession {
    pub fn new_shuffled(config: DealConfig) -> Self {
        Self {
            state: GameState::new_shuffled(config),
            history: Vec::new(),
        }
    }

    pub fn new_with_seed(config: DealConfig, seed: u64) -> Self {
        info!(
            "dealing {} game (draw {}, vegas {}) from seed {seed}",
            config.difficulty.id(),
            config.draw_mode.count(),
            config.vegas,
        );
        Self {
            state: GameState::new_with_seed(config, seed),
            history: Vec::new(),
        }
    }

    #[cfg(test)]
    pub(crate) fn from_state(state: GameState) -> Self {
        Self {
            state,
            history: Vec::new(),
        }
    }

    /// Replace the running game wholesale; history does not survive a deal.
    pub fn redeal(&mut self, config: DealConfig) {
        *self = Self::new_shuffled(config);
    }

    pub fn redeal_with_seed(&mut self, config: DealConfig, seed: u64) {
        *self = Self::new_with_seed(config, seed);
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Draw one or three cards, or recycle the waste when the stock is out.
    /// The recycle is its own undoable transition; plain draws are not.
    pub fn draw_from_stock(&mut self) -> DrawResult {
        let result = self.state.draw_or_recycle();
        if result == DrawResult::RecycledWaste {
            self.history.push(HistoryEntry::Recycle);
        }
        self.check_conservation();
        result
    }

    pub fn attempt_move(
        &mut self,
        source: MoveSource,
        target: MoveTarget,
    ) -> Result<MoveEffects, RejectReason> {
        self.state.validate_move(source, target)?;

        let applied = self.state.apply_move(source, target);
        let foundation_delta = foundation_delta(source, target);
        let vegas_delta = if self.state.vegas_mode() {
            foundation_delta * VEGAS_FOUNDATION_STEP
        } else {
            0
        };
        self.state.vegas_score += vegas_delta;
        self.state.move_count += 1;

        let flipped_card = applied.flipped;
        self.history.push(HistoryEntry::Move(MoveRecord {
            source,
            target,
            cards: applied.cards,
            flipped_card,
            vegas_delta,
        }));

        self.state.refresh_win();
        if self.state.is_won() {
            info!(
                "game won in {} moves, {}s",
                self.state.move_count(),
                self.state.elapsed_seconds()
            );
        }
        self.check_conservation();

        Ok(MoveEffects {
            flipped_card,
            vegas_delta,
            foundation_delta,
        })
    }

    pub fn undo(&mut self) -> Result<(), RejectReason> {
        let entry = self.history.pop().ok_or(RejectReason::NothingToUndo)?;
        history::undo_entry(&mut self.state, entry);
        self.state.refresh_win();
        self.check_conservation();
        Ok(())
    }

    pub fn can_undo(&self) -> bool {
        !self.history.is_empty()
    }

    pub fn find_hint(&self) -> Option<Hint> {
        hinting::find_hint(&self.state)
    }

    pub fn advise(&self) -> Advice {
        hinting::advise(&self.state)
    }

    /// Send the source's top card to the first foundation that takes it.
    pub fn auto_foundation_move(&mut self, source: MoveSource) -> Option<MoveEffects> {
        let source = self.top_of(source)?;
        let card = *self.state.peek_run(source).ok()?.first()?;
        let pile = self.state.foundation_accepting(card)?;
        self.attempt_move(source, MoveTarget::Foundation { pile }).ok()
    }

    /// Bank everything reachable onto the foundations, one validated move
    /// at a time, until the game is won or no candidate remains.
    pub fn auto_complete(&mut self) -> AutoCompleteRun {
        let mut moves = Vec::new();
        while !self.state.is_won() {
            let Some((source, target)) = automation::next_auto_move(&self.state) else {
                break;
            };
            if self.attempt_move(source, target).is_err() {
                debug_assert!(false, "auto-complete candidate failed validation");
                break;
            }
            moves.push((source, target));
        }
        AutoCompleteRun {
            moves,
            won: self.state.is_won(),
        }
    }

    pub fn can_auto_complete(&self) -> bool {
        automation::can_auto_complete(&self.state)
    }

    pub fn is_won(&self) -> bool {
        self.state.is_won()
    }

    /// Dead end: nothing left to draw, recycle, or play. Distinct from a
    /// win.
    pub fn is_stuck(&self) -> bool {
        !self.state.is_won()
            && self.state.stock_len() == 0
            && self.state.waste_len() == 0
            && self.find_hint().is_none()
    }

    pub fn stats(&self) -> GameStats {
        GameStats {
            move_count: self.state.move_count(),
            elapsed_seconds: self.state.elapsed_seconds(),
            vegas_score: self.state.vegas_mode().then(|| self.state.vegas_score()),
        }
    }

    /// External once-per-second clock hook; frozen once the game is won.
    pub fn tick_second(&mut self) {
        if !self.state.is_won() {
            self.state.elapsed_seconds += 1;
        }
    }

    pub fn total_card_count(&self) -> usize {
        self.state.total_card_count()
    }

    fn top_of(&self, source: MoveSource) -> Option<MoveSource> {
        match source {
            MoveSource::Tableau { col, .. } => {
                let index = self.state.tableau_len(col)?.checked_sub(1)?;
                Some(MoveSource::Tableau { col, index })
            }
            other => Some(other),
        }
    }

    fn check_conservation(&self) {
        let total = self.state.total_card_count();
        debug_assert_eq!(total, 52, "card accounting invariant violated");
        if total != 52 {
            error!("card accounting invariant violated: {total} cards tracked");
        }
    }
}

fn foundation_delta(source: MoveSource, target: MoveTarget) -> i32 {
    let mut delta = 0;
    if matches!(source, MoveSource::Foundation { .. }) {
        delta -= 1;
    }
    if matches!(target, MoveTarget::Foundation { .. }) {
        delta += 1;
    }
    delta
}
