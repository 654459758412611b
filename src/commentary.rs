//! Table-talk commentary over move outcomes.
//!
//! This sits entirely outside the engine: callers build a [`MoveFacts`]
//! from the effects a move returned and whatever they can read off the
//! public state, and get back an optional line to show or speak. Phrases
//! are tracked per session so nothing repeats until a bank runs dry, and
//! routine moves are throttled by a per-deal budget.

use std::collections::HashSet;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::game::{Card, MoveSource, MoveTarget};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mood {
    Neutral,
    Praise,
    Roast,
    Brilliant,
    Terrible,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Comment {
    pub mood: Mood,
    pub text: &'static str,
}

/// One executed move, as seen from outside the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveFacts {
    pub source: MoveSource,
    pub target: MoveTarget,
    /// Bottom card of the moved run.
    pub first_card: Card,
    pub run_len: usize,
    pub flipped_card: bool,
    /// Destination pile size after the move landed.
    pub target_depth: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveClass {
    AceToFoundation,
    KingToFoundation,
    ToFoundation,
    KingToEmpty,
    Reveal,
    Bury,
    FromFoundation,
    BigStack,
    Ordinary,
}

pub fn classify(facts: &MoveFacts) -> MoveClass {
    if matches!(facts.target, MoveTarget::Foundation { .. }) {
        return match facts.first_card.rank {
            1 => MoveClass::AceToFoundation,
            13 => MoveClass::KingToFoundation,
            _ => MoveClass::ToFoundation,
        };
    }
    if facts.first_card.rank == 13 && facts.target_depth == facts.run_len {
        return MoveClass::KingToEmpty;
    }
    if facts.flipped_card {
        return MoveClass::Reveal;
    }
    if facts.target_depth > 6 {
        return MoveClass::Bury;
    }
    if matches!(facts.source, MoveSource::Foundation { .. }) {
        return MoveClass::FromFoundation;
    }
    if facts.run_len >= 3 {
        return MoveClass::BigStack;
    }
    MoveClass::Ordinary
}

const COMMENT_BUDGET_PER_DEAL: u32 = 12;
const ORDINARY_COMMENT_CHANCE: f64 = 0.35;

pub struct Commentator {
    rng: StdRng,
    used: HashSet<&'static str>,
    remaining_budget: u32,
}

impl Default for Commentator {
    fn default() -> Self {
        Self::new()
    }
}

impl Commentator {
    pub fn new() -> Self {
        Self::with_seed(rand::thread_rng().gen())
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            used: HashSet::new(),
            remaining_budget: COMMENT_BUDGET_PER_DEAL,
        }
    }

    /// A fresh deal refills the budget; phrase tracking spans the session.
    pub fn start_deal(&mut self) -> Comment {
        self.remaining_budget = COMMENT_BUDGET_PER_DEAL;
        Comment {
            mood: Mood::Neutral,
            text: self.pick(DEAL_LINES),
        }
    }

    pub fn on_move(&mut self, facts: &MoveFacts) -> Option<Comment> {
        let class = classify(facts);
        let (mood, bank) = bank_for(class);

        let always = matches!(mood, Mood::Brilliant | Mood::Terrible);
        if !always {
            if self.remaining_budget == 0 {
                return None;
            }
            if class == MoveClass::Ordinary && !self.rng.gen_bool(ORDINARY_COMMENT_CHANCE) {
                return None;
            }
            self.remaining_budget -= 1;
        }

        Some(Comment {
            mood,
            text: self.pick(bank),
        })
    }

    pub fn on_undo(&mut self) -> Comment {
        Comment {
            mood: Mood::Roast,
            text: self.pick(UNDO_LINES),
        }
    }

    pub fn on_nothing_to_undo(&mut self) -> Comment {
        Comment {
            mood: Mood::Roast,
            text: self.pick(EMPTY_UNDO_LINES),
        }
    }

    pub fn on_win(&mut self) -> Comment {
        Comment {
            mood: Mood::Praise,
            text: self.pick(WIN_LINES),
        }
    }

    pub fn comments_left(&self) -> u32 {
        self.remaining_budget
    }

    fn pick(&mut self, bank: &'static [&'static str]) -> &'static str {
        let fresh: Vec<&'static str> = bank
            .iter()
            .copied()
            .filter(|text| !self.used.contains(text))
            .collect();
        let text = match fresh.choose(&mut self.rng) {
            Some(text) => *text,
            // Bank exhausted this session; repeats beat silence.
            None => bank.choose(&mut self.rng).copied().unwrap_or(""),
        };
        self.used.insert(text);
        text
    }
}

fn bank_for(class: MoveClass) -> (Mood, &'static [&'static str]) {
    match class {
        MoveClass::AceToFoundation => (Mood::Praise, ACE_FOUNDATION_LINES),
        MoveClass::KingToFoundation => (Mood::Brilliant, KING_FOUNDATION_LINES),
        MoveClass::ToFoundation => (Mood::Praise, FOUNDATION_LINES),
        MoveClass::KingToEmpty => (Mood::Praise, KING_EMPTY_LINES),
        MoveClass::Reveal => (Mood::Praise, REVEAL_LINES),
        MoveClass::Bury => (Mood::Roast, BURY_LINES),
        MoveClass::FromFoundation => (Mood::Terrible, FROM_FOUNDATION_LINES),
        MoveClass::BigStack => (Mood::Praise, BIG_STACK_LINES),
        MoveClass::Ordinary => (Mood::Neutral, ORDINARY_LINES),
    }
}

const DEAL_LINES: &[&str] = &[
    "Fresh deck. Let's see how long the optimism lasts.",
    "Cards are down. No pressure.",
    "New deal, same player. Adjusting expectations.",
];

const ACE_FOUNDATION_LINES: &[&str] = &[
    "An ace goes up. The game practically did that for you.",
    "Ace banked. Hold the applause.",
    "Found an ace. Gravity-assisted brilliance.",
];

const KING_FOUNDATION_LINES: &[&str] = &[
    "A king lands on the foundation. Genuinely impressive.",
    "Suit complete. Who are you and what did you do with the usual player?",
    "King home. Frame this moment.",
];

const FOUNDATION_LINES: &[&str] = &[
    "Another card banked. Keep that up.",
    "Foundation grows. The plan is almost visible.",
    "Up it goes. Solid.",
];

const KING_EMPTY_LINES: &[&str] = &[
    "King takes the empty column. Textbook.",
    "A throne for the king. Nicely cleared.",
    "Empty pile claimed. That's how it's done.",
];

const REVEAL_LINES: &[&str] = &[
    "A card flips. Progress, actual progress.",
    "Something new sees daylight. Good dig.",
    "Nice reveal. The board owes you one.",
];

const BURY_LINES: &[&str] = &[
    "Piling onto that tower? Bold archaeology.",
    "That card is now a fossil. Hope it wasn't important.",
    "Burying cards is a strategy, technically.",
];

const FROM_FOUNDATION_LINES: &[&str] = &[
    "Taking cards OFF the foundation? We were so close to respectable.",
    "Backwards. That move was backwards.",
    "The foundation giveth and you taketh away.",
];

const BIG_STACK_LINES: &[&str] = &[
    "Whole convoy on the move. Ambitious.",
    "Big stack slides over. Someone's been planning.",
    "That's a caravan, not a move. Respect.",
];

const ORDINARY_LINES: &[&str] = &[
    "Fine. A move happened.",
    "Noted. Riveting stuff.",
    "Card goes there now. Sure.",
    "Bold. Ish.",
];

const UNDO_LINES: &[&str] = &[
    "Taking it back? Even you know that was bad.",
    "Rewinding history. The cards remember.",
    "Undo. The coward's crescendo.",
];

const EMPTY_UNDO_LINES: &[&str] = &[
    "Nothing to undo. The mistakes are permanent now.",
    "History is empty. Like the excuses.",
];

const WIN_LINES: &[&str] = &[
    "All fifty-two home. Take the victory lap.",
    "A win. An actual win. Savor it.",
    "The board surrenders. Well played.",
];
