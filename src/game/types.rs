use super::rank_label;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    Clubs,
    Diamonds,
    Hearts,
    Spades,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades];

    pub fn is_red(self) -> bool {
        matches!(self, Suit::Diamonds | Suit::Hearts)
    }

    pub fn short(self) -> &'static str {
        match self {
            Suit::Clubs => "C",
            Suit::Diamonds => "D",
            Suit::Hearts => "H",
            Suit::Spades => "S",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    pub suit: Suit,
    pub rank: u8,
    pub face_up: bool,
}

impl Card {
    pub fn label(&self) -> String {
        format!("{}{}", rank_label(self.rank), self.suit.short())
    }

    pub fn color_red(&self) -> bool {
        self.suit.is_red()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DrawMode {
    One,
    Three,
}

impl DrawMode {
    pub fn count(self) -> u8 {
        match self {
            Self::One => 1,
            Self::Three => 3,
        }
    }

    pub fn from_count(count: u8) -> Option<Self> {
        match count {
            1 => Some(Self::One),
            3 => Some(Self::Three),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn from_id(id: &str) -> Option<Self> {
        match id {
            "easy" => Some(Self::Easy),
            "medium" => Some(Self::Medium),
            "hard" => Some(Self::Hard),
            _ => None,
        }
    }

    pub fn id(self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Easy => "Easy",
            Self::Medium => "Medium",
            Self::Hard => "Hard",
        }
    }

    pub fn blurb(self) -> &'static str {
        match self {
            Self::Easy => "Aces and low cards surface early",
            Self::Medium => "Pure random shuffle",
            Self::Hard => "Aces buried, colors clumped",
        }
    }
}

/// Entry cost of a Vegas-scored deal.
pub const VEGAS_BUY_IN: i32 = -52;
/// Credit for landing a card on a foundation; debit for pulling one back off.
pub const VEGAS_FOUNDATION_STEP: i32 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DealConfig {
    pub difficulty: Difficulty,
    pub draw_mode: DrawMode,
    pub vegas: bool,
}

impl Default for DealConfig {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::Medium,
            draw_mode: DrawMode::One,
            vegas: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub(crate) tableau: [Vec<Card>; 7],
    pub(crate) foundations: [Vec<Card>; 4],
    pub(crate) stock: Vec<Card>,
    pub(crate) waste: Vec<Card>,
    pub(crate) move_count: u32,
    pub(crate) elapsed_seconds: u32,
    pub(crate) is_won: bool,
    pub(crate) draw_mode: DrawMode,
    pub(crate) vegas_mode: bool,
    pub(crate) vegas_score: i32,
    pub(crate) difficulty: Difficulty,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawResult {
    DrewFromStock,
    RecycledWaste,
    NoOp,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveSource {
    Waste,
    Tableau { col: usize, index: usize },
    Foundation { pile: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveTarget {
    Tableau { col: usize },
    Foundation { pile: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RejectReason {
    EmptySource,
    IndexOutOfRange,
    FaceDownRun,
    SamePile,
    ColorMismatch,
    RankMismatch,
    MultiCardToFoundation,
    WrongFoundationSuit,
    EmptyFoundationNeedsAce,
    EmptyPileNeedsKing,
    NothingToUndo,
}

impl RejectReason {
    pub fn describe(self) -> &'static str {
        match self {
            Self::EmptySource => "nothing to move there",
            Self::IndexOutOfRange => "no card at that position",
            Self::FaceDownRun => "face-down cards cannot move",
            Self::SamePile => "card is already on that pile",
            Self::ColorMismatch => "colors must alternate",
            Self::RankMismatch => "ranks must step by one",
            Self::MultiCardToFoundation => "foundations take one card at a time",
            Self::WrongFoundationSuit => "wrong suit for that foundation",
            Self::EmptyFoundationNeedsAce => "empty foundations start with an ace",
            Self::EmptyPileNeedsKing => "empty piles start with a king",
            Self::NothingToUndo => "nothing to undo",
        }
    }
}

/// Observable side effects of a successful move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveEffects {
    pub flipped_card: bool,
    pub vegas_delta: i32,
    pub foundation_delta: i32,
}
