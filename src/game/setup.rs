use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::*;

impl GameState {
    pub fn new_shuffled(config: DealConfig) -> Self {
        let mut rng = rand::thread_rng();
        Self::new_with_seed(config, rng.gen())
    }

    pub fn new_with_seed(config: DealConfig, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut deck = shuffled_deck(config.difficulty, &mut rng);

        let mut game = Self {
            tableau: std::array::from_fn(|_| Vec::new()),
            foundations: std::array::from_fn(|_| Vec::new()),
            stock: Vec::new(),
            waste: Vec::new(),
            move_count: 0,
            elapsed_seconds: 0,
            is_won: false,
            draw_mode: config.draw_mode,
            vegas_mode: config.vegas,
            vegas_score: if config.vegas { VEGAS_BUY_IN } else { 0 },
            difficulty: config.difficulty,
        };

        for col in 0..7 {
            for row in 0..=col {
                let mut card = deck.pop().expect("full deck has enough cards");
                card.face_up = row == col;
                game.tableau[col].push(card);
            }
        }

        // The 24 undealt cards become the stock as-is, face-down.
        game.stock = deck;
        game
    }

    pub(crate) fn draw_or_recycle(&mut self) -> DrawResult {
        if !self.stock.is_empty() {
            for _ in 0..usize::from(self.draw_mode.count()) {
                let Some(mut card) = self.stock.pop() else {
                    break;
                };
                card.face_up = true;
                self.waste.push(card);
            }
            return DrawResult::DrewFromStock;
        }

        if self.waste.is_empty() {
            return DrawResult::NoOp;
        }

        while let Some(mut card) = self.waste.pop() {
            card.face_up = false;
            self.stock.push(card);
        }
        DrawResult::RecycledWaste
    }
}
