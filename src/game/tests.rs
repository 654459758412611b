use rand::rngs::StdRng;
use rand::SeedableRng;

use super::*;

fn card(suit: Suit, rank: u8, face_up: bool) -> Card {
    Card {
        suit,
        rank,
        face_up,
    }
}

fn empty_state() -> GameState {
    GameState {
        tableau: std::array::from_fn(|_| Vec::new()),
        foundations: std::array::from_fn(|_| Vec::new()),
        stock: Vec::new(),
        waste: Vec::new(),
        move_count: 0,
        elapsed_seconds: 0,
        is_won: false,
        draw_mode: DrawMode::One,
        vegas_mode: false,
        vegas_score: 0,
        difficulty: Difficulty::Medium,
    }
}

#[test]
fn new_game_has_full_deck_accounted_for() {
    let game = GameState::new_shuffled(DealConfig::default());

    let tableau_count: usize = game.tableau.iter().map(Vec::len).sum();
    assert_eq!(game.total_card_count(), 52);
    assert_eq!(tableau_count, 28);
    assert_eq!(game.stock.len(), 24);
    assert_eq!(game.waste.len(), 0);
    assert!(game.foundations.iter().all(Vec::is_empty));
    assert!(game.stock.iter().all(|card| !card.face_up));
}

#[test]
fn deal_is_triangular_with_one_card_showing_per_column() {
    let game = GameState::new_with_seed(DealConfig::default(), 21);

    for (col, pile) in game.tableau.iter().enumerate() {
        assert_eq!(pile.len(), col + 1);
        for (row, card) in pile.iter().enumerate() {
            assert_eq!(card.face_up, row == col);
        }
    }
}

#[test]
fn seeded_deals_are_deterministic() {
    let game_a = GameState::new_with_seed(DealConfig::default(), 42);
    let game_b = GameState::new_with_seed(DealConfig::default(), 42);
    let game_c = GameState::new_with_seed(DealConfig::default(), 43);

    assert_eq!(game_a, game_b);
    assert_ne!(game_a, game_c);
}

#[test]
fn vegas_deals_start_at_buy_in() {
    let config = DealConfig {
        vegas: true,
        ..DealConfig::default()
    };
    let game = GameState::new_with_seed(config, 5);
    assert!(game.vegas_mode());
    assert_eq!(game.vegas_score(), VEGAS_BUY_IN);

    let plain = GameState::new_with_seed(DealConfig::default(), 5);
    assert_eq!(plain.vegas_score(), 0);
}

#[test]
fn draw_moves_one_card_from_stock_to_waste_face_up() {
    let mut game = empty_state();
    game.stock.push(card(Suit::Spades, 7, false));

    let result = game.draw_or_recycle();

    assert_eq!(result, DrawResult::DrewFromStock);
    assert_eq!(game.stock.len(), 0);
    assert_eq!(game.waste.len(), 1);
    assert!(game.waste[0].face_up);
    assert_eq!(game.waste[0].rank, 7);
}

#[test]
fn draw_three_clips_to_remaining_stock() {
    let mut game = empty_state();
    game.draw_mode = DrawMode::Three;
    game.stock.push(card(Suit::Spades, 12, false));
    game.stock.push(card(Suit::Spades, 13, false));

    let result = game.draw_or_recycle();

    assert_eq!(result, DrawResult::DrewFromStock);
    assert_eq!(game.stock.len(), 0);
    assert_eq!(game.waste.len(), 2);
    assert!(game.waste.iter().all(|card| card.face_up));
}

#[test]
fn recycle_reverses_waste_into_face_down_stock() {
    let mut game = empty_state();
    for rank in 1..=5 {
        game.waste.push(card(Suit::Hearts, rank, true));
    }

    let result = game.draw_or_recycle();

    assert_eq!(result, DrawResult::RecycledWaste);
    assert!(game.waste.is_empty());
    assert_eq!(game.stock.len(), 5);
    assert!(game.stock.iter().all(|card| !card.face_up));
    let ranks: Vec<u8> = game.stock.iter().map(|card| card.rank).collect();
    assert_eq!(ranks, vec![5, 4, 3, 2, 1]);
}

#[test]
fn draw_on_empty_stock_and_waste_is_a_no_op() {
    let mut game = empty_state();
    assert_eq!(game.draw_or_recycle(), DrawResult::NoOp);
}

#[test]
fn empty_sources_are_rejected() {
    let game = empty_state();
    assert_eq!(
        game.validate_move(MoveSource::Waste, MoveTarget::Tableau { col: 0 }),
        Err(RejectReason::EmptySource)
    );
    assert_eq!(
        game.validate_move(
            MoveSource::Foundation { pile: 2 },
            MoveTarget::Tableau { col: 0 }
        ),
        Err(RejectReason::EmptySource)
    );
    assert_eq!(
        game.validate_move(
            MoveSource::Tableau { col: 3, index: 0 },
            MoveTarget::Tableau { col: 0 }
        ),
        Err(RejectReason::EmptySource)
    );
}

#[test]
fn out_of_range_sources_are_rejected() {
    let mut game = empty_state();
    game.tableau[0].push(card(Suit::Clubs, 9, true));

    assert_eq!(
        game.validate_move(
            MoveSource::Tableau { col: 0, index: 5 },
            MoveTarget::Tableau { col: 1 }
        ),
        Err(RejectReason::IndexOutOfRange)
    );
    assert_eq!(
        game.validate_move(
            MoveSource::Tableau { col: 9, index: 0 },
            MoveTarget::Tableau { col: 1 }
        ),
        Err(RejectReason::IndexOutOfRange)
    );
}

#[test]
fn face_down_runs_cannot_move() {
    let mut game = empty_state();
    game.tableau[0].push(card(Suit::Clubs, 9, false));
    game.tableau[0].push(card(Suit::Hearts, 8, true));
    game.tableau[1].push(card(Suit::Diamonds, 10, true));

    assert_eq!(
        game.validate_move(
            MoveSource::Tableau { col: 0, index: 0 },
            MoveTarget::Tableau { col: 1 }
        ),
        Err(RejectReason::FaceDownRun)
    );
}

#[test]
fn moving_onto_the_same_pile_is_rejected() {
    let mut game = empty_state();
    game.tableau[2].push(card(Suit::Clubs, 9, true));

    assert_eq!(
        game.validate_move(
            MoveSource::Tableau { col: 2, index: 0 },
            MoveTarget::Tableau { col: 2 }
        ),
        Err(RejectReason::SamePile)
    );
}

#[test]
fn tableau_stacking_must_alternate_color_and_step_down() {
    let mut game = empty_state();
    game.tableau[0].push(card(Suit::Hearts, 6, true));
    game.waste.push(card(Suit::Diamonds, 5, true));

    assert_eq!(
        game.validate_move(MoveSource::Waste, MoveTarget::Tableau { col: 0 }),
        Err(RejectReason::ColorMismatch)
    );

    game.waste.clear();
    game.waste.push(card(Suit::Spades, 4, true));
    assert_eq!(
        game.validate_move(MoveSource::Waste, MoveTarget::Tableau { col: 0 }),
        Err(RejectReason::RankMismatch)
    );

    game.waste.clear();
    game.waste.push(card(Suit::Spades, 5, true));
    assert_eq!(
        game.validate_move(MoveSource::Waste, MoveTarget::Tableau { col: 0 }),
        Ok(())
    );
}

#[test]
fn empty_tableau_piles_take_only_kings() {
    let mut game = empty_state();
    game.waste.push(card(Suit::Hearts, 12, true));
    assert_eq!(
        game.validate_move(MoveSource::Waste, MoveTarget::Tableau { col: 4 }),
        Err(RejectReason::EmptyPileNeedsKing)
    );

    game.waste.clear();
    game.waste.push(card(Suit::Hearts, 13, true));
    assert_eq!(
        game.validate_move(MoveSource::Waste, MoveTarget::Tableau { col: 4 }),
        Ok(())
    );
}

#[test]
fn foundations_take_single_cards_of_one_suit_ascending() {
    let mut game = empty_state();
    game.waste.push(card(Suit::Clubs, 2, true));
    assert_eq!(
        game.validate_move(MoveSource::Waste, MoveTarget::Foundation { pile: 0 }),
        Err(RejectReason::EmptyFoundationNeedsAce)
    );

    game.foundations[0].push(card(Suit::Spades, 1, true));
    assert_eq!(
        game.validate_move(MoveSource::Waste, MoveTarget::Foundation { pile: 0 }),
        Err(RejectReason::WrongFoundationSuit)
    );

    game.waste.clear();
    game.waste.push(card(Suit::Spades, 3, true));
    assert_eq!(
        game.validate_move(MoveSource::Waste, MoveTarget::Foundation { pile: 0 }),
        Err(RejectReason::RankMismatch)
    );

    game.waste.clear();
    game.waste.push(card(Suit::Spades, 2, true));
    assert_eq!(
        game.validate_move(MoveSource::Waste, MoveTarget::Foundation { pile: 0 }),
        Ok(())
    );
}

#[test]
fn multi_card_runs_never_reach_a_foundation() {
    let mut game = empty_state();
    game.tableau[0].push(card(Suit::Spades, 2, true));
    game.tableau[0].push(card(Suit::Hearts, 1, true));

    assert_eq!(
        game.validate_move(
            MoveSource::Tableau { col: 0, index: 0 },
            MoveTarget::Foundation { pile: 0 }
        ),
        Err(RejectReason::MultiCardToFoundation)
    );
}

#[test]
fn apply_move_transfers_a_run_and_reveals_the_card_beneath() {
    let mut game = empty_state();
    game.tableau[0].push(card(Suit::Spades, 9, false));
    game.tableau[0].push(card(Suit::Hearts, 8, true));
    game.tableau[0].push(card(Suit::Clubs, 7, true));
    game.tableau[1].push(card(Suit::Clubs, 9, true));

    let source = MoveSource::Tableau { col: 0, index: 1 };
    let target = MoveTarget::Tableau { col: 1 };
    assert_eq!(game.validate_move(source, target), Ok(()));

    let applied = game.apply_move(source, target);
    assert!(applied.flipped);
    assert_eq!(applied.cards.len(), 2);
    assert_eq!(game.tableau[0].len(), 1);
    assert!(game.tableau[0][0].face_up);
    assert_eq!(game.tableau[1].len(), 3);
    assert_eq!(game.tableau[1][1].rank, 8);
    assert_eq!(game.tableau[1][2].rank, 7);
}

#[test]
fn foundation_accepting_scans_ascending_and_is_suit_stable() {
    let mut game = empty_state();
    let ace = card(Suit::Hearts, 1, true);
    assert_eq!(game.foundation_accepting(ace), Some(0));

    game.foundations[1].push(card(Suit::Hearts, 1, true));
    let two = card(Suit::Hearts, 2, true);
    assert_eq!(game.foundation_accepting(two), Some(1));
    let wrong = card(Suit::Spades, 2, true);
    assert_eq!(game.foundation_accepting(wrong), None);
}

#[test]
fn first_face_up_finds_the_run_start() {
    let mut game = empty_state();
    game.tableau[0].push(card(Suit::Clubs, 9, false));
    game.tableau[0].push(card(Suit::Clubs, 5, false));
    game.tableau[0].push(card(Suit::Hearts, 4, true));
    game.tableau[0].push(card(Suit::Spades, 3, true));

    assert_eq!(game.first_face_up(0), Some(2));
    assert_eq!(game.first_face_up(1), None);
}

#[test]
fn every_difficulty_shuffle_keeps_all_fifty_two_cards() {
    for seed in 0..25_u64 {
        let mut rng = StdRng::seed_from_u64(seed);
        for difficulty in [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard] {
            // assert_full_deck inside shuffled_deck panics on any loss.
            let deck = shuffled_deck(difficulty, &mut rng);
            assert_eq!(deck.len(), 52);
            assert!(deck.iter().all(|card| !card.face_up));
        }
    }
}

#[test]
fn hard_shuffles_keep_the_aces_at_the_deck_head() {
    for seed in 0..25_u64 {
        let mut rng = StdRng::seed_from_u64(seed);
        let deck = shuffled_deck(Difficulty::Hard, &mut rng);
        assert!(deck[..4].iter().all(|card| card.rank == 1));
    }
}

#[test]
fn hard_deals_bury_the_aces_at_the_stock_bottom() {
    let config = DealConfig {
        difficulty: Difficulty::Hard,
        ..DealConfig::default()
    };
    for seed in 0..10_u64 {
        let game = GameState::new_with_seed(config, seed);
        assert!(game.stock[..4].iter().all(|card| card.rank == 1));
    }
}

#[test]
fn difficulty_metadata_round_trips() {
    for difficulty in [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard] {
        assert_eq!(Difficulty::from_id(difficulty.id()), Some(difficulty));
        assert!(!difficulty.label().is_empty());
        assert!(!difficulty.blurb().is_empty());
    }
    assert_eq!(Difficulty::from_id("nightmare"), None);
}

#[test]
fn draw_mode_counts_match() {
    assert_eq!(DrawMode::One.count(), 1);
    assert_eq!(DrawMode::Three.count(), 3);
    assert_eq!(DrawMode::from_count(3), Some(DrawMode::Three));
    assert_eq!(DrawMode::from_count(2), None);
}

#[test]
fn rank_labels_are_correct() {
    assert_eq!(rank_label(1), "A");
    assert_eq!(rank_label(11), "J");
    assert_eq!(rank_label(12), "Q");
    assert_eq!(rank_label(13), "K");
    assert_eq!(rank_label(99), "?");
}

#[test]
fn card_labels_combine_rank_and_suit() {
    assert_eq!(card(Suit::Spades, 1, false).label(), "AS");
    assert_eq!(card(Suit::Hearts, 10, true).label(), "10H");
}
