//! Game flow tests - the placement pipeline, quiz interrupt, and game over

use blockblast::core::{is_game_over, GameState, Grid, Piece, Question};
use blockblast::engine::{apply_action, apply_place, ActionOutcome, PlaceError};
use blockblast::types::{BlockColor, GameAction, QuizPhase, ShapeKind, BATCH_SIZE};

fn singles(color: BlockColor) -> [Piece; BATCH_SIZE] {
    [Piece::new(ShapeKind::Single, color); BATCH_SIZE]
}

fn math_questions() -> Vec<Question> {
    vec![
        Question::new("q1", "What is 12 + 8?", vec!["18".into(), "20".into(), "22".into(), "24".into()], 1)
            .with_explanation("12 + 8 = 20"),
        Question::new("q2", "What is 15 - 7?", vec!["6".into(), "7".into(), "8".into(), "9".into()], 2),
    ]
}

/// Swap a refilled random batch back to singles (keeping used flags) so a
/// test controls exactly which cells fill. Only valid while no question is up.
fn ensure_singles(state: &mut GameState) {
    if state.pieces().iter().all(|p| p.kind == ShapeKind::Single) {
        return;
    }
    let mut pieces = singles(BlockColor::Primary);
    for (p, old) in pieces.iter_mut().zip(state.pieces()) {
        p.used = old.used;
    }
    let grid = state.grid().clone();
    state.load_position(grid, pieces);
}

fn place_single(state: &mut GameState, cell: (i8, i8)) {
    ensure_singles(state);
    let slot = first_unused(state);
    assert!(state.try_place(slot, cell.0, cell.1), "could not place at {:?}", cell);
}

fn first_unused(state: &GameState) -> usize {
    state.pieces().iter().position(|p| !p.used).unwrap()
}

fn answer_correctly(state: &mut GameState) {
    let correct = state.active_question().unwrap().correct_answer_index;
    assert!(state.submit_answer(correct).unwrap().correct);
}

#[test]
fn test_end_to_end_single_at_origin() {
    let mut state = GameState::new(12345, math_questions());
    let mut pieces = *state.pieces();
    pieces[0] = Piece::new(ShapeKind::Single, BlockColor::Primary);
    state.load_position(Grid::new(), pieces);

    assert!(state.can_place(0, 0, 0));
    assert!(state.try_place(0, 0, 0));

    assert!(state.grid().is_occupied(0, 0));
    let ev = state.take_last_event().unwrap();
    assert_eq!(ev.lines_cleared, 0);
    assert!(!ev.quiz_triggered);
    assert!(!ev.game_over);
    assert_eq!(state.score(), 0);
    assert_eq!(state.moves(), 1);
    assert_eq!(state.quiz_phase(), QuizPhase::Idle);
    assert!(!state.game_over());
    assert!(state.pieces()[0].used);
}

#[test]
fn test_quiz_presents_after_every_third_move() {
    let mut state = GameState::new(7, math_questions());
    state.load_position(Grid::new(), singles(BlockColor::Accent));

    let mut presented_at = Vec::new();
    for i in 0..9i8 {
        // Spread out so nothing ever clears.
        place_single(&mut state, (i % 8, (i * 3 + i / 8) % 8));
        if state.quiz_phase() == QuizPhase::Presenting {
            presented_at.push(state.moves());
            answer_correctly(&mut state);
        }
    }
    assert_eq!(presented_at, vec![3, 6, 9]);
}

#[test]
fn test_streak_and_bonus() {
    let mut state = GameState::new(3, math_questions());
    state.load_position(Grid::new(), singles(BlockColor::Success));

    for i in 0..3 {
        place_single(&mut state, (0, i * 2));
    }
    answer_correctly(&mut state);
    assert_eq!(state.question_streak(), 1);
    assert_eq!(state.score(), 50);

    for i in 0..3 {
        place_single(&mut state, (2, i * 2));
    }
    let wrong = state.active_question().unwrap().correct_answer_index + 1;
    let outcome = state.submit_answer(wrong).unwrap();
    assert!(!outcome.correct);
    assert_eq!(outcome.bonus, 0);
    assert_eq!(state.question_streak(), 0);
    assert_eq!(state.score(), 50);
}

#[test]
fn test_streak_multiplies_line_clears() {
    let mut state = GameState::new(5, math_questions());
    let mut grid = Grid::new();
    for c in 1..8 {
        grid.set(7, c, Some(BlockColor::Warning));
    }
    state.load_position(grid, singles(BlockColor::Primary));

    // Three moves away from the full row, then a correct answer.
    for c in [0, 2, 4] {
        place_single(&mut state, (0, c));
    }
    answer_correctly(&mut state);
    assert_eq!(state.score(), 50);

    // Streak 1 doubles the clear: 1 * 100 * 2.
    place_single(&mut state, (7, 0));
    let ev = state.take_last_event().unwrap();
    assert_eq!(ev.lines_cleared, 1);
    assert_eq!(ev.line_clear_score, 200);
    assert_eq!(state.score(), 250);
    assert_eq!(state.lines(), 1);
}

#[test]
fn test_placement_rejected_while_question_presented() {
    let mut state = GameState::new(9, math_questions());
    state.load_position(Grid::new(), singles(BlockColor::Primary));
    for c in [0, 2, 4] {
        place_single(&mut state, (0, c));
    }
    assert_eq!(state.quiz_phase(), QuizPhase::Presenting);

    let before = state.snapshot();
    assert!(!state.try_place(0, 5, 5));
    assert_eq!(apply_place(&mut state, 0, 5, 5), Err(PlaceError::QuizPending));
    assert_eq!(state.snapshot(), before);

    answer_correctly(&mut state);
    place_single(&mut state, (5, 5));
}

#[test]
fn test_empty_pool_never_interrupts() {
    let mut state = GameState::new(9, Vec::new());
    state.load_position(Grid::new(), singles(BlockColor::Primary));
    for i in 0..6i8 {
        place_single(&mut state, (i, i));
        assert_eq!(state.quiz_phase(), QuizPhase::Idle);
    }
    assert_eq!(state.moves(), 6);
}

#[test]
fn test_batch_refills_only_when_consumed() {
    let mut state = GameState::new(1, Vec::new());
    state.load_position(Grid::new(), singles(BlockColor::Primary));

    state.try_place(0, 0, 0);
    state.try_place(2, 0, 2);
    assert!(!state.pieces()[1].used);
    assert!(state.pieces()[0].used && state.pieces()[2].used);

    state.try_place(1, 0, 4);
    assert!(state.pieces().iter().all(|p| !p.used));
    assert_eq!(state.batch_id(), 1);
}

#[test]
fn test_game_over_detection_boundaries() {
    let full = Grid::filled(BlockColor::Primary);
    let empty = Grid::new();
    let squares = [Piece::new(ShapeKind::Square, BlockColor::Accent); BATCH_SIZE];

    assert!(is_game_over(&full, &squares));
    assert!(!is_game_over(&empty, &squares));

    // One 1x1 hole: squares do not fit, a single would.
    let mut holed = Grid::filled(BlockColor::Primary);
    holed.set(4, 4, None);
    assert!(is_game_over(&holed, &squares));
    let mut mixed = squares;
    mixed[1] = Piece::new(ShapeKind::Single, BlockColor::Accent);
    assert!(!is_game_over(&holed, &mixed));

    // A used single does not count.
    mixed[1].used = true;
    assert!(is_game_over(&holed, &mixed));
}

#[test]
fn test_game_over_freezes_run_and_drops_question() {
    let mut state = GameState::new(2, math_questions());
    state.load_position(Grid::new(), singles(BlockColor::Primary));
    place_single(&mut state, (0, 0));
    place_single(&mut state, (0, 2));
    assert_eq!(state.moves(), 2);

    // Two isolated holes per row and column: nothing clears, no square fits.
    let mut grid = Grid::filled(BlockColor::Primary);
    for i in 0..8i8 {
        grid.set(i, (i + 1) % 8, None);
        grid.set(i, (i + 4) % 8, None);
    }
    let mut pieces = [Piece::new(ShapeKind::Square, BlockColor::Accent); BATCH_SIZE];
    pieces[0] = Piece::new(ShapeKind::Single, BlockColor::Success);
    state.load_position(grid, pieces);
    assert!(!state.game_over());

    // Move 3 would surface a question, but the run ends first.
    assert!(state.try_place(0, 0, 1));
    let ev = state.take_last_event().unwrap();
    assert_eq!(ev.lines_cleared, 0);
    assert!(ev.game_over);
    assert!(!ev.quiz_triggered);
    assert!(state.game_over());
    assert_eq!(state.quiz_phase(), QuizPhase::Idle);

    let before = state.snapshot();
    assert!(!state.try_place(1, 2, 3));
    assert!(state.submit_answer(0).is_none());
    assert_eq!(state.snapshot(), before);
}

#[test]
fn test_restart_via_action() {
    let mut state = GameState::new(2, math_questions());
    state.load_position(Grid::filled(BlockColor::Primary), singles(BlockColor::Primary));
    assert!(state.game_over());

    let out = apply_action(&mut state, GameAction::from_str("restart").unwrap()).unwrap();
    assert_eq!(out, ActionOutcome::Restarted { episode_id: 1 });
    assert!(!state.game_over());
    assert_eq!(state.grid().filled_count(), 0);
    assert_eq!(state.score(), 0);
}

#[test]
fn test_same_seed_replays_identically() {
    let play = |seed: u32| {
        let mut state = GameState::new(seed, math_questions());
        let mut trace = Vec::new();
        for _ in 0..40 {
            if state.game_over() {
                break;
            }
            if state.quiz_phase() == QuizPhase::Presenting {
                state.submit_answer(0);
                continue;
            }
            let slot = first_unused(&state);
            let spot = (0..8).flat_map(|r| (0..8).map(move |c| (r, c))).find(|&(r, c)| state.can_place(slot, r, c));
            let Some((r, c)) = spot else { break };
            state.try_place(slot, r, c);
            trace.push(state.snapshot());
        }
        trace
    };
    assert_eq!(play(77), play(77));
}

#[test]
fn test_single_placement_completes_row_and_column() {
    let mut grid = Grid::new();
    for i in 0..8i8 {
        if i != 5 {
            assert!(grid.set(3, i, Some(BlockColor::Primary)));
        }
        if i != 3 {
            assert!(grid.set(i, 5, Some(BlockColor::Warning)));
        }
    }
    grid.set(0, 0, Some(BlockColor::Accent));

    let mut state = GameState::new(3, math_questions());
    state.load_position(grid, singles(BlockColor::Success));
    assert!(state.try_place(0, 3, 5));

    let ev = state.take_last_event().unwrap();
    assert_eq!(ev.lines_cleared, 2);
    assert_eq!(ev.line_clear_score, 200);
    assert_eq!(state.score(), 200);
    assert_eq!(state.lines(), 2);
    for i in 0..8i8 {
        assert!(!state.grid().is_occupied(3, i));
        assert!(!state.grid().is_occupied(i, 5));
    }
    assert!(state.grid().is_occupied(0, 0));
    assert_eq!(state.grid().filled_count(), 1);
}
