use crate::core::GameState;
use crate::types::{PlacementEvent, BATCH_SIZE};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaceError {
    NotPlayable,
    QuizPending,
    SlotOutOfRange,
    PieceUsed,
    OutOfBounds,
    Occupied,
}

impl PlaceError {
    pub fn code(self) -> &'static str {
        match self {
            PlaceError::NotPlayable => "not_playable",
            PlaceError::QuizPending => "quiz_pending",
            PlaceError::SlotOutOfRange | PlaceError::PieceUsed => "invalid_slot",
            PlaceError::OutOfBounds | PlaceError::Occupied => "invalid_place",
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            PlaceError::NotPlayable => "game is over",
            PlaceError::QuizPending => "answer the active question first",
            PlaceError::SlotOutOfRange => "batch slot does not exist",
            PlaceError::PieceUsed => "piece in this slot was already placed",
            PlaceError::OutOfBounds => "piece would extend past the grid edge",
            PlaceError::Occupied => "piece would overlap a filled cell",
        }
    }
}

/// Place the piece in `slot` at anchor (row, col), or say why not.
///
/// On error the state is untouched.
pub fn apply_place(
    state: &mut GameState,
    slot: usize,
    row: i8,
    col: i8,
) -> Result<PlacementEvent, PlaceError> {
    if state.game_over() {
        return Err(PlaceError::NotPlayable);
    }
    if state.quiz().is_presenting() {
        return Err(PlaceError::QuizPending);
    }
    if slot >= BATCH_SIZE {
        return Err(PlaceError::SlotOutOfRange);
    }
    let piece = state.pieces()[slot];
    if piece.used {
        return Err(PlaceError::PieceUsed);
    }

    // Distinguish edge overflow from overlap.
    let grid = state.grid();
    for &(dr, dc) in piece.shape() {
        let r = row.saturating_add(dr);
        let c = col.saturating_add(dc);
        match grid.get(r, c) {
            None => return Err(PlaceError::OutOfBounds),
            Some(Some(_)) => return Err(PlaceError::Occupied),
            Some(None) => {}
        }
    }

    if !state.try_place(slot, row, col) {
        return Err(PlaceError::NotPlayable);
    }
    Ok(state.last_event().unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Grid, Piece, Question};
    use crate::types::{BlockColor, QuizPhase, ShapeKind};

    fn state_with(kind: ShapeKind, questions: Vec<Question>) -> GameState {
        let mut gs = GameState::new(1, questions);
        gs.load_position(Grid::new(), [Piece::new(kind, BlockColor::Primary); BATCH_SIZE]);
        gs
    }

    #[test]
    fn place_rejected_when_out_of_bounds() {
        let mut gs = state_with(ShapeKind::TrominoH, Vec::new());
        let err = apply_place(&mut gs, 0, 0, 6).unwrap_err();
        assert_eq!(err, PlaceError::OutOfBounds);
        assert_eq!(gs.moves(), 0);

        let err = apply_place(&mut gs, 0, -1, 0).unwrap_err();
        assert_eq!(err, PlaceError::OutOfBounds);
    }

    #[test]
    fn place_rejected_when_occupied() {
        let mut gs = state_with(ShapeKind::Square, Vec::new());
        apply_place(&mut gs, 0, 0, 0).unwrap();
        let err = apply_place(&mut gs, 1, 1, 1).unwrap_err();
        assert_eq!(err, PlaceError::Occupied);
        assert_eq!(err.code(), "invalid_place");
    }

    #[test]
    fn place_rejected_for_used_or_missing_slot() {
        let mut gs = state_with(ShapeKind::Single, Vec::new());
        apply_place(&mut gs, 0, 0, 0).unwrap();
        assert_eq!(apply_place(&mut gs, 0, 5, 5), Err(PlaceError::PieceUsed));
        assert_eq!(apply_place(&mut gs, 3, 5, 5), Err(PlaceError::SlotOutOfRange));
    }

    #[test]
    fn place_rejected_while_question_pending() {
        let q = Question::new("q", "?", vec!["a".into(), "b".into()], 0);
        let mut gs = state_with(ShapeKind::Single, vec![q]);
        for col in [0, 2, 4] {
            apply_place(&mut gs, (col / 2) as usize, 0, col).unwrap();
        }
        assert_eq!(gs.quiz_phase(), QuizPhase::Presenting);
        assert_eq!(apply_place(&mut gs, 0, 6, 6), Err(PlaceError::QuizPending));
    }

    #[test]
    fn place_rejected_when_game_over() {
        let mut gs = GameState::new(1, Vec::new());
        gs.load_position(
            Grid::filled(BlockColor::Warning),
            [Piece::new(ShapeKind::Single, BlockColor::Primary); BATCH_SIZE],
        );
        assert!(gs.game_over());
        assert_eq!(apply_place(&mut gs, 0, 0, 0), Err(PlaceError::NotPlayable));
    }

    #[test]
    fn successful_place_reports_event() {
        let mut gs = state_with(ShapeKind::Single, Vec::new());
        let ev = apply_place(&mut gs, 0, 7, 7).unwrap();
        assert!(!ev.cleared());
        assert!(!ev.game_over);
    }
}
