use crate::core::{AnswerOutcome, GameState};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerError {
    NotPlayable,
    NoActiveQuestion,
    /// The index does not name one of the active question's options.
    InvalidOption,
}

impl AnswerError {
    pub fn code(self) -> &'static str {
        match self {
            AnswerError::NotPlayable => "not_playable",
            AnswerError::NoActiveQuestion => "no_active_question",
            AnswerError::InvalidOption => "invalid_option",
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            AnswerError::NotPlayable => "game is over",
            AnswerError::NoActiveQuestion => "no question is waiting for an answer",
            AnswerError::InvalidOption => "no such option",
        }
    }
}

/// Answer the active question with option `selected`.
///
/// An index past the last option is rejected and the question stays active.
pub fn apply_answer(state: &mut GameState, selected: usize) -> Result<AnswerOutcome, AnswerError> {
    if state.game_over() {
        return Err(AnswerError::NotPlayable);
    }
    let options = state
        .active_question()
        .ok_or(AnswerError::NoActiveQuestion)?
        .options
        .len();
    if selected >= options {
        return Err(AnswerError::InvalidOption);
    }
    state
        .submit_answer(selected)
        .ok_or(AnswerError::NoActiveQuestion)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Grid, Piece, Question};
    use crate::types::{BlockColor, QuizPhase, ShapeKind};

    fn presenting(questions: Vec<Question>) -> GameState {
        let mut gs = GameState::new(1, questions);
        gs.load_position(
            Grid::new(),
            [Piece::new(ShapeKind::Single, BlockColor::Primary); 3],
        );
        for (slot, col) in [(0, 0), (1, 2), (2, 4)] {
            assert!(gs.try_place(slot, 0, col));
        }
        assert_eq!(gs.quiz_phase(), QuizPhase::Presenting);
        gs
    }

    #[test]
    fn answer_rejected_while_idle() {
        let mut gs = GameState::new(1, Vec::new());
        assert_eq!(apply_answer(&mut gs, 0), Err(AnswerError::NoActiveQuestion));
    }

    #[test]
    fn wrong_answer_resets_streak_without_bonus() {
        let q = Question::new("q", "12 + 8?", vec!["18".into(), "20".into()], 1);
        let mut gs = presenting(vec![q]);

        let outcome = apply_answer(&mut gs, 0).unwrap();
        assert!(!outcome.correct);
        assert_eq!(outcome.streak, 0);
        assert_eq!(gs.score(), 0);
    }

    #[test]
    fn answer_past_last_option_keeps_question_and_streak() {
        let q = Question::new("q", "12 + 8?", vec!["18".into(), "20".into()], 1);
        let mut gs = presenting(vec![q]);
        assert!(apply_answer(&mut gs, 1).unwrap().correct);
        assert_eq!(gs.question_streak(), 1);

        // Three more placements bring the next question
        gs.load_position(
            Grid::new(),
            [Piece::new(ShapeKind::Single, BlockColor::Primary); 3],
        );
        for (slot, col) in [(0, 0), (1, 2), (2, 4)] {
            assert!(gs.try_place(slot, 2, col));
        }
        assert_eq!(gs.quiz_phase(), QuizPhase::Presenting);
        let score = gs.score();

        assert_eq!(apply_answer(&mut gs, 6), Err(AnswerError::InvalidOption));
        assert_eq!(AnswerError::InvalidOption.code(), "invalid_option");
        assert_eq!(gs.question_streak(), 1);
        assert_eq!(gs.quiz_phase(), QuizPhase::Presenting);
        assert_eq!(gs.score(), score);
        assert_eq!(gs.quiz().answered(), 1);
    }
}
