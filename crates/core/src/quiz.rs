//! Quiz module - the periodic question interrupt
//!
//! `Idle -> Presenting -> Idle`. A question is surfaced after every
//! `QUIZ_INTERVAL`-th placement and stays active until any answer is submitted.
//! There is no timeout. While `Presenting`, placements are rejected by
//! [`GameState`](crate::game_state::GameState).

use crate::rng::SimpleRng;
use crate::scoring::answer_bonus;
use crate::types::QuizPhase;

/// A multiple-choice question supplied by the game content.
///
/// `correct_answer_index` is not validated; an out-of-range index just means no
/// answer is ever correct.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub id: String,
    pub text: String,
    pub options: Vec<String>,
    pub correct_answer_index: usize,
    pub explanation: Option<String>,
}

impl Question {
    pub fn new(
        id: impl Into<String>,
        text: impl Into<String>,
        options: Vec<String>,
        correct_answer_index: usize,
    ) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            options,
            correct_answer_index,
            explanation: None,
        }
    }

    pub fn with_explanation(mut self, explanation: impl Into<String>) -> Self {
        self.explanation = Some(explanation.into());
        self
    }

    pub fn is_correct(&self, selected: usize) -> bool {
        selected == self.correct_answer_index
    }

    /// Text of the correct option, if the index is in range
    pub fn correct_option(&self) -> Option<&str> {
        self.options
            .get(self.correct_answer_index)
            .map(String::as_str)
    }
}

/// Result of answering the active question
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnswerOutcome {
    pub correct: bool,
    /// Points added to the score (0 when wrong).
    pub bonus: u32,
    /// Streak after the answer.
    pub streak: u32,
    /// Pool index of the question that was answered.
    pub question_index: usize,
    pub correct_answer_index: usize,
}

/// Quiz interrupt state machine plus the answer streak it feeds into scoring
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuizState {
    active: Option<usize>,
    streak: u32,
    answered: u32,
    correct: u32,
}

impl QuizState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> QuizPhase {
        if self.active.is_some() {
            QuizPhase::Presenting
        } else {
            QuizPhase::Idle
        }
    }

    pub fn is_presenting(&self) -> bool {
        self.active.is_some()
    }

    /// Pool index of the active question
    pub fn active(&self) -> Option<usize> {
        self.active
    }

    pub fn streak(&self) -> u32 {
        self.streak
    }

    pub fn answered(&self) -> u32 {
        self.answered
    }

    pub fn correct(&self) -> u32 {
        self.correct
    }

    /// Surface a uniformly random question from a pool of `pool_len`.
    ///
    /// Repeats are allowed. An empty pool skips the interrupt and returns false.
    pub fn present(&mut self, pool_len: usize, rng: &mut SimpleRng) -> bool {
        match rng.pick_index(pool_len) {
            Some(idx) => {
                self.active = Some(idx);
                true
            }
            None => false,
        }
    }

    /// Answer the active question and return to `Idle`.
    ///
    /// Returns None (and changes nothing) when no question is active.
    pub fn submit(&mut self, pool: &[Question], selected: usize) -> Option<AnswerOutcome> {
        let question_index = self.active?;
        let question = pool.get(question_index)?;
        let correct = question.is_correct(selected);

        if correct {
            self.streak = self.streak.saturating_add(1);
            self.correct = self.correct.saturating_add(1);
        } else {
            self.streak = 0;
        }
        self.answered = self.answered.saturating_add(1);
        self.active = None;

        Some(AnswerOutcome {
            correct,
            bonus: answer_bonus(correct),
            streak: self.streak,
            question_index,
            correct_answer_index: question.correct_answer_index,
        })
    }

    /// Drop the active question without answering (run ended).
    pub fn discard(&mut self) {
        self.active = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pool() -> Vec<Question> {
        vec![
            Question::new("q1", "2 + 2?", vec!["3".into(), "4".into()], 1),
            Question::new("q2", "Sides of a triangle?", vec!["3".into(), "4".into()], 0),
        ]
    }

    #[test]
    fn test_idle_by_default() {
        let quiz = QuizState::new();
        assert_eq!(quiz.phase(), QuizPhase::Idle);
        assert_eq!(quiz.active(), None);
        assert_eq!(quiz.streak(), 0);
    }

    #[test]
    fn test_present_and_answer_correct() {
        let pool = pool();
        let mut quiz = QuizState::new();
        let mut rng = SimpleRng::new(5);

        assert!(quiz.present(pool.len(), &mut rng));
        assert_eq!(quiz.phase(), QuizPhase::Presenting);

        let idx = quiz.active().unwrap();
        let answer = pool[idx].correct_answer_index;
        let outcome = quiz.submit(&pool, answer).unwrap();

        assert!(outcome.correct);
        assert_eq!(outcome.bonus, 50);
        assert_eq!(outcome.streak, 1);
        assert_eq!(quiz.phase(), QuizPhase::Idle);
        assert_eq!(quiz.correct(), 1);
        assert_eq!(quiz.answered(), 1);
    }

    #[test]
    fn test_wrong_answer_resets_streak() {
        let pool = pool();
        let mut quiz = QuizState::new();
        let mut rng = SimpleRng::new(5);

        for _ in 0..3 {
            quiz.present(pool.len(), &mut rng);
            let idx = quiz.active().unwrap();
            quiz.submit(&pool, pool[idx].correct_answer_index);
        }
        assert_eq!(quiz.streak(), 3);

        quiz.present(pool.len(), &mut rng);
        let idx = quiz.active().unwrap();
        let outcome = quiz.submit(&pool, pool[idx].correct_answer_index + 7).unwrap();
        assert!(!outcome.correct);
        assert_eq!(outcome.bonus, 0);
        assert_eq!(quiz.streak(), 0);
    }

    #[test]
    fn test_empty_pool_skips() {
        let mut quiz = QuizState::new();
        let mut rng = SimpleRng::new(1);
        assert!(!quiz.present(0, &mut rng));
        assert_eq!(quiz.phase(), QuizPhase::Idle);
    }

    #[test]
    fn test_submit_while_idle_is_rejected() {
        let mut quiz = QuizState::new();
        assert_eq!(quiz.submit(&pool(), 0), None);
        assert_eq!(quiz.answered(), 0);
    }

    #[test]
    fn test_out_of_range_correct_index_never_matches() {
        let pool = vec![Question::new("bad", "?", vec!["a".into()], 9)];
        let mut quiz = QuizState::new();
        let mut rng = SimpleRng::new(1);
        quiz.present(pool.len(), &mut rng);
        let outcome = quiz.submit(&pool, 0).unwrap();
        assert!(!outcome.correct);
        assert_eq!(pool[0].correct_option(), None);
    }
}
