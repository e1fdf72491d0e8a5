//! Scoring module - line clear points and answer bonuses
//!
//! - A clear is worth `lines * LINE_CLEAR_POINTS * (streak + 1)`.
//! - A correct answer adds a flat `ANSWER_BONUS`, outside the multiplier.
//! - Nothing ever subtracts from the score.

use crate::types::{ANSWER_BONUS, LINE_CLEAR_POINTS, QUIZ_INTERVAL};

/// Score calculation result for one placement's clear
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScoreResult {
    pub lines: u32,
    /// Always at least 1.
    pub multiplier: u32,
    pub total: u32,
}

/// Streak multiplier: `streak + 1`, so it never nullifies points.
pub fn streak_multiplier(streak: u32) -> u32 {
    streak.saturating_add(1)
}

/// Points for clearing `lines` rows/columns at the given question streak.
pub fn score_for_clear(lines: u32, streak: u32) -> u32 {
    lines
        .saturating_mul(LINE_CLEAR_POINTS)
        .saturating_mul(streak_multiplier(streak))
}

/// Full breakdown for a clear
pub fn calculate_score(lines: u32, streak: u32) -> ScoreResult {
    ScoreResult {
        lines,
        multiplier: streak_multiplier(streak),
        total: score_for_clear(lines, streak),
    }
}

/// Bonus awarded for an answer
pub fn answer_bonus(correct: bool) -> u32 {
    if correct {
        ANSWER_BONUS
    } else {
        0
    }
}

/// Whether the quiz fires after the given (1-based, post-increment) move count
pub fn quiz_due(moves: u32) -> bool {
    moves > 0 && moves % QUIZ_INTERVAL == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_for_clear_formula() {
        assert_eq!(score_for_clear(1, 0), 100);
        assert_eq!(score_for_clear(2, 3), 800);
        assert_eq!(score_for_clear(3, 1), 600);
    }

    #[test]
    fn test_zero_lines_scores_nothing() {
        for streak in [0, 1, 5, u32::MAX] {
            assert_eq!(score_for_clear(0, streak), 0);
        }
    }

    #[test]
    fn test_multiplier_never_below_one() {
        assert_eq!(streak_multiplier(0), 1);
        assert_eq!(streak_multiplier(u32::MAX), u32::MAX);
    }

    #[test]
    fn test_score_saturates() {
        assert_eq!(score_for_clear(16, u32::MAX), u32::MAX);
    }

    #[test]
    fn test_calculate_score_breakdown() {
        let r = calculate_score(2, 1);
        assert_eq!(r.lines, 2);
        assert_eq!(r.multiplier, 2);
        assert_eq!(r.total, 400);
    }

    #[test]
    fn test_answer_bonus() {
        assert_eq!(answer_bonus(true), 50);
        assert_eq!(answer_bonus(false), 0);
    }

    #[test]
    fn test_quiz_due_cadence() {
        let due: Vec<u32> = (0..=10).filter(|&m| quiz_due(m)).collect();
        assert_eq!(due, vec![3, 6, 9]);
    }
}
