use crate::pieces::Piece;
use crate::types::{BlockColor, QuizPhase, ShapeKind, BATCH_SIZE, GRID_SIZE};

/// Copyable view of a run for renderers and observers.
///
/// Grid cells use [`BlockColor::index`] encoding (0 = empty).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub grid: [[u8; GRID_SIZE as usize]; GRID_SIZE as usize],
    pub pieces: [Piece; BATCH_SIZE],
    pub score: u32,
    pub lines: u32,
    pub moves: u32,
    pub question_streak: u32,
    pub quiz_phase: QuizPhase,
    pub active_question: Option<usize>,
    pub game_over: bool,
    pub episode_id: u32,
    pub batch_id: u32,
    /// Current RNG state, enough to resume the piece and question stream.
    pub rng_state: u32,
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            grid: [[0u8; GRID_SIZE as usize]; GRID_SIZE as usize],
            pieces: [Piece::new(ShapeKind::Single, BlockColor::Primary); BATCH_SIZE],
            score: 0,
            lines: 0,
            moves: 0,
            question_streak: 0,
            quiz_phase: QuizPhase::Idle,
            active_question: None,
            game_over: false,
            episode_id: 0,
            batch_id: 0,
            rng_state: 0,
        }
    }
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn playable(&self) -> bool {
        !self.game_over && self.quiz_phase == QuizPhase::Idle
    }

    pub fn cell(&self, row: usize, col: usize) -> Option<BlockColor> {
        self.grid
            .get(row)
            .and_then(|r| r.get(col))
            .and_then(|&v| BlockColor::from_index(v))
    }
}
