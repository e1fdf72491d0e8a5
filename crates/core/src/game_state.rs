//! Game state module - manages a complete Block Blast run
//!
//! This module ties together all core components: grid, pieces, RNG, scoring
//! and the quiz interrupt. Each player action is one state transition that runs
//! to completion (place -> clear -> score -> refill -> quiz -> game-over check),
//! so no partially updated state is ever observable.

use crate::grid::Grid;
use crate::pieces::Piece;
use crate::quiz::{AnswerOutcome, Question, QuizState};
use crate::rng::PieceGenerator;
use crate::scoring::{calculate_score, quiz_due};
use crate::snapshot::GameSnapshot;
use crate::types::{PlacementEvent, QuizPhase, BATCH_SIZE};

/// True iff no unused piece has a legal anchor anywhere on the grid.
///
/// A batch with no unused pieces has nothing to evaluate and reports false; the
/// game state always refills before checking, so play never hits that case.
pub fn is_game_over(grid: &Grid, pieces: &[Piece]) -> bool {
    let mut unused = pieces.iter().filter(|p| !p.used).peekable();
    if unused.peek().is_none() {
        return false;
    }
    unused.all(|p| !grid.fits_anywhere(p.shape()))
}

/// Final figures of a run, handed to the score reporter at game over
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RunSummary {
    pub score: u32,
    pub lines_cleared: u32,
    pub moves: u32,
    pub question_streak: u32,
    pub questions_answered: u32,
    pub questions_correct: u32,
    pub episode_id: u32,
}

/// Complete run state
#[derive(Debug, Clone)]
pub struct GameState {
    grid: Grid,
    pieces: [Piece; BATCH_SIZE],
    generator: PieceGenerator,
    questions: Vec<Question>,
    quiz: QuizState,
    /// Monotonic episode id (increments on restart).
    episode_id: u32,
    /// Monotonic id of the current batch (increments on every refill).
    batch_id: u32,
    /// Last placement event (consumed by observers).
    last_event: Option<PlacementEvent>,
    score: u32,
    lines: u32,
    moves: u32,
    game_over: bool,
}

impl GameState {
    /// Create a new run with the given RNG seed and question pool.
    ///
    /// The pool is shuffled once up front; draws are uniform over it afterwards.
    pub fn new(seed: u32, mut questions: Vec<Question>) -> Self {
        let mut generator = PieceGenerator::new(seed);
        generator.rng_mut().shuffle(&mut questions);
        let pieces = generator.generate_batch();

        Self {
            grid: Grid::new(),
            pieces,
            generator,
            questions,
            quiz: QuizState::new(),
            episode_id: 0,
            batch_id: 0,
            last_event: None,
            score: 0,
            lines: 0,
            moves: 0,
            game_over: false,
        }
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }

    pub fn question_streak(&self) -> u32 {
        self.quiz.streak()
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    pub fn batch_id(&self) -> u32 {
        self.batch_id
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn pieces(&self) -> &[Piece; BATCH_SIZE] {
        &self.pieces
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn quiz(&self) -> &QuizState {
        &self.quiz
    }

    pub fn quiz_phase(&self) -> QuizPhase {
        self.quiz.phase()
    }

    /// The question currently awaiting an answer
    pub fn active_question(&self) -> Option<&Question> {
        self.quiz.active().and_then(|i| self.questions.get(i))
    }

    /// Whether placements are currently accepted
    pub fn playable(&self) -> bool {
        !self.game_over && !self.quiz.is_presenting()
    }

    /// Whether the piece in `slot` could legally go at (row, col) right now
    pub fn can_place(&self, slot: usize, row: i8, col: i8) -> bool {
        match self.pieces.get(slot) {
            Some(piece) if !piece.used => self.grid.can_place(piece.shape(), row, col),
            _ => false,
        }
    }

    /// Place the piece in `slot` with its anchor at (row, col).
    ///
    /// Returns false without touching any state if the run is over, a question is
    /// being presented, the slot is invalid or used, or the placement is illegal.
    pub fn try_place(&mut self, slot: usize, row: i8, col: i8) -> bool {
        if !self.playable() {
            return false;
        }
        let Some(piece) = self.pieces.get(slot).copied() else {
            return false;
        };
        if piece.used || !self.grid.place(piece.shape(), row, col, piece.color) {
            return false;
        }

        self.pieces[slot].used = true;
        self.moves = self.moves.saturating_add(1);

        // Clear completed rows and columns
        let cleared = self.grid.clear_lines();
        let lines_cleared = cleared.count();
        let mut line_clear_score = 0;
        if lines_cleared > 0 {
            let result = calculate_score(lines_cleared, self.quiz.streak());
            self.score = self.score.saturating_add(result.total);
            self.lines = self.lines.saturating_add(lines_cleared);
            line_clear_score = result.total;
        }

        // Refill once the whole batch is consumed
        let batch_refilled = self.pieces.iter().all(|p| p.used);
        if batch_refilled {
            self.pieces = self.generator.generate_batch();
            self.batch_id = self.batch_id.wrapping_add(1);
        }

        let mut quiz_triggered = quiz_due(self.moves)
            && self
                .quiz
                .present(self.questions.len(), self.generator.rng_mut());

        self.game_over = is_game_over(&self.grid, &self.pieces);
        if self.game_over {
            self.quiz.discard();
            quiz_triggered = false;
        }

        self.last_event = Some(PlacementEvent {
            lines_cleared,
            line_clear_score,
            quiz_triggered,
            batch_refilled,
            game_over: self.game_over,
        });

        true
    }

    /// Answer the active question.
    ///
    /// A correct answer raises the streak and adds the flat bonus; a wrong one
    /// resets the streak. Returns None when no question is active or the run is
    /// over.
    pub fn submit_answer(&mut self, selected: usize) -> Option<AnswerOutcome> {
        if self.game_over {
            return None;
        }
        let outcome = self.quiz.submit(&self.questions, selected)?;
        self.score = self.score.saturating_add(outcome.bonus);
        Some(outcome)
    }

    /// Take and clear the last placement event.
    pub fn take_last_event(&mut self) -> Option<PlacementEvent> {
        self.last_event.take()
    }

    pub fn last_event(&self) -> Option<PlacementEvent> {
        self.last_event
    }

    /// Start a new episode on the same question pool and RNG stream.
    pub fn restart(&mut self) {
        let next_episode = self.episode_id.wrapping_add(1);
        self.grid.clear();
        self.pieces = self.generator.generate_batch();
        self.quiz = QuizState::new();
        self.batch_id = 0;
        self.last_event = None;
        self.score = 0;
        self.lines = 0;
        self.moves = 0;
        self.game_over = false;
        self.episode_id = next_episode;
    }

    /// Replace the grid and batch (puzzle setups, fixtures).
    ///
    /// Counters are kept; the game-over flag is re-evaluated for the new position.
    pub fn load_position(&mut self, grid: Grid, pieces: [Piece; BATCH_SIZE]) {
        self.grid = grid;
        self.pieces = pieces;
        self.quiz.discard();
        self.game_over = is_game_over(&self.grid, &self.pieces);
    }

    pub fn summary(&self) -> RunSummary {
        RunSummary {
            score: self.score,
            lines_cleared: self.lines,
            moves: self.moves,
            question_streak: self.quiz.streak(),
            questions_answered: self.quiz.answered(),
            questions_correct: self.quiz.correct(),
            episode_id: self.episode_id,
        }
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.grid.write_u8_grid(&mut out.grid);
        out.pieces = self.pieces;
        out.score = self.score;
        out.lines = self.lines;
        out.moves = self.moves;
        out.question_streak = self.quiz.streak();
        out.quiz_phase = self.quiz.phase();
        out.active_question = self.quiz.active();
        out.game_over = self.game_over;
        out.episode_id = self.episode_id;
        out.batch_id = self.batch_id;
        out.rng_state = self.generator.state();
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(1, Vec::new())
    }
}
