//! A run bound to a student and a game, reporting its score when it ends.

use chrono::Utc;

use crate::core::{AnswerOutcome, GameState, Grid, Piece, Question};
use crate::engine::{apply_action, ActionError, ActionOutcome};
use crate::record::ScoreRecord;
use crate::reporter::ScoreReporter;
use crate::types::{GameAction, BATCH_SIZE};

pub struct GameSession {
    state: GameState,
    student_id: String,
    game_id: String,
    reporter: ScoreReporter,
    /// Episode whose record has already been handed to the reporter.
    reported_episode: Option<u32>,
    /// Feedback for the most recent answer, cleared by the next placement.
    last_answer: Option<AnswerOutcome>,
}

impl GameSession {
    pub fn new(
        seed: u32,
        questions: Vec<Question>,
        student_id: impl Into<String>,
        game_id: impl Into<String>,
        reporter: ScoreReporter,
    ) -> Self {
        let student_id = student_id.into();
        let game_id = game_id.into();
        tracing::info!(
            seed,
            questions = questions.len(),
            student = %student_id,
            game = %game_id,
            "session started"
        );
        Self {
            state: GameState::new(seed, questions),
            student_id,
            game_id,
            reporter,
            reported_episode: None,
            last_answer: None,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn student_id(&self) -> &str {
        &self.student_id
    }

    pub fn game_id(&self) -> &str {
        &self.game_id
    }

    /// Replace the grid and batch (puzzle setups, fixtures).
    ///
    /// A position with no legal move ends the episode and is reported like any
    /// other game over.
    pub fn load_position(&mut self, grid: Grid, pieces: [Piece; BATCH_SIZE]) {
        self.state.load_position(grid, pieces);
        self.last_answer = None;
        if self.state.game_over() {
            self.report_game_over();
        }
    }

    pub fn last_answer(&self) -> Option<AnswerOutcome> {
        self.last_answer
    }

    /// Apply one command and log what happened.
    ///
    /// The score record is handed to the reporter exactly once per episode, on
    /// the placement that ends it.
    pub fn handle(&mut self, action: GameAction) -> Result<ActionOutcome, ActionError> {
        let result = apply_action(&mut self.state, action);
        match &result {
            Ok(ActionOutcome::Placed(event)) => {
                self.last_answer = None;
                if event.cleared() {
                    tracing::debug!(
                        lines = event.lines_cleared,
                        points = event.line_clear_score,
                        "lines cleared"
                    );
                }
                if event.quiz_triggered {
                    tracing::debug!(moves = self.state.moves(), "question presented");
                }
                if event.game_over {
                    self.report_game_over();
                }
            }
            Ok(ActionOutcome::Answered(outcome)) => {
                self.last_answer = Some(*outcome);
                tracing::debug!(
                    correct = outcome.correct,
                    streak = outcome.streak,
                    "question answered"
                );
            }
            Ok(ActionOutcome::Restarted { episode_id }) => {
                self.last_answer = None;
                tracing::info!(episode = *episode_id, "run restarted");
            }
            Err(e) => {
                tracing::debug!(action = action.as_str(), code = e.code(), "{}", e.message());
            }
        }
        result
    }

    fn report_game_over(&mut self) {
        let episode = self.state.episode_id();
        if self.reported_episode == Some(episode) {
            return;
        }
        let summary = self.state.summary();
        tracing::info!(
            episode,
            score = summary.score,
            lines = summary.lines_cleared,
            moves = summary.moves,
            "game over"
        );
        let record = ScoreRecord::from_summary(&self.student_id, &self.game_id, &summary, Utc::now());
        self.reporter.report(record);
        self.reported_episode = Some(episode);
    }

    /// End the session, waiting for queued score writes.
    pub fn finish(self) -> usize {
        tracing::info!(score = self.state.score(), "session finished");
        self.reporter.shutdown()
    }
}
