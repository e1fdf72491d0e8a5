//! Core game logic module - pure, deterministic, and testable
//!
//! This crate contains all the Block Blast rules and run state. It has **zero
//! dependencies** on UI, persistence, or I/O, so the same seed and question pool
//! always replay the same run.
//!
//! # Module Structure
//!
//! - [`grid`]: 8x8 occupancy grid with placement legality and line clearing
//! - [`pieces`]: the fixed 8-shape palette and batch pieces
//! - [`rng`]: seeded LCG and uniform batch generation
//! - [`scoring`]: line clear points, streak multiplier, answer bonus
//! - [`quiz`]: the periodic question interrupt and answer streak
//! - [`game_state`]: a complete run (placement pipeline, game-over detection)
//! - [`snapshot`]: copyable view for renderers
//!
//! # Game Rules
//!
//! - Pieces come in batches of three; a new batch arrives only once all three are placed.
//! - Any full row or column clears, rows and columns found in the same scan.
//! - A clear is worth `lines * 100 * (streak + 1)`.
//! - Every third placement surfaces a question; placements wait for an answer.
//! - A correct answer adds 50 points and extends the streak; a wrong one resets it.
//! - The run ends once no unused piece fits anywhere.
//!
//! # Example
//!
//! ```
//! use blockblast_core::{GameState, Question};
//!
//! let questions = vec![Question::new("q1", "What is 12 + 8?", vec!["18".into(), "20".into()], 1)];
//! let mut game = GameState::new(12345, questions);
//!
//! // A single cell always fits on an empty grid, but the random batch may hold a
//! // larger shape; try every anchor for slot 0.
//! let placed = (0..8).any(|r| (0..8).any(|c| game.try_place(0, r, c)));
//! assert!(placed);
//! assert_eq!(game.moves(), 1);
//! ```

pub mod game_state;
pub mod grid;
pub mod pieces;
pub mod quiz;
pub mod rng;
pub mod scoring;
pub mod snapshot;

pub use blockblast_types as types;

// Re-export commonly used types for convenience
pub use game_state::{is_game_over, GameState, RunSummary};
pub use grid::{Grid, LineClear};
pub use pieces::{get_shape, shape_bounds, CellOffset, Piece};
pub use quiz::{AnswerOutcome, Question, QuizState};
pub use rng::{PieceGenerator, SimpleRng};
pub use scoring::{answer_bonus, calculate_score, score_for_clear, ScoreResult};
pub use snapshot::GameSnapshot;
