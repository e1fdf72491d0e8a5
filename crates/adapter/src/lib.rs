//! Adapter module - the game's external collaborators
//!
//! The core never touches I/O. Everything that does lives here:
//!
//! - [`content`]: question content loaded from JSON (or the built-in sample)
//! - [`record`]: the score record written when a run ends
//! - [`store`]: where records go (`ScoreStore` trait, JSON file and in-memory stores)
//! - [`reporter`]: fire-and-forget background writer so the game loop never waits on disk
//! - [`config`]: environment configuration
//! - [`session`]: a run plus its identity and reporting
//!
//! # Environment Variables
//!
//! - `BLOCKBLAST_SEED`: RNG seed (default: derived from the clock)
//! - `BLOCKBLAST_SCORES_PATH`: score file (default: `scores.json` in the temp dir)
//! - `BLOCKBLAST_CONTENT_PATH`: game content JSON (default: built-in sample)
//! - `BLOCKBLAST_STUDENT_ID`: student the scores belong to (default: "guest")
//! - `BLOCKBLAST_GAME_ID`: game id stored with scores (default: content id)
//! - `BLOCKBLAST_LOG_PATH`: log file (default: `blockblast.log` in the temp dir)
//!
//! # Score file
//!
//! ```text
//! [
//!   {"studentId":"s1","gameId":"math-1","score":450,"linesCleared":3,"moves":27,
//!    "questionStreak":2,"gameType":"blockblast","playedAt":"2024-05-01T10:00:00.000Z"}
//! ]
//! ```

pub mod config;
pub mod content;
pub mod record;
pub mod reporter;
pub mod session;
pub mod store;

pub use blockblast_core as core;
pub use blockblast_engine as engine;
pub use blockblast_types as types;

pub use config::SessionConfig;
pub use content::{GameContent, QuestionRecord};
pub use record::ScoreRecord;
pub use reporter::ScoreReporter;
pub use session::GameSession;
pub use store::{JsonFileScoreStore, MemoryScoreStore, ScoreStore, StoreError};
