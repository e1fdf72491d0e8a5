use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::core::RunSummary;
use crate::types::GAME_TYPE;

/// One finished run, as persisted in the score list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreRecord {
    pub student_id: String,
    pub game_id: String,
    pub score: u32,
    pub lines_cleared: u32,
    pub moves: u32,
    pub question_streak: u32,
    pub game_type: String,
    /// RFC 3339 UTC with millisecond precision.
    pub played_at: String,
}

impl ScoreRecord {
    pub fn from_summary(
        student_id: &str,
        game_id: &str,
        summary: &RunSummary,
        played_at: DateTime<Utc>,
    ) -> Self {
        Self {
            student_id: student_id.to_string(),
            game_id: game_id.to_string(),
            score: summary.score,
            lines_cleared: summary.lines_cleared,
            moves: summary.moves,
            question_streak: summary.question_streak,
            game_type: GAME_TYPE.to_string(),
            played_at: played_at.to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }

    /// Parsed `played_at`, if it is well formed
    pub fn played_at(&self) -> Option<DateTime<Utc>> {
        DateTime::parse_from_rfc3339(&self.played_at)
            .ok()
            .map(|t| t.with_timezone(&Utc))
    }
}
