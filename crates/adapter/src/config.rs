use std::env;
use std::path::PathBuf;

use anyhow::Result;

use crate::content::GameContent;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    pub seed: u32,
    pub scores_path: PathBuf,
    pub content_path: Option<PathBuf>,
    pub student_id: String,
    /// Falls back to the content id when unset.
    pub game_id: Option<String>,
    pub log_path: PathBuf,
}

impl SessionConfig {
    pub fn from_env() -> Self {
        let seed = env::var("BLOCKBLAST_SEED")
            .ok()
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or_else(clock_seed);

        let scores_path = non_empty("BLOCKBLAST_SCORES_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|| env::temp_dir().join("scores.json"));

        let content_path = non_empty("BLOCKBLAST_CONTENT_PATH").map(PathBuf::from);

        let student_id = non_empty("BLOCKBLAST_STUDENT_ID").unwrap_or_else(|| "guest".to_string());

        let game_id = non_empty("BLOCKBLAST_GAME_ID");

        let log_path = non_empty("BLOCKBLAST_LOG_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|| env::temp_dir().join("blockblast.log"));

        Self {
            seed,
            scores_path,
            content_path,
            student_id,
            game_id,
            log_path,
        }
    }

    /// Configured content file, or the built-in sample.
    pub fn load_content(&self) -> Result<GameContent> {
        match &self.content_path {
            Some(path) => GameContent::load(path),
            None => Ok(GameContent::sample()),
        }
    }

    pub fn resolve_game_id(&self, content: &GameContent) -> String {
        self.game_id.clone().unwrap_or_else(|| content.id.clone())
    }
}

fn non_empty(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

fn clock_seed() -> u32 {
    let now = chrono::Utc::now();
    (now.timestamp_subsec_nanos() ^ now.timestamp() as u32).max(1)
}
