//! Game content (title plus question pool) as authored in JSON.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::core::Question;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionRecord {
    #[serde(default)]
    pub id: String,
    pub question: String,
    pub options: Vec<String>,
    pub correct_answer: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
    /// Question kind as authored ("multiple-choice"); informational only.
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
}

impl QuestionRecord {
    pub fn to_question(&self) -> Question {
        let q = Question::new(
            self.id.clone(),
            self.question.clone(),
            self.options.clone(),
            self.correct_answer,
        );
        match &self.explanation {
            Some(e) => q.with_explanation(e.clone()),
            None => q,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameContent {
    #[serde(default)]
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grade: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub questions: Vec<QuestionRecord>,
}

impl GameContent {
    pub fn from_json(s: &str) -> Result<Self> {
        serde_json::from_str(s).context("invalid game content JSON")
    }

    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read game content {}", path.display()))?;
        Self::from_json(&raw).with_context(|| format!("in {}", path.display()))
    }

    /// Question pool in authored order (the game shuffles it).
    pub fn questions(&self) -> Vec<Question> {
        self.questions.iter().map(QuestionRecord::to_question).collect()
    }

    /// Built-in "Basic Math Quiz"
    pub fn sample() -> Self {
        let q = |id: &str, text: &str, options: [&str; 4], correct: usize, explanation: &str| {
            QuestionRecord {
                id: id.to_string(),
                question: text.to_string(),
                options: options.iter().map(|s| s.to_string()).collect(),
                correct_answer: correct,
                explanation: Some(explanation.to_string()),
                kind: Some("multiple-choice".to_string()),
            }
        };

        Self {
            id: "basic-math-quiz".to_string(),
            title: "Basic Math Quiz".to_string(),
            subject: Some("Mathematics".to_string()),
            grade: Some("6".to_string()),
            difficulty: Some("Easy".to_string()),
            description: Some("Basic arithmetic operations and number patterns".to_string()),
            questions: vec![
                q("q1", "What is 12 + 8?", ["18", "20", "22", "24"], 1, "12 + 8 = 20"),
                q(
                    "q2",
                    "Which number comes next in the sequence: 2, 4, 6, 8, ?",
                    ["9", "10", "11", "12"],
                    1,
                    "This is an even number sequence, so 10 comes next.",
                ),
                q("q3", "What is 15 - 7?", ["6", "7", "8", "9"], 2, "15 - 7 = 8"),
                q(
                    "q4",
                    "How many sides does a triangle have?",
                    ["2", "3", "4", "5"],
                    1,
                    "A triangle has exactly 3 sides.",
                ),
                q("q5", "What is 6 × 4?", ["20", "22", "24", "26"], 2, "6 × 4 = 24"),
            ],
        }
    }
}
