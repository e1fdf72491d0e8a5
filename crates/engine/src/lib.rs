//! Engine layer - validated commands on top of the core game state
//!
//! The core reports a rejected move as a plain `false`. This crate adds the
//! reason, so front-ends and scripted drivers can tell "cell taken" apart from
//! "a question is waiting".

pub mod answer;
pub mod place;

pub use blockblast_core as core;
pub use blockblast_types as types;

pub use answer::{apply_answer, AnswerError};
pub use place::{apply_place, PlaceError};

use crate::core::{AnswerOutcome, GameState};
use crate::types::{GameAction, PlacementEvent};

/// What an applied action produced
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionOutcome {
    Placed(PlacementEvent),
    Answered(AnswerOutcome),
    Restarted { episode_id: u32 },
}

/// Any rejection from [`apply_action`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionError {
    Place(PlaceError),
    Answer(AnswerError),
}

impl ActionError {
    pub fn code(self) -> &'static str {
        match self {
            ActionError::Place(e) => e.code(),
            ActionError::Answer(e) => e.code(),
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            ActionError::Place(e) => e.message(),
            ActionError::Answer(e) => e.message(),
        }
    }
}

impl From<PlaceError> for ActionError {
    fn from(e: PlaceError) -> Self {
        ActionError::Place(e)
    }
}

impl From<AnswerError> for ActionError {
    fn from(e: AnswerError) -> Self {
        ActionError::Answer(e)
    }
}

/// Dispatch a parsed [`GameAction`].
pub fn apply_action(state: &mut GameState, action: GameAction) -> Result<ActionOutcome, ActionError> {
    match action {
        GameAction::Place { slot, row, col } => {
            let event = apply_place(state, slot as usize, row, col)?;
            Ok(ActionOutcome::Placed(event))
        }
        GameAction::Answer(selected) => {
            let outcome = apply_answer(state, selected as usize)?;
            Ok(ActionOutcome::Answered(outcome))
        }
        GameAction::Restart => {
            state.restart();
            Ok(ActionOutcome::Restarted {
                episode_id: state.episode_id(),
            })
        }
    }
}
