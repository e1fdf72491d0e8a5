//! Placement cursor: the selected slot and anchor between key presses.

use crate::core::GameSnapshot;
use crate::map::InputAction;
use crate::types::{GameAction, BATCH_SIZE, GRID_SIZE};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PlacementCursor {
    pub slot: u8,
    pub row: i8,
    pub col: i8,
}

impl PlacementCursor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve an input action. Cursor-only actions return None.
    pub fn apply(&mut self, action: InputAction, snap: &GameSnapshot) -> Option<GameAction> {
        match action {
            InputAction::MoveCursor { dr, dc } => {
                let max = GRID_SIZE as i8 - 1;
                self.row = self.row.saturating_add(dr).clamp(0, max);
                self.col = self.col.saturating_add(dc).clamp(0, max);
                None
            }
            InputAction::SelectSlot(slot) => {
                if (slot as usize) < BATCH_SIZE {
                    self.slot = slot;
                }
                None
            }
            InputAction::NextSlot => {
                self.slot = next_unused(snap, self.slot + 1).unwrap_or(self.slot);
                None
            }
            InputAction::Place => Some(GameAction::Place {
                slot: self.slot,
                row: self.row,
                col: self.col,
            }),
            InputAction::Answer(i) => Some(GameAction::Answer(i)),
            InputAction::Restart => {
                *self = Self::new();
                Some(GameAction::Restart)
            }
        }
    }

    /// Move off a used slot after the batch changed. The anchor stays put.
    pub fn sync(&mut self, snap: &GameSnapshot) {
        let used = snap
            .pieces
            .get(self.slot as usize)
            .map(|p| p.used)
            .unwrap_or(true);
        if used {
            self.slot = next_unused(snap, self.slot).unwrap_or(0);
        }
    }
}

/// First unused slot at or after `from`, wrapping around.
fn next_unused(snap: &GameSnapshot, from: u8) -> Option<u8> {
    (0..BATCH_SIZE)
        .map(|i| (from as usize + i) % BATCH_SIZE)
        .find(|&i| !snap.pieces[i].used)
        .map(|i| i as u8)
}
