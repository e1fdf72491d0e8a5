//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events into [`InputAction`]s and turns those into
//! [`crate::types::GameAction`]s through a [`PlacementCursor`], which remembers
//! the selected batch slot and anchor between key presses.

pub mod cursor;
pub mod map;

pub use blockblast_core as core;
pub use blockblast_types as types;

pub use cursor::PlacementCursor;
pub use map::{handle_key_event, should_quit, InputAction};
