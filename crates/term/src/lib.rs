//! Terminal "game renderer" module.
//!
//! Renders the board into a plain framebuffer of styled characters and flushes
//! it with `crossterm`, sending only what changed between frames. No widget
//! toolkit; layout is computed directly from the 8x8 grid.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use blockblast_core as core;
pub use blockblast_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{AnchorY, Feedback, GameView, Hud, Selection, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
