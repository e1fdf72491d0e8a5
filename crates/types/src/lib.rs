//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the workspace.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core rules, terminal rendering, score reporting).
//!
//! # Grid Dimensions
//!
//! The play area is a fixed square:
//!
//! - **Rows**: 8 (indexed 0-7, top to bottom)
//! - **Columns**: 8 (indexed 0-7, left to right)
//!
//! # Rule Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `GRID_SIZE` | 8 | Rows and columns of the grid |
//! | `BATCH_SIZE` | 3 | Pieces offered per batch |
//! | `QUIZ_INTERVAL` | 3 | A question is presented every N placements |
//! | `LINE_CLEAR_POINTS` | 100 | Base points per cleared row or column |
//! | `ANSWER_BONUS` | 50 | Flat bonus for a correct answer |
//!
//! # Examples
//!
//! ```
//! use blockblast_types::{BlockColor, GameAction, ShapeKind, GRID_SIZE};
//!
//! // Parse a shape (case-insensitive)
//! assert_eq!(ShapeKind::from_str("square"), Some(ShapeKind::Square));
//!
//! // Colors carry their display hex
//! assert_eq!(BlockColor::Primary.hex(), "#3498DB");
//!
//! // Parse a game action
//! let action = GameAction::from_str("place 0 3 4").unwrap();
//! assert_eq!(action, GameAction::Place { slot: 0, row: 3, col: 4 });
//!
//! assert_eq!(GRID_SIZE, 8);
//! ```

/// Grid size in cells (8 rows x 8 columns)
pub const GRID_SIZE: u8 = 8;

/// Number of pieces offered in one batch
pub const BATCH_SIZE: usize = 3;

/// A question is presented after every `QUIZ_INTERVAL`-th successful placement
pub const QUIZ_INTERVAL: u32 = 3;

/// Base points per cleared line, multiplied by `(streak + 1)`
pub const LINE_CLEAR_POINTS: u32 = 100;

/// Flat bonus for a correct answer (not multiplied)
pub const ANSWER_BONUS: u32 = 50;

/// Game type tag written to score records
pub const GAME_TYPE: &str = "blockblast";


/// The fixed palette of piece shapes
///
/// - **Single**: 1x1
/// - **DominoH** / **DominoV**: 1x2 horizontal, 2x1 vertical
/// - **TrominoH** / **TrominoV**: 1x3 horizontal, 3x1 vertical
/// - **Square**: 2x2
/// - **T**: three across with one below the middle
/// - **Z**: two across, then two across shifted right by one
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Single,
    DominoH,
    DominoV,
    TrominoH,
    TrominoV,
    Square,
    T,
    Z,
}

impl ShapeKind {
    /// Every shape, in palette order. Uniform sampling indexes into this.
    pub const ALL: [ShapeKind; 8] = [
        ShapeKind::Single,
        ShapeKind::DominoH,
        ShapeKind::DominoV,
        ShapeKind::TrominoH,
        ShapeKind::TrominoV,
        ShapeKind::Square,
        ShapeKind::T,
        ShapeKind::Z,
    ];

    /// Parse shape kind from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use blockblast_types::ShapeKind;
    ///
    /// assert_eq!(ShapeKind::from_str("t"), Some(ShapeKind::T));
    /// assert_eq!(ShapeKind::from_str("DominoV"), Some(ShapeKind::DominoV));
    /// assert_eq!(ShapeKind::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "single" => Some(ShapeKind::Single),
            "dominoh" => Some(ShapeKind::DominoH),
            "dominov" => Some(ShapeKind::DominoV),
            "trominoh" => Some(ShapeKind::TrominoH),
            "trominov" => Some(ShapeKind::TrominoV),
            "square" => Some(ShapeKind::Square),
            "t" => Some(ShapeKind::T),
            "z" => Some(ShapeKind::Z),
            _ => None,
        }
    }

    /// Convert to lowercase string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            ShapeKind::Single => "single",
            ShapeKind::DominoH => "dominoh",
            ShapeKind::DominoV => "dominov",
            ShapeKind::TrominoH => "trominoh",
            ShapeKind::TrominoV => "trominov",
            ShapeKind::Square => "square",
            ShapeKind::T => "t",
            ShapeKind::Z => "z",
        }
    }
}

/// Color token written into occupied grid cells
///
/// The four block colors of the app palette:
/// - **Primary**: bright blue
/// - **Accent**: bright orange
/// - **Success**: bright green
/// - **Warning**: amber
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockColor {
    Primary,
    Accent,
    Success,
    Warning,
}

impl BlockColor {
    /// Every color, in palette order.
    pub const ALL: [BlockColor; 4] = [
        BlockColor::Primary,
        BlockColor::Accent,
        BlockColor::Success,
        BlockColor::Warning,
    ];

    /// Parse color from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "primary" => Some(BlockColor::Primary),
            "accent" => Some(BlockColor::Accent),
            "success" => Some(BlockColor::Success),
            "warning" => Some(BlockColor::Warning),
            _ => None,
        }
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            BlockColor::Primary => "primary",
            BlockColor::Accent => "accent",
            BlockColor::Success => "success",
            BlockColor::Warning => "warning",
        }
    }

    /// Display color as a `#RRGGBB` string
    pub fn hex(&self) -> &'static str {
        match self {
            BlockColor::Primary => "#3498DB",
            BlockColor::Accent => "#F39C12",
            BlockColor::Success => "#2ECC71",
            BlockColor::Warning => "#F1C40F",
        }
    }

    /// 1-based index used by the compact `u8` grid encoding (0 = empty)
    pub fn index(&self) -> u8 {
        match self {
            BlockColor::Primary => 1,
            BlockColor::Accent => 2,
            BlockColor::Success => 3,
            BlockColor::Warning => 4,
        }
    }

    /// Inverse of [`BlockColor::index`]
    pub fn from_index(v: u8) -> Option<Self> {
        match v {
            1 => Some(BlockColor::Primary),
            2 => Some(BlockColor::Accent),
            3 => Some(BlockColor::Success),
            4 => Some(BlockColor::Warning),
            _ => None,
        }
    }
}

/// A cell on the grid
///
/// - `None`: Empty cell
/// - `Some(BlockColor)`: Occupied by a block of that color
pub type Cell = Option<BlockColor>;

/// Quiz interrupt phase
///
/// - **Idle**: no question is active, placements are accepted
/// - **Presenting**: a question awaits an answer, placements are rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum QuizPhase {
    #[default]
    Idle,
    Presenting,
}

impl QuizPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            QuizPhase::Idle => "idle",
            QuizPhase::Presenting => "presenting",
        }
    }
}

/// Player commands accepted by the engine
///
/// Used by the terminal front-end and by scripted/headless drivers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Place the piece in batch `slot` with its top-left anchor at `(row, col)`
    Place { slot: u8, row: i8, col: i8 },
    /// Answer the active question with the given option index
    Answer(u8),
    /// Start a new run on the same question pool
    Restart,
}

impl GameAction {
    /// Parse a whitespace-separated command
    ///
    /// # Examples
    ///
    /// ```
    /// use blockblast_types::GameAction;
    ///
    /// assert_eq!(GameAction::from_str("answer 1"), Some(GameAction::Answer(1)));
    /// assert_eq!(GameAction::from_str("restart"), Some(GameAction::Restart));
    /// assert_eq!(GameAction::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        let lower = s.to_lowercase();
        let mut parts = lower.split_whitespace();
        let verb = parts.next()?;
        let action = match verb {
            "place" => {
                let slot = parts.next()?.parse().ok()?;
                let row = parts.next()?.parse().ok()?;
                let col = parts.next()?.parse().ok()?;
                GameAction::Place { slot, row, col }
            }
            "answer" => GameAction::Answer(parts.next()?.parse().ok()?),
            "restart" => GameAction::Restart,
            _ => return None,
        };
        if parts.next().is_some() {
            return None;
        }
        Some(action)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::Place { .. } => "place",
            GameAction::Answer(_) => "answer",
            GameAction::Restart => "restart",
        }
    }
}

/// Core-side event emitted after every successful placement.
///
/// Observers (renderers, feedback cues) consume it via `take_last_event`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PlacementEvent {
    /// Rows plus columns cleared by this placement.
    pub lines_cleared: u32,
    /// Points awarded for the clear (0 when nothing cleared).
    pub line_clear_score: u32,
    /// A question was surfaced after this placement.
    pub quiz_triggered: bool,
    /// The batch was consumed and a new one generated.
    pub batch_refilled: bool,
    /// No remaining piece fits; the run is over.
    pub game_over: bool,
}

impl PlacementEvent {
    /// Whether the clear branch fired (drives score/feedback side effects).
    pub fn cleared(&self) -> bool {
        self.lines_cleared > 0
    }
}
