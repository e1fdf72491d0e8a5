//! Pieces module - the fixed shape palette and batch pieces
//!
//! Shapes are immutable offset tables, never derived at runtime. Offsets are
//! `(row, col)` relative to the top-left corner of the shape's bounding box.

use crate::types::{BlockColor, ShapeKind};

/// Offset of a single occupied cell relative to the piece anchor
pub type CellOffset = (i8, i8);

const SINGLE: [CellOffset; 1] = [(0, 0)];
const DOMINO_H: [CellOffset; 2] = [(0, 0), (0, 1)];
const DOMINO_V: [CellOffset; 2] = [(0, 0), (1, 0)];
const TROMINO_H: [CellOffset; 3] = [(0, 0), (0, 1), (0, 2)];
const TROMINO_V: [CellOffset; 3] = [(0, 0), (1, 0), (2, 0)];
const SQUARE: [CellOffset; 4] = [(0, 0), (0, 1), (1, 0), (1, 1)];
// ###
// .#.
const T_SHAPE: [CellOffset; 4] = [(0, 0), (0, 1), (0, 2), (1, 1)];
// ##.
// .##
const Z_SHAPE: [CellOffset; 4] = [(0, 0), (0, 1), (1, 1), (1, 2)];

/// Occupied cells of a shape
pub fn get_shape(kind: ShapeKind) -> &'static [CellOffset] {
    match kind {
        ShapeKind::Single => &SINGLE,
        ShapeKind::DominoH => &DOMINO_H,
        ShapeKind::DominoV => &DOMINO_V,
        ShapeKind::TrominoH => &TROMINO_H,
        ShapeKind::TrominoV => &TROMINO_V,
        ShapeKind::Square => &SQUARE,
        ShapeKind::T => &T_SHAPE,
        ShapeKind::Z => &Z_SHAPE,
    }
}

/// Bounding box of a shape as `(rows, cols)`
pub fn shape_bounds(kind: ShapeKind) -> (u8, u8) {
    let shape = get_shape(kind);
    let rows = shape.iter().map(|&(r, _)| r).max().unwrap_or(0) + 1;
    let cols = shape.iter().map(|&(_, c)| c).max().unwrap_or(0) + 1;
    (rows as u8, cols as u8)
}

/// A piece offered in the current batch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: ShapeKind,
    pub color: BlockColor,
    pub used: bool,
}

impl Piece {
    /// Create a fresh, unused piece
    pub fn new(kind: ShapeKind, color: BlockColor) -> Self {
        Self {
            kind,
            color,
            used: false,
        }
    }

    pub fn shape(&self) -> &'static [CellOffset] {
        get_shape(self.kind)
    }

    pub fn cell_count(&self) -> usize {
        self.shape().len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_cover_palette_sizes() {
        assert_eq!(shape_bounds(ShapeKind::Single), (1, 1));
        assert_eq!(shape_bounds(ShapeKind::DominoH), (1, 2));
        assert_eq!(shape_bounds(ShapeKind::DominoV), (2, 1));
        assert_eq!(shape_bounds(ShapeKind::TrominoH), (1, 3));
        assert_eq!(shape_bounds(ShapeKind::TrominoV), (3, 1));
        assert_eq!(shape_bounds(ShapeKind::Square), (2, 2));
        assert_eq!(shape_bounds(ShapeKind::T), (2, 3));
        assert_eq!(shape_bounds(ShapeKind::Z), (2, 3));
    }

    #[test]
    fn test_offsets_are_unique_and_non_negative() {
        for kind in ShapeKind::ALL {
            let shape = get_shape(kind);
            for (i, a) in shape.iter().enumerate() {
                assert!(a.0 >= 0 && a.1 >= 0, "{:?} has negative offset", kind);
                assert!(!shape[i + 1..].contains(a), "{:?} repeats {:?}", kind, a);
            }
        }
    }

    #[test]
    fn test_new_piece_is_unused() {
        let piece = Piece::new(ShapeKind::T, BlockColor::Accent);
        assert!(!piece.used);
        assert_eq!(piece.cell_count(), 4);
    }
}
