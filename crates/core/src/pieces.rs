//! Pieces module - the piece catalog and shape matrices
//!
//! Shapes are small rectangular boolean matrices in piece-local coordinates
//! (row 0 is the top row). Rotation derives a new matrix geometrically; no
//! rotation index is stored and there are no wall kicks.

use crate::types::{Color, PieceKind, BOARD_WIDTH};

/// Largest extent of any shape along either axis.
pub const MAX_SHAPE_DIM: usize = 4;

/// Occupancy matrix of a piece.
///
/// Only the top-left `height x width` region of `cells` is meaningful; the
/// rest is always `false`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    height: u8,
    width: u8,
    cells: [[bool; MAX_SHAPE_DIM]; MAX_SHAPE_DIM],
}

impl Shape {
    /// Build a shape from 0/1 rows.
    pub const fn from_rows<const H: usize, const W: usize>(rows: [[u8; W]; H]) -> Self {
        assert!(H > 0 && H <= MAX_SHAPE_DIM && W > 0 && W <= MAX_SHAPE_DIM);
        let mut cells = [[false; MAX_SHAPE_DIM]; MAX_SHAPE_DIM];
        let mut r = 0;
        while r < H {
            let mut c = 0;
            while c < W {
                cells[r][c] = rows[r][c] != 0;
                c += 1;
            }
            r += 1;
        }
        Self {
            height: H as u8,
            width: W as u8,
            cells,
        }
    }

    /// Number of rows.
    pub fn height(&self) -> u8 {
        self.height
    }

    /// Number of columns.
    pub fn width(&self) -> u8 {
        self.width
    }

    /// Whether the cell at (row, col) is occupied. Out of range is empty.
    pub fn is_filled(&self, row: usize, col: usize) -> bool {
        row < self.height as usize && col < self.width as usize && self.cells[row][col]
    }

    /// Occupied cells as (dx, dy) offsets from the piece anchor, row-major.
    pub fn occupied(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        (0..self.height as usize).flat_map(move |row| {
            (0..self.width as usize)
                .filter(move |&col| self.cells[row][col])
                .map(move |col| (col as i8, row as i8))
        })
    }

    /// Clockwise quarter turn: `new[i][j] = old[h - 1 - j][i]`.
    ///
    /// The result has `width` rows and `height` columns.
    pub fn rotated_cw(&self) -> Self {
        let h = self.height as usize;
        let w = self.width as usize;
        let mut cells = [[false; MAX_SHAPE_DIM]; MAX_SHAPE_DIM];
        for (i, row) in cells.iter_mut().enumerate().take(w) {
            for (j, cell) in row.iter_mut().enumerate().take(h) {
                *cell = self.cells[h - 1 - j][i];
            }
        }
        Self {
            height: self.width,
            width: self.height,
            cells,
        }
    }
}

/// Catalog entry: an immutable template shape and its color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PieceTemplate {
    pub kind: PieceKind,
    pub shape: Shape,
}

impl PieceTemplate {
    pub fn color(&self) -> Color {
        self.kind.color()
    }

    /// Anchor column that centers the template horizontally.
    pub fn spawn_x(&self) -> i8 {
        (BOARD_WIDTH / 2) as i8 - (self.shape.width() / 2) as i8
    }
}

/// The seven templates, in the same order as [`PieceKind::ALL`].
pub const CATALOG: [PieceTemplate; 7] = [
    PieceTemplate {
        kind: PieceKind::T,
        shape: Shape::from_rows([[1, 1, 1], [0, 1, 0]]),
    },
    PieceTemplate {
        kind: PieceKind::I,
        shape: Shape::from_rows([[1, 1, 1, 1]]),
    },
    PieceTemplate {
        kind: PieceKind::O,
        shape: Shape::from_rows([[1, 1], [1, 1]]),
    },
    PieceTemplate {
        kind: PieceKind::L,
        shape: Shape::from_rows([[1, 1, 1], [1, 0, 0]]),
    },
    PieceTemplate {
        kind: PieceKind::J,
        shape: Shape::from_rows([[1, 1, 1], [0, 0, 1]]),
    },
    PieceTemplate {
        kind: PieceKind::Z,
        shape: Shape::from_rows([[1, 1, 0], [0, 1, 1]]),
    },
    PieceTemplate {
        kind: PieceKind::S,
        shape: Shape::from_rows([[0, 1, 1], [1, 1, 0]]),
    },
];

/// Look up the template for a kind.
pub fn template(kind: PieceKind) -> &'static PieceTemplate {
    let idx = PieceKind::ALL
        .iter()
        .position(|&k| k == kind)
        .unwrap_or_default();
    &CATALOG[idx]
}

/// Spawn shape for a kind (the catalog orientation).
pub fn spawn_shape(kind: PieceKind) -> Shape {
    template(kind).shape
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_order_matches_piece_kind_all() {
        for (tpl, kind) in CATALOG.iter().zip(PieceKind::ALL) {
            assert_eq!(tpl.kind, kind);
            assert_eq!(template(kind).kind, kind);
        }
    }

    #[test]
    fn every_template_has_four_cells() {
        for tpl in CATALOG.iter() {
            assert_eq!(tpl.shape.occupied().count(), 4, "{:?}", tpl.kind);
        }
    }

    #[test]
    fn occupied_offsets_are_col_row() {
        let t = spawn_shape(PieceKind::T);
        let cells: Vec<_> = t.occupied().collect();
        assert_eq!(cells, vec![(0, 0), (1, 0), (2, 0), (1, 1)]);
    }

    #[test]
    fn rotation_swaps_dimensions() {
        let i = spawn_shape(PieceKind::I);
        let r = i.rotated_cw();
        assert_eq!((r.height(), r.width()), (4, 1));
        assert!((0..4).all(|row| r.is_filled(row, 0)));
    }

    #[test]
    fn rotation_is_clockwise() {
        // 111      11
        // 100  ->  01
        //          01
        let l = spawn_shape(PieceKind::L);
        let r = l.rotated_cw();
        assert_eq!((r.height(), r.width()), (3, 2));
        assert!(r.is_filled(0, 0) && r.is_filled(0, 1));
        assert!(!r.is_filled(1, 0) && r.is_filled(1, 1));
        assert!(!r.is_filled(2, 0) && r.is_filled(2, 1));
    }

    #[test]
    fn spawn_x_centers_template() {
        assert_eq!(template(PieceKind::O).spawn_x(), 4);
        assert_eq!(template(PieceKind::I).spawn_x(), 3);
        assert_eq!(template(PieceKind::T).spawn_x(), 4);
    }
}
