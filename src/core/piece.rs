//! Piece module - the falling tetromino
//!
//! A piece is a square boolean plan (its shape in the current rotation), a
//! board-space anchor for the plan's (0,0) cell, and the four absolute cell
//! positions derived from both. The plan is replaced, never mutated, on
//! rotation.
//!
//! Collisions against walls and the settled stack are ordinary return
//! values; the board itself asserts if a probe ever leaves the legal range,
//! so boundary bugs in this module fail loudly instead of clamping.

use crate::core::board::Board;
use crate::types::{DropResult, PieceKind, Rgba, BOARD_HEIGHT, BOARD_WIDTH};

/// Every tetromino occupies exactly four cells
pub const CELLS_PER_PIECE: usize = 4;

/// Largest plan side (the I piece)
const MAX_SIDE: usize = 4;

/// Wall collision classes for the active piece
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum WallHit {
    None,
    Ground,
    Ceiling,
}

/// A piece's shape in its current rotation: a square occupancy matrix.
///
/// Side is 2 for O, 4 for I and 3 for everything else; only the top-left
/// `side x side` corner of the backing array is meaningful.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Plan {
    side: usize,
    mask: [[bool; MAX_SIDE]; MAX_SIDE],
}

impl Plan {
    /// The fixed spawn-orientation pattern for a kind
    fn for_kind(kind: PieceKind) -> Self {
        match kind {
            PieceKind::I => Self::from_rows(&[
                [false, false, false, false],
                [true, true, true, true],
                [false, false, false, false],
                [false, false, false, false],
            ]),
            PieceKind::O => Self::from_rows(&[
                [true, true, false, false],
                [true, true, false, false],
            ]),
            PieceKind::T => Self::from_rows(&[
                [false, true, false, false],
                [true, true, true, false],
                [false, false, false, false],
            ]),
            PieceKind::S => Self::from_rows(&[
                [false, true, true, false],
                [true, true, false, false],
                [false, false, false, false],
            ]),
            PieceKind::Z => Self::from_rows(&[
                [true, true, false, false],
                [false, true, true, false],
                [false, false, false, false],
            ]),
            PieceKind::J => Self::from_rows(&[
                [true, false, false, false],
                [true, true, true, false],
                [false, false, false, false],
            ]),
            PieceKind::L => Self::from_rows(&[
                [false, false, true, false],
                [true, true, true, false],
                [false, false, false, false],
            ]),
        }
    }

    fn from_rows(rows: &[[bool; MAX_SIDE]]) -> Self {
        let mut mask = [[false; MAX_SIDE]; MAX_SIDE];
        for (y, row) in rows.iter().enumerate() {
            mask[y] = *row;
        }
        Self {
            side: rows.len(),
            mask,
        }
    }

    pub fn side(&self) -> usize {
        self.side
    }

    pub fn is_set(&self, x: usize, y: usize) -> bool {
        self.mask[y][x]
    }

    /// Build the 90-degree rotation of this plan.
    ///
    /// Direction +1 is clockwise (`R[y][x] = P[x][side-1-y]`), -1 is
    /// counter-clockwise (`R[y][x] = P[side-1-x][y]`).
    fn rotated(&self, direction: i8) -> Self {
        debug_assert!(direction == 1 || direction == -1);
        let s = self.side;
        let mut rotated = Self {
            side: s,
            mask: [[false; MAX_SIDE]; MAX_SIDE],
        };
        for y in 0..s {
            for x in 0..s {
                rotated.mask[y][x] = if direction == 1 {
                    self.mask[x][s - 1 - y]
                } else {
                    self.mask[s - 1 - x][y]
                };
            }
        }
        rotated
    }
}

/// The falling (or shadow/preview) tetromino
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Piece {
    kind: PieceKind,
    plan: Plan,
    x: i8,
    y: i8,
    cells: [(i8, i8); CELLS_PER_PIECE],
    color: Rgba,
}

impl Piece {
    /// Build a piece at an anchor without consulting any board.
    ///
    /// Used for previews; gameplay spawns go through [`Piece::spawn`].
    pub fn new(kind: PieceKind, x: i8, y: i8) -> Self {
        let mut piece = Self {
            kind,
            plan: Plan::for_kind(kind),
            x,
            y,
            cells: [(0, 0); CELLS_PER_PIECE],
            color: kind.color(),
        };
        piece.rebuild_cells();
        piece
    }

    /// Build a piece at the spawn anchor and resolve stack overlap by
    /// rising one row at a time until no collision remains.
    ///
    /// Always succeeds; a piece that had to rise above the visible board
    /// reports `GameOver` on its first `move_down` instead.
    pub fn spawn(kind: PieceKind, x: i8, y: i8, board: &Board) -> Self {
        let mut piece = Self::new(kind, x, y);
        while piece.overlaps_stack(board) {
            piece.shift(0, -1);
        }
        piece
    }

    pub fn kind(&self) -> PieceKind {
        self.kind
    }

    /// The four absolute board-space cell positions
    pub fn cells(&self) -> [(i8, i8); CELLS_PER_PIECE] {
        self.cells
    }

    pub fn color(&self) -> Rgba {
        self.color
    }

    /// Override the color (shadow pieces render translucent)
    pub fn set_color(&mut self, color: Rgba) {
        self.color = color;
    }

    /// Recompute `cells` from the plan and anchor
    fn rebuild_cells(&mut self) {
        let mut i = 0;
        for y in 0..self.plan.side() {
            for x in 0..self.plan.side() {
                if self.plan.is_set(x, y) {
                    self.cells[i] = (x as i8 + self.x, y as i8 + self.y);
                    i += 1;
                }
            }
        }
        debug_assert_eq!(i, CELLS_PER_PIECE);
    }

    /// Translate the anchor and all cells
    fn shift(&mut self, dx: i8, dy: i8) {
        self.x += dx;
        self.y += dy;
        for cell in &mut self.cells {
            cell.0 += dx;
            cell.1 += dy;
        }
    }

    /// Classify floor/ceiling contact of the current position
    fn wall_hit(&self) -> WallHit {
        for &(_, y) in &self.cells {
            if y >= BOARD_HEIGHT as i8 {
                return WallHit::Ground;
            }
            if y < 0 {
                return WallHit::Ceiling;
            }
        }
        WallHit::None
    }

    /// Whether any cell overlaps a settled block.
    ///
    /// Cells above the board never overlap; columns must already be within
    /// the board (the board asserts otherwise).
    fn overlaps_stack(&self, board: &Board) -> bool {
        self.cells.iter().any(|&(x, y)| board.is_occupied(x, y))
    }

    /// One gravity step: shift down, classify, revert on collision.
    ///
    /// The ground check runs before the stack probe so settled cells are
    /// never probed below the floor.
    pub fn move_down(&mut self, board: &Board) -> DropResult {
        self.shift(0, 1);

        if self.wall_hit() == WallHit::Ground || self.overlaps_stack(board) {
            self.shift(0, -1);

            if self.wall_hit() == WallHit::Ceiling {
                return DropResult::GameOver;
            }
            return DropResult::Landed;
        }

        DropResult::Continue
    }

    /// Shift one column left (-1) or right (+1); 0 is a no-op.
    ///
    /// Returns false and leaves the piece unchanged if the shift would exit
    /// the side walls or overlap the stack.
    pub fn shift_horizontal(&mut self, direction: i8, board: &Board) -> bool {
        if direction == 0 {
            return false;
        }

        self.shift(direction, 0);

        let outside = self
            .cells
            .iter()
            .any(|&(x, _)| x < 0 || x >= BOARD_WIDTH as i8);
        if outside || self.overlaps_stack(board) {
            self.shift(-direction, 0);
            return false;
        }

        true
    }

    /// Rotate 90 degrees clockwise (+1) or counter-clockwise (-1).
    ///
    /// The candidate is evaluated on a copy; the real piece only changes if
    /// the candidate is accepted.
    pub fn rotate(&mut self, direction: i8, board: &Board) -> bool {
        match self.rotated_candidate(direction, board) {
            Some(candidate) => {
                *self = candidate;
                true
            }
            None => false,
        }
    }

    /// Evaluate a rotation candidate: rotate the plan, clamp the anchor
    /// against left/right/bottom walls, then allow at most two upward
    /// nudges to unstick from the settled stack.
    fn rotated_candidate(&self, direction: i8, board: &Board) -> Option<Piece> {
        let mut candidate = *self;
        candidate.plan = self.plan.rotated(direction);

        // Clamp the plan's bounding box back inside the side and floor
        // walls before evaluating the rotated shape.
        let side = candidate.plan.side() as i8;
        if candidate.x < 0 {
            candidate.x = 0;
        }
        if candidate.x + side > BOARD_WIDTH as i8 {
            candidate.x = BOARD_WIDTH as i8 - side;
        }
        if candidate.y + side > BOARD_HEIGHT as i8 {
            candidate.y = BOARD_HEIGHT as i8 - side;
        }
        candidate.rebuild_cells();

        let mut lifts = 0;
        while candidate.overlaps_stack(board) {
            candidate.shift(0, -1);
            lifts += 1;
            if lifts > 2 {
                return None;
            }
        }

        Some(candidate)
    }
}
