//! The shared board: the occupancy grid all players place pieces onto.

use crate::{
    errors::OutOfBounds,
    pieces::{Piece, PlayerId},
};

/// The coordinates of a board cell. Signed, so off-board placement origins
/// are representable and get rejected instead of being unconstructible.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Coord {
    /// Horizontal position of the cell.
    pub x: i32,
    /// Vertical position of the cell.
    pub y: i32,
}

impl Coord {
    /// Construct a [`Coord`] from the given `x` and `y`.
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl From<(i32, i32)> for Coord {
    /// Construct a [`Coord`] from the given `(x, y)` pair.
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

/// Extent of the standard board along either axis.
const DEFAULT_SIZE: usize = 14;

/// The occupancy grid pieces are placed onto. Each cell records the player
/// that covered it, if any; once covered, a cell is never cleared. The grid
/// is the single owner of its cells and [`place`][BoardGrid::place] is the
/// sole mutator.
#[derive(Debug)]
pub struct BoardGrid {
    width: usize,
    height: usize,
    /// Row-major cell owners, `width * height` cells.
    cells: Box<[Option<PlayerId>]>,
}

impl Default for BoardGrid {
    /// The standard empty 14x14 board.
    fn default() -> Self {
        Self::new(DEFAULT_SIZE, DEFAULT_SIZE)
    }
}

impl BoardGrid {
    /// Construct an empty board with the given extents. Panics if either
    /// extent is 0.
    pub fn new(width: usize, height: usize) -> Self {
        assert!(
            width > 0 && height > 0,
            "board must be nonzero, got {}x{}",
            width,
            height
        );
        Self {
            width,
            height,
            cells: vec![None; width * height].into_boxed_slice(),
        }
    }

    /// Width of the board.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Height of the board.
    pub fn height(&self) -> usize {
        self.height
    }

    /// True iff the coordinate falls outside the grid.
    pub fn is_out_of_bounds<C: Into<Coord>>(&self, coord: C) -> bool {
        self.index(coord.into()).is_none()
    }

    /// Convert a coordinate to a linear index, `None` if out of bounds.
    fn index(&self, coord: Coord) -> Option<usize> {
        if coord.x < 0
            || coord.y < 0
            || coord.x as usize >= self.width
            || coord.y as usize >= self.height
        {
            None
        } else {
            Some(coord.y as usize * self.width + coord.x as usize)
        }
    }

    /// Get the owner of the cell at the given coordinate, `None` for an
    /// empty cell. An out-of-range coordinate is a reported error, so an
    /// empty cell can never be confused with a failed query.
    pub fn get<C: Into<Coord>>(&self, coord: C) -> Result<Option<PlayerId>, OutOfBounds> {
        let coord = coord.into();
        match self.index(coord) {
            Some(i) => Ok(self.cells[i]),
            None => Err(OutOfBounds::new(coord.x, coord.y, self.width, self.height)),
        }
    }

    /// Check whether the piece may be placed with its bounding box anchored
    /// at `origin`. Every occupied cell of the shape must map onto an
    /// in-bounds, empty board cell; unoccupied cells of the bounding box
    /// impose no constraint and may hang off the board or over occupied
    /// cells. Pieces never overlap anything, their own color included.
    pub fn can_place<C: Into<Coord>>(&self, piece: &Piece, origin: C) -> bool {
        let origin = origin.into();
        let shape = piece.shape();
        for h in 0..shape.height() {
            for w in 0..shape.width() {
                if !shape.cell(w, h) {
                    continue;
                }
                let coord = Coord::new(origin.x + w as i32, origin.y + h as i32);
                match self.index(coord) {
                    Some(i) if self.cells[i].is_none() => {}
                    _ => return false,
                }
            }
        }
        true
    }

    /// Validate and commit a placement in one step. On success every
    /// covered cell records the piece's owner and the result is `true`; on
    /// rejection the board is left untouched and the result is `false`.
    /// Rejection is a normal outcome, not an error: interactive callers are
    /// expected to retry with different arguments.
    pub fn place<C: Into<Coord>>(&mut self, piece: &Piece, origin: C) -> bool {
        let origin = origin.into();
        if !self.can_place(piece, origin) {
            return false;
        }
        let shape = piece.shape();
        for h in 0..shape.height() {
            for w in 0..shape.width() {
                if shape.cell(w, h) {
                    let coord = Coord::new(origin.x + w as i32, origin.y + h as i32);
                    // Validation proved every covered cell is in range.
                    if let Some(i) = self.index(coord) {
                        self.cells[i] = Some(piece.owner());
                    }
                }
            }
        }
        true
    }

    /// Read-only iteration over rows of cell owners, for display. Each row
    /// is an iterator over the cells of that row.
    pub fn iter_rows(
        &self,
    ) -> impl Iterator<Item = impl Iterator<Item = Option<PlayerId>> + '_> + '_ {
        (0..self.height)
            .map(move |y| (0..self.width).map(move |x| self.cells[y * self.width + x]))
    }
}
