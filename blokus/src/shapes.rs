//! Piece geometry: tightly-packed occupancy grids and the quarter-turn
//! transform.

use std::fmt;

use crate::errors::OutOfBounds;

/// Maximum extent of a piece along either axis.
pub const MAX_EXTENT: usize = 5;

/// The occupancy geometry of one piece orientation.
///
/// A shape is a `height` by `width` grid of cells packed to its tight
/// bounding box: every border row and border column contains at least one
/// occupied cell. [`rotate_90`][Shape::rotate_90] re-establishes the packing
/// after every turn, so a shape's extents always describe exactly the cells
/// that matter.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Shape {
    height: usize,
    width: usize,
    /// Row-major occupancy, `height * width` cells.
    cells: Vec<bool>,
}

impl Shape {
    /// Pack a raw row-major grid to its tight bounding box. Used by the
    /// catalog loader; dimension limits are enforced there.
    pub(crate) fn from_cells(height: usize, width: usize, cells: &[bool]) -> Self {
        Self::packed(height, width, cells)
    }

    /// Height of the bounding box, in cells.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Width of the bounding box, in cells.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Whether the cell at local offset `(x, y)` is occupied. `x` indexes
    /// columns and `y` rows. Offsets outside the bounding box are a reported
    /// error so callers cannot silently misread the geometry.
    pub fn occupied(&self, x: i32, y: i32) -> Result<bool, OutOfBounds> {
        if x < 0 || y < 0 || x as usize >= self.width || y as usize >= self.height {
            Err(OutOfBounds::new(x, y, self.width, self.height))
        } else {
            Ok(self.cell(x as usize, y as usize))
        }
    }

    /// Unchecked accessor for offsets already known to be in range.
    pub(crate) fn cell(&self, x: usize, y: usize) -> bool {
        self.cells[y * self.width + x]
    }

    /// Number of occupied cells.
    pub fn count_occupied(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }

    /// Returns this shape turned a quarter turn and repacked to its tight
    /// bounding box.
    ///
    /// The turn is computed in a fixed [`MAX_EXTENT`]-square working frame:
    /// frame cell `(x, y)` receives the source cell at row `x`, column
    /// `MAX_EXTENT - 1 - y`, wherever both indices are in range for the
    /// source. Repacking then drops the frame's empty border rows and
    /// columns, so the transform is independent of the shape's own extents
    /// and four turns restore the original pattern.
    ///
    /// Purely geometric: identity and ownership play no part.
    pub fn rotate_90(&self) -> Shape {
        let mut frame = vec![false; MAX_EXTENT * MAX_EXTENT];
        for y in 0..MAX_EXTENT {
            let src_col = MAX_EXTENT - 1 - y;
            if src_col >= self.width {
                continue;
            }
            for x in 0..self.height.min(MAX_EXTENT) {
                frame[y * MAX_EXTENT + x] = self.cell(src_col, x);
            }
        }
        Self::packed(MAX_EXTENT, MAX_EXTENT, &frame)
    }

    /// Extract the tight bounding box of the occupied cells in the given
    /// grid. A grid with no occupied cells packs to a single empty cell
    /// rather than a degenerate extent; valid catalog entries never hit
    /// this case.
    fn packed(height: usize, width: usize, cells: &[bool]) -> Shape {
        let mut bounds = None;
        for y in 0..height {
            for x in 0..width {
                if cells[y * width + x] {
                    let (l, r, u, d) = bounds.unwrap_or((x, x, y, y));
                    bounds = Some((l.min(x), r.max(x), u.min(y), d.max(y)));
                }
            }
        }
        match bounds {
            None => Shape {
                height: 1,
                width: 1,
                cells: vec![false],
            },
            Some((l, r, u, d)) => {
                let (h, w) = (d - u + 1, r - l + 1);
                let mut packed = Vec::with_capacity(h * w);
                for y in u..=d {
                    for x in l..=r {
                        packed.push(cells[y * width + x]);
                    }
                }
                Shape {
                    height: h,
                    width: w,
                    cells: packed,
                }
            }
        }
    }
}

impl fmt::Display for Shape {
    /// Renders the pattern rows, `o` occupied and `.` empty.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for y in 0..self.height {
            if y > 0 {
                writeln!(f)?;
            }
            for x in 0..self.width {
                write!(f, "{}", if self.cell(x, y) { 'o' } else { '.' })?;
            }
        }
        Ok(())
    }
}
