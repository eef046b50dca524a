//! Engine for a Blokus-style grid-placement game: polyomino piece geometry,
//! board occupancy, and the rules that decide whether a piece may be placed
//! at a given position.
//!
//! The flow mirrors a round of the game. A [`ShapeCatalog`] loads the fixed
//! set of piece-type geometries, a [`PieceFactory`] mints per-player
//! [`Piece`]s from it, and players attempt placements against the shared
//! [`BoardGrid`], which checks every occupied cell of the piece against
//! bounds and occupancy before committing. Placement rejection is an
//! ordinary boolean outcome; bad indices are reported errors.
//!
//! Adjacency legality, scoring, and win detection are not part of this
//! crate. The [`game::EndRule`] seam lets a host supply end-of-game
//! semantics the engine itself never needs.

pub mod board;
pub mod catalog;
pub mod errors;
pub mod game;
pub mod pieces;
pub mod shapes;

pub use self::{
    board::{BoardGrid, Coord},
    catalog::ShapeCatalog,
    game::{Player, TurnEngine},
    pieces::{Piece, PieceFactory, PlayerId},
    shapes::{Shape, MAX_EXTENT},
};
