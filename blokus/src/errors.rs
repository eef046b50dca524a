//! Errors reported by the placement engine.

use std::{
    fmt::{self, Debug},
    io,
};

use thiserror::Error;

use crate::game::Player;

/// Error returned when a coordinate query falls outside a grid's valid
/// index range. Always a caller-logic error; never an in-band sentinel.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
#[error("({x}, {y}) is out of bounds for a {width}x{height} grid")]
pub struct OutOfBounds {
    x: i32,
    y: i32,
    width: usize,
    height: usize,
}

impl OutOfBounds {
    pub(crate) fn new(x: i32, y: i32, width: usize, height: usize) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// The queried `x` coordinate.
    pub fn x(&self) -> i32 {
        self.x
    }

    /// The queried `y` coordinate.
    pub fn y(&self) -> i32 {
        self.y
    }

    /// Width of the grid that rejected the query.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Height of the grid that rejected the query.
    pub fn height(&self) -> usize {
        self.height
    }
}

/// Error returned when a catalog type index is outside the valid range.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
#[error("unknown shape type {type_id}, catalog has {num_types} types")]
pub struct UnknownType {
    type_id: usize,
    num_types: usize,
}

impl UnknownType {
    pub(crate) fn new(type_id: usize, num_types: usize) -> Self {
        Self { type_id, num_types }
    }

    /// The type index that was requested.
    pub fn type_id(&self) -> usize {
        self.type_id
    }

    /// Number of types the catalog actually holds.
    pub fn num_types(&self) -> usize {
        self.num_types
    }
}

/// Error returned when a player piece-slot index is outside the valid range.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
#[error("invalid piece slot {slot}, player holds {num_slots} pieces")]
pub struct InvalidSlot {
    slot: usize,
    num_slots: usize,
}

impl InvalidSlot {
    pub(crate) fn new(slot: usize, num_slots: usize) -> Self {
        Self { slot, num_slots }
    }

    /// The slot index that was requested.
    pub fn slot(&self) -> usize {
        self.slot
    }

    /// Number of piece slots the player actually holds.
    pub fn num_slots(&self) -> usize {
        self.num_slots
    }
}

/// Error returned when constructing a [`PlayerId`][crate::pieces::PlayerId]
/// from the reserved value `0`, which marks an empty board cell.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
#[error("player id 0 is reserved for empty cells")]
pub struct InvalidOwner;

/// Structural failure while loading a shape catalog. Fatal to startup: the
/// game cannot proceed without a valid catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Reading the catalog source failed.
    #[error("malformed catalog: failed to read source")]
    Io(#[from] io::Error),
    /// The input ended before the declared number of records was read.
    #[error("malformed catalog: input ended before the declared records")]
    UnexpectedEnd,
    /// A token that should have been a number was not one.
    #[error("malformed catalog: expected a number, found {0:?}")]
    InvalidNumber(String),
    /// Record type ids must be the dense sequence `0..num_types`.
    #[error("malformed catalog: expected type id {expected}, found {found}")]
    TypeOutOfOrder { expected: usize, found: usize },
    /// A declared extent was zero or exceeded the maximum piece extent.
    #[error("malformed catalog: type {type_id} declares {height}x{width}, outside the supported extents")]
    BadExtent {
        type_id: usize,
        height: usize,
        width: usize,
    },
    /// A pattern row did not match the record's declared width.
    #[error("malformed catalog: type {type_id} row {row} is {found} cells wide, expected {expected}")]
    RowWidth {
        type_id: usize,
        row: usize,
        expected: usize,
        found: usize,
    },
    /// A pattern cell used a symbol other than `o` or `.`.
    #[error("malformed catalog: type {type_id} contains symbol {symbol:?}, expected 'o' or '.'")]
    BadSymbol { type_id: usize, symbol: char },
    /// Data remained after the declared number of records.
    #[error("malformed catalog: trailing data after the declared records")]
    TrailingData,
}

/// Error returned when adding a player whose id is already in the game.
/// Carries the rejected player so the caller can recover it.
#[derive(Error)]
#[error("player with id {} already exists", .player.id())]
pub struct AddPlayerError {
    player: Player,
}

impl AddPlayerError {
    pub(crate) fn new(player: Player) -> Self {
        Self { player }
    }

    /// The player that was not added.
    pub fn player(&self) -> &Player {
        &self.player
    }

    /// Extract the rejected player from this error.
    pub fn into_player(self) -> Player {
        self.player
    }
}

impl Debug for AddPlayerError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}
