//! Piece identity, ownership, and minting.

use std::{fmt, num::NonZeroU8};

use crate::{
    catalog::ShapeCatalog,
    errors::{InvalidOwner, UnknownType},
    shapes::Shape,
};

/// Identifier of a player. The raw value `0` marks an empty board cell, so
/// a `PlayerId` always holds a nonzero id; constructing one from `0` is a
/// reported error rather than a representable state.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct PlayerId(NonZeroU8);

impl PlayerId {
    /// Construct a [`PlayerId`] from a raw id. Fails on the reserved empty
    /// value `0`.
    pub fn new(id: u8) -> Result<Self, InvalidOwner> {
        NonZeroU8::new(id).map(PlayerId).ok_or(InvalidOwner)
    }

    /// Get the raw id.
    pub fn get(self) -> u8 {
        self.0.get()
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// The placeable unit: a [`Shape`] bound to a unique id and an owning
/// player. The shape is owned by the piece and rotates independently of the
/// catalog original and of every other piece minted from the same type.
#[derive(Debug, Clone)]
pub struct Piece {
    id: u32,
    owner: PlayerId,
    shape: Shape,
}

impl Piece {
    pub(crate) fn new(id: u32, owner: PlayerId, shape: Shape) -> Self {
        Self { id, owner, shape }
    }

    /// Unique id assigned at mint time.
    pub fn id(&self) -> u32 {
        self.id
    }

    /// The player this piece belongs to.
    pub fn owner(&self) -> PlayerId {
        self.owner
    }

    /// Current orientation of the piece.
    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    /// Turn the piece a quarter turn in place.
    pub fn rotate(&mut self) {
        self.shape = self.shape.rotate_90();
    }
}

/// Mints [`Piece`]s from a shared read-only catalog, assigning ids that
/// start at 1 and increase monotonically. Ids are never reused, even across
/// players minting from the same factory.
pub struct PieceFactory<'c> {
    catalog: &'c ShapeCatalog,
    next_id: u32,
}

impl<'c> PieceFactory<'c> {
    /// Bind a factory to a catalog.
    pub fn new(catalog: &'c ShapeCatalog) -> Self {
        Self {
            catalog,
            next_id: 1,
        }
    }

    /// Number of types in the bound catalog.
    pub fn num_types(&self) -> usize {
        self.catalog.num_types()
    }

    /// The id the next minted piece will receive.
    pub fn next_id(&self) -> u32 {
        self.next_id
    }

    /// Mint a fresh piece of the given type for the given owner.
    pub fn mint(&mut self, type_id: usize, owner: PlayerId) -> Result<Piece, UnknownType> {
        let shape = self.catalog.generate(type_id)?;
        let id = self.next_id;
        self.next_id += 1;
        Ok(Piece::new(id, owner, shape))
    }
}
