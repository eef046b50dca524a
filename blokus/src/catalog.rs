//! Loading the fixed set of piece-type geometries.

use std::io::Read;

use crate::{
    errors::{CatalogError, UnknownType},
    shapes::{Shape, MAX_EXTENT},
};

/// The standard 21-piece set, one of each polyomino from one to five cells.
const STANDARD_SHAPES: &str = include_str!("../data/shapes.txt");

/// The fixed, immutable set of distinct piece-type geometries available in
/// a game. Type ids are a dense index `0..num_types`; the catalog is
/// read-only after load and shapes leave it only as independent copies.
#[derive(Debug, Clone)]
pub struct ShapeCatalog {
    shapes: Vec<Shape>,
}

impl ShapeCatalog {
    /// Load a catalog from a reader over the text shape-definition format.
    pub fn load<R: Read>(mut source: R) -> Result<Self, CatalogError> {
        let mut text = String::new();
        source.read_to_string(&mut text)?;
        Self::parse(&text)
    }

    /// The embedded standard set of 21 piece types.
    pub fn standard() -> Self {
        match Self::parse(STANDARD_SHAPES) {
            Ok(catalog) => catalog,
            // The embedded data is covered by tests, so this is a
            // packaging bug.
            Err(err) => unreachable!("embedded shape set is malformed: {}", err),
        }
    }

    /// Parse the text shape-definition format: a leading record count, then
    /// for each record a `type_id height width` header followed by `height`
    /// whitespace-separated row strings of exactly `width` cells, `o`
    /// occupied and `.` empty. Patterns are repacked to their tight
    /// bounding box so every catalog entry satisfies the invariant the
    /// rotation transform relies on.
    pub fn parse(text: &str) -> Result<Self, CatalogError> {
        let mut tokens = text.split_whitespace();
        let num_types = next_number(&mut tokens)?;
        let mut shapes = Vec::with_capacity(num_types);
        for expected in 0..num_types {
            let type_id = next_number(&mut tokens)?;
            if type_id != expected {
                return Err(CatalogError::TypeOutOfOrder {
                    expected,
                    found: type_id,
                });
            }
            let height = next_number(&mut tokens)?;
            let width = next_number(&mut tokens)?;
            if height == 0 || width == 0 || height > MAX_EXTENT || width > MAX_EXTENT {
                return Err(CatalogError::BadExtent {
                    type_id,
                    height,
                    width,
                });
            }
            let mut cells = Vec::with_capacity(height * width);
            for row in 0..height {
                let row_text = tokens.next().ok_or(CatalogError::UnexpectedEnd)?;
                let found = row_text.chars().count();
                if found != width {
                    return Err(CatalogError::RowWidth {
                        type_id,
                        row,
                        expected: width,
                        found,
                    });
                }
                for symbol in row_text.chars() {
                    match symbol {
                        'o' => cells.push(true),
                        '.' => cells.push(false),
                        _ => return Err(CatalogError::BadSymbol { type_id, symbol }),
                    }
                }
            }
            shapes.push(Shape::from_cells(height, width, &cells));
        }
        if tokens.next().is_some() {
            return Err(CatalogError::TrailingData);
        }
        Ok(Self { shapes })
    }

    /// Number of shape types in the catalog.
    pub fn num_types(&self) -> usize {
        self.shapes.len()
    }

    /// Produce an independent copy of the shape for `type_id`. The copy may
    /// be rotated freely without affecting the catalog original.
    pub fn generate(&self, type_id: usize) -> Result<Shape, UnknownType> {
        self.shapes
            .get(type_id)
            .cloned()
            .ok_or_else(|| UnknownType::new(type_id, self.shapes.len()))
    }

    /// Iterate the catalog's `(type_id, shape)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &Shape)> {
        self.shapes.iter().enumerate()
    }
}

/// Pull the next whitespace token and parse it as a number.
fn next_number<'a>(tokens: &mut impl Iterator<Item = &'a str>) -> Result<usize, CatalogError> {
    let token = tokens.next().ok_or(CatalogError::UnexpectedEnd)?;
    token
        .parse()
        .map_err(|_| CatalogError::InvalidNumber(token.to_owned()))
}
