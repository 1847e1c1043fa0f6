use super::{Cell, Coordinate, PatternDecoder};
use crate::error::LifeError;
use rand::Rng;
use std::collections::HashMap;
use tracing::debug;

/// Grid holds the current generation as a sparse mapping from coordinate to
/// live cell. Dead cells are simply absent, which is what lets the plane stay
/// unbounded without unbounded memory: only life is materialized.
///
/// A grid is a snapshot. The generation engine never mutates one in place;
/// it reads the living coordinates and builds a fresh grid for the next
/// generation.
#[derive(Clone, Debug, Default)]
pub struct Grid {
    cells: HashMap<Coordinate, Cell>,
}

impl Grid {
    /// Build a grid from a coordinate source. Accepts anything iterable over
    /// coordinate-convertible values, so a single-element seed and a longer
    /// sequence go through the same path. Duplicates collapse to one cell.
    pub fn from_coordinates<I, C>(coords: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Into<Coordinate>,
    {
        let cells: HashMap<Coordinate, Cell> = coords
            .into_iter()
            .map(|c| {
                let coordinate = c.into();
                (coordinate, Cell::new(coordinate))
            })
            .collect();
        debug!(population = cells.len(), "grid seeded from coordinates");
        Self { cells }
    }

    /// Build a grid from pattern text using the default `'X'` alive marker.
    pub fn from_pattern(text: &str) -> Self {
        Self::from_pattern_with(PatternDecoder::default(), text)
    }

    /// Build a grid from pattern text with a caller-supplied decoder.
    pub fn from_pattern_with(decoder: PatternDecoder, text: &str) -> Self {
        Self::from_coordinates(decoder.decode(text))
    }

    /// Seed a rectangular region with random life at the given density.
    /// The region is only the seeding area; the resulting grid is as
    /// unbounded as any other.
    pub fn random<R: Rng>(
        rng: &mut R,
        x_range: std::ops::RangeInclusive<i64>,
        y_range: std::ops::RangeInclusive<i64>,
        density: f64,
    ) -> Self {
        let mut coords = Vec::new();
        for y in y_range {
            for x in x_range.clone() {
                if rng.random_bool(density) {
                    coords.push(Coordinate::new(x, y));
                }
            }
        }
        Self::from_coordinates(coords)
    }

    /// Every stored (necessarily live) position, in internal iteration
    /// order. Callers needing determinism sort explicitly.
    pub fn living_coordinates(&self) -> impl Iterator<Item = Coordinate> + '_ {
        self.cells.keys().copied()
    }

    /// Lookup by coordinate; `None` means dead.
    pub fn cell_at(&self, coordinate: impl Into<Coordinate>) -> Option<&Cell> {
        self.cells.get(&coordinate.into())
    }

    pub fn contains(&self, coordinate: impl Into<Coordinate>) -> bool {
        self.cells.contains_key(&coordinate.into())
    }

    /// Number of live cells
    pub fn population(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

/// Two grids are equal when they hold the same live coordinates.
impl PartialEq for Grid {
    fn eq(&self, other: &Self) -> bool {
        self.cells.len() == other.cells.len()
            && self.cells.keys().all(|c| other.cells.contains_key(c))
    }
}

impl Eq for Grid {}

/// Seeded construction of a [`Grid`].
///
/// A grid must be given at least one seed source: a coordinate sequence or a
/// pattern (an empty pattern is a valid, empty seed). `build` rejects a
/// builder with neither before any cell is constructed.
#[derive(Default, Debug)]
pub struct GridBuilder {
    coordinates: Option<Vec<Coordinate>>,
    pattern: Option<String>,
    decoder: PatternDecoder,
}

impl GridBuilder {
    pub fn new() -> Self {
        Self {
            coordinates: None,
            pattern: None,
            decoder: PatternDecoder::default(),
        }
    }

    pub fn coordinates<I, C>(mut self, coords: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Into<Coordinate>,
    {
        self.coordinates = Some(coords.into_iter().map(Into::into).collect());
        self
    }

    pub fn pattern(mut self, text: impl Into<String>) -> Self {
        self.pattern = Some(text.into());
        self
    }

    pub fn alive_marker(mut self, marker: char) -> Self {
        self.decoder = PatternDecoder::new(marker);
        self
    }

    pub fn build(self) -> Result<Grid, LifeError> {
        match (self.coordinates, self.pattern) {
            (None, None) => Err(LifeError::InvalidConfiguration),
            (coords, pattern) => {
                let mut seed = coords.unwrap_or_default();
                if let Some(text) = pattern {
                    seed.extend(self.decoder.decode(&text));
                }
                Ok(Grid::from_coordinates(seed))
            }
        }
    }
}
