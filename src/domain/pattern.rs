use super::{Coordinate, Grid};
use std::collections::HashSet;

/// Default marker for a live cell in pattern text.
pub const DEFAULT_ALIVE_MARKER: char = 'X';

/// Decodes textual patterns into live-coordinate sets.
///
/// A pattern is a block of text, one row per line, origin at the top-left:
/// row index is y, column index is x, both zero-based. A character equal to
/// the alive marker denotes a live cell; any other character is dead. Rows
/// are assumed to map 1:1 to grid columns, so any padding whitespace must be
/// stripped before decoding.
#[derive(Clone, Copy, Debug)]
pub struct PatternDecoder {
    alive_marker: char,
}

impl Default for PatternDecoder {
    fn default() -> Self {
        Self::new(DEFAULT_ALIVE_MARKER)
    }
}

impl PatternDecoder {
    pub const fn new(alive_marker: char) -> Self {
        Self { alive_marker }
    }

    pub const fn alive_marker(&self) -> char {
        self.alive_marker
    }

    /// Decode pattern text into the set of live coordinates.
    /// Any text decodes; the empty string yields the empty set.
    pub fn decode(&self, text: &str) -> HashSet<Coordinate> {
        text.lines()
            .enumerate()
            .flat_map(|(y, row)| {
                row.chars()
                    .enumerate()
                    .filter(|&(_, ch)| ch == self.alive_marker)
                    .map(move |(x, _)| Coordinate::new(x as i64, y as i64))
            })
            .collect()
    }

    /// Decode in row-major scan order, keeping the order cells were seen in.
    /// Useful when the first decoded coordinate matters (e.g. tests).
    pub fn decode_ordered(&self, text: &str) -> Vec<Coordinate> {
        text.lines()
            .enumerate()
            .flat_map(|(y, row)| {
                row.chars()
                    .enumerate()
                    .filter(|&(_, ch)| ch == self.alive_marker)
                    .map(move |(x, _)| Coordinate::new(x as i64, y as i64))
            })
            .collect()
    }
}

/// A named arrangement of live cells that can be stamped onto the plane.
#[derive(Clone, Debug)]
pub struct Pattern {
    pub name: &'static str,
    pub description: &'static str,
    pub cells: Vec<Coordinate>,
}

impl Pattern {
    /// Create a pattern from live-cell coordinates
    pub fn new(
        name: &'static str,
        description: &'static str,
        cells: impl IntoIterator<Item = (i64, i64)>,
    ) -> Self {
        Self {
            name,
            description,
            cells: cells.into_iter().map(Coordinate::from).collect(),
        }
    }

    /// The same pattern shifted by `(dx, dy)`
    pub fn translate(&self, dx: i64, dy: i64) -> Vec<Coordinate> {
        self.cells.iter().map(|c| c.translate(dx, dy)).collect()
    }

    /// Seed a grid with this pattern at the origin
    pub fn to_grid(&self) -> Grid {
        Grid::from_coordinates(self.cells.iter().copied())
    }
}

/// Classic Game of Life patterns library
pub mod presets {
    use super::*;

    /// Glider - simplest spaceship, moves diagonally
    pub fn glider() -> Pattern {
        Pattern::new(
            "Glider",
            "Moves diagonally (period 4)",
            [(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)],
        )
    }

    /// Blinker - period 2 oscillator
    pub fn blinker() -> Pattern {
        Pattern::new("Blinker", "Oscillator (period 2)", [(0, 0), (1, 0), (2, 0)])
    }

    /// Toad - period 2 oscillator
    pub fn toad() -> Pattern {
        Pattern::new(
            "Toad",
            "Oscillator (period 2)",
            [(1, 0), (2, 0), (3, 0), (0, 1), (1, 1), (2, 1)],
        )
    }

    /// Beacon - period 2 oscillator
    pub fn beacon() -> Pattern {
        Pattern::new(
            "Beacon",
            "Oscillator (period 2)",
            [(0, 0), (1, 0), (0, 1), (3, 2), (2, 3), (3, 3)],
        )
    }

    /// Pulsar - period 3 oscillator
    pub fn pulsar() -> Pattern {
        Pattern::new(
            "Pulsar",
            "Oscillator (period 3)",
            [
                // Top
                (2, 0), (3, 0), (4, 0), (8, 0), (9, 0), (10, 0),
                // Upper middle
                (0, 2), (5, 2), (7, 2), (12, 2),
                (0, 3), (5, 3), (7, 3), (12, 3),
                (0, 4), (5, 4), (7, 4), (12, 4),
                // Center
                (2, 5), (3, 5), (4, 5), (8, 5), (9, 5), (10, 5),
                (2, 7), (3, 7), (4, 7), (8, 7), (9, 7), (10, 7),
                // Lower middle
                (0, 8), (5, 8), (7, 8), (12, 8),
                (0, 9), (5, 9), (7, 9), (12, 9),
                (0, 10), (5, 10), (7, 10), (12, 10),
                // Bottom
                (2, 12), (3, 12), (4, 12), (8, 12), (9, 12), (10, 12),
            ],
        )
    }

    /// Lightweight Spaceship (LWSS)
    pub fn lwss() -> Pattern {
        Pattern::new(
            "LWSS",
            "Lightweight Spaceship (period 4)",
            [
                (1, 0), (4, 0),
                (0, 1),
                (0, 2), (4, 2),
                (0, 3), (1, 3), (2, 3), (3, 3),
            ],
        )
    }

    /// Gosper Glider Gun - produces gliders indefinitely
    pub fn glider_gun() -> Pattern {
        Pattern::new(
            "Gosper Glider Gun",
            "Produces gliders (period 30)",
            [
                // Left square
                (0, 4), (0, 5),
                (1, 4), (1, 5),
                // Left circle
                (10, 4), (10, 5), (10, 6),
                (11, 3), (11, 7),
                (12, 2), (12, 8),
                (13, 2), (13, 8),
                (14, 5),
                (15, 3), (15, 7),
                (16, 4), (16, 5), (16, 6),
                (17, 5),
                // Middle pieces
                (20, 2), (20, 3), (20, 4),
                (21, 2), (21, 3), (21, 4),
                (22, 1), (22, 5),
                (24, 0), (24, 1), (24, 5), (24, 6),
                // Right square
                (34, 2), (34, 3),
                (35, 2), (35, 3),
            ],
        )
    }

    /// R-pentomino - classic methuselah (stabilizes after 1103 generations)
    pub fn r_pentomino() -> Pattern {
        Pattern::new(
            "R-pentomino",
            "Methuselah - stabilizes at gen 1103",
            [(1, 0), (2, 0), (0, 1), (1, 1), (1, 2)],
        )
    }

    /// Acorn - small methuselah that stabilizes after 5206 generations
    pub fn acorn() -> Pattern {
        Pattern::new(
            "Acorn",
            "Methuselah - stabilizes at gen 5206",
            [(1, 0), (3, 1), (0, 2), (1, 2), (4, 2), (5, 2), (6, 2)],
        )
    }

    /// Block - simple still life
    pub fn block() -> Pattern {
        Pattern::new("Block", "Still life", [(0, 0), (1, 0), (0, 1), (1, 1)])
    }

    /// Get all available patterns
    pub fn all_patterns() -> Vec<Pattern> {
        vec![
            glider(),
            blinker(),
            toad(),
            beacon(),
            pulsar(),
            lwss(),
            glider_gun(),
            r_pentomino(),
            acorn(),
            block(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_empty_string_is_empty_set() {
        let decoder = PatternDecoder::default();
        assert!(decoder.decode("").is_empty());
    }

    #[test]
    fn test_decode_single_row() {
        let decoder = PatternDecoder::default();
        let coords = decoder.decode("X-X");
        let expected: HashSet<Coordinate> =
            [(0, 0), (2, 0)].into_iter().map(Coordinate::from).collect();
        assert_eq!(coords, expected);
    }

    #[test]
    fn test_decode_cross_pattern() {
        let text = "----X----\n----X----\n----X----\n---------\nXXX---XXX\n---------\n----X----\n----X----\n----X----";
        let decoder = PatternDecoder::default();
        let ordered = decoder.decode_ordered(text);
        assert_eq!(ordered.len(), 12);
        assert_eq!(ordered[0], Coordinate::new(4, 0));
        assert_eq!(decoder.decode(text).len(), 12);
    }

    #[test]
    fn test_decode_custom_marker() {
        let decoder = PatternDecoder::new('#');
        let coords = decoder.decode("#X#");
        let expected: HashSet<Coordinate> =
            [(0, 0), (2, 0)].into_iter().map(Coordinate::from).collect();
        assert_eq!(coords, expected);
    }

    #[test]
    fn test_decode_ignores_trailing_blank_rows() {
        let decoder = PatternDecoder::default();
        assert_eq!(decoder.decode("X\n\n"), decoder.decode("X"));
    }

    #[test]
    fn test_pattern_translate() {
        let blinker = presets::blinker();
        let shifted = blinker.translate(5, -2);
        assert_eq!(
            shifted,
            vec![
                Coordinate::new(5, -2),
                Coordinate::new(6, -2),
                Coordinate::new(7, -2)
            ]
        );
    }

    #[test]
    fn test_preset_names_are_unique() {
        let names: Vec<_> = presets::all_patterns().iter().map(|p| p.name).collect();
        let mut unique = names.clone();
        unique.sort();
        unique.dedup();
        assert_eq!(names.len(), unique.len());
    }
}
