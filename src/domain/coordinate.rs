/// The 8 neighbor offsets in row-major order: ascending x, then ascending y,
/// with the zero offset skipped. Cell construction and the generation engine
/// both derive neighborhoods from this single table, so the enumeration order
/// is stable everywhere.
pub const NEIGHBOR_OFFSETS: [(i64, i64); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// A position on the unbounded plane.
/// Value semantics only: equality and hashing by both fields, no mutation.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, PartialOrd, Ord)]
pub struct Coordinate {
    pub x: i64,
    pub y: i64,
}

impl Coordinate {
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// The 8 adjacent coordinates (including diagonals), in the fixed
    /// `NEIGHBOR_OFFSETS` order.
    pub fn neighbors(self) -> [Coordinate; 8] {
        NEIGHBOR_OFFSETS.map(|(dx, dy)| Coordinate::new(self.x + dx, self.y + dy))
    }

    pub const fn translate(self, dx: i64, dy: i64) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }
}

impl From<(i64, i64)> for Coordinate {
    fn from((x, y): (i64, i64)) -> Self {
        Self::new(x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_neighbors_fixed_enumeration_order() {
        let expected: Vec<Coordinate> = [
            (0, 0),
            (0, 1),
            (0, 2),
            (1, 0),
            (1, 2),
            (2, 0),
            (2, 1),
            (2, 2),
        ]
        .into_iter()
        .map(Coordinate::from)
        .collect();
        assert_eq!(Coordinate::new(1, 1).neighbors().to_vec(), expected);
    }

    #[test]
    fn test_neighbors_distinct_and_exclude_self() {
        let p = Coordinate::new(-7, 12);
        let neighbors = p.neighbors();
        assert_eq!(neighbors.len(), 8);
        assert!(!neighbors.contains(&p));

        let mut unique = neighbors.to_vec();
        unique.sort();
        unique.dedup();
        assert_eq!(unique.len(), 8);
    }

    #[test]
    fn test_equality_by_value() {
        assert_eq!(Coordinate::new(3, -4), Coordinate::from((3, -4)));
        assert_ne!(Coordinate::new(3, -4), Coordinate::new(-4, 3));
    }
}
