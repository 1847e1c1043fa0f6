use super::Coordinate;

/// CellState represents the fundamental unit of the simulation.
/// Each cell is either Dead or Live.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum CellState {
    Dead,
    Live,
}

impl CellState {
    /// Check if this is the live state
    pub const fn is_alive(self) -> bool {
        matches!(self, CellState::Live)
    }

    /// Toggle between Live and Dead
    pub const fn toggle(self) -> Self {
        match self {
            CellState::Live => CellState::Dead,
            CellState::Dead => CellState::Live,
        }
    }
}

/// A cell pinned to one coordinate of the unbounded plane.
///
/// The position never changes after construction, and the 8 neighbor
/// coordinates are computed eagerly at construction in the fixed
/// enumeration order of [`super::NEIGHBOR_OFFSETS`].
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Cell {
    position: Coordinate,
    state: CellState,
    neighbor_coordinates: [Coordinate; 8],
}

impl Cell {
    /// Create a live cell at `position`. Any coordinate is valid.
    pub fn new(position: impl Into<Coordinate>) -> Self {
        let position = position.into();
        Self {
            position,
            state: CellState::Live,
            neighbor_coordinates: position.neighbors(),
        }
    }

    pub const fn position(&self) -> Coordinate {
        self.position
    }

    pub const fn is_alive(&self) -> bool {
        self.state.is_alive()
    }

    pub const fn state(&self) -> CellState {
        self.state
    }

    /// Mutate the state in place. The grid's generation algorithm works on
    /// coordinate sets instead, so this is mostly useful for building a dead
    /// cell in isolation.
    pub const fn set_state(&mut self, state: CellState) {
        self.state = state;
    }

    /// The 8 adjacent coordinates, precomputed at construction.
    pub const fn neighbor_coordinates(&self) -> &[Coordinate; 8] {
        &self.neighbor_coordinates
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_cell_is_alive() {
        let cell = Cell::new((0, 0));
        assert!(cell.is_alive());
        assert_eq!(cell.state(), CellState::Live);
    }

    #[test]
    fn test_set_state() {
        let mut cell = Cell::new((2, 3));
        cell.set_state(CellState::Dead);
        assert!(!cell.is_alive());
        assert_eq!(cell.position(), Coordinate::new(2, 3));
    }

    #[test]
    fn test_toggle() {
        assert_eq!(CellState::Live.toggle(), CellState::Dead);
        assert_eq!(CellState::Dead.toggle(), CellState::Live);
    }

    #[test]
    fn test_neighbor_coordinates_match_position_neighborhood() {
        let cell = Cell::new((1, 1));
        assert_eq!(
            cell.neighbor_coordinates(),
            &Coordinate::new(1, 1).neighbors()
        );
    }

    #[test]
    fn test_neighbors_never_contain_position() {
        let cell = Cell::new((-3, 5));
        assert!(!cell.neighbor_coordinates().contains(&cell.position()));
    }
}
