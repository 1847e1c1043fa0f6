use super::{CellState, Coordinate, Grid, Rule, default_rule};
use std::collections::HashMap;
use tracing::trace;

/// GenerationEngine advances a grid one generation at a time.
///
/// `step` is a pure transformation from one grid snapshot to a fresh one.
/// It keeps no state between calls, so independent callers can step
/// independent snapshots without coordination.
pub struct GenerationEngine {
    rule: Box<dyn Rule>,
}

impl GenerationEngine {
    /// Engine with the classic Conway rule
    pub fn new() -> Self {
        Self {
            rule: default_rule(),
        }
    }

    /// Engine with a caller-chosen rule
    pub fn with_rule(rule: Box<dyn Rule>) -> Self {
        Self { rule }
    }

    pub fn rule(&self) -> &dyn Rule {
        self.rule.as_ref()
    }

    /// Compute the next generation.
    ///
    /// Counts live neighbors only around current life: every live cell
    /// bumps the count at each of its 8 neighbor coordinates, so the count
    /// map covers exactly the finite frontier. Dead cells with no live
    /// neighbors are never touched, which keeps one step proportional to
    /// the live population rather than to any board area.
    pub fn step(&self, grid: &Grid) -> Grid {
        let mut neighbor_counts: HashMap<Coordinate, u8> = HashMap::new();
        for coordinate in grid.living_coordinates() {
            for neighbor in coordinate.neighbors() {
                *neighbor_counts.entry(neighbor).or_insert(0) += 1;
            }
        }

        let next: Vec<Coordinate> = neighbor_counts
            .into_iter()
            .filter(|&(coordinate, count)| {
                let current = if grid.contains(coordinate) {
                    CellState::Live
                } else {
                    CellState::Dead
                };
                self.rule.evolve(current, count).is_alive()
            })
            .map(|(coordinate, _)| coordinate)
            .collect();

        trace!(
            rule = self.rule.name(),
            before = grid.population(),
            after = next.len(),
            "advanced one generation"
        );
        Grid::from_coordinates(next)
    }
}

impl Default for GenerationEngine {
    fn default() -> Self {
        Self::new()
    }
}
