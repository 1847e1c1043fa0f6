use crate::domain::{GenerationEngine, Grid, Rule};
use tracing::debug;

/// Simulation coordinates the core for a driver: it owns the current grid
/// snapshot and a generation counter, and swaps in the engine's next
/// snapshot on each step. All simulation state lives here; the engine
/// itself keeps none between calls.
pub struct Simulation {
    grid: Grid,
    engine: GenerationEngine,
    generation: u64,
}

impl Simulation {
    /// Start from a seed grid with the classic Conway rule
    pub fn new(grid: Grid) -> Self {
        Self {
            grid,
            engine: GenerationEngine::new(),
            generation: 0,
        }
    }

    /// Start from a seed grid with a caller-chosen rule
    pub fn with_rule(grid: Grid, rule: Box<dyn Rule>) -> Self {
        Self {
            grid,
            engine: GenerationEngine::with_rule(rule),
            generation: 0,
        }
    }

    /// Advance one generation and return the new snapshot
    pub fn step(&mut self) -> &Grid {
        self.grid = self.engine.step(&self.grid);
        self.generation += 1;
        debug!(
            generation = self.generation,
            population = self.grid.population(),
            "simulation stepped"
        );
        &self.grid
    }

    /// Replace the grid and restart the generation counter
    pub fn reset(&mut self, grid: Grid) {
        self.grid = grid;
        self.generation = 0;
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub const fn generation(&self) -> u64 {
        self.generation
    }

    pub fn population(&self) -> usize {
        self.grid.population()
    }

    /// True once every cell has died; an all-dead generation is a valid,
    /// stable outcome rather than an error.
    pub fn is_extinct(&self) -> bool {
        self.grid.is_empty()
    }
}
