// Domain layer - sparse unbounded Game of Life core
pub mod domain;

// Application layer - driver-facing simulation coordination
pub mod application;

// Infrastructure layer - text viewport rendering
pub mod rendering;

pub mod error;

// Re-exports for convenience
pub use application::Simulation;
pub use domain::{
    Cell, CellState, ConwayRule, Coordinate, GenerationEngine, Grid, GridBuilder, Pattern,
    PatternDecoder, Rule, presets,
};
pub use error::LifeError;
pub use rendering::{Renderer, Viewport};
