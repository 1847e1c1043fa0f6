mod cell;
mod coordinate;
mod engine;
mod grid;
mod pattern;
mod rules;

pub use cell::{Cell, CellState};
pub use coordinate::{Coordinate, NEIGHBOR_OFFSETS};
pub use engine::GenerationEngine;
pub use grid::{Grid, GridBuilder};
pub use pattern::{DEFAULT_ALIVE_MARKER, Pattern, PatternDecoder, presets};
pub use rules::{
    ConwayRule, DayAndNightRule, HighLifeRule, Rule, SeedsRule, all_rules, default_rule,
};
