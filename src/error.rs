use thiserror::Error;

/// Errors surfaced by the simulation core.
///
/// The core is almost entirely total: empty patterns, empty coordinate
/// seeds and degenerate viewports are all valid inputs with well-defined
/// empty results. The only failure is asking for a grid without giving it
/// anything to be seeded from.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LifeError {
    /// Grid construction was requested without a coordinate source or a
    /// pattern. Reported synchronously; no partial grid is produced.
    #[error("grid requires a seed: provide coordinates or a pattern")]
    InvalidConfiguration,
}
