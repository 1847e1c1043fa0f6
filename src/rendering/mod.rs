use crate::domain::{DEFAULT_ALIVE_MARKER, Grid};

/// A finite, inclusive rectangular window onto the unbounded plane.
///
/// The grid itself has no edges, so every draw call names the window it
/// wants. A degenerate window (min above max on either axis) is valid and
/// renders to nothing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Viewport {
    pub min_x: i64,
    pub min_y: i64,
    pub max_x: i64,
    pub max_y: i64,
}

impl Viewport {
    pub const fn new(min_x: i64, min_y: i64, max_x: i64, max_y: i64) -> Self {
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    /// Tightest viewport covering all live cells; `None` for an empty grid.
    pub fn bounding(grid: &Grid) -> Option<Self> {
        let mut coords = grid.living_coordinates();
        let first = coords.next()?;
        let mut vp = Self::new(first.x, first.y, first.x, first.y);
        for c in coords {
            vp.min_x = vp.min_x.min(c.x);
            vp.min_y = vp.min_y.min(c.y);
            vp.max_x = vp.max_x.max(c.x);
            vp.max_y = vp.max_y.max(c.y);
        }
        Some(vp)
    }

    /// The same viewport grown by `margin` cells on every side
    pub const fn padded(self, margin: i64) -> Self {
        Self {
            min_x: self.min_x - margin,
            min_y: self.min_y - margin,
            max_x: self.max_x + margin,
            max_y: self.max_y + margin,
        }
    }
}

/// Projects a viewport of a grid into a printable character block.
#[derive(Clone, Copy, Debug)]
pub struct Renderer {
    alive_marker: char,
    dead_marker: char,
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new(DEFAULT_ALIVE_MARKER, '-')
    }
}

impl Renderer {
    pub const fn new(alive_marker: char, dead_marker: char) -> Self {
        Self {
            alive_marker,
            dead_marker,
        }
    }

    /// Render rows `min_y..=max_y` top to bottom, columns `min_x..=max_x`
    /// left to right, rows joined by a line break.
    pub fn draw(&self, grid: &Grid, viewport: Viewport) -> String {
        (viewport.min_y..=viewport.max_y)
            .map(|y| {
                (viewport.min_x..=viewport.max_x)
                    .map(|x| {
                        if grid.contains((x, y)) {
                            self.alive_marker
                        } else {
                            self.dead_marker
                        }
                    })
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}
