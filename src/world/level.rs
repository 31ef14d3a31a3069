use glam::vec2;

use super::geometry::{Rgb, Wall};

/// Static wall set of one map (immutable after construction).
///
/// Walls are unique by value; duplicates collapse to their first
/// occurrence, which keeps iteration order stable between runs.
#[derive(Clone, Debug, Default)]
pub struct Level {
    pub name: String,
    walls: Vec<Wall>,
}

impl Level {
    pub fn new(name: impl Into<String>, walls: impl IntoIterator<Item = Wall>) -> Self {
        let mut unique: Vec<Wall> = Vec::new();
        for w in walls {
            if !unique.contains(&w) {
                unique.push(w);
            }
        }
        Self {
            name: name.into(),
            walls: unique,
        }
    }

    #[inline]
    pub fn walls(&self) -> &[Wall] {
        &self.walls
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.walls.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.walls.is_empty()
    }

    /// Six-wall test map used when no level file is given.
    pub fn demo() -> Self {
        const YELLOW: Rgb = Rgb::new(255, 255, 0);
        const MAGENTA: Rgb = Rgb::new(255, 0, 255);
        const CYAN: Rgb = Rgb::new(0, 255, 255);
        Self::new(
            "demo",
            [
                Wall::new(YELLOW, vec2(100.0, 125.0), vec2(50.0, 250.0)),
                Wall::new(YELLOW, vec2(50.0, 250.0), vec2(100.0, 400.0)),
                Wall::new(MAGENTA, vec2(30.0, 400.0), vec2(250.0, 450.0)),
                Wall::new(MAGENTA, vec2(250.0, 450.0), vec2(400.0, 500.0)),
                Wall::new(CYAN, vec2(400.0, 30.0), vec2(320.0, 250.0)),
                Wall::new(CYAN, vec2(320.0, 250.0), vec2(250.0, 500.0)),
            ],
        )
    }
}
