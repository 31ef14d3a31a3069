use crate::engine::config::EngineConfig;

/// Per-column ray angles and height numerators, computed once.
///
/// Column `i` sits `i - rays/2` pixels off the screen centre on a
/// projection plane `view_radius` away, so its angle is
/// `atan(offset / view_radius)`. Dividing the wall height by that angle's
/// cosine turns the along-ray length factor into a perpendicular one and
/// removes the fisheye bulge.
#[derive(Clone, Debug)]
pub struct RayFan {
    angles: Vec<f32>,
    wall_constants: Vec<f32>,
}

impl RayFan {
    pub fn new(cfg: &EngineConfig) -> Self {
        let half = (cfg.rays / 2) as i32;
        let angles: Vec<f32> = (0..cfg.rays as i32)
            .map(|i| ((i - half) as f32 / cfg.view_radius).atan())
            .collect();
        let wall_constants = angles.iter().map(|a| cfg.wall_height / a.cos()).collect();
        Self {
            angles,
            wall_constants,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.angles.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.angles.is_empty()
    }

    /// Angles relative to the view direction, left to right.
    #[inline]
    pub fn angles(&self) -> &[f32] {
        &self.angles
    }

    #[inline]
    pub fn wall_constants(&self) -> &[f32] {
        &self.wall_constants
    }
}
