use thiserror::Error;

/// Engine-wide constants, built once at startup and threaded through.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EngineConfig {
    /// Rays per frame, one per screen column.
    pub rays: usize,
    /// Ray length and FOV triangle depth in map units.
    pub view_radius: f32,
    /// Numerator of the column height (`height = wall_height / lf`).
    pub wall_height: f32,
    /// Half-width of the culling triangle's far edge, relative to `view_radius`.
    pub fov_spread: f32,
    /// A column with a smaller length factor blocks forward motion.
    pub collision_distance: f32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            rays: 500,
            view_radius: 450.0,
            wall_height: 7500.0,
            fov_spread: 1.0,
            collision_distance: 5.0,
        }
    }
}

#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("ray count must be at least 1")]
    NoRays,

    #[error("{name} must be positive, got {value}")]
    NotPositive { name: &'static str, value: f32 },

    /// The culling triangle no longer covers the outermost ray.
    #[error("fov spread {spread} narrower than ray fan ({needed})")]
    SpreadTooNarrow { spread: f32, needed: f32 },
}

impl EngineConfig {
    /// Defaults with `rays` and `view_radius` overridden; the spread is
    /// widened when the fan would otherwise poke out of the culling triangle.
    pub fn for_view(rays: usize, view_radius: f32) -> Self {
        let fan = (rays / 2) as f32 / view_radius;
        Self {
            rays,
            view_radius,
            fov_spread: fan.max(1.0),
            ..Default::default()
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rays == 0 {
            return Err(ConfigError::NoRays);
        }
        for (name, value) in [
            ("view_radius", self.view_radius),
            ("wall_height", self.wall_height),
            ("fov_spread", self.fov_spread),
        ] {
            if !(value > 0.0) {
                return Err(ConfigError::NotPositive { name, value });
            }
        }
        // outermost ray: tan(atan(half / r)) == half / r
        let needed = (self.rays / 2) as f32 / self.view_radius;
        if self.fov_spread < needed {
            return Err(ConfigError::SpreadTooNarrow {
                spread: self.fov_spread,
                needed,
            });
        }
        Ok(())
    }
}
