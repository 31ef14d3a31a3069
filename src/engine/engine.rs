use glam::Vec2;

use crate::{
    engine::{
        config::{ConfigError, EngineConfig},
        fan::RayFan,
        ray::{RayCaster, RayHit},
        visibility::{CandidateList, VisibilitySet},
    },
    world::{Level, Vector},
};

/// Per-frame driver: FOV culling, then one ray per screen column.
pub struct Engine {
    config: EngineConfig,
    visibility: VisibilitySet,
    caster: RayCaster,
    fan: RayFan,
    fov_left: Vector,
    fov_right: Vector,

    /// Viewer position in map units.
    pub pos: Vec2,
    /// View direction in radians, 0 = +x. Not wrapped.
    pub angle: f32,

    endpoints: Vec<Vec2>,
    hits: Vec<Option<RayHit>>,
}

impl Engine {
    pub fn new(
        config: EngineConfig,
        level: Level,
        pos: Vec2,
        angle: f32,
    ) -> Result<Self, ConfigError> {
        config.validate()?;

        let r = config.view_radius;
        let spread = r * config.fov_spread;
        // boundaries are never measured; their length stays the radius
        let fov_left = Vector::new(pos, pos + Vec2::new(r, -spread), r);
        let fov_right = Vector::new(pos, pos + Vec2::new(r, spread), r);

        Ok(Self {
            config,
            visibility: VisibilitySet::new(level),
            caster: RayCaster::new(r),
            fan: RayFan::new(&config),
            fov_left,
            fov_right,
            pos,
            angle,
            endpoints: Vec::with_capacity(config.rays),
            hits: Vec::with_capacity(config.rays),
        })
    }

    /// Disable the move-to-front heuristic (benchmarks, tests).
    pub fn set_reorder(&mut self, reorder: bool) {
        self.caster = self.caster.with_reorder(reorder);
    }

    #[inline]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    #[inline]
    pub fn fan(&self) -> &RayFan {
        &self.fan
    }

    /// Walls retained by the last frame's culling pass.
    #[inline]
    pub fn candidates(&self) -> &CandidateList {
        self.visibility.candidates()
    }

    /// Rotated FOV corners `(left, right)` of the last frame.
    #[inline]
    pub fn fov(&self) -> (Vec2, Vec2) {
        (self.fov_left.rotated_end(), self.fov_right.rotated_end())
    }

    /// Ray end points of the last frame, left to right.
    #[inline]
    pub fn endpoints(&self) -> &[Vec2] {
        &self.endpoints
    }

    /// Results of the last frame, one per column.
    #[inline]
    pub fn hits(&self) -> &[Option<RayHit>] {
        &self.hits
    }

    /// Any column closer than the collision distance?
    pub fn blocked(&self) -> bool {
        let limit = self.config.collision_distance;
        self.hits.iter().flatten().any(|h| h.length_factor < limit)
    }

    /// Cull, then cast every ray of the fan in left-to-right order.
    pub fn frame(&mut self) -> &[Option<RayHit>] {
        let pos = self.pos;

        self.fov_left.set_start(pos);
        self.fov_right.set_start(pos);
        let left = self.fov_left.rotate(self.angle);
        let right = self.fov_right.rotate(self.angle);

        let candidates = self.visibility.find_collided_walls(pos, left, right);

        let r = self.config.view_radius;
        let angle = self.angle;
        self.endpoints.clear();
        self.endpoints.extend(
            self.fan
                .angles()
                .iter()
                .map(|rel| pos + r * Vec2::from_angle(angle + rel)),
        );

        self.hits.clear();
        for &target in &self.endpoints {
            self.hits.push(self.caster.cast_ray(candidates, pos, target));
        }
        &self.hits
    }
}

/*====================================================================*/
/*                                Tests                                */
/*====================================================================*/
