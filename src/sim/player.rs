use glam::Vec2;

use crate::world::Vector;

/// Forward speed in map units per second.
pub const WALK_SPEED: f32 = 250.0;
/// Distance of one backwards step.
pub const BACK_STEP: f32 = 10.0;
/// Forward motion per update is capped below the collision distance, so a
/// `blocked` flag from the previous frame cannot carry the player through
/// a wall after a long frame.
pub const MAX_STEP: f32 = 4.0;

/// One frame's worth of player intent.
#[derive(Clone, Copy, Debug, Default)]
pub struct InputCmd {
    pub forward: bool,   // W held
    pub back_step: bool, // S pressed this frame
    pub turn: f32,       // radians, + = clockwise on screen
}

/// Viewer state driven by input.
#[derive(Clone, Copy, Debug)]
pub struct Player {
    pub pos: Vec2,
    pub angle: f32,
    line_of_sight: Vector,
}

impl Player {
    /// `radius` is the view radius; the line of sight is that long and is
    /// never measured, so its unit vector divides by exactly its length.
    pub fn new(pos: Vec2, angle: f32, radius: f32) -> Self {
        Self {
            pos,
            angle,
            line_of_sight: Vector::new(pos, pos + Vec2::new(radius, 0.0), radius),
        }
    }

    /// Unit vector the player is facing.
    pub fn heading(&mut self) -> Vec2 {
        self.line_of_sight.set_start(self.pos);
        self.line_of_sight.rotate_line_of_sight(self.angle);
        self.line_of_sight.unit_vector()
    }

    #[inline]
    pub fn turn(&mut self, delta: f32) {
        self.angle += delta;
    }

    /// Apply `cmd` over `dt` seconds. `blocked` comes from the last frame.
    pub fn update(&mut self, cmd: &InputCmd, blocked: bool, dt: f32) {
        self.turn(cmd.turn);

        if cmd.back_step {
            let h = self.heading();
            self.pos -= h * BACK_STEP;
        }
        if cmd.forward && !blocked {
            let h = self.heading();
            self.pos += h * (WALK_SPEED * dt).min(MAX_STEP);
        }
    }
}
