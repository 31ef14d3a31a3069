use glam::Vec2;

use crate::{
    engine::reorder::move_to_front,
    world::{Level, Triangle, Wall, cross},
};

/// This frame's walls that overlap the FOV triangle, each paired with
/// `cross(wall.a, wall.b, viewer)`.
///
/// Both vectors always have the same length and the same order.
#[derive(Clone, Debug, Default)]
pub struct CandidateList {
    walls: Vec<Wall>,
    crosses: Vec<f32>,
}

impl CandidateList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a list directly, computing each wall's cached sign from `viewer`.
    pub fn from_walls(viewer: Vec2, walls: impl IntoIterator<Item = Wall>) -> Self {
        let mut list = Self::new();
        for w in walls {
            list.push(w, cross(w.a, w.b, viewer));
        }
        list
    }

    #[inline]
    pub fn clear(&mut self) {
        self.walls.clear();
        self.crosses.clear();
    }

    #[inline]
    pub fn push(&mut self, wall: Wall, cross: f32) {
        self.walls.push(wall);
        self.crosses.push(cross);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.walls.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.walls.is_empty()
    }

    #[inline]
    pub fn walls(&self) -> &[Wall] {
        &self.walls
    }

    #[inline]
    pub fn crosses(&self) -> &[f32] {
        &self.crosses
    }

    /// `(wall, cached sign)` pairs in current order.
    pub fn iter(&self) -> impl Iterator<Item = (&Wall, f32)> + '_ {
        self.walls.iter().zip(self.crosses.iter().copied())
    }

    /// Rotate wall `idx` (and its cached sign) to the front.
    #[inline]
    pub fn move_to_front(&mut self, idx: usize) {
        move_to_front(&mut self.walls, idx);
        move_to_front(&mut self.crosses, idx);
    }
}

/// Owner of the static wall set and of the per-frame [`CandidateList`].
pub struct VisibilitySet {
    level: Level,
    candidates: CandidateList,
}

impl VisibilitySet {
    pub fn new(level: Level) -> Self {
        let cap = level.len();
        Self {
            level,
            candidates: CandidateList {
                walls: Vec::with_capacity(cap),
                crosses: Vec::with_capacity(cap),
            },
        }
    }

    /// Candidates from the last [`find_collided_walls`](Self::find_collided_walls).
    #[inline]
    pub fn candidates(&self) -> &CandidateList {
        &self.candidates
    }

    /// Rebuild the candidate list for triangle `(viewer, fov_left, fov_right)`.
    ///
    /// Must run once per frame before any ray is cast; otherwise the rays
    /// test last frame's walls against stale signs.
    pub fn find_collided_walls(
        &mut self,
        viewer: Vec2,
        fov_left: Vec2,
        fov_right: Vec2,
    ) -> &mut CandidateList {
        self.candidates.clear();
        let fov = Triangle::new(viewer, fov_left, fov_right);

        for wall in self.level.walls() {
            if fov.touches_segment(wall.a, wall.b) {
                self.candidates.push(*wall, cross(wall.a, wall.b, viewer));
            }
        }
        &mut self.candidates
    }
}

/*====================================================================*/
/*                                Tests                                */
/*====================================================================*/
#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::Rgb;
    use glam::vec2;

    const RED: Rgb = Rgb::new(255, 0, 0);

    fn wall(ax: f32, ay: f32, bx: f32, by: f32) -> Wall {
        Wall::new(RED, vec2(ax, ay), vec2(bx, by))
    }

    fn viewer() -> (Vec2, Vec2, Vec2) {
        let p = vec2(250.0, 250.0);
        (p, p + vec2(450.0, -450.0), p + vec2(450.0, 450.0))
    }

    #[test]
    fn keeps_only_walls_in_front() {
        let ahead = wall(350.0, 200.0, 350.0, 300.0);
        let behind = wall(150.0, 200.0, 150.0, 300.0);
        let crossing_edge = wall(300.0, 100.0, 450.0, 100.0); // straddles left edge
        let mut vis = VisibilitySet::new(Level::new("t", [ahead, behind, crossing_edge]));
        let (p, l, r) = viewer();
        let list = vis.find_collided_walls(p, l, r);
        assert_eq!(list.walls(), &[ahead, crossing_edge]);
    }

    #[test]
    fn spanning_wall_is_kept_without_inner_endpoint() {
        let spanning = wall(400.0, -1000.0, 400.0, 1000.0);
        let mut vis = VisibilitySet::new(Level::new("t", [spanning]));
        let (p, l, r) = viewer();
        assert_eq!(vis.find_collided_walls(p, l, r).len(), 1);
    }

    #[test]
    fn cross_cache_matches_viewer_side() {
        let w = wall(350.0, 200.0, 350.0, 300.0);
        let mut vis = VisibilitySet::new(Level::new("t", [w]));
        let (p, l, r) = viewer();
        let list = vis.find_collided_walls(p, l, r);
        assert_eq!(list.crosses(), &[cross(w.a, w.b, p)]);
        assert!((list.crosses()[0] - 10_000.0).abs() < 1e-3);
    }

    #[test]
    fn degenerate_fov_yields_nothing() {
        let mut vis = VisibilitySet::new(Level::demo());
        let p = vec2(250.0, 250.0);
        assert!(vis.find_collided_walls(p, p, p).is_empty());
    }

    #[test]
    fn rebuild_clears_previous_frame() {
        let mut vis = VisibilitySet::new(Level::new("t", [wall(350.0, 200.0, 350.0, 300.0)]));
        let (p, l, r) = viewer();
        assert_eq!(vis.find_collided_walls(p, l, r).len(), 1);
        // look the other way
        let back_l = p + vec2(-450.0, 450.0);
        let back_r = p + vec2(-450.0, -450.0);
        assert!(vis.find_collided_walls(p, back_l, back_r).is_empty());
        assert!(vis.candidates().crosses().is_empty());
    }

    #[test]
    fn move_to_front_keeps_pairs_together() {
        let p = vec2(0.0, 0.0);
        let walls = [
            wall(10.0, -5.0, 10.0, 5.0),
            wall(20.0, -5.0, 20.0, 5.0),
            wall(30.0, -5.0, 30.0, 5.0),
        ];
        let mut list = CandidateList::from_walls(p, walls);
        let before: Vec<(Wall, f32)> = list.iter().map(|(w, c)| (*w, c)).collect();
        list.move_to_front(2);
        assert_eq!(list.walls()[0], walls[2]);
        for (w, c) in list.iter() {
            assert!(before.contains(&(*w, c)));
        }
        assert_eq!(list.len(), 3);
    }
}
