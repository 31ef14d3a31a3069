//! Nearest-wall search for a single ray.
//!
//! The ray runs from `origin` to a moving end point. Every time a wall
//! is hit the end point is pulled back onto that wall, so walls further
//! down the candidate list are tested against a shorter segment and
//! anything behind the current winner can no longer intersect it.

use glam::Vec2;

use crate::{
    engine::visibility::CandidateList,
    world::{Rgb, cross},
};

/// What one ray reports back to the renderer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RayHit {
    pub color: Rgb,
    pub point: Vec2,
    /// `view_radius` times every ratio that shortened the ray.
    /// Column height is `wall_constant / length_factor`.
    pub length_factor: f32,
}

#[derive(Clone, Copy, Debug)]
pub struct RayCaster {
    radius: f32,
    reorder: bool,
    last_hit: Option<usize>,
}

impl RayCaster {
    pub fn new(radius: f32) -> Self {
        Self {
            radius,
            reorder: true,
            last_hit: None,
        }
    }

    /// Toggle the move-to-front heuristic; hits are the same either way.
    pub fn with_reorder(mut self, reorder: bool) -> Self {
        self.reorder = reorder;
        self
    }

    /// Candidate index (before reordering) of the wall that won the last ray.
    #[inline]
    pub fn last_hit(&self) -> Option<usize> {
        self.last_hit
    }

    /// Cast from `origin` towards `target` against this frame's candidates.
    ///
    /// `candidates` must have been built for the same `origin`: the cached
    /// signs are `cross(wall.a, wall.b, origin)`.
    pub fn cast_ray(
        &mut self,
        candidates: &mut CandidateList,
        origin: Vec2,
        target: Vec2,
    ) -> Option<RayHit> {
        let mut end = target;
        let mut length_factor = self.radius;
        let mut hit: Option<(usize, Rgb)> = None;

        for (idx, (wall, sign1)) in candidates.iter().enumerate() {
            // a NaN sign fails both tests and counts as a miss
            let sign2 = cross(wall.a, wall.b, end);
            let straddles_wall = sign1 * sign2 < 0.0;
            if !straddles_wall {
                continue;
            }
            let sign3 = cross(wall.a, end, origin);
            let sign4 = sign3 + sign2 - sign1;
            let straddles_ray = sign3 * sign4 <= 0.0;
            if !straddles_ray {
                continue;
            }

            // sign1 != sign2 here, so the division is safe; 0 < ratio < 1
            let ratio = sign1 / (sign1 - sign2);
            end = origin * (1.0 - ratio) + end * ratio;
            length_factor *= ratio;
            hit = Some((idx, wall.color));
        }

        self.last_hit = hit.map(|(idx, _)| idx);
        let (idx, color) = hit?;
        if self.reorder {
            candidates.move_to_front(idx);
        }

        Some(RayHit {
            color,
            point: end,
            length_factor,
        })
    }
}

/*====================================================================*/
/*                                Tests                                */
/*====================================================================*/
#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::Wall;
    use glam::vec2;

    const R: f32 = 450.0;
    const RED: Rgb = Rgb::new(255, 0, 0);
    const BLUE: Rgb = Rgb::new(0, 0, 255);

    fn origin() -> Vec2 {
        vec2(250.0, 250.0)
    }

    fn vwall(color: Rgb, x: f32) -> Wall {
        Wall::new(color, vec2(x, 200.0), vec2(x, 300.0))
    }

    #[test]
    fn single_wall_straight_ahead() {
        let mut list = CandidateList::from_walls(origin(), [vwall(RED, 350.0)]);
        let mut caster = RayCaster::new(R);

        let hit = caster
            .cast_ray(&mut list, origin(), origin() + vec2(R, 0.0))
            .expect("wall ahead");

        let ratio = hit.length_factor / R;
        assert!(ratio > 0.0 && ratio < 1.0);
        assert!((ratio - 100.0 / 450.0).abs() < 1e-5);
        assert!((hit.length_factor - 100.0).abs() < 1e-3);
        assert_eq!(hit.color, RED);
        assert!((hit.point - vec2(350.0, 250.0)).length() < 1e-3);
    }

    #[test]
    fn nearer_wall_wins_in_either_order() {
        let near = vwall(RED, 300.0);
        let far = vwall(BLUE, 500.0);
        for walls in [[near, far], [far, near]] {
            let mut list = CandidateList::from_walls(origin(), walls);
            let hit = RayCaster::new(R)
                .cast_ray(&mut list, origin(), origin() + vec2(R, 0.0))
                .unwrap();
            assert_eq!(hit.color, RED);
            assert!((hit.point.x - 300.0).abs() < 1e-3);
            assert!((hit.length_factor - 50.0).abs() < 1e-3);
        }
    }

    #[test]
    fn accumulated_factor_is_product_of_ratios() {
        // far wall is found first: ratio 250/450, then near: 50/250
        let mut list =
            CandidateList::from_walls(origin(), [vwall(BLUE, 500.0), vwall(RED, 300.0)]);
        let hit = RayCaster::new(R)
            .cast_ray(&mut list, origin(), origin() + vec2(R, 0.0))
            .unwrap();
        let expected = R * (250.0 / 450.0) * (50.0 / 250.0);
        assert!((hit.length_factor - expected).abs() < 1e-3);
    }

    #[test]
    fn miss_returns_none_and_keeps_order() {
        let walls = [vwall(RED, 300.0), vwall(BLUE, 500.0)];
        let mut list = CandidateList::from_walls(origin(), walls);
        let mut caster = RayCaster::new(R);
        // ray pointing away from both walls
        assert!(
            caster
                .cast_ray(&mut list, origin(), origin() - vec2(R, 0.0))
                .is_none()
        );
        assert_eq!(caster.last_hit(), None);
        assert_eq!(list.walls(), &walls);
    }

    #[test]
    fn wall_beyond_ray_end_is_missed() {
        let mut list = CandidateList::from_walls(origin(), [vwall(RED, 800.0)]);
        assert!(
            RayCaster::new(R)
                .cast_ray(&mut list, origin(), origin() + vec2(R, 0.0))
                .is_none()
        );
    }

    #[test]
    fn degenerate_wall_is_ignored() {
        let p = vec2(350.0, 250.0);
        let mut list = CandidateList::from_walls(origin(), [Wall::new(RED, p, p)]);
        assert!(
            RayCaster::new(R)
                .cast_ray(&mut list, origin(), origin() + vec2(R, 0.0))
                .is_none()
        );
    }

    #[test]
    fn non_finite_wall_is_ignored() {
        let broken = Wall::new(RED, vec2(f32::NAN, 200.0), vec2(350.0, 300.0));
        let mut list = CandidateList::from_walls(origin(), [broken]);
        assert!(
            RayCaster::new(R)
                .cast_ray(&mut list, origin(), origin() + vec2(R, 0.0))
                .is_none()
        );

        // a NaN wall in front of a real one does not poison the result
        let mut list = CandidateList::from_walls(origin(), [broken, vwall(BLUE, 400.0)]);
        let hit = RayCaster::new(R)
            .cast_ray(&mut list, origin(), origin() + vec2(R, 0.0))
            .unwrap();
        assert_eq!(hit.color, BLUE);
        assert!((hit.length_factor - 150.0).abs() < 1e-3);
    }

    #[test]
    fn winner_moves_to_front() {
        let walls = [vwall(BLUE, 600.0), vwall(BLUE, 500.0), vwall(RED, 300.0)];
        let mut list = CandidateList::from_walls(origin(), walls);
        let crosses_before = {
            let mut c = list.crosses().to_vec();
            c.sort_by(f32::total_cmp);
            c
        };
        let mut caster = RayCaster::new(R);
        caster.cast_ray(&mut list, origin(), origin() + vec2(R, 0.0));

        assert_eq!(caster.last_hit(), Some(2));
        assert_eq!(list.walls()[0], walls[2]);
        let mut crosses_after = list.crosses().to_vec();
        crosses_after.sort_by(f32::total_cmp);
        assert_eq!(crosses_before, crosses_after);
        for w in walls {
            assert!(list.walls().contains(&w));
        }
    }

    #[test]
    fn results_do_not_depend_on_reordering() {
        // a small room seen from its middle
        let walls = [
            Wall::new(RED, vec2(400.0, 100.0), vec2(400.0, 400.0)),
            Wall::new(BLUE, vec2(320.0, 180.0), vec2(340.0, 260.0)),
            Wall::new(RED, vec2(100.0, 100.0), vec2(400.0, 100.0)),
            Wall::new(BLUE, vec2(100.0, 400.0), vec2(400.0, 400.0)),
        ];
        let targets: Vec<Vec2> = (-40..=40)
            .map(|i| {
                let a = i as f32 / 40.0;
                origin() + R * Vec2::from_angle(a)
            })
            .collect();

        let mut moving = CandidateList::from_walls(origin(), walls);
        let mut fixed = moving.clone();
        let mut with = RayCaster::new(R);
        let mut without = RayCaster::new(R).with_reorder(false);

        for &t in &targets {
            let a = with.cast_ray(&mut moving, origin(), t);
            let b = without.cast_ray(&mut fixed, origin(), t);
            match (a, b) {
                (Some(a), Some(b)) => {
                    assert_eq!(a.color, b.color);
                    assert!((a.point - b.point).length() < 1e-2);
                    assert!((a.length_factor - b.length_factor).abs() < 1e-2);
                }
                (None, None) => {}
                other => panic!("order changed the outcome: {other:?}"),
            }
        }
        assert_eq!(fixed.walls(), &walls);
    }
}
